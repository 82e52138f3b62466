//! Response normalizer: raw Graph JSON in, compact record array out.
//!
//! The result array lives under the top-level `value` field. A body without
//! that field (or where it is not an array) is an empty result, not an error.
//! Only unparseable input fails.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use super::records::{FileRecord, FolderRecord, ListingRecord};

const RESULTS_FIELD: &str = "value";

pub type NormalizeResult<T> = Result<T, NormalizeError>;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("{0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("failed to serialize records: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Items of the `value` array, in response order.
pub fn result_items(root: &Value) -> &[Value] {
    root.get(RESULTS_FIELD)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn project<R>(raw: &str, projection: impl Fn(&Value) -> R) -> NormalizeResult<Vec<R>> {
    let root: Value = serde_json::from_str(raw).map_err(NormalizeError::InvalidJson)?;
    Ok(result_items(&root).iter().map(projection).collect())
}

fn to_json<R: Serialize>(records: &[R]) -> NormalizeResult<String> {
    serde_json::to_string(records).map_err(NormalizeError::Serialize)
}

pub fn project_files(raw: &str) -> NormalizeResult<Vec<FileRecord>> {
    project(raw, FileRecord::from_item)
}

pub fn project_folders(raw: &str) -> NormalizeResult<Vec<FolderRecord>> {
    project(raw, FolderRecord::from_item)
}

pub fn project_listing(raw: &str) -> NormalizeResult<Vec<ListingRecord>> {
    project(raw, ListingRecord::from_item)
}

pub fn normalize_files(raw: &str) -> NormalizeResult<String> {
    to_json(&project_files(raw)?)
}

pub fn normalize_folders(raw: &str) -> NormalizeResult<String> {
    to_json(&project_folders(raw)?)
}

pub fn normalize_listing(raw: &str) -> NormalizeResult<String> {
    to_json(&project_listing(raw)?)
}
