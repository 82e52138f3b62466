//! Drive tool pipelines: build query → GET → normalize.
//!
//! Each function takes a transport and its param struct and always returns a
//! string: either the JSON record array or a prefixed error message.

use tracing::{debug, warn};

use onedrive_client::{DriveTransport, ListCriteria, SearchCriteria};

use super::helpers::{DriveOperation, ToolError};
use super::normalize::{normalize_files, normalize_folders, normalize_listing, NormalizeResult};
use super::params::{ListFolderContentsParams, SearchFilesParams, SearchFolderPathParams};

type Normalizer = fn(&str) -> NormalizeResult<String>;

pub async fn search_files(transport: &dyn DriveTransport, params: SearchFilesParams) -> String {
    let criteria = SearchCriteria::from(params);
    run(
        transport,
        DriveOperation::SearchFiles,
        &criteria.files_path(),
        normalize_files,
    )
    .await
}

pub async fn search_folder_path(
    transport: &dyn DriveTransport,
    params: SearchFolderPathParams,
) -> String {
    let criteria = SearchCriteria::from(params);
    run(
        transport,
        DriveOperation::SearchFolders,
        &criteria.folders_path(),
        normalize_folders,
    )
    .await
}

pub async fn list_folder_contents(
    transport: &dyn DriveTransport,
    params: ListFolderContentsParams,
) -> String {
    let criteria = ListCriteria::from(params);
    run(
        transport,
        DriveOperation::ListFolderContents,
        &criteria.children_path(),
        normalize_listing,
    )
    .await
}

async fn run(
    transport: &dyn DriveTransport,
    operation: DriveOperation,
    path: &str,
    normalize: Normalizer,
) -> String {
    debug!(tool = operation.tool_name(), path = %path, "Running drive query");

    match execute(transport, path, normalize).await {
        Ok(records) => records,
        Err(e) => {
            warn!(tool = operation.tool_name(), error = %e, "Drive tool failed");
            operation.render(&e)
        }
    }
}

async fn execute(
    transport: &dyn DriveTransport,
    path: &str,
    normalize: Normalizer,
) -> Result<String, ToolError> {
    let body = transport.get_json(path).await?;
    Ok(normalize(&body)?)
}
