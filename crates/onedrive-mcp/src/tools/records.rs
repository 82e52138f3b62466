//! Output records returned to the agent.
//!
//! Graph drive items are heterogeneous: a file carries a `file` facet, a folder
//! carries a `folder` facet with a `childCount`. Both are projected into small,
//! stable shapes. Missing or mistyped fields project to `""` / `0`; the `file`
//! facet is kept only when it is a scalar, so Graph's object facet yields `""`.

use serde::Serialize;
use serde_json::Value;

const FILE_MARKER: &str = "file";
const FOLDER_MARKER: &str = "folder";

/// A file search or listing hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub name: String,
    pub link: String,
    /// Text of the item's `file` facet, not reinterpreted.
    pub kind: String,
    pub parent_path: String,
}

/// A folder search or listing hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    pub name: String,
    pub link: String,
    pub parent_path: String,
    pub child_count: i64,
}

/// A listing entry, serialized in whichever shape the item has.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ListingRecord {
    File(FileRecord),
    Folder(FolderRecord),
}

impl FileRecord {
    pub fn from_item(item: &Value) -> Self {
        Self {
            name: text_at(item, &["name"]),
            link: text_at(item, &["webUrl"]),
            kind: text_at(item, &[FILE_MARKER]),
            parent_path: text_at(item, &["parentReference", "path"]),
        }
    }
}

impl FolderRecord {
    pub fn from_item(item: &Value) -> Self {
        Self {
            name: text_at(item, &["name"]),
            link: text_at(item, &["webUrl"]),
            parent_path: text_at(item, &["parentReference", "path"]),
            child_count: int_or_zero(lookup(item, &[FOLDER_MARKER, "childCount"])),
        }
    }
}

impl ListingRecord {
    /// File facet wins, then folder facet; items with neither are listed as files.
    pub fn from_item(item: &Value) -> Self {
        if item.get(FILE_MARKER).is_some() {
            Self::File(FileRecord::from_item(item))
        } else if item.get(FOLDER_MARKER).is_some() {
            Self::Folder(FolderRecord::from_item(item))
        } else {
            Self::File(FileRecord::from_item(item))
        }
    }
}

fn lookup<'a>(item: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(item, |node, key| node.get(*key))
}

fn text_at(item: &Value, path: &[&str]) -> String {
    scalar_text(lookup(item, path))
}

/// Scalar JSON as text; null, containers and missing values become `""`.
fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn int_or_zero(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|u| i64::try_from(u).unwrap_or(i64::MAX)))
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
                .unwrap_or(0)
        }
        Some(Value::Bool(b)) => i64::from(*b),
        _ => 0,
    }
}
