//! Parameter structs for the drive tools.

use schemars::JsonSchema;
use serde::Deserialize;

use onedrive_client::{ListCriteria, SearchCriteria};

// ── search_files ──

/// Parameters for the `search_files` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchFilesParams {
    /// Text to match against file names and content.
    #[schemars(description = "the search file name in the given query")]
    pub file_name: String,
    /// Folder to restrict the search to; the whole drive when omitted.
    #[schemars(description = "A folder name in the search query to search files under")]
    #[serde(default)]
    pub folder: Option<String>,
}

impl From<SearchFilesParams> for SearchCriteria {
    fn from(params: SearchFilesParams) -> Self {
        SearchCriteria::new(params.file_name, params.folder)
    }
}

// ── search_folder_path ──

/// Parameters for the `search_folder_path` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchFolderPathParams {
    #[schemars(description = "the folder name to search for")]
    pub folder_name: String,
}

impl From<SearchFolderPathParams> for SearchCriteria {
    fn from(params: SearchFolderPathParams) -> Self {
        SearchCriteria::new(params.folder_name, None)
    }
}

// ── list_folder_contents ──

/// Parameters for the `list_folder_contents` tool.
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct ListFolderContentsParams {
    #[schemars(
        description = "Folder path relative to the drive root (e.g. 'Documents/Taxes'); lists the root when omitted"
    )]
    #[serde(default)]
    pub path: Option<String>,
}

impl From<ListFolderContentsParams> for ListCriteria {
    fn from(params: ListFolderContentsParams) -> Self {
        ListCriteria::new(params.path)
    }
}
