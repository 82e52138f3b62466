//! Tool-boundary error rendering.
//!
//! Failures stay typed inside the pipeline and are flattened to the prefixed
//! strings agents see only here.

use onedrive_client::ClientError;
use thiserror::Error;

use super::normalize::NormalizeError;

/// Failure of one tool pipeline.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Transport(#[from] ClientError),

    #[error(transparent)]
    Processing(#[from] NormalizeError),
}

/// The three drive tools, used for error prefixes and log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriveOperation {
    SearchFiles,
    SearchFolders,
    ListFolderContents,
}

impl DriveOperation {
    pub fn tool_name(self) -> &'static str {
        match self {
            Self::SearchFiles => "search_files",
            Self::SearchFolders => "search_folder_path",
            Self::ListFolderContents => "list_folder_contents",
        }
    }

    fn transport_prefix(self) -> &'static str {
        match self {
            Self::SearchFiles => "Error searching files: ",
            Self::SearchFolders => "Error searching folders: ",
            Self::ListFolderContents => "Error listing folder contents: ",
        }
    }

    fn processing_prefix(self) -> &'static str {
        match self {
            Self::SearchFiles => "Error processing search results: ",
            Self::SearchFolders => "Error processing folder search results: ",
            Self::ListFolderContents => "Error processing folder contents: ",
        }
    }

    /// Render a failure as the string result returned to the agent.
    pub fn render(self, error: &ToolError) -> String {
        let prefix = match error {
            ToolError::Transport(_) => self.transport_prefix(),
            ToolError::Processing(_) => self.processing_prefix(),
        };
        format!("{prefix}{error}")
    }
}
