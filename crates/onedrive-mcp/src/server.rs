//! MCP ServerHandler implementation for OneDrive.
//!
//! Read-only tools over the signed-in user's drive:
//! - `search_files`: Search files by name/content, optionally under a folder
//! - `search_folder_path`: Find folders by name and report their paths
//! - `list_folder_contents`: List files and folders directly under a path
//!
//! Every tool returns a JSON array of records, or a prefixed error string.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};

use onedrive_client::{ClientConfig, ClientResult, DriveTransport, GraphApiClient};

use crate::tools::*;

/// OneDrive MCP server handler.
///
/// Holds no per-call state; the transport is shared across concurrent calls.
#[derive(Debug, Clone)]
pub struct OnedriveMcpServer {
    tool_router: ToolRouter<Self>,
    transport: Arc<dyn DriveTransport>,
}

impl OnedriveMcpServer {
    /// Create a server over any transport.
    pub fn new(transport: Arc<dyn DriveTransport>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            transport,
        }
    }

    /// Create a server backed by the Graph API client for `config`.
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self::new(Arc::new(GraphApiClient::new(config)?)))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for OnedriveMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "onedrive-mcp".to_string(),
                title: Some("OneDrive MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "MCP server for read-only OneDrive search: files, folders, and folder listings"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Read-only access to the user's OneDrive.\n\
                 search_files finds files by name (pass folder to search under one folder).\n\
                 search_folder_path finds folders by name and returns their parent paths.\n\
                 list_folder_contents lists the files and folders under a path (the root when omitted).\n\
                 Results are JSON arrays with name, link (web URL), and parentPath; \
                 files carry kind, folders carry childCount. \
                 Failures are returned as text starting with 'Error'."
                    .to_string(),
            ),
        }
    }
}

#[tool_router(router = tool_router)]
impl OnedriveMcpServer {
    /// Search for files, optionally under a folder.
    #[tool(
        name = "search_files",
        description = "Search for files in OneDrive using a query under an optional folder and returns file name and Web URL as link and its path"
    )]
    pub async fn search_files(&self, Parameters(params): Parameters<SearchFilesParams>) -> String {
        drive::search_files(self.transport.as_ref(), params).await
    }

    /// Search for folders by name.
    #[tool(
        name = "search_folder_path",
        description = "Search for folder path in OneDrive using folder name and returns folder details including path"
    )]
    pub async fn search_folder_path(
        &self,
        Parameters(params): Parameters<SearchFolderPathParams>,
    ) -> String {
        drive::search_folder_path(self.transport.as_ref(), params).await
    }

    /// List the direct children of a folder.
    #[tool(
        name = "list_folder_contents",
        description = "List the files and folders directly inside a OneDrive folder path (the drive root when no path is given). Files include their type, folders include their child count."
    )]
    pub async fn list_folder_contents(
        &self,
        Parameters(params): Parameters<ListFolderContentsParams>,
    ) -> String {
        drive::list_folder_contents(self.transport.as_ref(), params).await
    }
}
