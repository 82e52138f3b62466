//! # OneDrive Client
//!
//! Query construction and authenticated transport for the Microsoft Graph
//! drive endpoints used by the OneDrive MCP tools.
//!
//! - [`query`] turns typed search/list criteria into Graph paths
//! - [`transport`] issues the authenticated GET and returns the raw body
//! - [`config`] resolves base URL, bearer token, and timeout

pub mod config;
pub mod error;
pub mod query;
pub mod transport;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use query::{ListCriteria, SearchCriteria};
pub use transport::{DriveTransport, GraphApiClient};
