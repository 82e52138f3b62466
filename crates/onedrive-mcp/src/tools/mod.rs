//! MCP tool implementations, parameter types, and output records.
//!
//! Parameter structs derive `Deserialize + JsonSchema` for MCP tool registration.
//! Output records derive `Serialize` for the JSON returned to the agent.

pub mod drive;
pub mod helpers;
pub mod normalize;
pub mod params;
pub mod records;


pub use helpers::{DriveOperation, ToolError};
pub use params::*;
pub use records::{FileRecord, FolderRecord, ListingRecord};
