//! Workspace root for the OneDrive MCP tooling.
//!
//! Library code lives in `onedrive-client` and `onedrive-mcp`; this crate hosts
//! the end-to-end tests under `tests/`.
