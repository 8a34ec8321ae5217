//! Step Tracker Tools module
//!
//! Tool implementations shared by the MCP server and the report binary.

pub mod activity;
pub mod status;
