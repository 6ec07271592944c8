//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes catalogue listing, lookup, checks and single-entry edits to AI
//! assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: tool definitions and the stdio entry point
//! - `types`: tool parameters and JSON result types

mod server;
pub mod types;

pub use server::{TscatMcpServer, run_server};
