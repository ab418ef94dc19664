//! Trello MCP server.
//!
//! Exposes the Trello REST API (boards, lists, cards, checklists, and
//! checklist items) as callable MCP tools. Each tool validates its
//! arguments, forwards one authenticated HTTP request upstream, and
//! renders the result as text and/or JSON.
//!
//! Module map:
//! - [`config`]: credentials and endpoint settings from the environment
//! - [`trello`]: wire models, error classification, and the HTTP client
//!   behind the [`trello::TrelloApi`] seam
//! - [`batch`]: sequential batch checklist-item creation with per-item
//!   failure isolation
//! - [`mcp`]: the tool surface and the Streamable HTTP service

pub mod batch;
pub mod config;
pub mod mcp;
pub mod trello;
