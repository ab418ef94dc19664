//! Model Context Protocol (MCP) server implementation.
//!
//! The server exposes tools for boards, lists, cards, checklists, and
//! checklist items over the Streamable HTTP transport. Each entity has
//! its own tool file under `tools/`; the server combines their routers
//! into a single dispatch table and proxies every call to the shared
//! Trello API client.

pub mod server;
mod service;
pub mod tools;


pub use server::TrelloMcpServer;
pub use service::create_mcp_service;
