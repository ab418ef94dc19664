//! MCP Streamable HTTP service creation.
//!
//! This module provides the function that creates the MCP service
//! nested into the Axum router.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::trello::TrelloApi;

use super::server::TrelloMcpServer;

/// Create the MCP Streamable HTTP service.
///
/// A new [`TrelloMcpServer`] is created per session; all sessions share
/// the same API client handle.
pub fn create_mcp_service<C: TrelloApi + 'static>(
    api: Arc<C>,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<TrelloMcpServer<C>> {
    // Service factory: creates a new server instance per session.
    // Returns io::Error to match rmcp's expected signature.
    let service_factory = move || -> Result<TrelloMcpServer<C>, std::io::Error> {
        Ok(TrelloMcpServer::new(Arc::clone(&api)))
    };

    let config = StreamableHttpServerConfig {
        sse_keep_alive: None, // Use default (15s)
        sse_retry: None,      // Use default retry behavior
        stateful_mode: true,  // Enable session management
        cancellation_token,
        ..Default::default()
    };

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
