//! MCP server implementation.
//!
//! The server owns a handle to the remote API client and the combined
//! tool router. It is generic over [`TrelloApi`] so the whole tool
//! surface can run against a mock in tests (no dynamic dispatch).

use std::sync::Arc;

use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    model::{ServerCapabilities, ServerInfo},
    tool_handler,
};

use crate::trello::TrelloApi;

/// Main MCP server: one instance per session, all sharing the same
/// process-wide API client.
pub struct TrelloMcpServer<C: TrelloApi + 'static> {
    api: Arc<C>,
    tool_router: ToolRouter<Self>,
}

impl<C: TrelloApi + 'static> TrelloMcpServer<C> {
    /// Create a server with every tool router registered.
    pub fn new(api: Arc<C>) -> Self {
        Self {
            tool_router: Self::board_tools()
                + Self::list_tools()
                + Self::card_tools()
                + Self::checklist_tools()
                + Self::check_item_tools(),
            api,
        }
    }

    pub(crate) fn api(&self) -> &C {
        &self.api
    }
}

impl<C: TrelloApi + 'static> Clone for TrelloMcpServer<C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            tool_router: self.tool_router.clone(),
        }
    }
}

#[tool_handler]
impl<C: TrelloApi + 'static> ServerHandler for TrelloMcpServer<C> {
    fn get_info(&self) -> ServerInfo {
        // `ServerInfo` (rmcp's `InitializeResult`) is `#[non_exhaustive]`, so it
        // cannot be built with a struct literal from this crate. Start from its
        // `Default` (exactly what `..Default::default()` referenced) and set the
        // two fields this server customises.
        let mut info = ServerInfo::default();
        info.capabilities = ServerCapabilities::builder().enable_tools().build();
        info.instructions = Some(
            "Trello MCP server - manage boards, lists, cards, checklists, and checklist items"
                .to_string(),
        );
        info
    }
}
