//! MCP tools for boards.

use rmcp::{
    ErrorData as McpError,
    handler::server::wrapper::Parameters,
    model::*,
    schemars,
    schemars::JsonSchema,
    tool, tool_router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::mcp::server::TrelloMcpServer;
use crate::mcp::tools::{map_api_error, require_hex_id};
use crate::trello::TrelloApi;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetBoardParams {
    #[schemars(description = "Board ID (24-character hex)")]
    pub board_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetBoardListsParams {
    #[schemars(description = "Board ID (24-character hex)")]
    pub board_id: String,
}

// =============================================================================
// Board Tools
// =============================================================================

#[tool_router(router = board_tools, vis = "pub(crate)")]
impl<C: TrelloApi + 'static> TrelloMcpServer<C> {
    #[tool(
        description = "List all boards visible to the authenticated member, with their ids. Use this first to find board ids for the other tools."
    )]
    pub async fn list_boards(&self) -> Result<CallToolResult, McpError> {
        let boards = self
            .api()
            .member_boards()
            .await
            .map_err(|e| map_api_error(&e))?;

        let response = json!({
            "boards": boards,
            "count": boards.len(),
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).unwrap(),
        )]))
    }

    #[tool(description = "Get a board by ID with its name, description, and URL.")]
    pub async fn get_board(
        &self,
        params: Parameters<GetBoardParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("board_id", &params.0.board_id)?;

        let board = self
            .api()
            .get_board(&params.0.board_id)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&board).unwrap(),
        )]))
    }

    #[tool(
        description = "List the lists (columns) on a board, in board order. Use the returned list ids with the card tools."
    )]
    pub async fn get_board_lists(
        &self,
        params: Parameters<GetBoardListsParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("board_id", &params.0.board_id)?;

        let lists = self
            .api()
            .board_lists(&params.0.board_id)
            .await
            .map_err(|e| map_api_error(&e))?;

        let response = json!({
            "lists": lists,
            "count": lists.len(),
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).unwrap(),
        )]))
    }
}
