//! MCP tools for board lists.

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
use crate::mcp::tools::{map_api_error, require_hex_id, require_non_empty};
use crate::trello::{ListPatch, Position, TrelloApi};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateListParams {
    #[schemars(description = "Board ID to create the list on (24-character hex)")]
    pub board_id: String,
    #[schemars(description = "List name")]
    pub name: String,
    #[schemars(description = "Placement on the board: 'top', 'bottom', or a non-negative number")]
    pub position: Option<Position>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateListParams {
    #[schemars(description = "List ID to update (24-character hex)")]
    pub list_id: String,
    #[schemars(description = "New list name (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New placement: 'top', 'bottom', or a non-negative number (optional)")]
    pub position: Option<Position>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ArchiveListParams {
    #[schemars(description = "List ID to archive or unarchive (24-character hex)")]
    pub list_id: String,
    #[schemars(description = "true to archive (default), false to send back to the board")]
    pub archived: Option<bool>,
}

// =============================================================================
// List Tools
// =============================================================================

#[tool_router(router = list_tools, vis = "pub(crate)")]
impl<C: TrelloApi + 'static> TrelloMcpServer<C> {
    #[tool(description = "Create a new list (column) on a board.")]
    pub async fn create_list(
        &self,
        params: Parameters<CreateListParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("board_id", &params.0.board_id)?;
        require_non_empty("name", &params.0.name)?;

        let list = self
            .api()
            .create_list(
                &params.0.board_id,
                &params.0.name,
                params.0.position.clone(),
            )
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&list).unwrap(),
        )]))
    }

    #[tool(description = "Rename a list or move it to a different position on its board.")]
    pub async fn update_list(
        &self,
        params: Parameters<UpdateListParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("list_id", &params.0.list_id)?;

        let patch = ListPatch {
            name: params.0.name.clone(),
            pos: params.0.position.clone(),
        };
        if patch == ListPatch::default() {
            return Err(McpError::invalid_params(
                "empty_update",
                Some(json!({"error": "provide name and/or position"})),
            ));
        }

        let list = self
            .api()
            .update_list(&params.0.list_id, &patch)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&list).unwrap(),
        )]))
    }

    #[tool(
        description = "Archive a list (or unarchive it with archived=false). Archived lists keep their cards."
    )]
    pub async fn archive_list(
        &self,
        params: Parameters<ArchiveListParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("list_id", &params.0.list_id)?;

        let archived = params.0.archived.unwrap_or(true);
        let list = self
            .api()
            .archive_list(&params.0.list_id, archived)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&list).unwrap(),
        )]))
    }
}
