//! MCP tools for checklists.

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
use crate::trello::TrelloApi;

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetCardChecklistsParams {
    #[schemars(description = "Card ID to read checklists from (24-character hex)")]
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddChecklistParams {
    #[schemars(description = "Card ID to attach the checklist to (24-character hex)")]
    pub card_id: String,
    #[schemars(description = "Checklist name")]
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteChecklistParams {
    #[schemars(description = "Checklist ID to delete, including all its items (24-character hex)")]
    pub checklist_id: String,
}

// =============================================================================
// Checklist Tools
// =============================================================================

#[tool_router(router = checklist_tools, vis = "pub(crate)")]
impl<C: TrelloApi + 'static> TrelloMcpServer<C> {
    #[tool(
        description = "List the checklists on a card, including their items and completion states."
    )]
    pub async fn get_card_checklists(
        &self,
        params: Parameters<GetCardChecklistsParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("card_id", &params.0.card_id)?;

        let checklists = self
            .api()
            .card_checklists(&params.0.card_id)
            .await
            .map_err(|e| map_api_error(&e))?;

        let response = json!({
            "checklists": checklists,
            "count": checklists.len(),
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).unwrap(),
        )]))
    }

    #[tool(
        description = "Create a new, empty checklist on a card. Use add_checklist_items to fill it."
    )]
    pub async fn add_checklist(
        &self,
        params: Parameters<AddChecklistParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("card_id", &params.0.card_id)?;
        require_non_empty("name", &params.0.name)?;

        let checklist = self
            .api()
            .create_checklist(&params.0.card_id, &params.0.name)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&checklist).unwrap(),
        )]))
    }

    #[tool(description = "Delete a checklist and every item on it. This cannot be undone.")]
    pub async fn delete_checklist(
        &self,
        params: Parameters<DeleteChecklistParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("checklist_id", &params.0.checklist_id)?;

        self.api()
            .delete_checklist(&params.0.checklist_id)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Checklist {} deleted",
            params.0.checklist_id
        ))]))
    }
}
