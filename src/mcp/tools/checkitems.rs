//! MCP tools for checklist items, including the batch creation tool.

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

use crate::batch::{BatchCoordinator, BatchRequest, ItemSpec};
use crate::mcp::server::TrelloMcpServer;
use crate::mcp::tools::{map_api_error, require_hex_id, require_non_empty};
use crate::trello::{CheckItemDraft, CheckItemPatch, CheckItemState, Position, TrelloApi};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddChecklistItemParams {
    #[schemars(description = "Checklist ID to add the item to (24-character hex)")]
    pub checklist_id: String,
    #[schemars(description = "Item text")]
    pub name: String,
    #[schemars(description = "Position within the checklist: 'top', 'bottom', or a non-negative number")]
    pub position: Option<Position>,
    #[schemars(description = "Create the item already checked off")]
    pub checked: Option<bool>,
    #[schemars(description = "Due date as an ISO-8601 timestamp (optional)")]
    pub due: Option<String>,
    #[schemars(description = "Reminder, in minutes before the due date (optional)")]
    pub due_reminder: Option<f64>,
    #[schemars(description = "Member to assign, as a 24-character hex id (optional)")]
    pub member_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddChecklistItemsParams {
    #[schemars(description = "Checklist ID to add items to (24-character hex)")]
    pub checklist_id: String,
    #[schemars(description = "Items to create, in order (1-50)")]
    pub items: Vec<ItemSpec>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateChecklistItemParams {
    #[schemars(description = "Card ID the checklist belongs to (24-character hex)")]
    pub card_id: String,
    #[schemars(description = "Checklist item ID to update (24-character hex)")]
    pub item_id: String,
    #[schemars(description = "New item text (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New state: 'complete' or 'incomplete' (optional)")]
    pub state: Option<String>,
    #[schemars(description = "New position within the checklist (optional)")]
    pub position: Option<Position>,
    #[schemars(description = "New due date as an ISO-8601 timestamp (optional)")]
    pub due: Option<String>,
    #[schemars(description = "New reminder, in minutes before the due date (optional)")]
    pub due_reminder: Option<f64>,
    #[schemars(description = "Member to assign, as a 24-character hex id (optional)")]
    pub member_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteChecklistItemParams {
    #[schemars(description = "Checklist ID the item belongs to (24-character hex)")]
    pub checklist_id: String,
    #[schemars(description = "Checklist item ID to delete (24-character hex)")]
    pub item_id: String,
}

// =============================================================================
// Check Item Tools
// =============================================================================

#[tool_router(router = check_item_tools, vis = "pub(crate)")]
impl<C: TrelloApi + 'static> TrelloMcpServer<C> {
    #[tool(description = "Add a single item to a checklist.")]
    pub async fn add_checklist_item(
        &self,
        params: Parameters<AddChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("checklist_id", &params.0.checklist_id)?;
        require_non_empty("name", &params.0.name)?;

        let draft = CheckItemDraft {
            name: params.0.name.trim().to_string(),
            pos: params.0.position.clone(),
            checked: params.0.checked,
            due: params.0.due.clone(),
            due_reminder: params.0.due_reminder,
            id_member: params.0.member_id.clone(),
        };
        let created = self
            .api()
            .create_check_item(&params.0.checklist_id, &draft)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&created).unwrap(),
        )]))
    }

    #[tool(
        description = "Add up to 50 items to a checklist in one call. Items are created sequentially in the given order with a short pause between requests. A failed item never aborts the rest: the result reports every item's fate, and partial success is a normal outcome. Re-submitting a batch creates new items; there is no deduplication."
    )]
    pub async fn add_checklist_items(
        &self,
        params: Parameters<AddChecklistItemsParams>,
    ) -> Result<CallToolResult, McpError> {
        let request = BatchRequest {
            checklist_id: params.0.checklist_id,
            items: params.0.items,
        };

        // Validation failures abort the whole batch before any remote
        // call; per-item remote failures are folded into the report.
        let coordinator = BatchCoordinator::new(self.api());
        let report = coordinator.run(&request).await.map_err(|e| {
            McpError::invalid_params("invalid_batch", Some(json!({"issues": e.issues})))
        })?;

        Ok(CallToolResult::success(vec![
            Content::text(report.render_text()),
            Content::text(serde_json::to_string_pretty(&report.to_response()).unwrap()),
        ]))
    }

    #[tool(
        description = "Update a checklist item's text, state ('complete'/'incomplete'), position, due date, reminder, or assigned member. All fields optional."
    )]
    pub async fn update_checklist_item(
        &self,
        params: Parameters<UpdateChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("card_id", &params.0.card_id)?;
        require_hex_id("item_id", &params.0.item_id)?;

        let state = match &params.0.state {
            Some(raw) => Some(raw.parse::<CheckItemState>().map_err(|e| {
                McpError::invalid_params("invalid_state", Some(json!({"error": e})))
            })?),
            None => None,
        };

        let patch = CheckItemPatch {
            name: params.0.name.clone(),
            state,
            pos: params.0.position.clone(),
            due: params.0.due.clone(),
            due_reminder: params.0.due_reminder,
            id_member: params.0.member_id.clone(),
        };
        if patch == CheckItemPatch::default() {
            return Err(McpError::invalid_params(
                "empty_update",
                Some(json!({"error": "provide at least one field to change"})),
            ));
        }

        let updated = self
            .api()
            .update_check_item(&params.0.card_id, &params.0.item_id, &patch)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&updated).unwrap(),
        )]))
    }

    #[tool(description = "Delete an item from a checklist.")]
    pub async fn delete_checklist_item(
        &self,
        params: Parameters<DeleteChecklistItemParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("checklist_id", &params.0.checklist_id)?;
        require_hex_id("item_id", &params.0.item_id)?;

        self.api()
            .delete_check_item(&params.0.checklist_id, &params.0.item_id)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Checklist item {} deleted",
            params.0.item_id
        ))]))
    }
}
