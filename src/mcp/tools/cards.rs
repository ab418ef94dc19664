//! MCP tools for cards.

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
use crate::trello::{CardDraft, CardPatch, Position, TrelloApi};

// =============================================================================
// Parameter Structs
// =============================================================================

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetCardParams {
    #[schemars(description = "Card ID (24-character hex)")]
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetListCardsParams {
    #[schemars(description = "List ID to read cards from (24-character hex)")]
    pub list_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateCardParams {
    #[schemars(description = "List ID the card goes on (24-character hex)")]
    pub list_id: String,
    #[schemars(description = "Card name")]
    pub name: String,
    #[schemars(description = "Card description in markdown (optional)")]
    pub description: Option<String>,
    #[schemars(description = "Placement in the list: 'top', 'bottom', or a non-negative number")]
    pub position: Option<Position>,
    #[schemars(description = "Due date as an ISO-8601 timestamp (optional)")]
    pub due: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UpdateCardParams {
    #[schemars(description = "Card ID to update (24-character hex)")]
    pub card_id: String,
    #[schemars(description = "New name (optional)")]
    pub name: Option<String>,
    #[schemars(description = "New description (optional, replaces the existing one)")]
    pub description: Option<String>,
    #[schemars(description = "New due date as an ISO-8601 timestamp (optional)")]
    pub due: Option<String>,
    #[schemars(description = "Mark the due date complete or incomplete (optional)")]
    pub due_complete: Option<bool>,
    #[schemars(description = "Archive (true) or unarchive (false) the card (optional)")]
    pub closed: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct MoveCardParams {
    #[schemars(description = "Card ID to move (24-character hex)")]
    pub card_id: String,
    #[schemars(description = "Destination list ID (24-character hex)")]
    pub list_id: String,
    #[schemars(description = "Placement in the destination list (optional)")]
    pub position: Option<Position>,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DeleteCardParams {
    #[schemars(description = "Card ID to delete permanently (24-character hex)")]
    pub card_id: String,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct AddCardCommentParams {
    #[schemars(description = "Card ID to comment on (24-character hex)")]
    pub card_id: String,
    #[schemars(description = "Comment text (markdown)")]
    pub text: String,
}

// =============================================================================
// Card Tools
// =============================================================================

#[tool_router(router = card_tools, vis = "pub(crate)")]
impl<C: TrelloApi + 'static> TrelloMcpServer<C> {
    #[tool(description = "Get a card by ID with its full details.")]
    pub async fn get_card(
        &self,
        params: Parameters<GetCardParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("card_id", &params.0.card_id)?;

        let card = self
            .api()
            .get_card(&params.0.card_id)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&card).unwrap(),
        )]))
    }

    #[tool(description = "List the cards on a list, in list order.")]
    pub async fn get_list_cards(
        &self,
        params: Parameters<GetListCardsParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("list_id", &params.0.list_id)?;

        let cards = self
            .api()
            .list_cards(&params.0.list_id)
            .await
            .map_err(|e| map_api_error(&e))?;

        let response = json!({
            "cards": cards,
            "count": cards.len(),
        });

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&response).unwrap(),
        )]))
    }

    #[tool(description = "Create a new card on a list.")]
    pub async fn create_card(
        &self,
        params: Parameters<CreateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("list_id", &params.0.list_id)?;
        require_non_empty("name", &params.0.name)?;

        let draft = CardDraft {
            id_list: params.0.list_id.clone(),
            name: params.0.name.clone(),
            desc: params.0.description.clone(),
            pos: params.0.position.clone(),
            due: params.0.due.clone(),
        };
        let card = self
            .api()
            .create_card(&draft)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&card).unwrap(),
        )]))
    }

    #[tool(
        description = "Update a card's name, description, due date, due-complete flag, or archived state. All fields optional; omitted fields are left untouched."
    )]
    pub async fn update_card(
        &self,
        params: Parameters<UpdateCardParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("card_id", &params.0.card_id)?;

        let patch = CardPatch {
            name: params.0.name.clone(),
            desc: params.0.description.clone(),
            due: params.0.due.clone(),
            due_complete: params.0.due_complete,
            closed: params.0.closed,
        };
        if patch == CardPatch::default() {
            return Err(McpError::invalid_params(
                "empty_update",
                Some(json!({"error": "provide at least one field to change"})),
            ));
        }

        let card = self
            .api()
            .update_card(&params.0.card_id, &patch)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&card).unwrap(),
        )]))
    }

    #[tool(description = "Move a card to a different list, optionally at a specific position.")]
    pub async fn move_card(
        &self,
        params: Parameters<MoveCardParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("card_id", &params.0.card_id)?;
        require_hex_id("list_id", &params.0.list_id)?;

        let card = self
            .api()
            .move_card(
                &params.0.card_id,
                &params.0.list_id,
                params.0.position.clone(),
            )
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&card).unwrap(),
        )]))
    }

    #[tool(
        description = "Delete a card permanently. This cannot be undone; consider update_card with closed=true to archive instead."
    )]
    pub async fn delete_card(
        &self,
        params: Parameters<DeleteCardParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("card_id", &params.0.card_id)?;

        self.api()
            .delete_card(&params.0.card_id)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Card {} deleted",
            params.0.card_id
        ))]))
    }

    #[tool(description = "Add a comment to a card.")]
    pub async fn add_card_comment(
        &self,
        params: Parameters<AddCardCommentParams>,
    ) -> Result<CallToolResult, McpError> {
        require_hex_id("card_id", &params.0.card_id)?;
        require_non_empty("text", &params.0.text)?;

        let action = self
            .api()
            .add_comment(&params.0.card_id, &params.0.text)
            .await
            .map_err(|e| map_api_error(&e))?;

        Ok(CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&action).unwrap(),
        )]))
    }
}
