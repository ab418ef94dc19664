//! MCP tool implementations.
//!
//! Tool handlers are organized by entity type, one file per entity.
//! Each file contributes a named router; the server combines them into
//! its single dispatch table.

mod boards;
mod cards;
mod checkitems;
mod checklists;
mod lists;


pub use boards::{GetBoardListsParams, GetBoardParams};
pub use cards::{
    AddCardCommentParams, CreateCardParams, DeleteCardParams, GetCardParams, GetListCardsParams,
    MoveCardParams, UpdateCardParams,
};
pub use checkitems::{
    AddChecklistItemParams, AddChecklistItemsParams, DeleteChecklistItemParams,
    UpdateChecklistItemParams,
};
pub use checklists::{AddChecklistParams, DeleteChecklistParams, GetCardChecklistsParams};
pub use lists::{ArchiveListParams, CreateListParams, UpdateListParams};

use rmcp::ErrorData as McpError;
use serde_json::json;

use crate::trello::{ApiError, is_hex_id};

/// Map a classified remote error onto the MCP error space.
pub(crate) fn map_api_error(err: &ApiError) -> McpError {
    let data = Some(json!({"kind": err.kind(), "error": err.to_string()}));
    match err {
        ApiError::NotFound { .. } => McpError::resource_not_found("not_found", data),
        _ => McpError::internal_error("trello_api_error", data),
    }
}

/// Reject malformed entity ids before any remote call is made.
pub(crate) fn require_hex_id(field: &'static str, value: &str) -> Result<(), McpError> {
    if is_hex_id(value) {
        Ok(())
    } else {
        Err(McpError::invalid_params(
            "invalid_id",
            Some(json!({
                "field": field,
                "error": "expected a 24-character hex id",
            })),
        ))
    }
}

/// Reject empty or whitespace-only required text fields.
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> Result<(), McpError> {
    if value.trim().is_empty() {
        Err(McpError::invalid_params(
            "empty_field",
            Some(json!({"field": field, "error": "must not be empty"})),
        ))
    } else {
        Ok(())
    }
}
