//! Batch request and result types.
//!
//! A batch is an ordered set of checklist-item creations submitted
//! together. Nothing here persists beyond a single request/response
//! cycle.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::trello::{CheckItem, CheckItemDraft, Position};

/// Upper bound on the number of items per batch.
pub const MAX_BATCH_ITEMS: usize = 50;

/// Upper bound on the length of an item name, in characters.
pub const MAX_ITEM_NAME_LEN: usize = 16384;

/// One checklist item to create. Immutable once submitted; owned solely
/// by the batch request that contains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ItemSpec {
    #[schemars(description = "Item text (required, up to 16384 characters)")]
    pub name: String,
    #[schemars(description = "Position within the checklist: 'top', 'bottom', or a non-negative number")]
    pub position: Option<Position>,
    #[schemars(description = "Create the item already checked off")]
    pub checked: Option<bool>,
    #[schemars(description = "Due date as an ISO-8601 timestamp, e.g. 2026-09-01T12:00:00Z")]
    pub due: Option<String>,
    #[schemars(description = "Reminder, in minutes before the due date (non-negative)")]
    pub due_reminder: Option<f64>,
    #[schemars(description = "Member to assign, as a 24-character hex id")]
    pub member_id: Option<String>,
}

impl ItemSpec {
    /// Build the remote mutation payload. Only explicitly-present fields
    /// are carried over; the name is trimmed.
    pub fn to_draft(&self) -> CheckItemDraft {
        CheckItemDraft {
            name: self.name.trim().to_string(),
            pos: self.position.clone(),
            checked: self.checked,
            due: self.due.clone(),
            due_reminder: self.due_reminder,
            id_member: self.member_id.clone(),
        }
    }
}

/// An ordered set of items to create in one checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub checklist_id: String,
    pub items: Vec<ItemSpec>,
}

/// Immutable record of one item's processing result, created exactly
/// once per item, in submission order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutcome {
    /// Position of the item in the original request.
    pub index: usize,
    pub succeeded: bool,
    /// The item as submitted.
    pub item: ItemSpec,
    /// The created remote representation, on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<CheckItem>,
    /// Classified human-readable reason, on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

/// Aggregate counts derived from the outcome sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub checklist_id: String,
}

impl BatchSummary {
    /// Recompute the summary from a complete outcome sequence.
    pub fn from_outcomes(checklist_id: &str, outcomes: &[ItemOutcome]) -> Self {
        let successful = outcomes.iter().filter(|o| o.succeeded).count();
        Self {
            total: outcomes.len(),
            successful,
            failed: outcomes.len() - successful,
            checklist_id: checklist_id.to_string(),
        }
    }
}
