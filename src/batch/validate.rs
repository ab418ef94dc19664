//! Pre-flight validation for batch requests.
//!
//! Validation is pure and exhaustive: every offending field across the
//! whole batch is reported, in item order and then field order within an
//! item, so the output is deterministic for a given input. When this
//! module rejects a request, zero remote calls have been made.

use chrono::DateTime;
use serde::Serialize;
use thiserror::Error;

use crate::trello::is_hex_id;

use super::request::{BatchRequest, MAX_BATCH_ITEMS, MAX_ITEM_NAME_LEN};

/// One offending field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldIssue {
    /// Index of the item the issue belongs to; `None` for batch-level
    /// issues (checklist id, item count).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<usize>,
    pub field: &'static str,
    pub message: String,
}

impl FieldIssue {
    fn batch(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            item: None,
            field,
            message: message.into(),
        }
    }

    fn item(index: usize, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            item: Some(index),
            field,
            message: message.into(),
        }
    }
}

/// Rejection of an entire batch before any remote side effect.
#[derive(Debug, Error)]
#[error("invalid batch request: {}", format_issues(.issues))]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

fn format_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| match issue.item {
            Some(index) => format!("items[{index}].{}: {}", issue.field, issue.message),
            None => format!("{}: {}", issue.field, issue.message),
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a whole batch. Returns every issue found, or `Ok(())` when
/// the request is safe to process.
pub fn validate(request: &BatchRequest) -> Result<(), ValidationError> {
    let mut issues = Vec::new();

    if !is_hex_id(&request.checklist_id) {
        issues.push(FieldIssue::batch(
            "checklist_id",
            "expected a 24-character hex id",
        ));
    }

    if request.items.is_empty() {
        issues.push(FieldIssue::batch("items", "at least one item is required"));
    } else if request.items.len() > MAX_BATCH_ITEMS {
        issues.push(FieldIssue::batch(
            "items",
            format!(
                "{} items exceeds the maximum of {MAX_BATCH_ITEMS}",
                request.items.len()
            ),
        ));
    }

    for (index, item) in request.items.iter().enumerate() {
        if item.name.trim().is_empty() {
            issues.push(FieldIssue::item(index, "name", "must not be empty"));
        } else if item.name.chars().count() > MAX_ITEM_NAME_LEN {
            issues.push(FieldIssue::item(
                index,
                "name",
                format!("exceeds {MAX_ITEM_NAME_LEN} characters"),
            ));
        }

        if let Some(position) = &item.position {
            if !position.is_valid() {
                issues.push(FieldIssue::item(
                    index,
                    "position",
                    "expected 'top', 'bottom', or a non-negative number",
                ));
            }
        }

        if let Some(due) = &item.due {
            if DateTime::parse_from_rfc3339(due).is_err() {
                issues.push(FieldIssue::item(
                    index,
                    "due",
                    "expected an ISO-8601 timestamp, e.g. 2026-09-01T12:00:00Z",
                ));
            }
        }

        if let Some(due_reminder) = item.due_reminder {
            if !due_reminder.is_finite() || due_reminder < 0.0 {
                issues.push(FieldIssue::item(
                    index,
                    "due_reminder",
                    "must be a non-negative number of minutes",
                ));
            }
        }

        if let Some(member_id) = &item.member_id {
            if !is_hex_id(member_id) {
                issues.push(FieldIssue::item(
                    index,
                    "member_id",
                    "expected a 24-character hex id",
                ));
            }
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { issues })
    }
}
