//! Aggregated result of a batch run.

use serde_json::json;

use super::request::{BatchSummary, ItemOutcome};

/// Complete accounting of every item's fate, plus derived counts.
/// Partial failure is a normal, expected outcome, not an error.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BatchReport {
    pub summary: BatchSummary,
    pub outcomes: Vec<ItemOutcome>,
}

impl BatchReport {
    /// True only when every item succeeded.
    pub fn fully_successful(&self) -> bool {
        self.summary.failed == 0
    }

    /// Structured response body.
    pub fn to_response(&self) -> serde_json::Value {
        json!({
            "success": self.fully_successful(),
            "summary": self.summary,
            "results": self.outcomes,
        })
    }

    /// Human-readable report: created items with their new ids, failed
    /// items with their classified reason.
    pub fn render_text(&self) -> String {
        let mut lines = vec![format!(
            "Added {} of {} item{} to checklist {}.",
            self.summary.successful,
            self.summary.total,
            if self.summary.total == 1 { "" } else { "s" },
            self.summary.checklist_id,
        )];

        let created: Vec<&ItemOutcome> = self.outcomes.iter().filter(|o| o.succeeded).collect();
        if !created.is_empty() {
            lines.push(String::new());
            lines.push("Created:".to_string());
            for outcome in created {
                let id = outcome
                    .created
                    .as_ref()
                    .map(|item| item.id.as_str())
                    .unwrap_or("?");
                lines.push(format!("  - {} ({id})", outcome.item.name.trim()));
            }
        }

        let failed: Vec<&ItemOutcome> = self.outcomes.iter().filter(|o| !o.succeeded).collect();
        if !failed.is_empty() {
            lines.push(String::new());
            lines.push("Failed:".to_string());
            for outcome in failed {
                let reason = outcome.failure_reason.as_deref().unwrap_or("unknown error");
                lines.push(format!("  - {}: {reason}", outcome.item.name.trim()));
            }
        }

        lines.join("\n")
    }
}
