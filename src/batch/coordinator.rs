//! Sequential batch driver with per-item fault isolation.
//!
//! Items are processed strictly in submission order, one at a time, to
//! bound load on the upstream API. A failed item is recorded and the
//! loop moves on; nothing is retried, nothing is rolled back, and the
//! batch always runs every item to completion once validation passes.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::trello::{ApiResult, CheckItem, CheckItemDraft, TrelloApi};

use super::report::BatchReport;
use super::request::{BatchRequest, BatchSummary, ItemOutcome};
use super::validate::{ValidationError, validate};

/// Reference pacing interval between consecutive remote calls.
pub const DEFAULT_PACING: Duration = Duration::from_millis(100);

/// Inter-item pacing policy. Fixed and non-adaptive: it does not back
/// off on observed rate-limit errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// No delay between calls. Intended for tests.
    None,
    /// Fixed delay inserted between consecutive calls.
    Fixed(Duration),
}

impl Default for Pacing {
    fn default() -> Self {
        Pacing::Fixed(DEFAULT_PACING)
    }
}

impl Pacing {
    fn delay(&self) -> Option<Duration> {
        match self {
            Pacing::None => None,
            Pacing::Fixed(interval) => Some(*interval),
        }
    }
}

/// The one remote mutation the coordinator needs. Narrower than
/// [`TrelloApi`] so tests can stub exactly this call.
#[async_trait]
pub trait CheckItemCreator: Send + Sync {
    async fn create_check_item(
        &self,
        checklist_id: &str,
        draft: &CheckItemDraft,
    ) -> ApiResult<CheckItem>;
}

#[async_trait]
impl<T: TrelloApi + ?Sized> CheckItemCreator for T {
    async fn create_check_item(
        &self,
        checklist_id: &str,
        draft: &CheckItemDraft,
    ) -> ApiResult<CheckItem> {
        TrelloApi::create_check_item(self, checklist_id, draft).await
    }
}

/// Drives one remote create-call per validated item.
pub struct BatchCoordinator<'a, C: CheckItemCreator + ?Sized> {
    client: &'a C,
    pacing: Pacing,
}

impl<'a, C: CheckItemCreator + ?Sized> BatchCoordinator<'a, C> {
    /// Coordinator with the reference pacing interval.
    pub fn new(client: &'a C) -> Self {
        Self::with_pacing(client, Pacing::default())
    }

    pub fn with_pacing(client: &'a C, pacing: Pacing) -> Self {
        Self { client, pacing }
    }

    /// Validate and run the whole batch.
    ///
    /// Returns `Err` only when validation rejects the request, in which
    /// case no remote call has been made. Once processing starts, the
    /// batch runs to completion over all items and per-item failures are
    /// folded into the report, never propagated.
    pub async fn run(&self, request: &BatchRequest) -> Result<BatchReport, ValidationError> {
        validate(request)?;

        let mut outcomes = Vec::with_capacity(request.items.len());
        let last = request.items.len() - 1;

        for (index, item) in request.items.iter().enumerate() {
            let draft = item.to_draft();
            let outcome = match self
                .client
                .create_check_item(&request.checklist_id, &draft)
                .await
            {
                Ok(created) => {
                    debug!(index, id = %created.id, "check item created");
                    ItemOutcome {
                        index,
                        succeeded: true,
                        item: item.clone(),
                        created: Some(created),
                        failure_reason: None,
                    }
                }
                Err(err) => {
                    warn!(index, kind = err.kind(), error = %err, "check item creation failed");
                    ItemOutcome {
                        index,
                        succeeded: false,
                        item: item.clone(),
                        created: None,
                        failure_reason: Some(err.to_string()),
                    }
                }
            };
            outcomes.push(outcome);

            if index != last {
                if let Some(delay) = self.pacing.delay() {
                    tokio::time::sleep(delay).await;
                }
            }
        }

        let summary = BatchSummary::from_outcomes(&request.checklist_id, &outcomes);
        Ok(BatchReport { summary, outcomes })
    }
}
