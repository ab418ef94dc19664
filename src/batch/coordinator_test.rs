//! Tests for the batch coordinator.
//!
//! Uses a stub creator so every remote call is recorded; no HTTP is
//! involved.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::batch::coordinator::{BatchCoordinator, CheckItemCreator, Pacing};
use crate::batch::request::{BatchRequest, ItemSpec};
use crate::trello::{ApiError, ApiResult, CheckItem, CheckItemDraft, CheckItemState};

/// Records every create call and fails the call indices selected by
/// `fail`. Ids are derived from a global call counter, so re-submitting
/// the same batch yields fresh ids (as the real API would).
struct StubCreator {
    calls: Mutex<Vec<(String, CheckItemDraft)>>,
    fail: fn(usize) -> Option<ApiError>,
}

impl StubCreator {
    fn new() -> Self {
        Self::with_failures(|_| None)
    }

    fn with_failures(fail: fn(usize) -> Option<ApiError>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn recorded_names(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, draft)| draft.name.clone())
            .collect()
    }
}

#[async_trait]
impl CheckItemCreator for StubCreator {
    async fn create_check_item(
        &self,
        checklist_id: &str,
        draft: &CheckItemDraft,
    ) -> ApiResult<CheckItem> {
        let call_index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((checklist_id.to_string(), draft.clone()));
            calls.len() - 1
        };

        if let Some(err) = (self.fail)(call_index) {
            return Err(err);
        }
        Ok(CheckItem {
            id: format!("{call_index:024x}"),
            name: draft.name.clone(),
            state: CheckItemState::Incomplete,
            id_checklist: Some(checklist_id.to_string()),
            due: draft.due.clone(),
            due_reminder: draft.due_reminder,
            id_member: draft.id_member.clone(),
            pos: None,
        })
    }
}

fn item(name: &str) -> ItemSpec {
    ItemSpec {
        name: name.to_string(),
        position: None,
        checked: None,
        due: None,
        due_reminder: None,
        member_id: None,
    }
}

fn request(names: &[&str]) -> BatchRequest {
    BatchRequest {
        checklist_id: "a".repeat(24),
        items: names.iter().map(|n| item(n)).collect(),
    }
}

#[tokio::test]
async fn test_outcomes_preserve_submission_order() {
    let stub = StubCreator::new();
    let coordinator = BatchCoordinator::with_pacing(&stub, Pacing::None);

    let report = coordinator
        .run(&request(&["First", "Second", "Third"]))
        .await
        .unwrap();

    assert_eq!(report.outcomes.len(), 3);
    for (i, outcome) in report.outcomes.iter().enumerate() {
        assert_eq!(outcome.index, i);
        assert!(outcome.succeeded);
        assert!(outcome.created.is_some());
        assert!(outcome.failure_reason.is_none());
    }
    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.successful, 3);
    assert_eq!(report.summary.failed, 0);
    assert!(report.fully_successful());

    // Remote calls happened one per item, in input order.
    assert_eq!(stub.recorded_names(), vec!["First", "Second", "Third"]);
}

#[tokio::test]
async fn test_single_failure_is_isolated() {
    // Only the second call fails, with a not-found error.
    let stub = StubCreator::with_failures(|i| {
        (i == 1).then(|| ApiError::NotFound {
            message: "checklist missing".to_string(),
        })
    });
    let coordinator = BatchCoordinator::with_pacing(&stub, Pacing::None);

    let report = coordinator
        .run(&request(&["First", "Second", "Third"]))
        .await
        .unwrap();

    assert!(report.outcomes[0].succeeded);
    assert!(!report.outcomes[1].succeeded);
    assert!(report.outcomes[2].succeeded);

    let reason = report.outcomes[1].failure_reason.as_deref().unwrap();
    assert!(reason.contains("not found"), "reason: {reason}");
    assert!(report.outcomes[1].created.is_none());

    // The item after the failure was still attempted.
    assert_eq!(stub.call_count(), 3);

    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.successful, 2);
    assert_eq!(report.summary.failed, 1);
    assert!(!report.fully_successful());
}

#[tokio::test]
async fn test_every_failure_kind_is_recorded_and_processing_continues() {
    let stub = StubCreator::with_failures(|i| match i {
        0 => Some(ApiError::Unauthorized {
            message: "bad token".to_string(),
        }),
        1 => Some(ApiError::RateLimited {
            message: "slow down".to_string(),
        }),
        2 => Some(ApiError::Transport {
            message: "connection reset".to_string(),
        }),
        _ => None,
    });
    let coordinator = BatchCoordinator::with_pacing(&stub, Pacing::None);

    let report = coordinator
        .run(&request(&["A", "B", "C", "D"]))
        .await
        .unwrap();

    assert_eq!(report.summary.successful, 1);
    assert_eq!(report.summary.failed, 3);
    let reasons: Vec<&str> = report
        .outcomes
        .iter()
        .filter_map(|o| o.failure_reason.as_deref())
        .collect();
    assert!(reasons[0].contains("unauthorized"));
    assert!(reasons[1].contains("rate limited"));
    assert!(reasons[2].contains("transport error"));
}

#[tokio::test]
async fn test_all_failures_still_run_to_completion() {
    let stub = StubCreator::with_failures(|_| {
        Some(ApiError::Forbidden {
            message: "no write access".to_string(),
        })
    });
    let coordinator = BatchCoordinator::with_pacing(&stub, Pacing::None);

    let report = coordinator.run(&request(&["A", "B", "C"])).await.unwrap();

    assert_eq!(stub.call_count(), 3);
    assert_eq!(report.summary.successful, 0);
    assert_eq!(report.summary.failed, 3);
}

#[tokio::test]
async fn test_validation_rejects_before_any_remote_call() {
    let stub = StubCreator::new();
    let coordinator = BatchCoordinator::with_pacing(&stub, Pacing::None);

    // Item 2 has an empty name; the whole batch is rejected up front.
    let result = coordinator.run(&request(&["A", ""])).await;
    assert!(result.is_err());
    assert_eq!(stub.call_count(), 0);

    // Same for an empty batch and an oversized one.
    assert!(coordinator.run(&request(&[])).await.is_err());
    let names: Vec<String> = (0..51).map(|i| format!("Item {i}")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    assert!(coordinator.run(&request(&refs)).await.is_err());
    assert_eq!(stub.call_count(), 0);
}

#[tokio::test]
async fn test_resubmission_creates_new_items() {
    // There is no idempotency key: re-submitting the same batch after a
    // run creates brand-new remote items for every item re-submitted.
    let stub = StubCreator::new();
    let coordinator = BatchCoordinator::with_pacing(&stub, Pacing::None);
    let req = request(&["A", "B", "C"]);

    let first = coordinator.run(&req).await.unwrap();
    let second = coordinator.run(&req).await.unwrap();

    assert_eq!(stub.call_count(), 6);

    let first_ids: Vec<String> = first
        .outcomes
        .iter()
        .map(|o| o.created.as_ref().unwrap().id.clone())
        .collect();
    let second_ids: Vec<String> = second
        .outcomes
        .iter()
        .map(|o| o.created.as_ref().unwrap().id.clone())
        .collect();
    for id in &second_ids {
        assert!(!first_ids.contains(id), "id {id} was reused");
    }
}

#[tokio::test]
async fn test_names_sent_trimmed() {
    let stub = StubCreator::new();
    let coordinator = BatchCoordinator::with_pacing(&stub, Pacing::None);

    coordinator
        .run(&request(&["  Buy milk  ", "Fix roof"]))
        .await
        .unwrap();

    assert_eq!(stub.recorded_names(), vec!["Buy milk", "Fix roof"]);
}

#[tokio::test(start_paused = true)]
async fn test_pacing_delay_between_items_but_not_after_last() {
    let stub = StubCreator::new();
    let coordinator =
        BatchCoordinator::with_pacing(&stub, Pacing::Fixed(Duration::from_millis(100)));

    let started = tokio::time::Instant::now();
    coordinator.run(&request(&["A", "B", "C"])).await.unwrap();

    // Two gaps for three items; no delay after the final one.
    assert_eq!(started.elapsed(), Duration::from_millis(200));
}

#[tokio::test(start_paused = true)]
async fn test_single_item_batch_has_no_delay() {
    let stub = StubCreator::new();
    let coordinator = BatchCoordinator::new(&stub);

    let started = tokio::time::Instant::now();
    coordinator.run(&request(&["Only"])).await.unwrap();

    assert_eq!(started.elapsed(), Duration::ZERO);
}
