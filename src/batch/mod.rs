//! Batch checklist-item creation.
//!
//! The one path in this server with real sequencing and failure
//! semantics: a caller submits up to 50 items for a single checklist,
//! the batch is validated as a whole before any remote side effect,
//! then each item is created sequentially with a fixed pacing delay
//! between calls. Per-item failures are captured as values and folded
//! into an aggregate report; a single item's failure never aborts the
//! batch, and nothing is retried or rolled back.

mod coordinator;
mod report;
mod request;
mod validate;

#[cfg(test)]
mod coordinator_test;

pub use coordinator::{BatchCoordinator, CheckItemCreator, DEFAULT_PACING, Pacing};
pub use report::BatchReport;
pub use request::{
    BatchRequest, BatchSummary, ItemOutcome, ItemSpec, MAX_BATCH_ITEMS, MAX_ITEM_NAME_LEN,
};
pub use validate::{FieldIssue, ValidationError, validate};
