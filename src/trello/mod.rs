//! Trello REST API client: models, error taxonomy, and the HTTP client
//! behind the [`TrelloApi`] trait seam.

mod client;
mod error;
mod models;

#[cfg(test)]
mod client_test;

#[cfg(test)]
pub(crate) use client::MockTrelloApi;
pub use client::{REQUEST_TIMEOUT, TrelloApi, TrelloClient};
pub use error::{ApiError, ApiResult};
pub use models::{
    Board, BoardList, Card, CardDraft, CardPatch, CheckItem, CheckItemDraft, CheckItemPatch,
    CheckItemState, Checklist, CommentAction, CommentData, ListPatch, Position, is_hex_id,
};
