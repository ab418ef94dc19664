//! HTTP client for the Trello REST API.
//!
//! One `TrelloClient` is constructed at process start and shared by
//! handle with every component that issues remote calls. All requests
//! carry the key/token pair as query parameters and are bounded by a
//! fixed per-request timeout. There are no retries at this layer.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::Config;

use super::error::{ApiError, ApiResult};
use super::models::{
    Board, BoardList, Card, CardDraft, CardPatch, CheckItem, CheckItemDraft, CheckItemPatch,
    Checklist, CommentAction, ListPatch, Position,
};

/// Per-request timeout. Bounds each individual remote call; there is no
/// timeout for a sequence of calls as a whole.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Seam between tool handlers and the remote API, so tools and the
/// batch coordinator can run against a mock in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrelloApi: Send + Sync {
    async fn member_boards(&self) -> ApiResult<Vec<Board>>;
    async fn get_board(&self, board_id: &str) -> ApiResult<Board>;
    async fn board_lists(&self, board_id: &str) -> ApiResult<Vec<BoardList>>;

    async fn create_list(
        &self,
        board_id: &str,
        name: &str,
        pos: Option<Position>,
    ) -> ApiResult<BoardList>;
    async fn update_list(&self, list_id: &str, patch: &ListPatch) -> ApiResult<BoardList>;
    async fn archive_list(&self, list_id: &str, archived: bool) -> ApiResult<BoardList>;

    async fn get_card(&self, card_id: &str) -> ApiResult<Card>;
    async fn list_cards(&self, list_id: &str) -> ApiResult<Vec<Card>>;
    async fn create_card(&self, draft: &CardDraft) -> ApiResult<Card>;
    async fn update_card(&self, card_id: &str, patch: &CardPatch) -> ApiResult<Card>;
    async fn move_card(
        &self,
        card_id: &str,
        list_id: &str,
        pos: Option<Position>,
    ) -> ApiResult<Card>;
    async fn delete_card(&self, card_id: &str) -> ApiResult<()>;
    async fn add_comment(&self, card_id: &str, text: &str) -> ApiResult<CommentAction>;

    async fn card_checklists(&self, card_id: &str) -> ApiResult<Vec<Checklist>>;
    async fn create_checklist(&self, card_id: &str, name: &str) -> ApiResult<Checklist>;
    async fn delete_checklist(&self, checklist_id: &str) -> ApiResult<()>;

    async fn create_check_item(
        &self,
        checklist_id: &str,
        draft: &CheckItemDraft,
    ) -> ApiResult<CheckItem>;
    async fn update_check_item(
        &self,
        card_id: &str,
        item_id: &str,
        patch: &CheckItemPatch,
    ) -> ApiResult<CheckItem>;
    async fn delete_check_item(&self, checklist_id: &str, item_id: &str) -> ApiResult<()>;
}

/// reqwest-backed implementation of [`TrelloApi`].
#[derive(Debug, Clone)]
pub struct TrelloClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_token: String,
}

impl TrelloClient {
    /// Build a client from the given configuration.
    pub fn new(config: &Config) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            api_token: config.api_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth(&self) -> [(&'static str, &str); 2] {
        [("key", &self.api_key), ("token", &self.api_token)]
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        debug!(path, "GET");
        let response = self
            .http
            .get(self.url(path))
            .query(&self.auth())
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        debug!(path, "POST");
        let response = self
            .http
            .post(self.url(path))
            .query(&self.auth())
            .query(params)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn put_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        debug!(path, "PUT");
        let response = self
            .http
            .put(self.url(path))
            .query(&self.auth())
            .query(params)
            .send()
            .await?;
        Self::parse(response).await
    }

    async fn delete(&self, path: &str) -> ApiResult<()> {
        debug!(path, "DELETE");
        let response = self
            .http
            .delete(self.url(path))
            .query(&self.auth())
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// Deserialize a successful response, or classify the failure.
    async fn parse<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();
        if status.is_success() {
            response.json().await.map_err(|e| ApiError::Decode {
                message: e.to_string(),
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }

    async fn expect_success(response: Response) -> ApiResult<()> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status.as_u16(), &body))
        }
    }
}

#[async_trait]
impl TrelloApi for TrelloClient {
    async fn member_boards(&self) -> ApiResult<Vec<Board>> {
        self.get_json("/1/members/me/boards").await
    }

    async fn get_board(&self, board_id: &str) -> ApiResult<Board> {
        self.get_json(&format!("/1/boards/{board_id}")).await
    }

    async fn board_lists(&self, board_id: &str) -> ApiResult<Vec<BoardList>> {
        self.get_json(&format!("/1/boards/{board_id}/lists")).await
    }

    async fn create_list(
        &self,
        board_id: &str,
        name: &str,
        pos: Option<Position>,
    ) -> ApiResult<BoardList> {
        let mut params = vec![
            ("idBoard", board_id.to_string()),
            ("name", name.trim().to_string()),
        ];
        if let Some(pos) = &pos {
            params.push(("pos", pos.to_query_value()));
        }
        self.post_json("/1/lists", &params).await
    }

    async fn update_list(&self, list_id: &str, patch: &ListPatch) -> ApiResult<BoardList> {
        self.put_json(&format!("/1/lists/{list_id}"), &patch.query_pairs())
            .await
    }

    async fn archive_list(&self, list_id: &str, archived: bool) -> ApiResult<BoardList> {
        let params = [("value", archived.to_string())];
        self.put_json(&format!("/1/lists/{list_id}/closed"), &params)
            .await
    }

    async fn get_card(&self, card_id: &str) -> ApiResult<Card> {
        self.get_json(&format!("/1/cards/{card_id}")).await
    }

    async fn list_cards(&self, list_id: &str) -> ApiResult<Vec<Card>> {
        self.get_json(&format!("/1/lists/{list_id}/cards")).await
    }

    async fn create_card(&self, draft: &CardDraft) -> ApiResult<Card> {
        self.post_json("/1/cards", &draft.query_pairs()).await
    }

    async fn update_card(&self, card_id: &str, patch: &CardPatch) -> ApiResult<Card> {
        self.put_json(&format!("/1/cards/{card_id}"), &patch.query_pairs())
            .await
    }

    async fn move_card(
        &self,
        card_id: &str,
        list_id: &str,
        pos: Option<Position>,
    ) -> ApiResult<Card> {
        let mut params = vec![("idList", list_id.to_string())];
        if let Some(pos) = &pos {
            params.push(("pos", pos.to_query_value()));
        }
        self.put_json(&format!("/1/cards/{card_id}"), &params).await
    }

    async fn delete_card(&self, card_id: &str) -> ApiResult<()> {
        self.delete(&format!("/1/cards/{card_id}")).await
    }

    async fn add_comment(&self, card_id: &str, text: &str) -> ApiResult<CommentAction> {
        let params = [("text", text.to_string())];
        self.post_json(&format!("/1/cards/{card_id}/actions/comments"), &params)
            .await
    }

    async fn card_checklists(&self, card_id: &str) -> ApiResult<Vec<Checklist>> {
        self.get_json(&format!("/1/cards/{card_id}/checklists"))
            .await
    }

    async fn create_checklist(&self, card_id: &str, name: &str) -> ApiResult<Checklist> {
        let params = [
            ("idCard", card_id.to_string()),
            ("name", name.trim().to_string()),
        ];
        self.post_json("/1/checklists", &params).await
    }

    async fn delete_checklist(&self, checklist_id: &str) -> ApiResult<()> {
        self.delete(&format!("/1/checklists/{checklist_id}")).await
    }

    async fn create_check_item(
        &self,
        checklist_id: &str,
        draft: &CheckItemDraft,
    ) -> ApiResult<CheckItem> {
        self.post_json(
            &format!("/1/checklists/{checklist_id}/checkItems"),
            &draft.query_pairs(),
        )
        .await
    }

    async fn update_check_item(
        &self,
        card_id: &str,
        item_id: &str,
        patch: &CheckItemPatch,
    ) -> ApiResult<CheckItem> {
        self.put_json(
            &format!("/1/cards/{card_id}/checkItem/{item_id}"),
            &patch.query_pairs(),
        )
        .await
    }

    async fn delete_check_item(&self, checklist_id: &str, item_id: &str) -> ApiResult<()> {
        self.delete(&format!(
            "/1/checklists/{checklist_id}/checkItems/{item_id}"
        ))
        .await
    }
}
