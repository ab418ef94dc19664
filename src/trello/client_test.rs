//! Tests for the Trello HTTP client.
//!
//! Runs against a local wiremock server; no request ever leaves the
//! process.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::config::Config;
use crate::trello::{ApiError, CheckItemDraft, Position, TrelloApi, TrelloClient};

fn client_for(server: &MockServer) -> TrelloClient {
    let config = Config {
        api_key: "test-key".to_string(),
        api_token: "test-token".to_string(),
        base_url: server.uri(),
    };
    TrelloClient::new(&config).unwrap()
}

fn board_json(id: &str, name: &str) -> serde_json::Value {
    json!({"id": id, "name": name, "desc": "", "closed": false})
}

#[tokio::test]
async fn test_credentials_sent_as_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/boards/5f1a2b3c4d5e6f7a8b9c0d1e"))
        .and(query_param("key", "test-key"))
        .and(query_param("token", "test-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(board_json("5f1a2b3c4d5e6f7a8b9c0d1e", "Roadmap")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);
    let board = client.get_board("5f1a2b3c4d5e6f7a8b9c0d1e").await.unwrap();
    assert_eq!(board.name, "Roadmap");
}

#[tokio::test]
async fn test_member_boards_decodes_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/members/me/boards"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            board_json("5f1a2b3c4d5e6f7a8b9c0d1e", "Roadmap"),
            board_json("6f1a2b3c4d5e6f7a8b9c0d1e", "Backlog"),
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let boards = client.member_boards().await.unwrap();
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[1].name, "Backlog");
}

#[tokio::test]
async fn test_404_classified_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1/boards/ffffffffffffffffffffffff"))
        .respond_with(ResponseTemplate::new(404).set_body_string("board not found"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.get_board("ffffffffffffffffffffffff").await.unwrap_err();

    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(err.kind(), "not-found");
    assert!(err.to_string().contains("board not found"));
}

#[tokio::test]
async fn test_401_classified_as_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.member_boards().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { .. }));
    assert_eq!(err.kind(), "unauthorized");
}

#[tokio::test]
async fn test_403_classified_as_forbidden() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_string("no access to board"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.member_boards().await.unwrap_err();
    assert!(matches!(err, ApiError::Forbidden { .. }));
}

#[tokio::test]
async fn test_429_classified_as_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429).set_body_string("too many requests"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.member_boards().await.unwrap_err();
    assert!(matches!(err, ApiError::RateLimited { .. }));
    assert_eq!(err.kind(), "rate-limited");
}

#[tokio::test]
async fn test_500_classified_as_other() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.member_boards().await.unwrap_err();
    assert!(matches!(err, ApiError::Api { status: 500, .. }));
    assert_eq!(err.kind(), "other");
}

#[tokio::test]
async fn test_connection_refused_is_transport() {
    let config = Config {
        api_key: "k".to_string(),
        api_token: "t".to_string(),
        // Port 1 is never listening locally.
        base_url: "http://127.0.0.1:1".to_string(),
    };
    let client = TrelloClient::new(&config).unwrap();

    let err = client.member_boards().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.kind(), "other");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.member_boards().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_create_check_item_sends_trimmed_name_and_omits_absent_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1/checklists/7a1b2c3d4e5f6a7b8c9d0e1f/checkItems"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "8a1b2c3d4e5f6a7b8c9d0e1f",
            "name": "Buy milk",
            "state": "incomplete",
            "idChecklist": "7a1b2c3d4e5f6a7b8c9d0e1f"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let draft = CheckItemDraft {
        name: "  Buy milk  ".to_string(),
        pos: Some(Position::Named("top".to_string())),
        ..Default::default()
    };
    let created = client
        .create_check_item("7a1b2c3d4e5f6a7b8c9d0e1f", &draft)
        .await
        .unwrap();
    assert_eq!(created.name, "Buy milk");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let pairs: Vec<(String, String)> = requests[0]
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    assert!(pairs.contains(&("name".to_string(), "Buy milk".to_string())));
    assert!(pairs.contains(&("pos".to_string(), "top".to_string())));
    // Absent optional fields are omitted entirely, not sent as defaults.
    for absent in ["checked", "due", "dueReminder", "idMember"] {
        assert!(
            !pairs.iter().any(|(k, _)| k == absent),
            "{absent} should not be in the query"
        );
    }
}

#[tokio::test]
async fn test_delete_card_ignores_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/1/cards/6a1b2c3d4e5f6a7b8c9d0e1f"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"_value": null})))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_card("6a1b2c3d4e5f6a7b8c9d0e1f").await.unwrap();
}

#[tokio::test]
async fn test_move_card_sends_target_list() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/1/cards/6a1b2c3d4e5f6a7b8c9d0e1f"))
        .and(query_param("idList", "5f1a2b3c4d5e6f7a8b9c0d1e"))
        .and(query_param("pos", "bottom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "6a1b2c3d4e5f6a7b8c9d0e1f",
            "name": "Ship release",
            "idList": "5f1a2b3c4d5e6f7a8b9c0d1e"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let card = client
        .move_card(
            "6a1b2c3d4e5f6a7b8c9d0e1f",
            "5f1a2b3c4d5e6f7a8b9c0d1e",
            Some(Position::Named("bottom".to_string())),
        )
        .await
        .unwrap();
    assert_eq!(card.id_list, "5f1a2b3c4d5e6f7a8b9c0d1e");
}
