use super::*;
use crate::fake::{FakeTransport, auth_json, user_json};

// =============================================================
// URL helpers
// =============================================================

#[test]
fn join_url_handles_slashes() {
    assert_eq!(join_url("http://api.local/", "api/users/data"), "http://api.local/api/users/data");
    assert_eq!(join_url("http://api.local", "/api/users/data"), "http://api.local/api/users/data");
    assert_eq!(join_url("/", "api/users/data"), "/api/users/data");
    assert_eq!(join_url("", "api/users/data"), "/api/users/data");
}

#[test]
fn id_query_repeats_parameter() {
    assert_eq!(id_query(&[1]), "id=1");
    assert_eq!(id_query(&[3, 1, 2]), "id=3&id=1&id=2");
}

#[test]
fn bulk_action_paths_and_methods() {
    assert_eq!(BulkAction::Block.path(&[1, 2]), "api/users/block?id=1&id=2");
    assert_eq!(BulkAction::Unblock.path(&[5]), "api/users/unblock?id=5");
    assert_eq!(BulkAction::Delete.path(&[9]), "api/users/delete?id=9");
    assert_eq!(BulkAction::Delete.method(), Method::Delete);
    assert_eq!(BulkAction::Block.method(), Method::Get);
}

#[test]
fn memory_store_treats_empty_as_missing() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.load().unwrap(), None);
    store.store("abc").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("abc"));
    store.clear().unwrap();
    assert_eq!(store.load().unwrap(), None);
    assert_eq!(store.raw(), "");
}

// =============================================================
// Auth calls
// =============================================================

#[tokio::test]
async fn login_posts_credentials_and_stores_token() {
    let api = UsersApi::new(
        FakeTransport::new().reply(200, auth_json("tok-1", 4)),
        MemoryTokenStore::default(),
    );

    let user = api.login("alice@example.com", "secret").await.unwrap();

    assert_eq!(user.id, 4);
    assert_eq!(api.tokens().raw(), "tok-1");
    let requests = api.transport().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].path, endpoints::LOGIN);
    assert_eq!(requests[0].bearer, None);
    assert_eq!(
        requests[0].body,
        Some(serde_json::json!({ "email": "alice@example.com", "password": "secret" }))
    );
}

#[tokio::test]
async fn registration_sends_name() {
    let api = UsersApi::new(
        FakeTransport::new().reply(201, auth_json("tok-2", 5)),
        MemoryTokenStore::default(),
    );

    api.registration("bob@example.com", "Bob", "pw").await.unwrap();

    let body = api.transport().requests()[0].body.clone().unwrap();
    assert_eq!(body["name"], "Bob");
    assert_eq!(api.transport().requests()[0].path, endpoints::REGISTRATION);
    assert_eq!(api.tokens().raw(), "tok-2");
}

#[tokio::test]
async fn login_rejection_keeps_server_message_and_token() {
    let api = UsersApi::new(
        FakeTransport::new().reply(400, serde_json::json!({ "message": "Wrong password" })),
        MemoryTokenStore::with_token("old"),
    );

    let err = api.login("alice@example.com", "bad").await.unwrap_err();

    assert_eq!(err, ApiError::Status { status: 400, message: Some("Wrong password".to_owned()) });
    assert_eq!(api.tokens().raw(), "old");
}

#[tokio::test]
async fn non_json_error_body_has_no_message() {
    let api = UsersApi::new(
        FakeTransport::new().reply_raw(502, "<html>Bad Gateway</html>"),
        MemoryTokenStore::default(),
    );

    let err = api.login("a@b.co", "pw").await.unwrap_err();
    assert_eq!(err, ApiError::Status { status: 502, message: None });
}

#[tokio::test]
async fn check_sends_bearer_and_renews_token() {
    let api = UsersApi::new(
        FakeTransport::new().reply(200, auth_json("renewed", 4)),
        MemoryTokenStore::with_token("stale"),
    );

    api.check().await.unwrap();

    let requests = api.transport().requests();
    assert_eq!(requests[0].path, endpoints::AUTH_CHECK);
    assert_eq!(requests[0].bearer.as_deref(), Some("stale"));
    assert_eq!(api.tokens().raw(), "renewed");
}

#[tokio::test]
async fn check_without_token_skips_network() {
    let api = UsersApi::new(FakeTransport::new(), MemoryTokenStore::default());
    assert_eq!(api.check().await.unwrap_err(), ApiError::MissingToken);
    assert_eq!(api.transport().request_count(), 0);
}

#[tokio::test]
async fn malformed_auth_body_is_decode_error() {
    let api = UsersApi::new(
        FakeTransport::new().reply(200, serde_json::json!({ "user": null })),
        MemoryTokenStore::default(),
    );
    assert!(matches!(api.login("a@b.co", "pw").await, Err(ApiError::Decode(_))));
    assert_eq!(api.tokens().raw(), "");
}

// =============================================================
// User-list calls
// =============================================================

#[tokio::test]
async fn get_user_list_unwraps_users() {
    let api = UsersApi::new(
        FakeTransport::new().reply(
            200,
            serde_json::json!({ "users": [user_json(1, "B", "b@x.io", "2024-01-02")] }),
        ),
        MemoryTokenStore::with_token("t"),
    );

    let users = api.get_user_list().await.unwrap();

    assert_eq!(users.len(), 1);
    assert_eq!(api.transport().requests()[0].bearer.as_deref(), Some("t"));
}

#[tokio::test]
async fn bulk_calls_encode_ids() {
    let api = UsersApi::new(
        FakeTransport::new()
            .reply(200, serde_json::json!({}))
            .reply(200, serde_json::json!({}))
            .reply(200, serde_json::json!({})),
        MemoryTokenStore::with_token("t"),
    );

    api.block_users(&[1, 2]).await.unwrap();
    api.unblock_users(&[3]).await.unwrap();
    let response = api.delete_users(&[4, 5]).await.unwrap();

    assert_eq!(response.status, 200);
    let paths: Vec<_> = api.transport().requests().into_iter().map(|r| (r.method, r.path)).collect();
    assert_eq!(
        paths,
        vec![
            (Method::Get, "api/users/block?id=1&id=2".to_owned()),
            (Method::Get, "api/users/unblock?id=3".to_owned()),
            (Method::Delete, "api/users/delete?id=4&id=5".to_owned()),
        ]
    );
}

#[tokio::test]
async fn bulk_with_no_ids_is_rejected_locally() {
    let api = UsersApi::new(FakeTransport::new(), MemoryTokenStore::with_token("t"));
    assert_eq!(api.block_users(&[]).await.unwrap_err(), ApiError::EmptySelection);
    assert_eq!(api.transport().request_count(), 0);
}

#[tokio::test]
async fn network_failure_propagates() {
    let api = UsersApi::new(
        FakeTransport::new().fail(ApiError::Network("offline".to_owned())),
        MemoryTokenStore::with_token("t"),
    );
    assert_eq!(
        api.get_user_list().await.unwrap_err(),
        ApiError::Network("offline".to_owned())
    );
}

#[test]
fn authorization_header_uses_bearer_scheme() {
    let mut request = public(Method::Get, endpoints::USER_LIST, None);
    assert_eq!(request.authorization(), None);
    request.bearer = Some("abc".to_owned());
    assert_eq!(request.authorization().as_deref(), Some("Bearer abc"));
}
