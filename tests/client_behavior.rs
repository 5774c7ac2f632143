// tests/client_behavior.rs
//! Contract tests for the HTTP wrapper against a canned single-request
//! server: status mapping, token clearing on 401, decode failures.

use job_tracker::core::{ApiClient, StoredCredentials, TokenStore};
use job_tracker::error::ApiError;
use job_tracker::types::user::User;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve exactly one connection with a fixed response, then stop.
async fn spawn_stub(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 8192];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/api/v1", addr)
}

fn temp_token_store(name: &str) -> TokenStore {
    let path = std::env::temp_dir()
        .join("jobtrack-contract-tests")
        .join(format!("{}-{}", name, std::process::id()))
        .join("credentials.toml");
    TokenStore::new(path)
}

fn signed_in_store(name: &str) -> TokenStore {
    let store = temp_token_store(name);
    store
        .save(&StoredCredentials {
            access_token: "test-access-token".into(),
            refresh_token: "test-refresh-token".into(),
            expires_at: None,
        })
        .unwrap();
    store
}

const USER_BODY: &str = r#"{
    "id": "u-1",
    "email": "dev@example.com",
    "full_name": "Dev Example",
    "created_at": "2025-01-15T09:00:00Z",
    "is_premium": false,
    "profile_image_url": null
}"#;

#[tokio::test]
async fn unauthorized_response_clears_stored_tokens() {
    let base_url = spawn_stub("401 Unauthorized", r#"{"detail": "token expired"}"#).await;
    let store = signed_in_store("clears-on-401");
    let api = ApiClient::new(base_url, 5, store.clone()).unwrap();

    let result = api.get::<User>("/auth/me").await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));

    // The session must be gone: signed out, not retried.
    assert!(store.load().is_none());
}

#[tokio::test]
async fn malformed_success_body_surfaces_decode_error() {
    let base_url = spawn_stub("200 OK", r#"{"unexpected": "shape"}"#).await;
    let store = signed_in_store("malformed-body");
    let api = ApiClient::new(base_url, 5, store.clone()).unwrap();

    let result = api.get::<User>("/auth/me").await;
    assert!(matches!(result, Err(ApiError::Decode(_))));

    // Only a 401 clears the session.
    assert!(store.load().is_some());
    store.clear().unwrap();
}

#[tokio::test]
async fn server_detail_is_passed_through() {
    let base_url = spawn_stub("409 Conflict", r#"{"detail": "Sync already in progress"}"#).await;
    let store = signed_in_store("detail-passthrough");
    let api = ApiClient::new(base_url, 5, store.clone()).unwrap();

    let result = api.get::<User>("/auth/me").await;
    match result {
        Err(ApiError::Server { status, detail }) => {
            assert_eq!(status, 409);
            assert_eq!(detail, "Sync already in progress");
        }
        other => panic!("unexpected result: {other:?}"),
    }
    store.clear().unwrap();
}

#[tokio::test]
async fn successful_response_decodes_typed_record() {
    let base_url = spawn_stub("200 OK", USER_BODY).await;
    let store = signed_in_store("happy-path");
    let api = ApiClient::new(base_url, 5, store.clone()).unwrap();

    let user = api.get::<User>("/auth/me").await.unwrap();
    assert_eq!(user.email, "dev@example.com");
    assert!(!user.is_premium);
    store.clear().unwrap();
}

#[tokio::test]
async fn missing_token_fails_before_any_request() {
    // No stub server at all: with no stored session the request must not
    // even be attempted.
    let store = temp_token_store("no-session");
    let api = ApiClient::new("http://127.0.0.1:9/api/v1".into(), 5, store).unwrap();

    let result = api.get::<User>("/auth/me").await;
    assert!(matches!(result, Err(ApiError::Unauthorized)));
}
