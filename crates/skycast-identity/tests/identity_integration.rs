//! Integration tests for IdentityClient and ProfileStore using wiremock.
//!
//! These tests verify request shapes and provider error mapping against a
//! mock HTTP server.

use skycast_identity::{IdentityClient, IdentityError, ProfileStore};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to build a provider success body
fn session_body(uid: &str, email: &str) -> serde_json::Value {
    serde_json::json!({
        "kind": "identitytoolkit#SignupNewUserResponse",
        "localId": uid,
        "email": email,
        "idToken": "id-token-abc",
        "refreshToken": "refresh-token-xyz",
        "expiresIn": "3600"
    })
}

/// Helper to build a provider error body
fn error_body(code: &str) -> serde_json::Value {
    serde_json::json!({
        "error": {
            "code": 400,
            "message": code,
            "errors": [{ "message": code, "domain": "global", "reason": "invalid" }]
        }
    })
}

#[tokio::test]
async fn test_sign_up_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .and(query_param("key", "test-key"))
        .and(body_json(serde_json::json!({
            "email": "new@example.com",
            "password": "hunter22",
            "returnSecureToken": true
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(session_body("uid-1", "new@example.com")),
        )
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(&mock_server.uri(), "test-key").unwrap();
    let session = client.sign_up("new@example.com", "hunter22").await.unwrap();

    assert_eq!(session.user.uid, "uid-1");
    assert_eq!(session.user.email, "new@example.com");
    assert_eq!(session.id_token, "id-token-abc");
    assert_eq!(session.refresh_token.as_deref(), Some("refresh-token-xyz"));
    assert!(!session.is_expired());
}

#[tokio::test]
async fn test_sign_up_duplicate_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body("EMAIL_EXISTS")))
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(&mock_server.uri(), "test-key").unwrap();
    let err = client
        .sign_up("taken@example.com", "hunter22")
        .await
        .unwrap_err();

    assert!(err.is_duplicate_email(), "expected EmailExists, got {err:?}");
}

#[tokio::test]
async fn test_sign_up_weak_password() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body(
            "WEAK_PASSWORD : Password should be at least 6 characters",
        )))
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(&mock_server.uri(), "test-key").unwrap();
    let err = client.sign_up("new@example.com", "123").await.unwrap_err();

    assert!(matches!(err, IdentityError::WeakPassword(_)));
}

#[tokio::test]
async fn test_sign_in_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .and(query_param("key", "test-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(session_body("uid-2", "user@example.com")),
        )
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(&mock_server.uri(), "test-key").unwrap();
    let session = client.sign_in("user@example.com", "hunter22").await.unwrap();

    assert_eq!(session.user.uid, "uid-2");
    assert_eq!(session.id_token, "id-token-abc");
}

#[tokio::test]
async fn test_sign_in_wrong_password() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(error_body("INVALID_LOGIN_CREDENTIALS")),
        )
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(&mock_server.uri(), "test-key").unwrap();
    let err = client
        .sign_in("user@example.com", "wrong")
        .await
        .unwrap_err();

    assert!(matches!(err, IdentityError::InvalidCredentials));
}

#[tokio::test]
async fn test_sign_in_unknown_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(error_body("EMAIL_NOT_FOUND")))
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(&mock_server.uri(), "test-key").unwrap();
    let err = client
        .sign_in("nobody@example.com", "hunter22")
        .await
        .unwrap_err();

    assert!(matches!(err, IdentityError::InvalidCredentials));
}

#[tokio::test]
async fn test_non_json_provider_error_is_preserved() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts:signUp"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream maintenance"))
        .mount(&mock_server)
        .await;

    let client = IdentityClient::new(&mock_server.uri(), "test-key").unwrap();
    let err = client
        .sign_up("new@example.com", "hunter22")
        .await
        .unwrap_err();

    match err {
        IdentityError::Provider { status, message } => {
            assert_eq!(status, 503);
            assert_eq!(message, "upstream maintenance");
        }
        other => panic!("expected Provider, got {other:?}"),
    }
}

#[tokio::test]
async fn test_save_profile_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/uid-1.json"))
        .and(query_param("auth", "id-token-abc"))
        .and(body_json(serde_json::json!({ "email": "new@example.com" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "email": "new@example.com" })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let store = ProfileStore::new(&mock_server.uri()).unwrap();
    store
        .save_profile("uid-1", "new@example.com", "id-token-abc")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_save_profile_denied() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/users/uid-1.json"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "error": "Permission denied" })),
        )
        .mount(&mock_server)
        .await;

    let store = ProfileStore::new(&mock_server.uri()).unwrap();
    let err = store
        .save_profile("uid-1", "new@example.com", "bad-token")
        .await
        .unwrap_err();

    assert!(matches!(err, IdentityError::Provider { status: 401, .. }));
}
