//! Integration tests for the bearer-token guard on protected routes.
//!
//! None of these requests reach the database: every rejection happens
//! in the extractor, before any repository call.

mod helpers;

use http::StatusCode;

use opsboard_auth::jwt::encoder::JwtEncoder;

#[tokio::test]
async fn test_protected_route_without_token_is_401() {
    let app = helpers::TestApp::new();

    for path in ["/api/v1/projects", "/api/v1/tasks", "/api/v1/teams"] {
        let response = app.request("GET", path, None, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "path: {path}");
        assert_eq!(response.body["success"], false);
        assert_eq!(response.body["status"], 401);
        assert!(response.body["data"].is_null());
    }
}

#[tokio::test]
async fn test_malformed_bearer_token_is_401() {
    let app = helpers::TestApp::new();

    let response = app
        .request("GET", "/api/v1/projects", None, Some("not-a-jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_refresh_token_rejected_as_access_token() {
    let app = helpers::TestApp::new();

    // A genuine refresh token must not pass the access-token guard.
    let encoder = JwtEncoder::new(&app.config.auth);
    let tokens = encoder
        .generate_token_pair(uuid::Uuid::new_v4())
        .expect("Failed to generate tokens");

    let response = app
        .request("GET", "/api/v1/projects", None, Some(&tokens.refresh_token))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_requires_authentication() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/api/v1/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_refresh_without_any_token_is_401() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(serde_json::json!({})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Missing refresh token");
}

#[tokio::test]
async fn test_refresh_with_garbage_token_is_401() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(serde_json::json!({ "refresh_token": "garbage" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    // The snake_case body key must be read: the rejection is about the
    // token being invalid, not about it being absent.
    assert_ne!(response.body["message"], "Missing refresh token");
}

#[tokio::test]
async fn test_refresh_accepts_camel_case_alias() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(serde_json::json!({ "refreshToken": "garbage" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_ne!(response.body["message"], "Missing refresh token");
}

#[tokio::test]
async fn test_access_token_rejected_as_refresh_token() {
    let app = helpers::TestApp::new();

    let encoder = JwtEncoder::new(&app.config.auth);
    let tokens = encoder
        .generate_token_pair(uuid::Uuid::new_v4())
        .expect("Failed to generate tokens");

    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(serde_json::json!({ "refresh_token": tokens.access_token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}
