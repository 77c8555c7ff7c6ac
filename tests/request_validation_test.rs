//! Integration tests for request body validation.
//!
//! Validation short-circuits before any store mutation, so these run
//! without a live database.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_register_short_name_is_422() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(serde_json::json!({
                "name": "ab",
                "email": "ab@example.com",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["status"], 422);
    assert!(response.body["data"].is_null());
}

#[tokio::test]
async fn test_register_short_password_is_422() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(serde_json::json!({
                "name": "Morgan",
                "email": "morgan@example.com",
                "password": "abcd",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_register_bad_email_is_422() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(serde_json::json!({
                "name": "Morgan",
                "email": "not-an-email",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_login_bad_email_is_422() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(serde_json::json!({
                "email": "nope",
                "password": "secret1",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
}
