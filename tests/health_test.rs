//! Integration test for the health endpoint.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health_returns_ok_envelope() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["status"], 200);
    assert_eq!(response.body["data"]["status"], "ok");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/v1/nothing-here", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
