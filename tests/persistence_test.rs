//! Store-backed integration tests: refresh rotation, ownership scoping,
//! and cascade behavior.
//!
//! These need a live PostgreSQL instance and are `#[ignore]`d by
//! default. Point `OPSBOARD_TEST_DATABASE_URL` at a scratch database
//! and run with `--ignored`.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

async fn create_project(app: &TestApp, token: &str, members: &[&str]) -> String {
    let response = app
        .request(
            "POST",
            "/api/v1/projects",
            Some(json!({
                "name": "Test project",
                "description": "fixture",
                "teamMembers": members,
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["data"]["id"].as_str().unwrap().to_string()
}

async fn create_member(app: &TestApp, token: &str) -> String {
    let email = format!("member-{}@example.com", uuid::Uuid::new_v4());
    let response = app
        .request(
            "POST",
            "/api/v1/teams",
            Some(json!({
                "name": "Test member",
                "email": email,
                "designation": "Engineer",
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["data"]["id"].as_str().unwrap().to_string()
}

async fn create_task(app: &TestApp, token: &str, project_id: &str, members: &[&str]) -> String {
    let response = app
        .request(
            "POST",
            "/api/v1/tasks",
            Some(json!({
                "projectId": project_id,
                "title": "Test task",
                "description": "fixture",
                "deadline": "2027-01-01T12:00:00Z",
                "assignedMembers": members,
            })),
            Some(token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    response.body["data"]["id"].as_str().unwrap().to_string()
}

#[tokio::test]
#[ignore]
async fn test_refresh_rotation_invalidates_old_token() {
    let app = TestApp::with_database().await;
    let tokens = app.register_admin("rotation").await;

    // First refresh succeeds and issues a new pair.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": tokens.refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let new_refresh = response.body["data"]["refresh_token"].as_str().unwrap();
    assert_ne!(new_refresh, tokens.refresh_token);

    // The superseded token is dead.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": tokens.refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    // The rotated token still works.
    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": new_refresh })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
}

#[tokio::test]
#[ignore]
async fn test_logout_revokes_refresh_token() {
    let app = TestApp::with_database().await;
    let tokens = app.register_admin("logout").await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/logout",
            None,
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "POST",
            "/api/v1/auth/refresh",
            Some(json!({ "refresh_token": tokens.refresh_token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore]
async fn test_cross_admin_project_is_not_found() {
    let app = TestApp::with_database().await;
    let owner = app.register_admin("owner").await;
    let other = app.register_admin("other").await;

    let project_id = create_project(&app, &owner.access_token, &[]).await;
    let path = format!("/api/v1/projects/{project_id}");

    // The other admin cannot see, change, or delete it; every route
    // answers 404 rather than 403.
    let response = app
        .request("GET", &path, None, Some(&other.access_token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "PUT",
            &path,
            Some(json!({ "name": "hijacked" })),
            Some(&other.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", &path, None, Some(&other.access_token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // The other admin's listing never includes it.
    let response = app
        .request("GET", "/api/v1/projects", None, Some(&other.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let listed = response.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .any(|p| p["id"] == project_id.as_str());
    assert!(!listed);

    // The owner still has it, untouched.
    let response = app
        .request("GET", &path, None, Some(&owner.access_token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Test project");
}

#[tokio::test]
#[ignore]
async fn test_project_delete_cascades_tasks() {
    let app = TestApp::with_database().await;
    let tokens = app.register_admin("cascade").await;

    let project_id = create_project(&app, &tokens.access_token, &[]).await;
    let task_id = create_task(&app, &tokens.access_token, &project_id, &[]).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/projects/{project_id}"),
            None,
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "GET",
            &format!("/api/v1/tasks/{task_id}"),
            None,
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
async fn test_member_delete_scrubs_references() {
    let app = TestApp::with_database().await;
    let tokens = app.register_admin("scrub").await;

    let member_id = create_member(&app, &tokens.access_token).await;
    let project_id = create_project(&app, &tokens.access_token, &[&member_id]).await;
    let task_id = create_task(&app, &tokens.access_token, &project_id, &[&member_id]).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/teams/{member_id}"),
            None,
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);

    // No dangling reference survives in the project team or the task.
    let response = app
        .request(
            "GET",
            &format!("/api/v1/projects/{project_id}"),
            None,
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["team_members"], json!([]));

    let response = app
        .request(
            "GET",
            &format!("/api/v1/tasks/{task_id}"),
            None,
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["assigned_members"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_task_create_with_unknown_member_writes_nothing() {
    let app = TestApp::with_database().await;
    let tokens = app.register_admin("atomic").await;

    let project_id = create_project(&app, &tokens.access_token, &[]).await;
    let ghost = uuid::Uuid::new_v4().to_string();

    let response = app
        .request(
            "POST",
            "/api/v1/tasks",
            Some(json!({
                "projectId": project_id,
                "title": "Test task",
                "description": "fixture",
                "deadline": "2027-01-01T12:00:00Z",
                "assignedMembers": [ghost],
            })),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    // Validation failed before any write: the project has no tasks.
    let response = app
        .request(
            "GET",
            &format!("/api/v1/tasks?projectId={project_id}"),
            None,
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
#[ignore]
async fn test_task_assignment_requires_project_membership() {
    let app = TestApp::with_database().await;
    let tokens = app.register_admin("membership").await;

    // A real member who is not on the project's team.
    let member_id = create_member(&app, &tokens.access_token).await;
    let project_id = create_project(&app, &tokens.access_token, &[]).await;

    let response = app
        .request(
            "POST",
            "/api/v1/tasks",
            Some(json!({
                "projectId": project_id,
                "title": "Test task",
                "description": "fixture",
                "deadline": "2027-01-01T12:00:00Z",
                "assignedMembers": [member_id],
            })),
            Some(&tokens.access_token),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED, "{:?}", response.body);
}
