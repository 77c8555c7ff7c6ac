//! Request DTOs with validation.
//!
//! Bodies and query strings arrive camelCased from the web client, so
//! every DTO here carries `rename_all = "camelCase"`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use opsboard_entity::task::TaskStatus;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: String,
    /// Email address, unique across all users.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 5, message = "Password must be at least 5 characters"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
///
/// The token may also arrive via the `refresh_token` cookie, in which
/// case the body can be empty. Unlike the other DTOs the body key is
/// snake_case on the wire; `refreshToken` is accepted as an alias.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    #[serde(alias = "refreshToken")]
    pub refresh_token: Option<String>,
}

/// Create project request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project name.
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Team member IDs assigned to the project.
    #[serde(default)]
    pub team_members: Vec<Uuid>,
}

/// Update project request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    /// New project name.
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement team member list.
    pub team_members: Option<Vec<Uuid>>,
}

/// Create task request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// The project the task belongs to.
    pub project_id: Uuid,
    /// Task title.
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Due date.
    pub deadline: DateTime<Utc>,
    /// Members assigned to the task.
    #[serde(default)]
    pub assigned_members: Vec<Uuid>,
    /// Initial status.
    #[serde(default)]
    pub status: TaskStatus,
}

/// Update task request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// New title.
    #[validate(length(min = 3, message = "Title must be at least 3 characters"))]
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Move the task to another project.
    pub project_id: Option<Uuid>,
    /// Replacement assignment list.
    pub assigned_members: Option<Vec<Uuid>>,
    /// New status.
    pub status: Option<TaskStatus>,
}

/// Create team member request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamMemberRequest {
    /// Member name.
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: String,
    /// Member email, unique within the admin's team.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Job title or role description.
    #[serde(default)]
    pub designation: String,
}

/// Update team member request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamMemberRequest {
    /// New name.
    #[validate(length(min = 3, message = "Name must be at least 3 characters"))]
    pub name: Option<String>,
    /// New email.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// New designation.
    pub designation: Option<String>,
}
