//! Task entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::status::TaskStatus;

/// A task within a project, assigned to team members of that project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique task identifier.
    pub id: Uuid,
    /// Owning admin.
    pub admin_id: Uuid,
    /// The project this task belongs to.
    pub project_id: Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Deadline for completion.
    pub deadline: DateTime<Utc>,
    /// Team member ids assigned to this task.
    ///
    /// Invariant: a subset of the owning project's `team_members`.
    pub assigned_members: Vec<Uuid>,
    /// Current status.
    pub status: TaskStatus,
    /// When the task was created.
    pub created_at: DateTime<Utc>,
    /// When the task was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Owning admin.
    pub admin_id: Uuid,
    /// Owning project.
    pub project_id: Uuid,
    /// Task title.
    pub title: String,
    /// Task description.
    pub description: String,
    /// Deadline for completion.
    pub deadline: DateTime<Utc>,
    /// Assigned team member ids.
    pub assigned_members: Vec<Uuid>,
    /// Initial status (defaults to pending).
    pub status: TaskStatus,
}

/// Data for updating an existing task. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTask {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New deadline.
    pub deadline: Option<DateTime<Utc>>,
    /// Move the task to another project.
    pub project_id: Option<Uuid>,
    /// New assigned member list (replaces the old one).
    pub assigned_members: Option<Vec<Uuid>>,
    /// New status.
    pub status: Option<TaskStatus>,
}
