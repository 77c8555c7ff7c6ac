//! Project entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A project owned by an admin, grouping tasks and a team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: Uuid,
    /// Owning admin.
    pub admin_id: Uuid,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Team member ids assigned to this project.
    ///
    /// Task assignments must be a subset of this list.
    pub team_members: Vec<Uuid>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Whether the given team member is part of this project's team.
    pub fn has_member(&self, member_id: Uuid) -> bool {
        self.team_members.contains(&member_id)
    }
}

/// Data required to create a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// Owning admin.
    pub admin_id: Uuid,
    /// Project name.
    pub name: String,
    /// Project description.
    pub description: String,
    /// Initial team member ids.
    pub team_members: Vec<Uuid>,
}

/// Data for updating an existing project. `None` fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProject {
    /// New name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New team member list (replaces the old one).
    pub team_members: Option<Vec<Uuid>>,
}
