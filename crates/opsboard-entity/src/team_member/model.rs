//! Team member entity model.
//!
//! Team members are *not* login accounts — they are people managed by an
//! admin, referenced from project teams and task assignments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A person on an admin's team.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TeamMember {
    /// Unique member identifier.
    pub id: Uuid,
    /// Owning admin.
    pub admin_id: Uuid,
    /// Member name.
    pub name: String,
    /// Member email (unique per admin).
    pub email: String,
    /// Job title / role within the team.
    pub designation: String,
    /// When the member was created.
    pub created_at: DateTime<Utc>,
    /// When the member was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTeamMember {
    /// Owning admin.
    pub admin_id: Uuid,
    /// Member name.
    pub name: String,
    /// Member email.
    pub email: String,
    /// Job title / role within the team.
    pub designation: String,
}

/// Data for updating an existing team member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTeamMember {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New designation.
    pub designation: Option<String>,
}
