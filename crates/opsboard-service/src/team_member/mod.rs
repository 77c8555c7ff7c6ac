//! Team member management.

pub mod service;

pub use service::{CreateTeamMemberRequest, TeamMemberService, UpdateTeamMemberRequest};
