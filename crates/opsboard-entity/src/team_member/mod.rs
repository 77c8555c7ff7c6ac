//! Team member entity.

pub mod model;

pub use model::{CreateTeamMember, TeamMember, UpdateTeamMember};
