//! Concrete repository implementations.

pub mod project;
pub mod task;
pub mod team_member;
pub mod user;

pub use project::ProjectRepository;
pub use task::{TaskFilter, TaskRepository};
pub use team_member::TeamMemberRepository;
pub use user::UserRepository;
