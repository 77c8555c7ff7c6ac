//! # opsboard-service
//!
//! Business logic service layer for Opsboard. Each service orchestrates
//! repositories to implement application-level use cases, with every
//! read and write scoped to the owning admin.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod context;
pub mod project;
pub mod task;
pub mod team_member;

pub use context::RequestContext;
pub use project::ProjectService;
pub use task::TaskService;
pub use team_member::TeamMemberService;
