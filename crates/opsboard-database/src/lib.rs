//! # opsboard-database
//!
//! PostgreSQL database connection management and concrete repository
//! implementations for all Opsboard entities.
//!
//! Every repository method that touches projects, tasks, or team members
//! takes the owning admin's id and binds it into the query predicate —
//! this is the single place ownership scoping is enforced.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
