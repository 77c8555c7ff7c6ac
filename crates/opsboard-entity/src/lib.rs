//! # opsboard-entity
//!
//! Domain entity models for Opsboard. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod project;
pub mod task;
pub mod team_member;
pub mod user;
