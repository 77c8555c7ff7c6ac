//! Axum middleware stack.

pub mod compression;
pub mod cors;
