//! # opsboard-api
//!
//! HTTP API layer for Opsboard built on Axum.
//!
//! Provides all REST endpoints, extractors, DTOs, middleware (CORS,
//! compression, tracing), and the mapping from domain errors to HTTP
//! responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
