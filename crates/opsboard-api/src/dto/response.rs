//! Response DTOs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use opsboard_core::types::PageResponse;

/// Standard response envelope.
///
/// Every endpoint, success or failure, responds with this shape. Error
/// responses carry `data: null`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// HTTP status code, repeated in the body.
    pub status: u16,
    /// Human-readable message.
    pub message: String,
    /// Response data.
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            status: 200,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Creates a successful response with an explicit status code.
    pub fn with_status(status: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            status,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// List payload: a plain array when pagination was not requested, a
/// pagination block otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T: Serialize> {
    /// The full, unpaginated result set.
    Full(Vec<T>),
    /// One page plus pagination metadata.
    Page(PageResponse<T>),
}

/// Tokens returned by register, login, and refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokensResponse {
    /// The authenticated user's ID.
    pub id: Uuid,
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
