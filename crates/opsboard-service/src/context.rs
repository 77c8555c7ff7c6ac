//! Request context carrying the authenticated admin identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for the current authenticated request.
///
/// Extracted by middleware and passed into service methods so that
/// every operation knows *which* admin's data it may touch. Ownership
/// scoping always uses this id, never anything from the request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated admin's user ID.
    pub admin_id: Uuid,
    /// The token ID the request authenticated with.
    pub token_id: Uuid,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(admin_id: Uuid, token_id: Uuid) -> Self {
        Self {
            admin_id,
            token_id,
            request_time: Utc::now(),
        }
    }
}
