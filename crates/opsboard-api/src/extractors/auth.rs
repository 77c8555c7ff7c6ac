//! `AuthUser` extractor — pulls the access token from the request, validates, and injects context.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use opsboard_core::error::AppError;
use opsboard_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated admin context available in handlers.
///
/// The token is taken from the `Authorization: Bearer` header first,
/// falling back to the `access_token` cookie for browser clients.
/// Verification is stateless — no store lookup happens here.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let bearer = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .map(str::to_string);

        let token = match bearer {
            Some(token) => token,
            None => {
                let jar = CookieJar::from_headers(&parts.headers);
                jar.get("access_token")
                    .map(|c| c.value().to_string())
                    .ok_or_else(|| AppError::unauthorized("Missing access token"))?
            }
        };

        let claims = state.jwt_decoder.decode_access_token(&token)?;

        Ok(AuthUser(RequestContext::new(claims.user_id(), claims.jti)))
    }
}
