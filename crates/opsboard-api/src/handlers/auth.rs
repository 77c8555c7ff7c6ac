//! Auth handlers — register, login, logout, refresh.
//!
//! Tokens travel both in the JSON body and as `httpOnly` cookies so
//! that browser and API clients can use the same endpoints.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use opsboard_auth::jwt::encoder::TokenPair;
use opsboard_core::error::AppError;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthTokensResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, CookieJar, Json<ApiResponse<AuthTokensResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let session = state
        .session_manager
        .register(&req.name, &req.email, &req.password)
        .await?;

    let jar = set_session_cookies(jar, &state, &session.tokens);

    Ok((
        StatusCode::CREATED,
        jar,
        Json(ApiResponse::with_status(
            201,
            "User registered successfully",
            AuthTokensResponse {
                id: session.user.id,
                access_token: session.tokens.access_token,
                refresh_token: session.tokens.refresh_token,
            },
        )),
    ))
}

/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<AuthTokensResponse>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let session = state.session_manager.login(&req.email, &req.password).await?;

    let jar = set_session_cookies(jar, &state, &session.tokens);

    Ok((
        jar,
        Json(ApiResponse::ok(
            "Login successful",
            AuthTokensResponse {
                id: session.user.id,
                access_token: session.tokens.access_token,
                refresh_token: session.tokens.refresh_token,
            },
        )),
    ))
}

/// POST /api/v1/auth/refresh
///
/// Accepts the refresh token from the `refresh_token` cookie, falling
/// back to the request body.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Option<Json<RefreshRequest>>,
) -> Result<(CookieJar, Json<ApiResponse<AuthTokensResponse>>), ApiError> {
    let token = jar
        .get("refresh_token")
        .map(|c| c.value().to_string())
        .or_else(|| body.and_then(|Json(req)| req.refresh_token))
        .ok_or_else(|| AppError::unauthorized("Missing refresh token"))?;

    let session = state.session_manager.refresh(&token).await?;

    let jar = set_session_cookies(jar, &state, &session.tokens);

    Ok((
        jar,
        Json(ApiResponse::ok(
            "Token refreshed",
            AuthTokensResponse {
                id: session.user.id,
                access_token: session.tokens.access_token,
                refresh_token: session.tokens.refresh_token,
            },
        )),
    ))
}

/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> Result<(CookieJar, Json<ApiResponse<MessageResponse>>), ApiError> {
    state.session_manager.logout(auth.admin_id).await?;

    let jar = clear_session_cookies(jar);

    Ok((
        jar,
        Json(ApiResponse::ok(
            "Logged out successfully",
            MessageResponse {
                message: "Logged out successfully".to_string(),
            },
        )),
    ))
}

/// Adds the `access_token` and `refresh_token` cookies to the jar.
fn set_session_cookies(jar: CookieJar, state: &AppState, tokens: &TokenPair) -> CookieJar {
    let access = Cookie::build(("access_token", tokens.access_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::minutes(
            state.config.auth.access_ttl_minutes,
        ))
        .build();

    let refresh = Cookie::build(("refresh_token", tokens.refresh_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::days(state.config.auth.refresh_ttl_days))
        .build();

    jar.add(access).add(refresh)
}

/// Removes both session cookies.
fn clear_session_cookies(jar: CookieJar) -> CookieJar {
    let access = Cookie::build(("access_token", "")).path("/").build();
    let refresh = Cookie::build(("refresh_token", "")).path("/").build();
    jar.remove(access).remove(refresh)
}
