//! Team member handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use opsboard_core::error::AppError;
use opsboard_entity::team_member::TeamMember;
use opsboard_service::team_member::service as member_service;

use crate::dto::request::{CreateTeamMemberRequest, UpdateTeamMemberRequest};
use crate::dto::response::{ApiResponse, ListResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/v1/teams
pub async fn list_members(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<ListResponse<TeamMember>>>, ApiError> {
    let data = match params.page_request() {
        Some(page) => ListResponse::Page(
            state
                .member_service
                .list_members_page(auth.context(), page)
                .await?,
        ),
        None => ListResponse::Full(state.member_service.list_members(auth.context()).await?),
    };

    Ok(Json(ApiResponse::ok("Team members fetched", data)))
}

/// GET /api/v1/teams/{id}
pub async fn get_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TeamMember>>, ApiError> {
    let member = state.member_service.get_member(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok("Team member fetched", member)))
}

/// POST /api/v1/teams
pub async fn create_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTeamMemberRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TeamMember>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let member = state
        .member_service
        .create_member(
            auth.context(),
            member_service::CreateTeamMemberRequest {
                name: req.name,
                email: req.email,
                designation: req.designation,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_status(201, "Team member created", member)),
    ))
}

/// PUT /api/v1/teams/{id}
pub async fn update_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTeamMemberRequest>,
) -> Result<Json<ApiResponse<TeamMember>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let member = state
        .member_service
        .update_member(
            auth.context(),
            id,
            member_service::UpdateTeamMemberRequest {
                name: req.name,
                email: req.email,
                designation: req.designation,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Team member updated", member)))
}

/// DELETE /api/v1/teams/{id}
pub async fn delete_member(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .member_service
        .delete_member(auth.context(), id)
        .await?;

    Ok(Json(ApiResponse::ok(
        "Team member deleted",
        MessageResponse {
            message: "Team member deleted".to_string(),
        },
    )))
}
