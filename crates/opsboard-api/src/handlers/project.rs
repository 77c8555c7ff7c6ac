//! Project handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use opsboard_core::error::AppError;
use opsboard_entity::project::Project;
use opsboard_service::project::service as project_service;

use crate::dto::request::{CreateProjectRequest, UpdateProjectRequest};
use crate::dto::response::{ApiResponse, ListResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<ListResponse<Project>>>, ApiError> {
    let data = match params.page_request() {
        Some(page) => ListResponse::Page(
            state
                .project_service
                .list_projects_page(auth.context(), page)
                .await?,
        ),
        None => ListResponse::Full(state.project_service.list_projects(auth.context()).await?),
    };

    Ok(Json(ApiResponse::ok("Projects fetched", data)))
}

/// GET /api/v1/projects/{id}
pub async fn get_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    let project = state.project_service.get_project(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok("Project fetched", project)))
}

/// POST /api/v1/projects
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Project>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let project = state
        .project_service
        .create_project(
            auth.context(),
            project_service::CreateProjectRequest {
                name: req.name,
                description: req.description,
                team_members: req.team_members,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_status(201, "Project created", project)),
    ))
}

/// PUT /api/v1/projects/{id}
pub async fn update_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<ApiResponse<Project>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let project = state
        .project_service
        .update_project(
            auth.context(),
            id,
            project_service::UpdateProjectRequest {
                name: req.name,
                description: req.description,
                team_members: req.team_members,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Project updated", project)))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .project_service
        .delete_project(auth.context(), id)
        .await?;

    Ok(Json(ApiResponse::ok(
        "Project deleted",
        MessageResponse {
            message: "Project deleted".to_string(),
        },
    )))
}
