//! Task handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use opsboard_core::error::AppError;
use opsboard_entity::task::Task;
use opsboard_service::task::service as task_service;

use crate::dto::request::{CreateTaskRequest, UpdateTaskRequest};
use crate::dto::response::{ApiResponse, ListResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Combined query string for task listing: filters plus pagination.
///
/// Declared flat rather than via `serde(flatten)` — flattening breaks
/// numeric query parameters under `serde_urlencoded`.
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListParams {
    project_id: Option<Uuid>,
    member_id: Option<Uuid>,
    status: Option<opsboard_entity::task::TaskStatus>,
    search: Option<String>,
    start_date: Option<chrono::DateTime<chrono::Utc>>,
    end_date: Option<chrono::DateTime<chrono::Utc>>,
    page: Option<u64>,
    limit: Option<u64>,
}

impl TaskListParams {
    fn split(self) -> (task_service::TaskQuery, PaginationParams) {
        (
            task_service::TaskQuery {
                project_id: self.project_id,
                member_id: self.member_id,
                status: self.status,
                search: self.search,
                start_date: self.start_date,
                end_date: self.end_date,
            },
            PaginationParams {
                page: self.page,
                limit: self.limit,
            },
        )
    }
}

/// GET /api/v1/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<TaskListParams>,
) -> Result<Json<ApiResponse<ListResponse<Task>>>, ApiError> {
    let (query, pagination) = params.split();

    let data = match pagination.page_request() {
        Some(page) => ListResponse::Page(
            state
                .task_service
                .list_tasks_page(auth.context(), query, page)
                .await?,
        ),
        None => ListResponse::Full(state.task_service.list_tasks(auth.context(), query).await?),
    };

    Ok(Json(ApiResponse::ok("Tasks fetched", data)))
}

/// GET /api/v1/tasks/{id}
pub async fn get_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    let task = state.task_service.get_task(auth.context(), id).await?;
    Ok(Json(ApiResponse::ok("Task fetched", task)))
}

/// POST /api/v1/tasks
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTaskRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Task>>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let task = state
        .task_service
        .create_task(
            auth.context(),
            task_service::CreateTaskRequest {
                project_id: req.project_id,
                title: req.title,
                description: req.description,
                deadline: req.deadline,
                assigned_members: req.assigned_members,
                status: req.status,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_status(201, "Task created", task)),
    ))
}

/// PUT /api/v1/tasks/{id}
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateTaskRequest>,
) -> Result<Json<ApiResponse<Task>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let task = state
        .task_service
        .update_task(
            auth.context(),
            id,
            task_service::UpdateTaskRequest {
                title: req.title,
                description: req.description,
                deadline: req.deadline,
                project_id: req.project_id,
                assigned_members: req.assigned_members,
                status: req.status,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok("Task updated", task)))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.task_service.delete_task(auth.context(), id).await?;

    Ok(Json(ApiResponse::ok(
        "Task deleted",
        MessageResponse {
            message: "Task deleted".to_string(),
        },
    )))
}
