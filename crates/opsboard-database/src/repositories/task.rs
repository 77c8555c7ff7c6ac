//! Task repository implementation.
//!
//! The list query is built dynamically from [`TaskFilter`]; the
//! `admin_id` predicate is always present regardless of filters.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use opsboard_core::error::{AppError, ErrorKind};
use opsboard_core::result::AppResult;
use opsboard_core::types::pagination::{PageRequest, PageResponse};
use opsboard_entity::task::{CreateTask, Task, TaskStatus, UpdateTask};

/// Optional predicates for task listing.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Only tasks of this project.
    pub project_id: Option<Uuid>,
    /// Only tasks this member is assigned to.
    pub member_id: Option<Uuid>,
    /// Only tasks with this status.
    pub status: Option<TaskStatus>,
    /// Case-insensitive substring match over title and description.
    pub search: Option<String>,
    /// Only tasks with a deadline at or after this instant.
    pub start_date: Option<DateTime<Utc>>,
    /// Only tasks with a deadline at or before this instant.
    pub end_date: Option<DateTime<Utc>>,
}

/// Repository for task CRUD and filtered queries.
#[derive(Debug, Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    /// Create a new task repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a task by id, scoped to the owning admin.
    pub async fn find_by_id(&self, admin_id: Uuid, id: Uuid) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>("SELECT * FROM tasks WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find task", e))
    }

    /// List all tasks matching the filter, without pagination.
    pub async fn find_all(&self, admin_id: Uuid, filter: &TaskFilter) -> AppResult<Vec<Task>> {
        let mut query = QueryBuilder::new("SELECT * FROM tasks WHERE admin_id = ");
        query.push_bind(admin_id);
        push_filters(&mut query, filter);
        query.push(" ORDER BY deadline ASC");

        query
            .build_query_as::<Task>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tasks", e))
    }

    /// List tasks matching the filter with pagination.
    pub async fn find_page(
        &self,
        admin_id: Uuid,
        filter: &TaskFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Task>> {
        let mut count_query = QueryBuilder::new("SELECT COUNT(*) FROM tasks WHERE admin_id = ");
        count_query.push_bind(admin_id);
        push_filters(&mut count_query, filter);

        let total: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count tasks", e))?;

        let mut query = QueryBuilder::new("SELECT * FROM tasks WHERE admin_id = ");
        query.push_bind(admin_id);
        push_filters(&mut query, filter);
        query.push(" ORDER BY deadline ASC LIMIT ");
        query.push_bind(page.limit as i64);
        query.push(" OFFSET ");
        query.push_bind(page.offset() as i64);

        let tasks = query
            .build_query_as::<Task>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tasks", e))?;

        Ok(PageResponse::new(tasks, page, total as u64))
    }

    /// Create a new task.
    pub async fn create(&self, data: &CreateTask) -> AppResult<Task> {
        sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (admin_id, project_id, title, description, deadline, \
                                assigned_members, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(data.admin_id)
        .bind(data.project_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.deadline)
        .bind(&data.assigned_members)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create task", e))
    }

    /// Update a task's fields, scoped to the owning admin.
    ///
    /// Unset fields keep their current value.
    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        data: &UpdateTask,
    ) -> AppResult<Option<Task>> {
        sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = COALESCE($3, title), \
                              description = COALESCE($4, description), \
                              deadline = COALESCE($5, deadline), \
                              project_id = COALESCE($6, project_id), \
                              assigned_members = COALESCE($7, assigned_members), \
                              status = COALESCE($8, status), \
                              updated_at = NOW() \
             WHERE id = $1 AND admin_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(admin_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(data.deadline)
        .bind(data.project_id)
        .bind(&data.assigned_members)
        .bind(data.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update task", e))
    }

    /// Delete a task, scoped to the owning admin.
    ///
    /// Returns `false` when no task matched (missing or cross-admin).
    pub async fn delete(&self, admin_id: Uuid, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete task", e))?;

        Ok(result.rows_affected() > 0)
    }
}

/// Append the filter predicates to a query that already carries the
/// `admin_id` condition.
fn push_filters(query: &mut QueryBuilder<'_, Postgres>, filter: &TaskFilter) {
    if let Some(project_id) = filter.project_id {
        query.push(" AND project_id = ");
        query.push_bind(project_id);
    }
    if let Some(member_id) = filter.member_id {
        query.push(" AND ");
        query.push_bind(member_id);
        query.push(" = ANY(assigned_members)");
    }
    if let Some(status) = filter.status {
        query.push(" AND status = ");
        query.push_bind(status);
    }
    if let Some(search) = &filter.search {
        let pattern = format!("%{search}%");
        query.push(" AND (title ILIKE ");
        query.push_bind(pattern.clone());
        query.push(" OR description ILIKE ");
        query.push_bind(pattern);
        query.push(")");
    }
    if let Some(start) = filter.start_date {
        query.push(" AND deadline >= ");
        query.push_bind(start);
    }
    if let Some(end) = filter.end_date {
        query.push(" AND deadline <= ");
        query.push_bind(end);
    }
}
