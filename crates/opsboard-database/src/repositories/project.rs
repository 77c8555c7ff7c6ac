//! Project repository implementation.
//!
//! Every query binds the owning admin's id; a cross-admin lookup matches
//! zero rows and is indistinguishable from a missing project.

use sqlx::PgPool;
use uuid::Uuid;

use opsboard_core::error::{AppError, ErrorKind};
use opsboard_core::result::AppResult;
use opsboard_core::types::pagination::{PageRequest, PageResponse};
use opsboard_entity::project::{CreateProject, Project, UpdateProject};

/// Repository for project CRUD and membership queries.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a project by id, scoped to the owning admin.
    pub async fn find_by_id(&self, admin_id: Uuid, id: Uuid) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find project", e))
    }

    /// List all of an admin's projects without pagination.
    pub async fn find_all(&self, admin_id: Uuid) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE admin_id = $1 ORDER BY created_at DESC",
        )
        .bind(admin_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// List an admin's projects with pagination.
    pub async fn find_page(
        &self,
        admin_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Project>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects WHERE admin_id = $1")
            .bind(admin_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count projects", e)
            })?;

        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE admin_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(admin_id)
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))?;

        Ok(PageResponse::new(projects, page, total as u64))
    }

    /// Create a new project.
    pub async fn create(&self, data: &CreateProject) -> AppResult<Project> {
        sqlx::query_as::<_, Project>(
            "INSERT INTO projects (admin_id, name, description, team_members) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.admin_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.team_members)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create project", e))
    }

    /// Update a project's fields, scoped to the owning admin.
    ///
    /// Unset fields keep their current value.
    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        data: &UpdateProject,
    ) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>(
            "UPDATE projects SET name = COALESCE($3, name), \
                                 description = COALESCE($4, description), \
                                 team_members = COALESCE($5, team_members), \
                                 updated_at = NOW() \
             WHERE id = $1 AND admin_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(admin_id)
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.team_members)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update project", e))
    }

    /// Delete a project and all tasks referencing it, in one transaction.
    ///
    /// Returns `false` when no project matched (missing or cross-admin).
    pub async fn delete_cascade(&self, admin_id: Uuid, id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM tasks WHERE project_id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete project tasks", e)
            })?;

        let result = sqlx::query("DELETE FROM projects WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete project", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
