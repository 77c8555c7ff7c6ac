//! Team member repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use opsboard_core::error::{AppError, ErrorKind};
use opsboard_core::result::AppResult;
use opsboard_core::types::pagination::{PageRequest, PageResponse};
use opsboard_entity::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};

/// Repository for team member CRUD.
#[derive(Debug, Clone)]
pub struct TeamMemberRepository {
    pool: PgPool,
}

impl TeamMemberRepository {
    /// Create a new team member repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a member by id, scoped to the owning admin.
    pub async fn find_by_id(&self, admin_id: Uuid, id: Uuid) -> AppResult<Option<TeamMember>> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members WHERE id = $1 AND admin_id = $2",
        )
        .bind(id)
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find team member", e))
    }

    /// Find a member by email under the given admin (case-insensitive).
    pub async fn find_by_email(&self, admin_id: Uuid, email: &str) -> AppResult<Option<TeamMember>> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members WHERE admin_id = $1 AND LOWER(email) = LOWER($2)",
        )
        .bind(admin_id)
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find team member by email", e)
        })
    }

    /// Count how many of the given member ids exist under the admin.
    ///
    /// Used for all-or-nothing referential checks before writes.
    pub async fn count_existing(&self, admin_id: Uuid, ids: &[Uuid]) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM team_members WHERE admin_id = $1 AND id = ANY($2)",
        )
        .bind(admin_id)
        .bind(ids)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count team members", e)
        })?;
        Ok(count as u64)
    }

    /// List all of an admin's team members without pagination.
    pub async fn find_all(&self, admin_id: Uuid) -> AppResult<Vec<TeamMember>> {
        sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members WHERE admin_id = $1 ORDER BY created_at DESC",
        )
        .bind(admin_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list team members", e))
    }

    /// List an admin's team members with pagination.
    pub async fn find_page(
        &self,
        admin_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<TeamMember>> {
        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM team_members WHERE admin_id = $1")
                .bind(admin_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count team members", e)
                })?;

        let members = sqlx::query_as::<_, TeamMember>(
            "SELECT * FROM team_members WHERE admin_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(admin_id)
        .bind(page.limit as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list team members", e)
        })?;

        Ok(PageResponse::new(members, page, total as u64))
    }

    /// Create a new team member.
    pub async fn create(&self, data: &CreateTeamMember) -> AppResult<TeamMember> {
        sqlx::query_as::<_, TeamMember>(
            "INSERT INTO team_members (admin_id, name, email, designation) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(data.admin_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.designation)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("team_members_admin_email_key") =>
            {
                AppError::conflict("Team member already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create team member", e),
        })
    }

    /// Update a member's fields, scoped to the owning admin.
    pub async fn update(
        &self,
        admin_id: Uuid,
        id: Uuid,
        data: &UpdateTeamMember,
    ) -> AppResult<Option<TeamMember>> {
        sqlx::query_as::<_, TeamMember>(
            "UPDATE team_members SET name = COALESCE($3, name), \
                                     email = COALESCE($4, email), \
                                     designation = COALESCE($5, designation), \
                                     updated_at = NOW() \
             WHERE id = $1 AND admin_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(admin_id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.designation)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update team member", e))
    }

    /// Delete a member and scrub every reference to it, in one transaction.
    ///
    /// The member id is removed from every project team and every task
    /// assignment under the same admin before the row is deleted, so no
    /// dangling reference survives. Returns `false` when no member
    /// matched (missing or cross-admin).
    pub async fn delete_cascade(&self, admin_id: Uuid, id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(
            "UPDATE projects SET team_members = array_remove(team_members, $1), \
                                 updated_at = NOW() \
             WHERE admin_id = $2 AND $1 = ANY(team_members)",
        )
        .bind(id)
        .bind(admin_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to scrub project teams", e)
        })?;

        sqlx::query(
            "UPDATE tasks SET assigned_members = array_remove(assigned_members, $1), \
                              updated_at = NOW() \
             WHERE admin_id = $2 AND $1 = ANY(assigned_members)",
        )
        .bind(id)
        .bind(admin_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to scrub task assignments", e)
        })?;

        let result = sqlx::query("DELETE FROM team_members WHERE id = $1 AND admin_id = $2")
            .bind(id)
            .bind(admin_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete team member", e)
            })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
