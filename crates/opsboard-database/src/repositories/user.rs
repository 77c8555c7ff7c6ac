//! User repository implementation.
//!
//! Besides plain CRUD, this repository owns the refresh-token column:
//! `set_refresh_token` overwrites unconditionally (login/register),
//! `rotate_refresh_token` is a compare-and-swap (refresh), and
//! `clear_refresh_token` nulls it (logout).

use sqlx::PgPool;
use uuid::Uuid;

use opsboard_core::error::{AppError, ErrorKind};
use opsboard_core::result::AppResult;
use opsboard_entity::user::{CreateUser, User};

/// Repository for user accounts and their refresh-token state.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, password_hash) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("User already exists")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Overwrite the stored refresh token unconditionally.
    ///
    /// Used on login and registration; any previously issued refresh
    /// token becomes stale the instant this commits.
    pub async fn set_refresh_token(&self, user_id: Uuid, token: &str) -> AppResult<()> {
        let result =
            sqlx::query("UPDATE users SET refresh_token = $2, updated_at = NOW() WHERE id = $1")
                .bind(user_id)
                .bind(token)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to store refresh token", e)
                })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {user_id} not found")));
        }
        Ok(())
    }

    /// Atomically replace the stored refresh token, but only if it still
    /// equals `current`.
    ///
    /// Returns `false` when the stored value differs (the presented token
    /// was rotated out or cleared by logout). This single statement is
    /// what makes concurrent refreshes strict single-writer.
    pub async fn rotate_refresh_token(
        &self,
        user_id: Uuid,
        current: &str,
        next: &str,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE users SET refresh_token = $3, updated_at = NOW() \
             WHERE id = $1 AND refresh_token = $2",
        )
        .bind(user_id)
        .bind(current)
        .bind(next)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to rotate refresh token", e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    /// Null out the stored refresh token (logout).
    pub async fn clear_refresh_token(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE users SET refresh_token = NULL, updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear refresh token", e)
            })?;
        Ok(())
    }
}
