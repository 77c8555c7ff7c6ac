//! Session lifecycle manager — register, login, logout, refresh token flows.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use opsboard_core::error::AppError;
use opsboard_database::repositories::user::UserRepository;
use opsboard_entity::user::{CreateUser, User};

use crate::jwt::encoder::TokenPair;
use crate::jwt::{JwtDecoder, JwtEncoder};
use crate::password::PasswordHasher;

/// Result of a successful register, login or refresh.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AuthSession {
    /// Generated token pair.
    pub tokens: TokenPair,
    /// The authenticated user.
    pub user: User,
}

/// Manages the complete session lifecycle.
///
/// Each user holds at most one active refresh token, stored directly on
/// the user row. Register and login overwrite it, refresh rotates it
/// with a compare-and-swap, logout clears it.
#[derive(Clone)]
pub struct SessionManager {
    /// JWT encoder for token generation.
    jwt_encoder: Arc<JwtEncoder>,
    /// JWT decoder for token validation.
    jwt_decoder: Arc<JwtDecoder>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager").finish()
    }
}

impl SessionManager {
    /// Creates a new session manager with all required dependencies.
    pub fn new(
        jwt_encoder: Arc<JwtEncoder>,
        jwt_decoder: Arc<JwtDecoder>,
        user_repo: Arc<UserRepository>,
        password_hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            jwt_encoder,
            jwt_decoder,
            user_repo,
            password_hasher,
        }
    }

    /// Performs the complete registration flow:
    ///
    /// 1. Reject if the email is already taken
    /// 2. Hash the password
    /// 3. Insert the user
    /// 4. Generate a token pair and store its refresh token
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AppError> {
        if self.user_repo.find_by_email(email).await?.is_some() {
            warn!(email = %email, "Registration rejected, email already in use");
            return Err(AppError::conflict("User already exists"));
        }

        let password_hash = self.password_hasher.hash_password(password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                password_hash,
            })
            .await?;

        let session = self.issue_session(user).await?;

        info!(user_id = %session.user.id, "User registered");

        Ok(session)
    }

    /// Performs the complete login flow:
    ///
    /// 1. Look up the user by email (404 if unknown)
    /// 2. Verify the password (401 on mismatch)
    /// 3. Generate a token pair and overwrite the stored refresh token
    ///
    /// Logging in invalidates any previously issued refresh token for
    /// the same user.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let password_valid = self
            .password_hasher
            .verify_password(password, &user.password_hash)?;

        if !password_valid {
            warn!(user_id = %user.id, "Login rejected, invalid password");
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        let session = self.issue_session(user).await?;

        info!(user_id = %session.user.id, "Login successful");

        Ok(session)
    }

    /// Refreshes a session using a valid refresh token.
    ///
    /// 1. Decode and type-check the refresh token
    /// 2. Look up the user from the token subject
    /// 3. Atomically swap the stored token for a fresh one; if the
    ///    stored token no longer matches the presented one, the token
    ///    has been rotated or revoked and the request is rejected
    ///
    /// The compare-and-swap guarantees that of two concurrent refreshes
    /// with the same token, exactly one wins.
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AppError> {
        let claims = self.jwt_decoder.decode_refresh_token(refresh_token)?;
        let user_id = claims.user_id();

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))?;

        let tokens = self.jwt_encoder.generate_token_pair(user.id)?;

        let rotated = self
            .user_repo
            .rotate_refresh_token(user.id, refresh_token, &tokens.refresh_token)
            .await?;

        if !rotated {
            warn!(user_id = %user.id, "Refresh rejected, presented token is stale");
            return Err(AppError::unauthorized("Refresh token has been revoked"));
        }

        info!(user_id = %user.id, "Token refreshed");

        Ok(AuthSession {
            tokens,
            user: User {
                refresh_token: None,
                ..user
            },
        })
    }

    /// Logs a user out by clearing the stored refresh token.
    ///
    /// Idempotent: logging out twice is not an error.
    pub async fn logout(&self, user_id: Uuid) -> Result<(), AppError> {
        self.user_repo.clear_refresh_token(user_id).await?;
        info!(user_id = %user_id, "Logout completed");
        Ok(())
    }

    /// Generates a token pair for the user and stores its refresh
    /// token, replacing whatever was there before.
    async fn issue_session(&self, user: User) -> Result<AuthSession, AppError> {
        let tokens = self.jwt_encoder.generate_token_pair(user.id)?;

        self.user_repo
            .set_refresh_token(user.id, &tokens.refresh_token)
            .await?;

        Ok(AuthSession {
            tokens,
            user: User {
                refresh_token: None,
                ..user
            },
        })
    }
}
