//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use opsboard_auth::jwt::decoder::JwtDecoder;
use opsboard_auth::jwt::encoder::JwtEncoder;
use opsboard_auth::password::hasher::PasswordHasher;
use opsboard_auth::session::manager::SessionManager;
use opsboard_core::config::AppConfig;

use opsboard_database::repositories::project::ProjectRepository;
use opsboard_database::repositories::task::TaskRepository;
use opsboard_database::repositories::team_member::TeamMemberRepository;
use opsboard_database::repositories::user::UserRepository;

use opsboard_service::project::service::ProjectService;
use opsboard_service::task::service::TaskService;
use opsboard_service::team_member::service::TeamMemberService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Session lifecycle manager
    pub session_manager: Arc<SessionManager>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Project repository
    pub project_repo: Arc<ProjectRepository>,
    /// Task repository
    pub task_repo: Arc<TaskRepository>,
    /// Team member repository
    pub member_repo: Arc<TeamMemberRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Project service
    pub project_service: Arc<ProjectService>,
    /// Task service
    pub task_service: Arc<TaskService>,
    /// Team member service
    pub member_service: Arc<TeamMemberService>,
}

impl AppState {
    /// Builds the full dependency graph from a configuration and pool.
    pub fn build(config: AppConfig, db_pool: PgPool) -> Self {
        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let project_repo = Arc::new(ProjectRepository::new(db_pool.clone()));
        let task_repo = Arc::new(TaskRepository::new(db_pool.clone()));
        let member_repo = Arc::new(TeamMemberRepository::new(db_pool.clone()));

        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let session_manager = Arc::new(SessionManager::new(
            Arc::clone(&jwt_encoder),
            Arc::clone(&jwt_decoder),
            Arc::clone(&user_repo),
            Arc::clone(&password_hasher),
        ));

        let project_service = Arc::new(ProjectService::new(
            Arc::clone(&project_repo),
            Arc::clone(&member_repo),
        ));
        let task_service = Arc::new(TaskService::new(
            Arc::clone(&task_repo),
            Arc::clone(&project_repo),
            Arc::clone(&member_repo),
        ));
        let member_service = Arc::new(TeamMemberService::new(Arc::clone(&member_repo)));

        Self {
            config: Arc::new(config),
            db_pool,
            jwt_encoder,
            jwt_decoder,
            password_hasher,
            session_manager,
            user_repo,
            project_repo,
            task_repo,
            member_repo,
            project_service,
            task_service,
            member_service,
        }
    }
}
