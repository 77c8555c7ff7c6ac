//! # opsboard-auth
//!
//! Authentication for Opsboard.
//!
//! ## Modules
//!
//! - `jwt` — access/refresh token creation and validation with separate
//!   signing secrets per token class
//! - `password` — Argon2id password hashing
//! - `session` — session lifecycle (register, login, logout, refresh with
//!   single-active-token rotation)

pub mod jwt;
pub mod password;
pub mod session;

pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenPair};
pub use password::PasswordHasher;
pub use session::SessionManager;
