//! Session lifecycle — register, login, refresh and logout flows.

pub mod manager;

pub use manager::{AuthSession, SessionManager};
