/// HTTP middleware for geoblog-service
pub mod auth;

pub use auth::{require_auth, Viewer};
