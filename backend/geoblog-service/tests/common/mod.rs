//! Shared fixtures: an in-memory SQLite database with migrations applied.
#![allow(dead_code)]

use geoblog_service::config::{DatabaseConfig, ServerConfig, SessionConfig};
use geoblog_service::db::Database;
use geoblog_service::models::{CommentInput, MarkerInput, PostInput};
use geoblog_service::{AppState, Config};

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            env: "test".to_string(),
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        },
        session: SessionConfig {
            secret: "test-secret".to_string(),
            cookie_name: "geoblog_session".to_string(),
            expiry_hours: 1,
            remember_days: 30,
            secure_cookie: false,
        },
    }
}

/// Fresh database per test
pub async fn setup_test_db() -> Database {
    let db = Database::connect(&test_config().database)
        .await
        .expect("connect to in-memory sqlite");
    db.run_migrations().await.expect("run migrations");
    db
}

pub async fn test_state() -> AppState {
    AppState::new(setup_test_db().await, &test_config())
}

pub fn post_input(title: &str, content: &str, author: &str) -> PostInput {
    PostInput {
        title: title.to_string(),
        content: content.to_string(),
        author: author.to_string(),
    }
}

pub fn marker_input(title: &str, latitude: f64, longitude: f64) -> MarkerInput {
    MarkerInput {
        title: title.to_string(),
        content: format!("{} description", title),
        author: "bob".to_string(),
        latitude,
        longitude,
    }
}

pub fn comment_input(content: &str, author: &str) -> CommentInput {
    CommentInput {
        content: content.to_string(),
        author: author.to_string(),
    }
}
