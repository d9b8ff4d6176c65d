/// Database access layer
///
/// This module provides:
/// - SQLite connection pooling and embedded migrations
/// - One repository trait per entity, each with a sqlx implementation
pub mod comment_repo;
pub mod marker_repo;
pub mod post_repo;
pub mod user_repo;

pub use comment_repo::{CommentRepository, SqlxCommentRepository};
pub use marker_repo::{MarkerRepository, SqlxMarkerRepository};
pub use post_repo::{PostRepository, SqlxPostRepository};
pub use user_repo::{SqlxUserRepository, UserRepository};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

use crate::config::DatabaseConfig;

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?.create_if_missing(true);

        // Every connection to `:memory:` is a separate database, so keep exactly one alive.
        let pool = if config.url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(config.max_connections)
                .connect_with(options)
                .await?
        };

        tracing::info!(url = %config.url, "SQLite connection pool established");

        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> anyhow::Result<()> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Database migrations completed");
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await.map(|_| ())
    }
}
