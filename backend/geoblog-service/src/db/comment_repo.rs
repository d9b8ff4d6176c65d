/// Marker comment persistence
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::{Comment, CommentInput};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Attach a comment to `parent_id`. The marker is not required to exist.
    async fn create(&self, parent_id: i64, input: &CommentInput) -> Result<Comment>;

    /// Comments of one marker, in storage order.
    async fn list_by_parent(&self, parent_id: i64) -> Result<Vec<Comment>>;

    async fn get(&self, id: i64) -> Result<Comment>;

    async fn update(&self, id: i64, input: &CommentInput) -> Result<Comment>;

    /// Delete a comment, returning the marker id it belonged to.
    async fn delete(&self, id: i64) -> Result<i64>;
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Comment {} not found", id))
}

#[derive(Clone)]
pub struct SqlxCommentRepository {
    pool: SqlitePool,
}

impl SqlxCommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for SqlxCommentRepository {
    async fn create(&self, parent_id: i64, input: &CommentInput) -> Result<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (parent_id, content, author, date_posted)
            VALUES (?, ?, ?, ?)
            RETURNING id, parent_id, content, author, date_posted
            "#,
        )
        .bind(parent_id)
        .bind(&input.content)
        .bind(&input.author)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(comment)
    }

    async fn list_by_parent(&self, parent_id: i64) -> Result<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, parent_id, content, author, date_posted
            FROM comments
            WHERE parent_id = ?
            ORDER BY id ASC
            "#,
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(comments)
    }

    async fn get(&self, id: i64) -> Result<Comment> {
        sqlx::query_as::<_, Comment>(
            "SELECT id, parent_id, content, author, date_posted FROM comments WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: i64, input: &CommentInput) -> Result<Comment> {
        sqlx::query_as::<_, Comment>(
            r#"
            UPDATE comments
            SET content = ?, author = ?
            WHERE id = ?
            RETURNING id, parent_id, content, author, date_posted
            "#,
        )
        .bind(&input.content)
        .bind(&input.author)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<i64> {
        // RETURNING reads parent_id in the same statement that removes the row
        let parent_id: Option<i64> =
            sqlx::query_scalar("DELETE FROM comments WHERE id = ? RETURNING parent_id")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        parent_id.ok_or_else(|| not_found(id))
    }
}
