/// Blog post persistence
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::{Post, PostInput};

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, input: &PostInput) -> Result<Post>;

    /// All posts, oldest first.
    async fn list(&self) -> Result<Vec<Post>>;

    async fn get(&self, id: i64) -> Result<Post>;

    /// Replace title, content and author. `date_posted` is kept.
    async fn update(&self, id: i64, input: &PostInput) -> Result<Post>;

    async fn delete(&self, id: i64) -> Result<()>;
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Post {} not found", id))
}

#[derive(Clone)]
pub struct SqlxPostRepository {
    pool: SqlitePool,
}

impl SqlxPostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    async fn create(&self, input: &PostInput) -> Result<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO blog_posts (title, content, author, date_posted)
            VALUES (?, ?, ?, ?)
            RETURNING id, title, content, author, date_posted
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.author)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>> {
        let posts = sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, author, date_posted
            FROM blog_posts
            ORDER BY date_posted ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    async fn get(&self, id: i64) -> Result<Post> {
        sqlx::query_as::<_, Post>(
            "SELECT id, title, content, author, date_posted FROM blog_posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: i64, input: &PostInput) -> Result<Post> {
        sqlx::query_as::<_, Post>(
            r#"
            UPDATE blog_posts
            SET title = ?, content = ?, author = ?
            WHERE id = ?
            RETURNING id, title, content, author, date_posted
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.author)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}
