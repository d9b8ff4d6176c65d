/// Map marker persistence
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::{Marker, MarkerInput};

#[async_trait]
pub trait MarkerRepository: Send + Sync {
    async fn create(&self, input: &MarkerInput) -> Result<Marker>;

    /// All markers, oldest first.
    async fn list(&self) -> Result<Vec<Marker>>;

    async fn get(&self, id: i64) -> Result<Marker>;

    /// Replace every mutable field. `date_posted` is kept.
    async fn update(&self, id: i64, input: &MarkerInput) -> Result<Marker>;

    /// Delete the marker row. Comments keep their `parent_id`.
    async fn delete(&self, id: i64) -> Result<()>;
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Marker {} not found", id))
}

#[derive(Clone)]
pub struct SqlxMarkerRepository {
    pool: SqlitePool,
}

impl SqlxMarkerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MarkerRepository for SqlxMarkerRepository {
    async fn create(&self, input: &MarkerInput) -> Result<Marker> {
        let marker = sqlx::query_as::<_, Marker>(
            r#"
            INSERT INTO markers (title, content, author, date_posted, latitude, longitude)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, title, content, author, date_posted, latitude, longitude
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.author)
        .bind(Utc::now())
        .bind(input.latitude)
        .bind(input.longitude)
        .fetch_one(&self.pool)
        .await?;

        Ok(marker)
    }

    async fn list(&self) -> Result<Vec<Marker>> {
        let markers = sqlx::query_as::<_, Marker>(
            r#"
            SELECT id, title, content, author, date_posted, latitude, longitude
            FROM markers
            ORDER BY date_posted ASC, id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(markers)
    }

    async fn get(&self, id: i64) -> Result<Marker> {
        sqlx::query_as::<_, Marker>(
            r#"
            SELECT id, title, content, author, date_posted, latitude, longitude
            FROM markers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn update(&self, id: i64, input: &MarkerInput) -> Result<Marker> {
        sqlx::query_as::<_, Marker>(
            r#"
            UPDATE markers
            SET title = ?, content = ?, author = ?, latitude = ?, longitude = ?
            WHERE id = ?
            RETURNING id, title, content, author, date_posted, latitude, longitude
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(&input.author)
        .bind(input.latitude)
        .bind(input.longitude)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM markers WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}
