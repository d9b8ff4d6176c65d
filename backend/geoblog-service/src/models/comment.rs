use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub id: i64,
    /// Id of the marker this comment belongs to
    pub parent_id: i64,
    pub content: String,
    pub author: String,
    pub date_posted: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentInput {
    pub content: String,
    pub author: String,
}
