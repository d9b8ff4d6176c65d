/// Comment handlers - comments attached to markers
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::WithRejection;

use crate::error::{AppError, Result};
use crate::models::CommentInput;
use crate::views;
use crate::AppState;

fn marker_url(parent_id: i64) -> String {
    format!("/marker/{}", parent_id)
}

/// Add a comment to marker `parent_id`; the marker is not looked up.
pub async fn create_comment(
    State(state): State<AppState>,
    WithRejection(Path(parent_id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Form(input), _): WithRejection<Form<CommentInput>, AppError>,
) -> Result<Redirect> {
    let comment = state.comments.create(parent_id, &input).await?;
    tracing::info!(comment_id = comment.id, parent_id, "comment created");
    Ok(Redirect::to(&marker_url(parent_id)))
}

pub async fn edit_comment_form(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Html<String>> {
    let comment = state.comments.get(id).await?;
    Ok(views::markers::edit_comment_page(&comment))
}

pub async fn update_comment(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Form(input), _): WithRejection<Form<CommentInput>, AppError>,
) -> Result<Redirect> {
    let comment = state.comments.update(id, &input).await?;
    tracing::info!(comment_id = id, "comment updated");
    Ok(Redirect::to(&marker_url(comment.parent_id)))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Redirect> {
    let parent_id = state.comments.delete(id).await?;
    tracing::info!(comment_id = id, parent_id, "comment deleted");
    Ok(Redirect::to(&marker_url(parent_id)))
}
