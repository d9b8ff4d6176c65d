/// Post handlers - blog post CRUD
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::WithRejection;

use crate::error::{AppError, Result};
use crate::models::PostInput;
use crate::views;
use crate::AppState;

pub async fn list_posts(State(state): State<AppState>) -> Result<Html<String>> {
    let posts = state.posts.list().await?;
    Ok(views::posts::posts_page(&posts))
}

pub async fn create_post(
    State(state): State<AppState>,
    WithRejection(Form(input), _): WithRejection<Form<PostInput>, AppError>,
) -> Result<Redirect> {
    let post = state.posts.create(&input).await?;
    tracing::info!(post_id = post.id, "post created");
    Ok(Redirect::to("/posts"))
}

pub async fn edit_post_form(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Html<String>> {
    let post = state.posts.get(id).await?;
    Ok(views::posts::edit_post_page(&post))
}

pub async fn update_post(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Form(input), _): WithRejection<Form<PostInput>, AppError>,
) -> Result<Redirect> {
    state.posts.update(id, &input).await?;
    tracing::info!(post_id = id, "post updated");
    Ok(Redirect::to("/"))
}

pub async fn delete_post(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Redirect> {
    state.posts.delete(id).await?;
    tracing::info!(post_id = id, "post deleted");
    Ok(Redirect::to("/posts"))
}
