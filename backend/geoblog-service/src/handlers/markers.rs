/// Marker handlers - marker CRUD and the map-click entry point
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use axum_extra::extract::WithRejection;

use crate::error::{AppError, Result};
use crate::forms::{validate_form, AddMarkerForm};
use crate::models::{LatLng, MarkerInput};
use crate::views;
use crate::AppState;

pub async fn list_markers(State(state): State<AppState>) -> Result<Html<String>> {
    let markers = state.markers.list().await?;
    Ok(views::markers::markers_page(&markers))
}

/// Create from the generic form; coordinates are form fields.
pub async fn create_marker(
    State(state): State<AppState>,
    WithRejection(Form(input), _): WithRejection<Form<MarkerInput>, AppError>,
) -> Result<Redirect> {
    validate_form(&input).map_err(AppError::Validation)?;

    let marker = state.markers.create(&input).await?;
    tracing::info!(marker_id = marker.id, "marker created");
    Ok(Redirect::to("/markers"))
}

/// Marker page with its comments and a comment form.
pub async fn show_marker(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Html<String>> {
    let marker = state.markers.get(id).await?;
    let comments = state.comments.list_by_parent(id).await?;
    Ok(views::markers::marker_page(&marker, &comments))
}

pub async fn add_marker_form(
    WithRejection(Path(coords), _): WithRejection<Path<LatLng>, AppError>,
) -> Html<String> {
    views::markers::add_marker_page(coords)
}

/// Create from a map click; coordinates come from the path unless the form overrides them.
pub async fn add_marker(
    State(state): State<AppState>,
    WithRejection(Path(coords), _): WithRejection<Path<LatLng>, AppError>,
    WithRejection(Form(form), _): WithRejection<Form<AddMarkerForm>, AppError>,
) -> Result<Redirect> {
    let input = form.into_input(coords);
    validate_form(&input).map_err(AppError::Validation)?;

    let marker = state.markers.create(&input).await?;
    tracing::info!(
        marker_id = marker.id,
        lat = marker.latitude,
        lng = marker.longitude,
        "marker added from map"
    );
    Ok(Redirect::to("/"))
}

pub async fn edit_marker_form(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Html<String>> {
    let marker = state.markers.get(id).await?;
    Ok(views::markers::edit_marker_page(&marker))
}

pub async fn update_marker(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
    WithRejection(Form(input), _): WithRejection<Form<MarkerInput>, AppError>,
) -> Result<Redirect> {
    validate_form(&input).map_err(AppError::Validation)?;

    state.markers.update(id, &input).await?;
    tracing::info!(marker_id = id, "marker updated");
    Ok(Redirect::to("/"))
}

/// Delete the marker row only; its comments stay listed under its id.
pub async fn delete_marker(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i64>, AppError>,
) -> Result<Redirect> {
    state.markers.delete(id).await?;
    tracing::info!(marker_id = id, "marker deleted");
    Ok(Redirect::to("/markers"))
}
