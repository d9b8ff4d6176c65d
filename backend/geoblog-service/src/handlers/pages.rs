/// Page handlers - map home, dashboard, plot, health
use axum::{extract::State, http::StatusCode, response::Html, Extension, Json};
use serde_json::{json, Value};

use crate::error::Result;
use crate::middleware::Viewer;
use crate::models::CurrentUser;
use crate::services::AuthService;
use crate::views;
use crate::AppState;

/// Map page listing every marker, greeting the viewer when logged in.
pub async fn home(State(state): State<AppState>, viewer: Viewer) -> Result<Html<String>> {
    let markers = state.markers.list().await?;
    Ok(views::pages::home_page(&markers, viewer.display_name()))
}

pub async fn index() -> &'static str {
    "/index"
}

pub async fn plot(viewer: Viewer) -> Html<String> {
    views::pages::plot_page(viewer.display_name())
}

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<Html<String>> {
    let user = AuthService::new(state.users.clone())
        .find_user(current_user.id)
        .await?;

    Ok(views::pages::dashboard_page(&user.username))
}

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "ok",
                "service": "geoblog-service",
                "version": env!("CARGO_PKG_VERSION"),
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "error": format!("Database connection failed: {}", e),
                    "service": "geoblog-service",
                })),
            )
        }
    }
}
