/// Geoblog Service Library
///
/// A small map-and-blog web application: accounts with session login, blog
/// posts, geo-tagged map markers and comments on markers, rendered as HTML.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures for users, posts, markers, comments
/// - `services`: Account registration and credential checks
/// - `db`: Connection pool, migrations and repositories
/// - `middleware`: Session guard and viewer extraction
/// - `security`: Password hashing and session tokens
/// - `forms`: Form payloads and validation
/// - `views`: HTML rendering
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod security;
pub mod services;
pub mod views;

pub use config::Config;
pub use error::{AppError, Result};

use axum::{middleware::from_fn_with_state, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::db::{
    CommentRepository, Database, MarkerRepository, PostRepository, SqlxCommentRepository,
    SqlxMarkerRepository, SqlxPostRepository, SqlxUserRepository, UserRepository,
};
use crate::handlers::{auth, comments, markers, pages, posts};
use crate::security::SessionKeys;

#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub sessions: Arc<SessionKeys>,
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub markers: Arc<dyn MarkerRepository>,
    pub comments: Arc<dyn CommentRepository>,
}

impl AppState {
    pub fn new(db: Database, config: &Config) -> Self {
        let pool = db.pool.clone();

        Self {
            sessions: Arc::new(SessionKeys::new(&config.session)),
            users: Arc::new(SqlxUserRepository::new(pool.clone())),
            posts: Arc::new(SqlxPostRepository::new(pool.clone())),
            markers: Arc::new(SqlxMarkerRepository::new(pool.clone())),
            comments: Arc::new(SqlxCommentRepository::new(pool)),
            db,
        }
    }
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/logout", get(auth::logout))
        .route("/dashboard", get(pages::dashboard))
        .route(
            "/addmarker/:coords",
            get(markers::add_marker_form).post(markers::add_marker),
        )
        .route_layer(from_fn_with_state(state.clone(), middleware::require_auth));

    Router::new()
        .route("/health", get(pages::health_check))
        .route("/", get(pages::home))
        .route("/index", get(pages::index))
        .route("/plot", get(pages::plot))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/signup", get(auth::signup_form).post(auth::signup))
        .route("/posts", get(posts::list_posts).post(posts::create_post))
        .route("/posts/delete/:id", get(posts::delete_post))
        .route(
            "/posts/edit/:id",
            get(posts::edit_post_form).post(posts::update_post),
        )
        .route(
            "/marker/:id",
            get(markers::show_marker).post(comments::create_comment),
        )
        .route(
            "/markers",
            get(markers::list_markers).post(markers::create_marker),
        )
        .route("/markers/delete/:id", get(markers::delete_marker))
        .route(
            "/markers/edit/:id",
            get(markers::edit_marker_form).post(markers::update_marker),
        )
        .route("/comment/delete/:id", get(comments::delete_comment))
        .route(
            "/comment/edit/:id",
            get(comments::edit_comment_form).post(comments::update_comment),
        )
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
