/// HTTP handlers for geoblog-service
///
/// - auth: signup, login, logout
/// - pages: home map, dashboard, plot, health
/// - posts: blog post CRUD
/// - markers: marker CRUD and the map-click entry point
/// - comments: marker comment CRUD
pub mod auth;
pub mod comments;
pub mod markers;
pub mod pages;
pub mod posts;
