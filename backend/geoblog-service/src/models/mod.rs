/// Data models for geoblog-service
///
/// - `User`: registered account (hashed password only)
/// - `Post`: blog post
/// - `Marker`: geo-tagged map pin
/// - `Comment`: comment attached to a marker by id
pub mod comment;
pub mod marker;
pub mod post;
pub mod user;

pub use comment::{Comment, CommentInput};
pub use marker::{LatLng, Marker, MarkerInput};
pub use post::{Post, PostInput};
pub use user::{CurrentUser, NewUser, User};
