/// Session guard and per-request viewer resolution
use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::convert::Infallible;

use crate::error::Result;
use crate::models::CurrentUser;
use crate::AppState;

/// Reject requests without a valid session before the handler runs.
///
/// On success the user is stored in request extensions for
/// `Extension<CurrentUser>` extraction.
pub async fn require_auth(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let user = state.sessions.current_user(&jar).map_err(|e| {
        tracing::debug!(path = %request.uri().path(), "protected route without session");
        e
    })?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// The optional user of the current request, used by pages that greet the
/// viewer but do not require a login.
#[derive(Debug, Clone, Default)]
pub struct Viewer(pub Option<CurrentUser>);

impl Viewer {
    pub fn display_name(&self) -> &str {
        self.0.as_ref().map(|u| u.username.as_str()).unwrap_or("")
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Viewer {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> std::result::Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(Viewer(Some(user.clone())));
        }

        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Viewer(state.sessions.current_user(&jar).ok()))
    }
}
