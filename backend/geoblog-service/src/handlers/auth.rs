/// Auth handlers - signup, login, logout
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::{cookie::CookieJar, WithRejection};

use crate::error::{AppError, Result};
use crate::forms::{validate_form, FieldErrors, LoginForm, SignupForm};
use crate::models::CurrentUser;
use crate::services::AuthService;
use crate::views;
use crate::AppState;

pub async fn login_form() -> Html<String> {
    views::auth::login_page("", &FieldErrors::new())
}

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Form(form), _): WithRejection<Form<LoginForm>, AppError>,
) -> Result<Response> {
    if let Err(errors) = validate_form(&form) {
        return Ok((
            StatusCode::BAD_REQUEST,
            views::auth::login_page(&form.username, &errors),
        )
            .into_response());
    }

    let user = AuthService::new(state.users.clone())
        .authenticate(&form.username, &form.password)
        .await?;

    let cookie = state
        .sessions
        .login_cookie(&CurrentUser::from(&user), form.remember())?;

    tracing::info!(user_id = user.id, remember = form.remember(), "user logged in");

    Ok((jar.add(cookie), Redirect::to("/")).into_response())
}

pub async fn signup_form() -> Html<String> {
    views::auth::signup_page("", "", &FieldErrors::new(), None)
}

/// Register and log the new account in with a browser-session cookie.
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Form(form), _): WithRejection<Form<SignupForm>, AppError>,
) -> Result<Response> {
    let rerender = |status: StatusCode, errors: &FieldErrors, notice: Option<&str>| {
        (
            status,
            views::auth::signup_page(&form.username, &form.email, errors, notice),
        )
            .into_response()
    };

    let user = match AuthService::new(state.users.clone()).signup(&form).await {
        Ok(user) => user,
        Err(AppError::Validation(errors)) => {
            return Ok(rerender(StatusCode::BAD_REQUEST, &errors, None))
        }
        Err(AppError::Conflict(msg)) => {
            return Ok(rerender(StatusCode::CONFLICT, &FieldErrors::new(), Some(&msg)))
        }
        Err(e) => return Err(e),
    };

    let cookie = state
        .sessions
        .login_cookie(&CurrentUser::from(&user), false)?;

    Ok((jar.add(cookie), Redirect::to("/")).into_response())
}

pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    (state.sessions.clear(jar), Redirect::to("/"))
}
