//! Integration Tests: account registration and login
//!
//! Coverage:
//! - signup stores a hashed password and the account can log in
//! - wrong password and unknown user are rejected the same way
//! - duplicate username/email is a conflict and stores nothing
//! - invalid signup input is rejected before touching the store

mod common;

use common::test_state;
use geoblog_service::forms::SignupForm;
use geoblog_service::services::AuthService;
use geoblog_service::AppError;

fn signup_form(username: &str, email: &str, password: &str) -> SignupForm {
    SignupForm {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn signup_then_login() {
    let state = test_state().await;
    let auth = AuthService::new(state.users.clone());

    let user = auth
        .signup(&signup_form("alice", "a@x.com", "password1"))
        .await
        .unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.email, "a@x.com");
    assert_ne!(user.password_hash, "password1");

    let logged_in = auth.authenticate("alice", "password1").await.unwrap();
    assert_eq!(logged_in.id, user.id);
}

#[tokio::test]
async fn wrong_password_is_rejected() {
    let state = test_state().await;
    let auth = AuthService::new(state.users.clone());

    auth.signup(&signup_form("alice", "a@x.com", "password1"))
        .await
        .unwrap();

    assert!(matches!(
        auth.authenticate("alice", "password2").await,
        Err(AppError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn unknown_user_is_rejected() {
    let state = test_state().await;
    let auth = AuthService::new(state.users.clone());

    assert!(matches!(
        auth.authenticate("nobody", "password1").await,
        Err(AppError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn duplicate_username_is_a_conflict() {
    let state = test_state().await;
    let auth = AuthService::new(state.users.clone());

    let first = auth
        .signup(&signup_form("alice", "a@x.com", "password1"))
        .await
        .unwrap();

    let err = auth
        .signup(&signup_form("alice", "other@x.com", "password2"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref msg) if msg == "Username already exists"));

    assert!(state.users.find_by_email("other@x.com").await.unwrap().is_none());
    let stored = state.users.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(stored.id, first.id);
    assert_eq!(stored.email, "a@x.com");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let state = test_state().await;
    let auth = AuthService::new(state.users.clone());

    auth.signup(&signup_form("alice", "a@x.com", "password1"))
        .await
        .unwrap();

    let err = auth
        .signup(&signup_form("alicia", "a@x.com", "password1"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref msg) if msg == "Email already exists"));
    assert!(state.users.find_by_username("alicia").await.unwrap().is_none());
}

#[tokio::test]
async fn invalid_signup_reports_every_field() {
    let state = test_state().await;
    let auth = AuthService::new(state.users.clone());

    let err = auth
        .signup(&signup_form("al", "not-an-email", "short"))
        .await
        .unwrap_err();

    match err {
        AppError::Validation(errors) => {
            assert!(!errors.get("username").is_empty());
            assert!(!errors.get("email").is_empty());
            assert!(!errors.get("password").is_empty());
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    assert!(state.users.find_by_username("al").await.unwrap().is_none());
}

#[tokio::test]
async fn username_length_bounds() {
    let state = test_state().await;
    let auth = AuthService::new(state.users.clone());

    assert!(auth
        .signup(&signup_form("abcd", "four@x.com", "password1"))
        .await
        .is_ok());
    assert!(auth
        .signup(&signup_form("abcdefghijklmno", "fifteen@x.com", "password1"))
        .await
        .is_ok());
    assert!(matches!(
        auth.signup(&signup_form("abcdefghijklmnop", "sixteen@x.com", "password1"))
            .await,
        Err(AppError::Validation(_))
    ));
}

#[tokio::test]
async fn session_token_resolves_to_user() {
    let state = test_state().await;
    let auth = AuthService::new(state.users.clone());

    let user = auth
        .signup(&signup_form("alice", "a@x.com", "password1"))
        .await
        .unwrap();

    let current = geoblog_service::models::CurrentUser::from(&user);
    let token = state.sessions.issue_token(&current, false).unwrap();
    let resolved = state.sessions.verify_token(&token).unwrap();

    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.username, "alice");
    assert_eq!(auth.find_user(resolved.id).await.unwrap().username, "alice");
}
