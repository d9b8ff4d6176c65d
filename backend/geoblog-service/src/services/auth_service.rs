/// Account registration and credential checks
use std::sync::Arc;

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::forms::{validate_form, SignupForm};
use crate::models::{NewUser, User};
use crate::security::{hash_password, verify_password};

pub struct AuthService {
    users: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Register a new account.
    ///
    /// Fails with `Validation` before touching the store, and with `Conflict`
    /// when the username or email is taken.
    pub async fn signup(&self, form: &SignupForm) -> Result<User> {
        validate_form(form).map_err(AppError::Validation)?;

        if self.users.find_by_username(&form.username).await?.is_some() {
            return Err(AppError::Conflict("Username already exists".to_string()));
        }
        if self.users.find_by_email(&form.email).await?.is_some() {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let password_hash = hash_password(&form.password)?;
        let user = self
            .users
            .create(&NewUser {
                username: form.username.clone(),
                email: form.email.clone(),
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    /// Check a username/password pair.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        let user = match self.users.find_by_username(username).await? {
            Some(user) => user,
            None => {
                tracing::warn!(username = %username, "login for unknown user");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !verify_password(password, &user.password_hash)? {
            tracing::warn!(user_id = user.id, "login with wrong password");
            return Err(AppError::InvalidCredentials);
        }

        Ok(user)
    }

    /// Load the account behind a session, if it still exists.
    pub async fn find_user(&self, id: i64) -> Result<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or(AppError::Unauthorized)
    }
}
