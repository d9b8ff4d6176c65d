/// Signed session tokens carried in an HttpOnly cookie
///
/// A session is an HS256 JWT bound to the user id. Regular logins get a
/// browser-session cookie whose token expires after `expiry_hours`;
/// remember-me logins get a persistent cookie lasting `remember_days`.
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::SessionConfig;
use crate::error::{AppError, Result};
use crate::models::CurrentUser;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ID
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    fn current_user(&self) -> Option<CurrentUser> {
        Some(CurrentUser {
            id: self.sub.parse().ok()?,
            username: self.username.clone(),
        })
    }
}

pub struct SessionKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    cookie_name: String,
    expiry: Duration,
    remember: Duration,
    secure: bool,
}

impl SessionKeys {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            cookie_name: config.cookie_name.clone(),
            expiry: Duration::hours(config.expiry_hours as i64),
            remember: Duration::days(config.remember_days as i64),
            secure: config.secure_cookie,
        }
    }

    pub fn issue_token(&self, user: &CurrentUser, remember: bool) -> Result<String> {
        let now = Utc::now();
        let lifetime = if remember { self.remember } else { self.expiry };

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: now.timestamp() as usize,
            exp: (now + lifetime).timestamp() as usize,
        };

        self.encode_claims(&claims)
    }

    pub(crate) fn encode_claims(&self, claims: &Claims) -> Result<String> {
        encode(&Header::default(), claims, &self.encoding)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))
    }

    /// Decode a token; any signature, format or expiry failure is `Unauthorized`.
    pub fn verify_token(&self, token: &str) -> Result<CurrentUser> {
        let claims = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| {
                tracing::debug!(error = %e, "rejected session token");
                AppError::Unauthorized
            })?
            .claims;

        claims.current_user().ok_or(AppError::Unauthorized)
    }

    /// Build the cookie that establishes a session for `user`.
    pub fn login_cookie(&self, user: &CurrentUser, remember: bool) -> Result<Cookie<'static>> {
        let token = self.issue_token(user, remember)?;

        let mut builder = Cookie::build((self.cookie_name.clone(), token))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax);

        if remember {
            builder = builder.max_age(time::Duration::seconds(self.remember.num_seconds()));
        }

        Ok(builder.build())
    }

    /// Drop the session cookie from `jar`.
    pub fn clear(&self, jar: CookieJar) -> CookieJar {
        jar.remove(Cookie::build((self.cookie_name.clone(), "")).path("/"))
    }

    /// Resolve the session carried by `jar`, if any.
    pub fn current_user(&self, jar: &CookieJar) -> Result<CurrentUser> {
        let cookie = jar.get(&self.cookie_name).ok_or(AppError::Unauthorized)?;
        self.verify_token(cookie.value())
    }
}
