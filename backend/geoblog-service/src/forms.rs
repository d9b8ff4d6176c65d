/// Form payloads and their validation
///
/// Validation runs before any store access and yields a [`FieldErrors`]
/// value that the auth pages render next to the offending inputs.
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use validator::{Validate, ValidationErrors};

use crate::models::{LatLng, MarkerInput};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupForm {
    #[validate(
        email(message = "Invalid email"),
        length(max = 50, message = "Email must be at most 50 characters")
    )]
    pub email: String,
    #[validate(length(min = 4, max = 15, message = "Username must be between 4 and 15 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 80, message = "Password must be between 8 and 80 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 4, max = 15, message = "Username must be between 4 and 15 characters"))]
    pub username: String,
    #[validate(length(min = 8, max = 80, message = "Password must be between 8 and 80 characters"))]
    pub password: String,
    /// Checkbox; present (any value) when ticked
    #[serde(default)]
    pub remember: Option<String>,
}

impl LoginForm {
    pub fn remember(&self) -> bool {
        self.remember.is_some()
    }
}

/// Marker form posted from the map-click page. The coordinates normally come
/// prefilled from the path, but edited form values take precedence.
#[derive(Debug, Clone, Deserialize)]
pub struct AddMarkerForm {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl AddMarkerForm {
    pub fn into_input(self, coords: LatLng) -> MarkerInput {
        MarkerInput {
            title: self.title,
            content: self.content,
            author: self.author,
            latitude: self.latitude.unwrap_or(coords.lat),
            longitude: self.longitude.unwrap_or(coords.lng),
        }
    }
}

/// Validation messages keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                out.add(field.to_string(), message);
            }
        }
        out
    }
}

/// Validate a form, collecting every failing field.
pub fn validate_form<T: Validate>(form: &T) -> Result<(), FieldErrors> {
    form.validate().map_err(FieldErrors::from)
}
