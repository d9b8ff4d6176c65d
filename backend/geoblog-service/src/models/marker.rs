use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, FromRow)]
pub struct Marker {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub date_posted: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Marker {
    pub fn coordinates(&self) -> LatLng {
        LatLng {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

/// Submitted marker fields, used for both create and edit.
///
/// Coordinates must be finite but are not range-checked.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MarkerInput {
    pub title: String,
    pub content: String,
    pub author: String,
    #[validate(custom(function = "validate_finite", message = "Latitude must be a number"))]
    pub latitude: f64,
    #[validate(custom(function = "validate_finite", message = "Longitude must be a number"))]
    pub longitude: f64,
}

/// `NaN` and infinities parse as `f64` but cannot be stored.
pub fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite"))
    }
}

/// Coordinate pair carried in the map-click path segment `LatLng(<lat>&<lng>)`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("expected `LatLng(<lat>&<lng>)`, got `{0}`")]
pub struct ParseLatLngError(String);

impl FromStr for LatLng {
    type Err = ParseLatLngError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLatLngError(s.to_string());

        let inner = s
            .trim()
            .strip_prefix("LatLng(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let (lat, lng) = inner.split_once('&').ok_or_else(err)?;

        let coordinate = |raw: &str| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(err)
        };

        Ok(LatLng {
            lat: coordinate(lat)?,
            lng: coordinate(lng)?,
        })
    }
}

impl TryFrom<String> for LatLng {
    type Error = ParseLatLngError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatLng({}&{})", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_map_click_segment() {
        let coords: LatLng = "LatLng(40.0&-73.0)".parse().unwrap();
        assert_eq!(coords, LatLng { lat: 40.0, lng: -73.0 });
    }

    #[test]
    fn accepts_out_of_range_values() {
        let coords: LatLng = "LatLng(123.5&-400)".parse().unwrap();
        assert_eq!(coords.lat, 123.5);
        assert_eq!(coords.lng, -400.0);
    }

    #[test]
    fn rejects_malformed_segments() {
        assert!("40.0&-73.0".parse::<LatLng>().is_err());
        assert!("LatLng(40.0,-73.0)".parse::<LatLng>().is_err());
        assert!("LatLng(north&-73.0)".parse::<LatLng>().is_err());
        assert!("LatLng(40.0&-73.0".parse::<LatLng>().is_err());
    }

    #[test]
    fn rejects_non_finite_values() {
        assert!("LatLng(NaN&1)".parse::<LatLng>().is_err());
        assert!("LatLng(1&inf)".parse::<LatLng>().is_err());
        assert!("LatLng(-infinity&1)".parse::<LatLng>().is_err());
    }

    #[test]
    fn marker_input_requires_finite_coordinates() {
        let input = |latitude: f64, longitude: f64| MarkerInput {
            title: "Cafe".into(),
            content: "coffee".into(),
            author: "bob".into(),
            latitude,
            longitude,
        };

        assert!(input(123.0, -540.5).validate().is_ok());

        let errors = input(f64::NAN, f64::INFINITY).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("latitude"));
        assert!(fields.contains_key("longitude"));
    }

    #[test]
    fn display_matches_route_format() {
        let coords = LatLng { lat: 51.5, lng: -0.25 };
        assert_eq!(coords.to_string(), "LatLng(51.5&-0.25)");
        assert_eq!(coords.to_string().parse::<LatLng>().unwrap(), coords);
    }
}
