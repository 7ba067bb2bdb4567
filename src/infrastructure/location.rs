//! Startup position acquisition.
//!
//! A terminal has no geolocation API, so the home position comes from
//! the `TRACKLOG_POSITION` environment variable as `"lat,lng"`. An
//! unset or malformed value fails acquisition and the application
//! starts in degraded mode, exactly like a denied geolocation prompt.

use crate::domain::{Coordinates, DomainError, DomainResult, LocationProvider};

pub const POSITION_VAR: &str = "TRACKLOG_POSITION";

/// Reads the current position from an environment variable once at
/// startup.
pub struct EnvLocationProvider {
    var: String,
}

impl EnvLocationProvider {
    pub fn new() -> Self {
        Self::with_var(POSITION_VAR)
    }

    pub fn with_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvLocationProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationProvider for EnvLocationProvider {
    fn current_position(&self) -> DomainResult<Coordinates> {
        match std::env::var(&self.var) {
            Ok(raw) => parse_position(&raw),
            Err(_) => Err(DomainError::LocationAcquisition(format!(
                "{} is not set (expected \"lat,lng\")",
                self.var
            ))),
        }
    }
}

/// Parses `"lat,lng"` into coordinates, requiring two finite numbers
/// in valid ranges.
fn parse_position(raw: &str) -> DomainResult<Coordinates> {
    let invalid = || {
        DomainError::LocationAcquisition(format!(
            "invalid position \"{}\" (expected \"lat,lng\")",
            raw
        ))
    };

    let mut parts = raw.splitn(2, ',');
    let lat: f64 = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .ok_or_else(invalid)?;
    let lng: f64 = parts
        .next()
        .and_then(|p| p.trim().parse().ok())
        .ok_or_else(invalid)?;

    if !lat.is_finite() || !lng.is_finite() || lat.abs() > 90.0 || lng.abs() > 180.0 {
        return Err(invalid());
    }

    Ok(Coordinates::new(lat, lng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_position() {
        let coords = parse_position("51.5, -0.09").unwrap();
        assert_eq!(coords, Coordinates::new(51.5, -0.09));

        let coords = parse_position("-33.86,151.2").unwrap();
        assert_eq!(coords, Coordinates::new(-33.86, 151.2));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for raw in ["", "51.5", "north,west", "51.5;-0.09", "NaN,0"] {
            assert!(matches!(
                parse_position(raw),
                Err(DomainError::LocationAcquisition(_))
            ));
        }
    }

    #[test]
    fn test_parse_rejects_out_of_range_coordinates() {
        assert!(parse_position("91.0,0.0").is_err());
        assert!(parse_position("0.0,181.0").is_err());
    }

    #[test]
    fn test_unset_variable_fails_acquisition() {
        let provider = EnvLocationProvider::with_var("TRACKLOG_TEST_UNSET_VAR");
        assert!(matches!(
            provider.current_position(),
            Err(DomainError::LocationAcquisition(_))
        ));
    }
}
