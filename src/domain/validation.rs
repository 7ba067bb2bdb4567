//! Numeric form-input validation.
//!
//! Raw field text is coerced to `f64` before it gets here (unparseable
//! input becomes NaN, matching the source form's numeric coercion), so
//! validation only has to reason about numbers. A workout may only be
//! constructed after the matching entry contract has passed.

use super::errors::{DomainError, DomainResult};

/// True iff every value is a finite number (rejects NaN and ±infinity).
pub fn is_finite_set(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// True iff every value is strictly greater than zero.
pub fn is_positive_set(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

/// Entry contract for running workouts: distance, duration and cadence
/// must all be finite and positive.
pub fn validate_running(distance_km: f64, duration_min: f64, cadence_spm: f64) -> DomainResult<()> {
    let mut fields = Vec::new();
    for (name, value) in [
        ("distance", distance_km),
        ("duration", duration_min),
        ("cadence", cadence_spm),
    ] {
        if !is_finite_set(&[value]) || !is_positive_set(&[value]) {
            fields.push(name.to_string());
        }
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation { fields })
    }
}

/// Entry contract for cycling workouts: distance, duration and elevation
/// must be finite, but only distance and duration must be positive.
///
/// Elevation gain positivity is intentionally not checked. The original
/// tracker never validated it, and a descent-only ride makes a negative
/// gain at least arguable, so the asymmetry is kept as documented
/// behavior rather than silently fixed.
pub fn validate_cycling(
    distance_km: f64,
    duration_min: f64,
    elevation_gain_m: f64,
) -> DomainResult<()> {
    let mut fields = Vec::new();
    for (name, value, must_be_positive) in [
        ("distance", distance_km, true),
        ("duration", duration_min, true),
        ("elevation", elevation_gain_m, false),
    ] {
        if !is_finite_set(&[value]) || (must_be_positive && !is_positive_set(&[value])) {
            fields.push(name.to_string());
        }
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(DomainError::Validation { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_set() {
        assert!(is_finite_set(&[5.0, 30.0, 178.0]));
        assert!(is_finite_set(&[]));
        assert!(!is_finite_set(&[f64::NAN]));
        assert!(!is_finite_set(&[f64::INFINITY]));
        assert!(!is_finite_set(&[f64::NEG_INFINITY]));
        assert!(!is_finite_set(&[1.0, f64::NAN, 3.0]));
    }

    #[test]
    fn test_positive_set() {
        assert!(is_positive_set(&[0.1, 5.0]));
        assert!(is_positive_set(&[]));
        assert!(!is_positive_set(&[0.0]));
        assert!(!is_positive_set(&[-3.0]));
        assert!(!is_positive_set(&[5.0, -1.0]));
    }

    #[test]
    fn test_running_accepts_typical_inputs() {
        assert!(validate_running(5.0, 30.0, 178.0).is_ok());
    }

    #[test]
    fn test_running_rejects_bad_distances_and_durations() {
        for bad in [f64::NAN, 0.0, -3.0] {
            let err = validate_running(bad, 30.0, 178.0).unwrap_err();
            assert_eq!(
                err,
                DomainError::Validation { fields: vec!["distance".to_string()] }
            );
        }

        let err = validate_running(5.0, f64::INFINITY, 178.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation { fields: vec!["duration".to_string()] }
        );
    }

    #[test]
    fn test_running_rejects_nonpositive_cadence() {
        let err = validate_running(5.0, 30.0, 0.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation { fields: vec!["cadence".to_string()] }
        );
    }

    #[test]
    fn test_running_collects_every_offending_field() {
        let err = validate_running(f64::NAN, -1.0, 178.0).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation {
                fields: vec!["distance".to_string(), "duration".to_string()]
            }
        );
    }

    #[test]
    fn test_cycling_rejects_bad_distances_and_durations() {
        for bad in [f64::NAN, 0.0, -3.0] {
            assert!(validate_cycling(bad, 60.0, 100.0).is_err());
        }
        assert!(validate_cycling(20.0, f64::INFINITY, 100.0).is_err());
    }

    #[test]
    fn test_cycling_allows_negative_elevation() {
        // The documented asymmetry: elevation may be negative or zero.
        assert!(validate_cycling(20.0, 60.0, -50.0).is_ok());
        assert!(validate_cycling(20.0, 60.0, 0.0).is_ok());
    }

    #[test]
    fn test_cycling_still_requires_finite_elevation() {
        let err = validate_cycling(20.0, 60.0, f64::NAN).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation { fields: vec!["elevation".to_string()] }
        );
    }
}
