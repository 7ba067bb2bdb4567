//! Workout entities for the terminal workout tracker.
//!
//! A workout is an immutable record: every derived field (description,
//! pace, speed) is computed exactly once at construction time and is
//! stored alongside the raw inputs, so it survives persistence verbatim
//! and is never recomputed on load.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// English full month names, indexed by zero-based month.
const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

/// A latitude/longitude pair picked on the map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// The two workout kinds the tracker knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    Cycling,
}

impl WorkoutKind {
    /// Capitalized label used in descriptions and list rows.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Cycling => "Cycling",
        }
    }

    /// Lowercase discriminator as stored in snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "running",
            WorkoutKind::Cycling => "cycling",
        }
    }

    /// Toggles between the two kinds (used by the entry form).
    pub fn toggled(&self) -> Self {
        match self {
            WorkoutKind::Running => WorkoutKind::Cycling,
            WorkoutKind::Cycling => WorkoutKind::Running,
        }
    }
}

/// Kind discriminator plus the kind-specific payload.
///
/// Serialized internally tagged so the snapshot record carries a flat
/// `kind` field next to the payload fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum WorkoutDetails {
    Running {
        cadence_spm: f64,
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: f64,
    },
}

/// A single logged exercise session.
///
/// Constructed only through [`Workout::running`] / [`Workout::cycling`]
/// (or their `_at` variants); fields are never mutated afterwards, so
/// "edits" are modeled as delete + recreate.
///
/// # Examples
///
/// ```
/// use tracklog::domain::{Coordinates, Workout};
///
/// let w = Workout::running(5.0, 30.0, Coordinates::new(51.5, -0.09), 178.0);
/// assert_eq!(w.pace_min_per_km(), Some(6.0));
/// assert!(w.description.starts_with("Running on "));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub distance_km: f64,
    pub duration_min: f64,
    pub coordinates: Coordinates,
    pub description: String,
    #[serde(flatten)]
    pub details: WorkoutDetails,
}

impl Workout {
    /// Creates a running workout timestamped now.
    ///
    /// Construction contract: the inputs are expected to have passed
    /// [`validate_running`](crate::domain::validate_running) already; the
    /// constructor computes derived fields from whatever it is given.
    pub fn running(
        distance_km: f64,
        duration_min: f64,
        coordinates: Coordinates,
        cadence_spm: f64,
    ) -> Self {
        Self::running_at(distance_km, duration_min, coordinates, cadence_spm, Utc::now())
    }

    /// Creates a running workout at an explicit creation time.
    ///
    /// Pace is `duration / distance` in minutes per kilometer.
    pub fn running_at(
        distance_km: f64,
        duration_min: f64,
        coordinates: Coordinates,
        cadence_spm: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            distance_km,
            duration_min,
            coordinates,
            description: describe(WorkoutKind::Running, created_at),
            details: WorkoutDetails::Running {
                cadence_spm,
                pace_min_per_km: duration_min / distance_km,
            },
        }
    }

    /// Creates a cycling workout timestamped now.
    ///
    /// Same construction contract as [`Workout::running`]. Note that a
    /// negative elevation gain is accepted here and by validation.
    pub fn cycling(
        distance_km: f64,
        duration_min: f64,
        coordinates: Coordinates,
        elevation_gain_m: f64,
    ) -> Self {
        Self::cycling_at(distance_km, duration_min, coordinates, elevation_gain_m, Utc::now())
    }

    /// Creates a cycling workout at an explicit creation time.
    ///
    /// Speed is `distance / (duration / 60)` in kilometers per hour.
    pub fn cycling_at(
        distance_km: f64,
        duration_min: f64,
        coordinates: Coordinates,
        elevation_gain_m: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at,
            distance_km,
            duration_min,
            coordinates,
            description: describe(WorkoutKind::Cycling, created_at),
            details: WorkoutDetails::Cycling {
                elevation_gain_m,
                speed_km_per_h: distance_km / (duration_min / 60.0),
            },
        }
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            WorkoutDetails::Running { .. } => WorkoutKind::Running,
            WorkoutDetails::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Pace in min/km for running workouts.
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { pace_min_per_km, .. } => Some(pace_min_per_km),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Speed in km/h for cycling workouts.
    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { .. } => None,
            WorkoutDetails::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
        }
    }

    /// One-line metric summary for list rows, e.g.
    /// `"5.0 km | 30 min | 6.0 min/km | 178 spm"`.
    pub fn metric_summary(&self) -> String {
        match self.details {
            WorkoutDetails::Running { cadence_spm, pace_min_per_km } => format!(
                "{:.1} km | {:.0} min | {:.1} min/km | {:.0} spm",
                self.distance_km, self.duration_min, pace_min_per_km, cadence_spm
            ),
            WorkoutDetails::Cycling { elevation_gain_m, speed_km_per_h } => format!(
                "{:.1} km | {:.0} min | {:.1} km/h | {:.0} m",
                self.distance_km, self.duration_min, speed_km_per_h, elevation_gain_m
            ),
        }
    }
}

/// Builds the stored description for a workout created at `at`.
///
/// The format is `"<Capitalized kind> on <Month name> <day-of-month>"`,
/// Gregorian calendar, English full month names, no year component.
///
/// # Examples
///
/// ```
/// use chrono::TimeZone;
/// use tracklog::domain::{describe, WorkoutKind};
///
/// let at = chrono::Utc.with_ymd_and_hms(2024, 4, 18, 9, 30, 0).unwrap();
/// assert_eq!(describe(WorkoutKind::Running, at), "Running on April 18");
/// ```
pub fn describe(kind: WorkoutKind, at: DateTime<Utc>) -> String {
    format!("{} on {} {}", kind.label(), MONTHS[at.month0() as usize], at.day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn coords() -> Coordinates {
        Coordinates::new(51.5, -0.09)
    }

    fn fixed_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 18, 10, 0, 0).unwrap()
    }

    #[test]
    fn test_running_pace_is_duration_over_distance() {
        let w = Workout::running_at(5.0, 30.0, coords(), 178.0, fixed_date());
        assert_eq!(w.pace_min_per_km(), Some(6.0));
        assert_eq!(w.speed_km_per_h(), None);
        assert_eq!(w.kind(), WorkoutKind::Running);
    }

    #[test]
    fn test_cycling_speed_is_distance_over_hours() {
        let w = Workout::cycling_at(20.0, 60.0, coords(), 120.0, fixed_date());
        assert_eq!(w.speed_km_per_h(), Some(20.0));
        assert_eq!(w.pace_min_per_km(), None);
        assert_eq!(w.kind(), WorkoutKind::Cycling);
    }

    #[test]
    fn test_cycling_accepts_negative_elevation_gain() {
        // Elevation positivity is deliberately unchecked for cycling.
        let w = Workout::cycling_at(20.0, 60.0, coords(), -50.0, fixed_date());
        assert_eq!(w.speed_km_per_h(), Some(20.0));
        match w.details {
            WorkoutDetails::Cycling { elevation_gain_m, .. } => {
                assert_eq!(elevation_gain_m, -50.0)
            }
            _ => panic!("expected cycling details"),
        }
    }

    #[test]
    fn test_description_uses_month_name_and_day() {
        let w = Workout::running_at(5.0, 30.0, coords(), 178.0, fixed_date());
        assert_eq!(w.description, "Running on April 18");

        let december = Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap();
        let w = Workout::cycling_at(20.0, 60.0, coords(), 10.0, december);
        assert_eq!(w.description, "Cycling on December 1");
    }

    #[test]
    fn test_describe_is_pure_and_has_no_year() {
        let a = Utc.with_ymd_and_hms(2020, 7, 4, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2024, 7, 4, 23, 59, 59).unwrap();
        assert_eq!(describe(WorkoutKind::Running, a), "Running on July 4");
        assert_eq!(describe(WorkoutKind::Running, a), describe(WorkoutKind::Running, b));
    }

    #[test]
    fn test_ids_are_unique_and_non_nil() {
        let a = Workout::running(5.0, 30.0, coords(), 178.0);
        let b = Workout::running(5.0, 30.0, coords(), 178.0);
        assert!(!a.id.is_nil());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_created_at_and_coordinates_are_stored() {
        let w = Workout::running_at(5.0, 30.0, coords(), 178.0, fixed_date());
        assert_eq!(w.created_at, fixed_date());
        assert_eq!(w.coordinates, coords());
    }

    #[test]
    fn test_snapshot_record_carries_kind_tag_and_derived_fields() {
        let w = Workout::running_at(5.0, 30.0, coords(), 178.0, fixed_date());
        let json = serde_json::to_value(&w).unwrap();
        assert_eq!(json["kind"], "running");
        assert_eq!(json["pace_min_per_km"], 6.0);
        assert_eq!(json["description"], "Running on April 18");

        let back: Workout = serde_json::from_value(json).unwrap();
        assert_eq!(back, w);
    }

    #[test]
    fn test_kind_toggle() {
        assert_eq!(WorkoutKind::Running.toggled(), WorkoutKind::Cycling);
        assert_eq!(WorkoutKind::Cycling.toggled(), WorkoutKind::Running);
    }

    #[test]
    fn test_metric_summary_lines() {
        let run = Workout::running_at(5.0, 30.0, coords(), 178.0, fixed_date());
        assert_eq!(run.metric_summary(), "5.0 km | 30 min | 6.0 min/km | 178 spm");

        let ride = Workout::cycling_at(20.0, 60.0, coords(), -50.0, fixed_date());
        assert_eq!(ride.metric_summary(), "20.0 km | 60 min | 20.0 km/h | -50 m");
    }
}
