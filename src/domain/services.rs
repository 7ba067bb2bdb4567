//! Export services for the workout list.

use super::models::{Workout, WorkoutDetails};

/// Writes the workout list to a CSV file.
pub struct CsvExporter;

impl CsvExporter {
    /// Exports every workout, one row each, in display order.
    ///
    /// Derived metrics and the kind-specific field share the row; the
    /// column that does not apply to a kind is left empty.
    ///
    /// # Arguments
    ///
    /// * `workouts` - Workouts in display order
    /// * `filename` - Path of the CSV file to create
    ///
    /// # Returns
    ///
    /// The filename on success, or an error message.
    pub fn export_workouts(workouts: &[Workout], filename: &str) -> Result<String, String> {
        let mut writer = csv::Writer::from_path(filename).map_err(|e| e.to_string())?;

        writer
            .write_record([
                "kind",
                "description",
                "date",
                "distance_km",
                "duration_min",
                "pace_min_per_km",
                "speed_km_per_h",
                "cadence_spm",
                "elevation_gain_m",
                "latitude",
                "longitude",
            ])
            .map_err(|e| e.to_string())?;

        for workout in workouts {
            let (pace, speed, cadence, elevation) = match workout.details {
                WorkoutDetails::Running { cadence_spm, pace_min_per_km } => (
                    format!("{:.2}", pace_min_per_km),
                    String::new(),
                    format!("{:.0}", cadence_spm),
                    String::new(),
                ),
                WorkoutDetails::Cycling { elevation_gain_m, speed_km_per_h } => (
                    String::new(),
                    format!("{:.2}", speed_km_per_h),
                    String::new(),
                    format!("{:.0}", elevation_gain_m),
                ),
            };

            writer
                .write_record([
                    workout.kind().as_str().to_string(),
                    workout.description.clone(),
                    workout.created_at.date_naive().to_string(),
                    format!("{:.2}", workout.distance_km),
                    format!("{:.2}", workout.duration_min),
                    pace,
                    speed,
                    cadence,
                    elevation,
                    workout.coordinates.lat.to_string(),
                    workout.coordinates.lng.to_string(),
                ])
                .map_err(|e| e.to_string())?;
        }

        writer.flush().map_err(|e| e.to_string())?;
        Ok(filename.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Coordinates, Workout};
    use chrono::TimeZone;

    #[test]
    fn test_export_writes_one_row_per_workout() {
        let at = chrono::Utc.with_ymd_and_hms(2024, 4, 18, 10, 0, 0).unwrap();
        let coords = Coordinates::new(51.5, -0.09);
        let workouts = vec![
            Workout::running_at(5.0, 30.0, coords, 178.0, at),
            Workout::cycling_at(20.0, 60.0, coords, -50.0, at),
        ];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workouts.csv");
        let filename = path.to_string_lossy().to_string();

        let result = CsvExporter::export_workouts(&workouts, &filename).unwrap();
        assert_eq!(result, filename);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("kind,description,date"));
        assert!(lines[1].starts_with("running,Running on April 18,2024-04-18,5.00,30.00,6.00,,178,"));
        assert!(lines[2].starts_with("cycling,Cycling on April 18,2024-04-18,20.00,60.00,,20.00,,-50"));
    }

    #[test]
    fn test_export_to_unwritable_path_reports_error() {
        let workouts: Vec<Workout> = Vec::new();
        let result = CsvExporter::export_workouts(&workouts, "/nonexistent-dir/out.csv");
        assert!(result.is_err());
    }
}
