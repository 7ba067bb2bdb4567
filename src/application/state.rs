//! Application state management for the terminal workout tracker.
//!
//! This module holds the main application state: the workout store, the
//! map panel, the entry form, and the two confirmation flows that gate
//! destructive mutation. Every rendered element is derived from this
//! state; after a destructive mutation the presentation is rebuilt from
//! the store rather than patched incrementally.

use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::{
    validate_cycling, validate_running, Coordinates, DomainError, LocationProvider, MapView,
    Workout, WorkoutKind, WorkoutStore,
};
use crate::presentation::MarkerBoard;

/// How far one cursor step moves on the map panel, in degrees.
const CURSOR_STEP: f64 = 0.005;

/// Validation failures reuse the original tracker's message verbatim.
const INVALID_INPUT_MESSAGE: &str = "Please enter valid and positive number!";

/// Represents the current mode of the application.
///
/// The mode determines how user input is interpreted and what UI
/// elements are displayed. Pending delete confirmations are not modes:
/// they live per-entry (and as one delete-all flag) so several can be
/// open at once while the list stays navigable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Normal navigation mode - list selection, shortcuts available
    Normal,
    /// Picking a location for a new workout on the map panel
    PickLocation,
    /// The workout entry form is open
    EntryForm,
    /// CSV export dialog is open
    ExportCsv,
    /// Help screen is displayed
    Help,
}

/// Which entry-form field currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Kind,
    Distance,
    Duration,
    /// Cadence for running, elevation gain for cycling.
    Extra,
}

impl FormField {
    pub fn next(&self) -> Self {
        match self {
            FormField::Kind => FormField::Distance,
            FormField::Distance => FormField::Duration,
            FormField::Duration => FormField::Extra,
            FormField::Extra => FormField::Kind,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            FormField::Kind => FormField::Extra,
            FormField::Distance => FormField::Kind,
            FormField::Duration => FormField::Distance,
            FormField::Extra => FormField::Duration,
        }
    }
}

/// Raw, unparsed entry-form state.
///
/// Field text is kept as typed; coercion to numbers happens only on
/// submission, so validation sees exactly what the user entered.
#[derive(Debug, Clone)]
pub struct WorkoutForm {
    pub kind: WorkoutKind,
    pub distance: String,
    pub duration: String,
    pub extra: String,
    pub field: FormField,
    pub coordinates: Coordinates,
}

impl WorkoutForm {
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            kind: WorkoutKind::Running,
            distance: String::new(),
            duration: String::new(),
            extra: String::new(),
            field: FormField::Kind,
            coordinates,
        }
    }

    /// Label of the kind-specific field, switching with the kind the
    /// way the original form swapped the cadence/elevation rows.
    pub fn extra_label(&self) -> &'static str {
        match self.kind {
            WorkoutKind::Running => "Cadence (spm)",
            WorkoutKind::Cycling => "Elev. gain (m)",
        }
    }

    /// Mutable reference to the text of the focused field, if the
    /// focused field is a text field.
    pub fn focused_text(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Kind => None,
            FormField::Distance => Some(&mut self.distance),
            FormField::Duration => Some(&mut self.duration),
            FormField::Extra => Some(&mut self.extra),
        }
    }
}

/// Coerces raw field text the way the original form did (`+value`):
/// anything that does not parse as a number becomes NaN and fails the
/// finiteness check downstream.
fn numeric(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

/// Main application state.
///
/// Owns the workout store, the optional map panel (absent in degraded
/// mode), the entry form, both confirmation flows, and the transient
/// UI state (selection, status message, export filename prompt).
pub struct App {
    /// The workout list and its persistence
    pub store: WorkoutStore,
    /// Map panel; `None` when position acquisition failed
    pub map: Option<MarkerBoard>,
    /// Current application mode
    pub mode: AppMode,
    /// Entry form state (meaningful in `EntryForm` mode)
    pub form: WorkoutForm,
    /// Map cursor while picking a location
    pub cursor: Coordinates,
    /// Currently selected list entry (zero-based)
    pub selected: usize,
    /// Workout ids with an open single-delete confirmation
    pub pending_deletes: HashSet<Uuid>,
    /// Whether the delete-all confirmation banner is open
    pub delete_all_pending: bool,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Input buffer for the export filename prompt
    pub filename_input: String,
    /// Cursor position within the filename input, counted in characters
    pub cursor_position: usize,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Marker ids currently placed on the map, for view rebuilds
    rendered_ids: Vec<Uuid>,
}

impl App {
    pub fn new(store: WorkoutStore) -> Self {
        Self {
            store,
            map: None,
            mode: AppMode::Normal,
            form: WorkoutForm::new(Coordinates::new(0.0, 0.0)),
            cursor: Coordinates::new(0.0, 0.0),
            selected: 0,
            pending_deletes: HashSet::new(),
            delete_all_pending: false,
            status_message: None,
            filename_input: String::new(),
            cursor_position: 0,
            help_scroll: 0,
            rendered_ids: Vec::new(),
        }
    }

    /// Runs the startup sequence: acquire the position, load the
    /// stored snapshot, and replay every restored workout through the
    /// same marker notification a live `add` uses.
    ///
    /// A failed acquisition leaves the app in degraded mode (no map,
    /// no new workouts); a failed load leaves the store empty. Both
    /// are surfaced in the status line, neither is fatal.
    pub fn bootstrap(&mut self, location: &dyn LocationProvider) {
        match location.current_position() {
            Ok(position) => {
                self.map = Some(MarkerBoard::new(position));
                self.cursor = position;
            }
            Err(error) => {
                tracing::warn!(%error, "starting in degraded mode");
                self.status_message = Some(format!("{} - running without a map", error));
            }
        }

        match self.store.load() {
            Ok(0) => {}
            Ok(count) => {
                self.status_message = Some(format!("Restored {} workouts", count));
            }
            Err(error) => {
                tracing::warn!(%error, "snapshot load failed");
                self.status_message = Some(format!("Load failed: {}", error));
            }
        }

        if let Some(map) = self.map.as_mut() {
            self.store.replay(map);
        }
        self.rendered_ids = self.store.workouts().iter().map(|w| w.id).collect();
    }

    pub fn has_map(&self) -> bool {
        self.map.is_some()
    }

    /// Starts picking a location for a new workout.
    ///
    /// Requires the map; in degraded mode workout creation is refused
    /// with a status message.
    pub fn start_pick_location(&mut self) {
        let Some(map) = self.map.as_ref() else {
            self.status_message = Some("No map available - cannot add workouts".to_string());
            return;
        };
        self.cursor = map.center();
        self.mode = AppMode::PickLocation;
        self.status_message = None;
    }

    /// Moves the pick cursor by whole steps, clamped to valid ranges.
    pub fn move_cursor(&mut self, lat_steps: f64, lng_steps: f64) {
        self.cursor.lat = (self.cursor.lat + lat_steps * CURSOR_STEP).clamp(-90.0, 90.0);
        self.cursor.lng = (self.cursor.lng + lng_steps * CURSOR_STEP).clamp(-180.0, 180.0);
    }

    /// Accepts the cursor position and opens the entry form for it.
    pub fn confirm_location(&mut self) {
        self.form = WorkoutForm::new(self.cursor);
        self.mode = AppMode::EntryForm;
    }

    pub fn cancel_pick_location(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Toggles the workout kind, which also swaps the kind-specific
    /// field between cadence and elevation.
    pub fn toggle_form_kind(&mut self) {
        self.form.kind = self.form.kind.toggled();
    }

    pub fn cancel_form(&mut self) {
        self.mode = AppMode::Normal;
    }

    /// Validates the form and, on success, constructs the workout and
    /// adds it to the store (which persists and places the marker).
    ///
    /// On validation failure the form stays open, nothing is
    /// constructed and existing state is untouched. On a persistence
    /// failure the workout is kept in memory and a warning that
    /// changes may not survive reload is shown.
    pub fn submit_form(&mut self) {
        let distance = numeric(&self.form.distance);
        let duration = numeric(&self.form.duration);
        let extra = numeric(&self.form.extra);

        let validated = match self.form.kind {
            WorkoutKind::Running => validate_running(distance, duration, extra),
            WorkoutKind::Cycling => validate_cycling(distance, duration, extra),
        };
        if let Err(error) = validated {
            tracing::debug!(%error, "workout rejected");
            self.status_message = Some(INVALID_INPUT_MESSAGE.to_string());
            return;
        }

        let workout = match self.form.kind {
            WorkoutKind::Running => {
                Workout::running(distance, duration, self.form.coordinates, extra)
            }
            WorkoutKind::Cycling => {
                Workout::cycling(distance, duration, self.form.coordinates, extra)
            }
        };
        let id = workout.id;

        let Some(map) = self.map.as_mut() else {
            // The form is unreachable without a map.
            self.mode = AppMode::Normal;
            return;
        };
        let result = self.store.add(workout, map);

        self.rendered_ids.push(id);
        self.selected = self.store.len().saturating_sub(1);
        self.mode = AppMode::Normal;
        self.status_message = Some(match result {
            Ok(()) => "Workout added".to_string(),
            Err(error) => format!("{} - changes may not survive reload", error),
        });
    }

    pub fn selected_workout(&self) -> Option<&Workout> {
        self.store.workouts().get(self.selected)
    }

    /// Moves the list selection down and recenters the map on the
    /// newly selected workout.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.store.len() {
            self.selected += 1;
        }
        self.recenter_on_selected();
    }

    /// Moves the list selection up and recenters the map.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.recenter_on_selected();
    }

    fn recenter_on_selected(&mut self) {
        let Some(coordinates) = self.selected_workout().map(|w| w.coordinates) else {
            return;
        };
        if let Some(map) = self.map.as_mut() {
            map.recenter(coordinates);
        }
    }

    /// Whether the selected entry has an open delete confirmation.
    pub fn selected_pending_delete(&self) -> bool {
        self.selected_workout()
            .map(|w| self.pending_deletes.contains(&w.id))
            .unwrap_or(false)
    }

    /// Single-delete flow, Idle -> PendingDelete for the selected
    /// entry. Independent per entity: other entries may already be
    /// pending.
    pub fn request_delete_selected(&mut self) {
        if let Some(id) = self.selected_workout().map(|w| w.id) {
            self.pending_deletes.insert(id);
        }
    }

    /// Single-delete flow, PendingDelete -> Confirmed for the
    /// selected entry.
    pub fn confirm_delete_selected(&mut self) {
        if let Some(id) = self.selected_workout().map(|w| w.id) {
            self.confirm_delete(id);
        }
    }

    /// Single-delete flow, PendingDelete -> Cancelled: prompt closed,
    /// no mutation.
    pub fn cancel_delete_selected(&mut self) {
        if let Some(id) = self.selected_workout().map(|w| w.id) {
            self.pending_deletes.remove(&id);
        }
    }

    /// Removes a workout and rebuilds the presentation from the new
    /// store state.
    ///
    /// A `NotFound` means the view and the store had drifted apart;
    /// it is surfaced as a warning and the rebuild resynchronizes.
    pub fn confirm_delete(&mut self, id: Uuid) {
        self.pending_deletes.remove(&id);
        let outcome = self.store.remove(id);
        self.rebuild_presentation();

        self.status_message = Some(match outcome {
            Ok(removed) => format!("Deleted \"{}\"", removed.description),
            Err(error @ DomainError::NotFound(_)) => {
                tracing::warn!(%error, "delete for unknown id");
                format!("Warning: {}", error)
            }
            Err(error) => format!("{} - changes may not survive reload", error),
        });
    }

    /// Whether the delete-all affordance is exposed at all. It is
    /// hidden unless the store holds more than one workout.
    pub fn delete_all_available(&self) -> bool {
        self.store.len() > 1
    }

    /// Delete-all flow, Idle -> PendingDeleteAll. A no-op while the
    /// affordance is hidden.
    pub fn request_delete_all(&mut self) {
        if self.delete_all_available() {
            self.delete_all_pending = true;
        }
    }

    /// Delete-all flow, Confirmed: clears the store and rebuilds the
    /// presentation empty.
    pub fn confirm_delete_all(&mut self) {
        self.delete_all_pending = false;
        self.pending_deletes.clear();
        let outcome = self.store.clear();
        self.rebuild_presentation();

        self.status_message = Some(match outcome {
            Ok(()) => "All workouts deleted".to_string(),
            Err(error) => format!("{} - changes may not survive reload", error),
        });
    }

    /// Delete-all flow, Cancelled: banner closed, no mutation.
    pub fn cancel_delete_all(&mut self) {
        self.delete_all_pending = false;
    }

    /// Rebuilds the entire presentation from current store state:
    /// markers for removed workouts go away, every remaining workout
    /// is re-placed, and the selection is clamped. This stands in for
    /// the original tracker's full page reload after a delete.
    fn rebuild_presentation(&mut self) {
        let current: Vec<Uuid> = self.store.workouts().iter().map(|w| w.id).collect();

        if let Some(map) = self.map.as_mut() {
            for id in self.rendered_ids.iter().filter(|id| !current.contains(id)) {
                map.remove_marker(*id);
            }
            self.store.replay(map);
        }

        self.rendered_ids = current;
        if self.selected >= self.store.len() {
            self.selected = self.store.len().saturating_sub(1);
        }
    }

    /// Switches to CSV export mode and prompts for a filename.
    pub fn start_csv_export(&mut self) {
        self.mode = AppMode::ExportCsv;
        self.filename_input = "workouts.csv".to_string();
        self.cursor_position = self.filename_input.chars().count();
        self.status_message = None;
    }

    /// Gets the filename to use for CSV export, falling back to the
    /// default when the prompt is empty.
    pub fn get_csv_export_filename(&self) -> String {
        if self.filename_input.is_empty() {
            "workouts.csv".to_string()
        } else {
            self.filename_input.clone()
        }
    }

    /// Processes the result of a CSV export and returns to normal
    /// mode.
    pub fn set_csv_export_result(&mut self, result: Result<String, String>) {
        match result {
            Ok(filename) => {
                self.status_message = Some(format!("Exported to {}", filename));
            }
            Err(error) => {
                self.status_message = Some(format!("Export failed: {}", error));
            }
        }

        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }

    /// Cancels the filename prompt and returns to normal mode.
    pub fn cancel_filename_input(&mut self) {
        self.mode = AppMode::Normal;
        self.filename_input.clear();
        self.cursor_position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainResult, LocationProvider};
    use crate::infrastructure::MemoryStorage;

    struct FixedLocation(Coordinates);

    impl LocationProvider for FixedLocation {
        fn current_position(&self) -> DomainResult<Coordinates> {
            Ok(self.0)
        }
    }

    struct NoLocation;

    impl LocationProvider for NoLocation {
        fn current_position(&self) -> DomainResult<Coordinates> {
            Err(DomainError::LocationAcquisition("denied".to_string()))
        }
    }

    fn coords() -> Coordinates {
        Coordinates::new(51.5, -0.09)
    }

    fn booted_app() -> App {
        let mut app = App::new(WorkoutStore::new(Box::new(MemoryStorage::default())));
        app.bootstrap(&FixedLocation(coords()));
        app
    }

    fn add_workout(app: &mut App, distance: &str, duration: &str, extra: &str) -> Uuid {
        app.start_pick_location();
        app.confirm_location();
        app.form.distance = distance.to_string();
        app.form.duration = duration.to_string();
        app.form.extra = extra.to_string();
        app.submit_form();
        assert_eq!(app.mode, AppMode::Normal);
        app.store.workouts().last().expect("workout was added").id
    }

    #[test]
    fn test_bootstrap_with_location_sets_up_map() {
        let app = booted_app();
        assert!(app.has_map());
        assert_eq!(app.map.as_ref().unwrap().center(), coords());
        assert_eq!(app.mode, AppMode::Normal);
    }

    #[test]
    fn test_bootstrap_without_location_degrades() {
        let mut app = App::new(WorkoutStore::new(Box::new(MemoryStorage::default())));
        app.bootstrap(&NoLocation);

        assert!(!app.has_map());
        assert!(app.status_message.as_ref().unwrap().contains("without a map"));

        // Degraded mode refuses workout creation.
        app.start_pick_location();
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.status_message.as_ref().unwrap().contains("cannot add workouts"));
    }

    #[test]
    fn test_bootstrap_replays_persisted_workouts() {
        let storage = MemoryStorage::default();
        let handle = storage.clone();

        let mut app = App::new(WorkoutStore::new(Box::new(storage)));
        app.bootstrap(&FixedLocation(coords()));
        add_workout(&mut app, "5", "30", "178");
        add_workout(&mut app, "20", "60", "120");

        let mut next_session = App::new(WorkoutStore::new(Box::new(handle)));
        next_session.bootstrap(&FixedLocation(coords()));

        assert_eq!(next_session.store.len(), 2);
        let markers = next_session.map.as_ref().unwrap().marker_ids();
        let stored: Vec<Uuid> = next_session.store.workouts().iter().map(|w| w.id).collect();
        assert_eq!(markers, stored);
        assert!(next_session.status_message.as_ref().unwrap().contains("Restored 2"));
    }

    #[test]
    fn test_form_submission_adds_workout_and_places_marker() {
        let mut app = booted_app();
        let id = add_workout(&mut app, "5", "30", "178");

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.map.as_ref().unwrap().marker_ids(), vec![id]);
        assert_eq!(app.status_message.as_deref(), Some("Workout added"));
        assert_eq!(app.store.workouts()[0].pace_min_per_km(), Some(6.0));
    }

    #[test]
    fn test_form_rejects_invalid_input_and_stays_open() {
        let mut app = booted_app();
        app.start_pick_location();
        app.confirm_location();
        app.form.distance = "-3".to_string();
        app.form.duration = "30".to_string();
        app.form.extra = "178".to_string();
        app.submit_form();

        assert_eq!(app.mode, AppMode::EntryForm);
        assert_eq!(app.store.len(), 0);
        assert_eq!(app.status_message.as_deref(), Some(INVALID_INPUT_MESSAGE));
    }

    #[test]
    fn test_form_rejects_unparseable_text() {
        let mut app = booted_app();
        app.start_pick_location();
        app.confirm_location();
        app.form.distance = "five".to_string();
        app.form.duration = "30".to_string();
        app.form.extra = "178".to_string();
        app.submit_form();

        assert_eq!(app.mode, AppMode::EntryForm);
        assert_eq!(app.store.len(), 0);
    }

    #[test]
    fn test_cycling_form_accepts_negative_elevation() {
        let mut app = booted_app();
        app.start_pick_location();
        app.confirm_location();
        app.toggle_form_kind();
        assert_eq!(app.form.kind, WorkoutKind::Cycling);
        assert_eq!(app.form.extra_label(), "Elev. gain (m)");

        app.form.distance = "20".to_string();
        app.form.duration = "60".to_string();
        app.form.extra = "-50".to_string();
        app.submit_form();

        assert_eq!(app.mode, AppMode::Normal);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.workouts()[0].speed_km_per_h(), Some(20.0));
    }

    #[test]
    fn test_pick_location_cursor_moves_and_anchors_form() {
        let mut app = booted_app();
        app.start_pick_location();
        assert_eq!(app.mode, AppMode::PickLocation);
        assert_eq!(app.cursor, coords());

        app.move_cursor(2.0, -1.0);
        app.confirm_location();
        assert_eq!(app.mode, AppMode::EntryForm);
        assert!((app.form.coordinates.lat - 51.51).abs() < 1e-9);
        assert!((app.form.coordinates.lng - -0.095).abs() < 1e-9);
    }

    #[test]
    fn test_selecting_an_entry_recenters_the_map() {
        let mut app = booted_app();
        add_workout(&mut app, "5", "30", "178");
        app.start_pick_location();
        app.move_cursor(100.0, 100.0);
        app.confirm_location();
        app.form.distance = "10".to_string();
        app.form.duration = "55".to_string();
        app.form.extra = "170".to_string();
        app.submit_form();

        app.select_previous();
        assert_eq!(app.selected, 0);
        let expected = app.store.workouts()[0].coordinates;
        assert_eq!(app.map.as_ref().unwrap().center(), expected);
    }

    #[test]
    fn test_single_delete_cancel_leaves_store_unchanged() {
        let mut app = booted_app();
        add_workout(&mut app, "5", "30", "178");

        app.request_delete_selected();
        assert!(app.selected_pending_delete());

        app.cancel_delete_selected();
        assert!(!app.selected_pending_delete());
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_single_delete_confirm_removes_targeted_id() {
        let mut app = booted_app();
        let first = add_workout(&mut app, "5", "30", "178");
        let second = add_workout(&mut app, "10", "55", "170");

        app.selected = 0;
        app.request_delete_selected();
        app.confirm_delete_selected();

        assert_eq!(app.store.len(), 1);
        assert!(app.store.get(first).is_none());
        assert!(app.store.get(second).is_some());
        assert_eq!(app.map.as_ref().unwrap().marker_ids(), vec![second]);
        assert!(app.status_message.as_ref().unwrap().starts_with("Deleted"));
    }

    #[test]
    fn test_pending_deletes_are_independent_per_entry() {
        let mut app = booted_app();
        let first = add_workout(&mut app, "5", "30", "178");
        let second = add_workout(&mut app, "10", "55", "170");

        app.selected = 0;
        app.request_delete_selected();
        app.selected = 1;
        app.request_delete_selected();
        assert!(app.pending_deletes.contains(&first));
        assert!(app.pending_deletes.contains(&second));

        // Cancelling one flow does not touch the other.
        app.cancel_delete_selected();
        assert!(app.pending_deletes.contains(&first));
        assert!(!app.pending_deletes.contains(&second));
    }

    #[test]
    fn test_delete_unknown_id_warns_about_desync() {
        let mut app = booted_app();
        add_workout(&mut app, "5", "30", "178");

        app.confirm_delete(Uuid::new_v4());
        assert_eq!(app.store.len(), 1);
        assert!(app.status_message.as_ref().unwrap().starts_with("Warning:"));
    }

    #[test]
    fn test_delete_all_hidden_with_one_workout() {
        let mut app = booted_app();
        add_workout(&mut app, "5", "30", "178");

        assert!(!app.delete_all_available());
        app.request_delete_all();
        assert!(!app.delete_all_pending);
    }

    #[test]
    fn test_delete_all_confirm_empties_everything() {
        let mut app = booted_app();
        add_workout(&mut app, "5", "30", "178");
        add_workout(&mut app, "10", "55", "170");

        assert!(app.delete_all_available());
        app.request_delete_all();
        assert!(app.delete_all_pending);

        app.confirm_delete_all();
        assert!(!app.delete_all_pending);
        assert!(app.store.is_empty());
        assert!(app.map.as_ref().unwrap().marker_ids().is_empty());
    }

    #[test]
    fn test_delete_all_cancel_leaves_store_unchanged() {
        let mut app = booted_app();
        add_workout(&mut app, "5", "30", "178");
        add_workout(&mut app, "10", "55", "170");

        app.request_delete_all();
        app.cancel_delete_all();
        assert!(!app.delete_all_pending);
        assert_eq!(app.store.len(), 2);
    }

    #[test]
    fn test_selection_clamps_after_delete() {
        let mut app = booted_app();
        add_workout(&mut app, "5", "30", "178");
        add_workout(&mut app, "10", "55", "170");
        assert_eq!(app.selected, 1);

        app.request_delete_selected();
        app.confirm_delete_selected();
        assert_eq!(app.selected, 0);
        assert!(app.selected_workout().is_some());
    }

    #[test]
    fn test_csv_export_prompt() {
        let mut app = booted_app();
        app.start_csv_export();
        assert_eq!(app.mode, AppMode::ExportCsv);
        assert_eq!(app.get_csv_export_filename(), "workouts.csv");

        app.filename_input = "spring.csv".to_string();
        assert_eq!(app.get_csv_export_filename(), "spring.csv");

        app.set_csv_export_result(Ok("spring.csv".to_string()));
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.status_message.as_ref().unwrap().contains("Exported to spring.csv"));

        app.start_csv_export();
        app.cancel_filename_input();
        assert_eq!(app.mode, AppMode::Normal);
        assert!(app.filename_input.is_empty());
    }

    #[test]
    fn test_form_field_cycle() {
        let mut field = FormField::Kind;
        for expected in [
            FormField::Distance,
            FormField::Duration,
            FormField::Extra,
            FormField::Kind,
        ] {
            field = field.next();
            assert_eq!(field, expected);
        }
        assert_eq!(FormField::Kind.previous(), FormField::Extra);
    }
}
