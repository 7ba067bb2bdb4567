//! The workout list and its persistence round-trip.
//!
//! `WorkoutStore` is a plain CRUD aggregate with one protocol
//! invariant: write-through. Every mutation rewrites the complete
//! snapshot through the storage collaborator before the operation is
//! considered complete; there are no incremental diffs.

use uuid::Uuid;

use super::errors::{DomainError, DomainResult};
use super::models::Workout;
use super::sync::MapView;

/// Storage collaborator holding the persisted snapshot under one fixed
/// namespace. All operations are synchronous; errors cross this seam as
/// plain strings and are wrapped into [`DomainError`] by the store.
pub trait SnapshotStorage {
    /// Reads the stored snapshot. `None` means nothing has been
    /// persisted yet, which is not an error.
    fn read_snapshot(&self) -> Result<Option<Vec<Workout>>, String>;

    /// Overwrites the snapshot with the full workout sequence.
    fn write_snapshot(&mut self, workouts: &[Workout]) -> Result<(), String>;

    /// Erases the snapshot entirely.
    fn clear_snapshot(&mut self) -> Result<(), String>;
}

/// Insertion-ordered collection of workouts with write-through
/// persistence.
///
/// The in-memory sequence keeps insertion order, which is also display
/// order; the persisted snapshot always mirrors the sequence after
/// every mutating operation.
pub struct WorkoutStore {
    workouts: Vec<Workout>,
    storage: Box<dyn SnapshotStorage>,
}

impl WorkoutStore {
    pub fn new(storage: Box<dyn SnapshotStorage>) -> Self {
        Self { workouts: Vec::new(), storage }
    }

    /// Replaces the in-memory list with the stored snapshot.
    ///
    /// An absent snapshot leaves the store empty. Stored records are
    /// taken verbatim; derived fields were computed at original
    /// creation time and are not recomputed here. Returns the number
    /// of restored workouts.
    pub fn load(&mut self) -> DomainResult<usize> {
        match self.storage.read_snapshot() {
            Ok(Some(workouts)) => {
                self.workouts = workouts;
                tracing::debug!(count = self.workouts.len(), "restored workout snapshot");
                Ok(self.workouts.len())
            }
            Ok(None) => {
                self.workouts.clear();
                Ok(0)
            }
            Err(message) => Err(DomainError::SnapshotRead(message)),
        }
    }

    /// Replays every held workout through the map collaborator in
    /// stored order, the same notification `add` uses, so the map ends
    /// up consistent with store content after a load.
    pub fn replay(&self, map: &mut dyn MapView) {
        for workout in &self.workouts {
            map.place_marker(workout.id, workout.coordinates, &workout.description);
        }
    }

    /// Appends a workout, persists, then notifies the map.
    ///
    /// The marker is placed after the persistence write. If the write
    /// fails the entity stays in memory and still gets its marker (the
    /// view derives from store state), but the failure is returned so
    /// the caller can warn that changes may not survive a reload.
    pub fn add(&mut self, workout: Workout, map: &mut dyn MapView) -> DomainResult<()> {
        let id = workout.id;
        let coordinates = workout.coordinates;
        let label = workout.description.clone();

        self.workouts.push(workout);
        let persisted = self.persist();
        map.place_marker(id, coordinates, &label);

        tracing::debug!(%id, "workout added");
        persisted
    }

    /// Removes the workout with the given id and persists.
    ///
    /// An absent id is a no-op reported as [`DomainError::NotFound`];
    /// calling this twice for the same id fails the second time and
    /// leaves the store unchanged. The caller is responsible for
    /// rebuilding the rendered view from the new store state.
    pub fn remove(&mut self, id: Uuid) -> DomainResult<Workout> {
        let index = self
            .workouts
            .iter()
            .position(|w| w.id == id)
            .ok_or(DomainError::NotFound(id))?;

        let removed = self.workouts.remove(index);
        self.persist()?;
        tracing::debug!(%id, "workout removed");
        Ok(removed)
    }

    /// Empties the list and erases the persisted snapshot.
    pub fn clear(&mut self) -> DomainResult<()> {
        self.workouts.clear();
        self.storage
            .clear_snapshot()
            .map_err(DomainError::PersistenceWrite)?;
        tracing::debug!("workout list cleared");
        Ok(())
    }

    /// Rewrites the complete snapshot from the in-memory sequence.
    pub fn persist(&mut self) -> DomainResult<()> {
        self.storage.write_snapshot(&self.workouts).map_err(|message| {
            tracing::warn!(error = %message, "snapshot write failed");
            DomainError::PersistenceWrite(message)
        })
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == id)
    }

    /// Count, total distance and total duration across the list, for
    /// the header summary line.
    pub fn totals(&self) -> (usize, f64, f64) {
        let distance = self.workouts.iter().map(|w| w.distance_km).sum();
        let duration = self.workouts.iter().map(|w| w.duration_min).sum();
        (self.workouts.len(), distance, duration)
    }
}
