//! Collaborator contracts for presentation sync and location setup.
//!
//! The core never draws anything itself; it drives these narrow
//! interfaces and the presentation layer decides what a marker or a
//! recenter looks like. Everything rendered is derived from store
//! state through these calls, never mutated independently.

use uuid::Uuid;

use super::errors::DomainResult;
use super::models::Coordinates;

/// The map the store keeps in sync with its workout list.
///
/// `place_marker` is invoked once per `add` (after the persistence
/// write) and once per stored workout when a snapshot is replayed at
/// startup. A full view rebuild after a destructive mutation removes
/// stale markers and re-places the rest through the same two calls.
pub trait MapView {
    fn place_marker(&mut self, id: Uuid, coordinates: Coordinates, label: &str);

    fn remove_marker(&mut self, id: Uuid);

    /// Moves the view center, with whatever transition the
    /// implementation can manage. Fired when a list entry is selected.
    fn recenter(&mut self, coordinates: Coordinates);
}

/// One-shot acquisition of the device position at startup.
///
/// Until this resolves there is nothing to anchor new workouts to; on
/// failure the application continues in degraded mode (no map panel,
/// no workout creation).
pub trait LocationProvider {
    fn current_position(&self) -> DomainResult<Coordinates>;
}
