//! Terminal stand-in for the map widget.
//!
//! `MarkerBoard` is the crate's `MapView` implementation: it keeps the
//! placed markers and the current view center, and `ui` renders it as a
//! scatter panel. It holds no workout data of its own; everything on it
//! is driven by store notifications.

use uuid::Uuid;

use crate::domain::{Coordinates, MapView};

/// One placed marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: Uuid,
    pub coordinates: Coordinates,
    pub label: String,
}

/// Markers plus a view center, rendered as the map panel.
#[derive(Debug, Clone)]
pub struct MarkerBoard {
    markers: Vec<Marker>,
    center: Coordinates,
}

impl MarkerBoard {
    pub fn new(center: Coordinates) -> Self {
        Self { markers: Vec::new(), center }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Marker ids in placement order.
    pub fn marker_ids(&self) -> Vec<Uuid> {
        self.markers.iter().map(|m| m.id).collect()
    }

    pub fn center(&self) -> Coordinates {
        self.center
    }
}

impl MapView for MarkerBoard {
    /// Places a marker, replacing any existing marker with the same id
    /// so replays and rebuilds stay idempotent.
    fn place_marker(&mut self, id: Uuid, coordinates: Coordinates, label: &str) {
        self.markers.retain(|m| m.id != id);
        self.markers.push(Marker {
            id,
            coordinates,
            label: label.to_string(),
        });
    }

    fn remove_marker(&mut self, id: Uuid) {
        self.markers.retain(|m| m.id != id);
    }

    fn recenter(&mut self, coordinates: Coordinates) {
        self.center = coordinates;
    }
}
