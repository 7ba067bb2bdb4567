//! Presentation layer handling terminal UI and user input.
//!
//! This module manages the terminal user interface using ratatui,
//! handles keyboard input, and holds the marker board that stands in
//! for the map widget.

pub mod map;
pub mod ui;
pub mod input;

pub use map::*;
pub use ui::*;
pub use input::*;
