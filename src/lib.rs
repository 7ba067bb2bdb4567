//! tracklog - Terminal Workout Tracker Library
//!
//! A terminal-based workout tracker: log runs and rides at a map
//! location, with derived metrics and a persistent workout list.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
