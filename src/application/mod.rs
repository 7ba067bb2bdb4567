//! Application layer managing state and business workflows.
//!
//! This module coordinates between the domain layer and presentation
//! layer: application modes, the entry form, the confirmation flows,
//! and the rebuild of the presentation after destructive mutations.

pub mod state;

pub use state::*;
