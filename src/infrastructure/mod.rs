//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations of the storage and location
//! collaborator contracts: JSON file persistence, an in-memory storage
//! backend, and environment-based position acquisition.

pub mod persistence;
pub mod location;

pub use persistence::*;
pub use location::*;
