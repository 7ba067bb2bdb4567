use uuid::Uuid;

/// Errors the workout core can report.
///
/// None of these is fatal: validation and not-found conditions are
/// recovered locally with user feedback, persistence and location
/// failures degrade the session but leave it running.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Raw numeric input was non-finite or failed a required positivity
    /// check; carries the offending field names.
    #[error("invalid input for {}", .fields.join(", "))]
    Validation { fields: Vec<String> },

    /// A delete was requested for an id the store does not hold, which
    /// indicates the view and the store have drifted apart.
    #[error("no workout with id {0}")]
    NotFound(Uuid),

    /// The snapshot write failed; the in-memory state is ahead of disk.
    #[error("could not persist workouts: {0}")]
    PersistenceWrite(String),

    /// The stored snapshot exists but could not be read back.
    #[error("could not read stored workouts: {0}")]
    SnapshotRead(String),

    /// Initial position acquisition failed; the app runs without a map.
    #[error("could not acquire position: {0}")]
    LocationAcquisition(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
