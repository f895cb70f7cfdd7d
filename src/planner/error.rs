//! Planner error types.

use thiserror::Error;

use crate::profile::ProfileError;

/// Errors that can occur during plan generation.
///
/// The planner prefers graceful degradation: unknown muscle groups,
/// unmapped frequencies, and missing history all resolve to documented
/// defaults. Only malformed profiles and an entirely absent catalog
/// surface as errors.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// The athlete profile failed validation.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// The exercise catalog holds no exercises at all.
    #[error("Exercise catalog is empty")]
    EmptyCatalog,

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;
