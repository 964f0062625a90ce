//! Errors raised while building a problem instance.
//!
//! Every check happens before any algorithm runs, so a solver only ever sees
//! instances that satisfy the data model.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChallengeError {
    /// Malformed items or conflict lists
    #[error("Invalid instance: {0}")]
    InvalidInstance(String),

    /// Capacity outside `0..=u32::MAX`
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(i64),
}

impl ChallengeError {
    pub(crate) fn instance(message: impl Into<String>) -> Self {
        ChallengeError::InvalidInstance(message.into())
    }
}
