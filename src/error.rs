//! Error type shared by the list, queue and map.

use thiserror::Error;

/// Failures reported by the collections in this crate.
///
/// Lookups that simply find nothing are not errors; they return `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Positional access past the end of a `LinkedList`.
    #[error("index out of range: index {index}, len {len}")]
    IndexOutOfRange {
        /// The requested position
        index: usize,
        /// Length of the list at the time of the call
        len: usize,
    },

    /// `dequeue`/`peek` on a queue with no elements.
    #[error("queue is empty")]
    EmptyQueue,

    /// Rejected `HashMap` construction parameters.
    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        /// What was wrong with the parameters
        message: String,
    },
}

impl Error {
    pub(crate) fn invalid_configuration(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
