//! Simulation errors.

use crate::pool::AuthorId;

/// Errors raised by the publication simulation.
///
/// None of these are transient: the core performs no I/O, so a failed run
/// is reported to the caller as-is and never retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// The author pool was empty when a yearly bucket snapshot was needed.
    ///
    /// Resolution: seed the pool (see `AuthorPool::seeded`) or supply at least one author.
    #[error("author pool is empty - cannot compute the maximum paper count")]
    EmptyPool,

    /// A run parameter or seed record was rejected before the simulation started.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// An author id that was never allocated by the pool.
    #[error("unknown author id {0}")]
    UnknownAuthor(AuthorId),
}

impl SimulationError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SimulationError>;
