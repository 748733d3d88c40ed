//! Error types.
//!
//! Configuration problems are reported before a search starts. The only
//! error that can surface mid-search is [`TimetableError::NoRoomAvailable`].

/// Errors produced while building a problem or running a search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimetableError {
    /// The problem description is malformed (no rooms, no events, an empty
    /// slot axis, ...). Raised eagerly at construction.
    #[error("invalid problem configuration: {0}")]
    InvalidProblemConfig(String),

    /// The GA parameters are inconsistent.
    #[error("invalid GA configuration: {0}")]
    InvalidGaConfig(String),

    /// Genes handed to a chromosome do not fit its problem (wrong count,
    /// room or slot out of range, position past the end).
    #[error("invalid chromosome: {0}")]
    InvalidChromosome(String),

    /// A random draw picked a slot at which no room is available.
    #[error("no room is available at slot {slot}")]
    NoRoomAvailable {
        /// Index of the slot that was drawn.
        slot: usize,
    },
}

impl TimetableError {
    pub(crate) fn problem(msg: impl Into<String>) -> Self {
        TimetableError::InvalidProblemConfig(msg.into())
    }

    pub(crate) fn ga(msg: impl Into<String>) -> Self {
        TimetableError::InvalidGaConfig(msg.into())
    }

    pub(crate) fn chromosome(msg: impl Into<String>) -> Self {
        TimetableError::InvalidChromosome(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TimetableError>;
