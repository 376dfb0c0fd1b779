//! Unified error handling for the track-pacer library.
//!
//! The calculation engine itself is total over valid inputs and never fails;
//! errors only arise at the edges (parsing user-entered pace strings,
//! converting raw lane numbers, serializing results for the UI).

use thiserror::Error;

/// Unified error type for track-pacer operations.
#[derive(Debug, Error)]
pub enum PacerError {
    /// A pace string could not be parsed as "m:ss".
    #[error("invalid pace '{input}': {reason}")]
    InvalidPace { input: String, reason: String },

    /// Lane number outside the supported 1-3 range.
    #[error("unsupported lane {lane}, expected 1-3")]
    UnsupportedLane { lane: u8 },

    /// JSON serialization of results failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PacerError {
    pub(crate) fn invalid_pace(input: &str, reason: &str) -> Self {
        Self::InvalidPace {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for track-pacer operations.
pub type Result<T> = std::result::Result<T, PacerError>;
