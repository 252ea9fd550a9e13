//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
///
/// `Clone` is required because a single in-flight fetch shares its outcome
/// with every caller waiting on the same query key.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// network error (connection refused, DNS failure, broken body stream)
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The backend answered with a non-success status
    ///
    /// `message` is the backend's own message text and is what users see.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Response body could not be decoded
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// A shift referenced a weekday outside the 7-day table
    #[error("Invalid day key: {0}")]
    InvalidDayKey(u8),

    /// The caller abandoned the query before it settled
    #[error("Request cancelled")]
    Cancelled,

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Whether it is expected behavior (backend rejection, cancellation, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::Api { status, .. } => *status < 500,
            Self::Cancelled | Self::Timeout(_) => true,
            Self::Network(_) | Self::Parse(_) | Self::InvalidDayKey(_) | Self::Config(_) => false,
        }
    }

    /// Whether the error should be shown to the user at all
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
