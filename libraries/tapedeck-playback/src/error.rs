//! Error types for playback management

use tapedeck_core::TapedeckError;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Album or song lookup failed
    #[error(transparent)]
    Library(#[from] TapedeckError),
}

impl PlaybackError {
    /// Whether the error is an invalid album or song index
    pub fn is_out_of_range(&self) -> bool {
        match self {
            Self::Library(err) => err.is_out_of_range(),
        }
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
