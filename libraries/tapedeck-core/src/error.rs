/// Core error types for Tapedeck
use thiserror::Error;

/// Result type alias using `TapedeckError`
pub type Result<T> = std::result::Result<T, TapedeckError>;

/// Kind of entity an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Album,
    Song,
}

impl Entity {
    /// Lowercase name used in messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Album => "album",
            Self::Song => "song",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for Tapedeck
#[derive(Error, Debug)]
pub enum TapedeckError {
    /// Library data could not be read or parsed
    #[error("Error loading music library: {0}")]
    Load(String),

    /// Index outside the valid range of albums or songs
    #[error("Invalid {entity} index: {index} (expected 0..{len})")]
    OutOfRange {
        entity: Entity,
        index: usize,
        len: usize,
    },

    /// Rejected user input
    #[error("{0}")]
    Validation(String),

    /// Song duration that is not `MM:SS`
    #[error("Invalid song duration: '{0}'")]
    InvalidDuration(String),
}

impl TapedeckError {
    /// Create a load error
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Create an out of range error
    pub fn out_of_range(entity: Entity, index: usize, len: usize) -> Self {
        Self::OutOfRange { entity, index, len }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Whether the error is an invalid album or song index
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
