/// Catalog-specific errors
use std::path::PathBuf;
use tapedeck_core::{Entity, TapedeckError};
use thiserror::Error;

/// Result type alias using `CatalogError`
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Library file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Library data is not a valid album list
    #[error("Malformed library data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Album index outside the catalog
    #[error("Invalid album index: {index} (catalog has {len} albums)")]
    OutOfRange { index: usize, len: usize },

    /// Blank search query
    #[error("Search query cannot be empty.")]
    EmptyQuery,
}

impl CatalogError {
    /// Whether the library source was missing, unreadable, or malformed
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Parse(_))
    }
}

impl From<CatalogError> for TapedeckError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::OutOfRange { index, len } => {
                TapedeckError::out_of_range(Entity::Album, index, len)
            }
            CatalogError::EmptyQuery => TapedeckError::validation(err.to_string()),
            CatalogError::Read { .. } | CatalogError::Parse(_) => {
                TapedeckError::load(err.to_string())
            }
        }
    }
}
