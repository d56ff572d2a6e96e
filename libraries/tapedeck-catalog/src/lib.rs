//! Tapedeck Catalog
//!
//! In-memory album catalog loaded once from a JSON library file.
//!
//! # Architecture
//!
//! - **Load once**: the whole library is parsed at startup; the catalog is
//!   read-only afterwards
//! - **Index addressing**: albums and songs are addressed by 0-based position
//! - **Substring search**: case-insensitive containment over album names,
//!   artists, and song names
//!
//! # Example
//!
//! ```rust
//! use tapedeck_catalog::{Catalog, SearchHit};
//!
//! let catalog = Catalog::from_json(r#"[
//!     {"name": "A", "artist": "X", "genre": "Pop",
//!      "songs": [{"name": "One", "duration": "03:45"}]}
//! ]"#).unwrap();
//!
//! assert_eq!(catalog.get_by_index(0).unwrap().name, "A");
//!
//! let hits = catalog.search("one").unwrap();
//! assert!(matches!(hits[0], SearchHit::Song { song_index: 0, .. }));
//! ```

mod catalog;
mod error;
mod search;

pub use catalog::Catalog;
pub use error::{CatalogError, Result};
pub use search::SearchHit;
