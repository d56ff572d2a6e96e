//! Tapedeck console
//!
//! Menu-driven front end over `tapedeck-catalog` and `tapedeck-playback`.
//! The binary in `main.rs` wires stdin/stdout into [`Console`]; tests drive
//! the same type with in-memory buffers and a manual clock.

pub mod config;
pub mod console;
pub mod error;
pub mod input;

pub use config::CliConfig;
pub use console::{load_catalog, Console};
pub use error::{CliError, Result};
pub use input::{parse_selection, Selection};
