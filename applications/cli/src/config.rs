/// Console configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "tapedeck.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_library")]
    pub library: LibrarySettings,

    #[serde(default = "default_logging")]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LibrarySettings {
    /// JSON album list to load at startup
    #[serde(default = "default_library_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    /// `tracing` filter used when `RUST_LOG` is not set
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `config_file` must exist. Without one, `tapedeck.toml` in
    /// the working directory is used if present. Environment variables
    /// prefixed with `TAPEDECK_` override file values, e.g.
    /// `TAPEDECK_LIBRARY__PATH=albums.json`.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match config_file {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("TAPEDECK")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.library.path.as_os_str().is_empty() {
            return Err(CliError::Config(
                "Library path is required (set TAPEDECK_LIBRARY__PATH or --library)".to_string(),
            ));
        }

        if self.logging.filter.trim().is_empty() {
            return Err(CliError::Config("Logging filter cannot be empty".to_string()));
        }

        Ok(())
    }
}

// Default values
fn default_library() -> LibrarySettings {
    LibrarySettings {
        path: default_library_path(),
    }
}

fn default_library_path() -> PathBuf {
    PathBuf::from("AlbumList.json")
}

fn default_logging() -> LoggingSettings {
    LoggingSettings {
        filter: default_filter(),
    }
}

fn default_filter() -> String {
    "tapedeck=warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            library: default_library(),
            logging: default_logging(),
        }
    }
}
