//! Error types for deptry-config

use std::path::PathBuf;

use crate::settings::ValueKind;

/// Result type for deptry-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading configuration sources
///
/// [`ConfigResolver::resolve`](crate::ConfigResolver::resolve) never returns
/// these; it logs them and falls back to the previous layer. They surface
/// only through the strict [`Manifest::load`](crate::Manifest::load) API and
/// through [`Overrides::set`](crate::Overrides::set).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Manifest file does not exist
    #[error("No manifest found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// Manifest file exists but could not be read
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file is not valid TOML
    #[error("Failed to parse {path}: {source}")]
    TomlParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Manifest has no `[tool.deptry]` table
    #[error("No [tool.deptry] section in {path}")]
    SectionMissing { path: PathBuf },

    /// A value does not have the shape its setting requires
    #[error("Invalid value for {setting}: expected {expected}")]
    InvalidValue {
        setting: &'static str,
        expected: ValueKind,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
