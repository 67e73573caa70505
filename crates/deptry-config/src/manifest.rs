//! Reading the `[tool.deptry]` section of `pyproject.toml`
//!
//! [`Manifest::load`] reports each way the section can be unavailable as a
//! distinct [`Error`]. [`Manifest::read_section`] collapses all of them into
//! `None` and logs the reason at debug level, which is what the resolver uses.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use toml::{Table, Value};

use crate::settings::{Setting, SettingValue, ValueKind};
use crate::{Error, Result};

/// File name of the project manifest
pub const MANIFEST_FILE_NAME: &str = "pyproject.toml";

/// Namespace table holding per-tool configuration
pub const TOOL_TABLE: &str = "tool";

/// Name of this tool's table under [`TOOL_TABLE`]
pub const TOOL_NAME: &str = "deptry";

/// A project manifest on disk
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the `[tool.deptry]` section, reporting why it is unavailable
    pub fn load(&self) -> Result<ManifestSection> {
        let content = fs::read_to_string(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::ManifestNotFound {
                path: self.path.clone(),
            },
            _ => Error::io(&self.path, e),
        })?;
        ManifestSection::parse(&self.path, &content)
    }

    /// Load the `[tool.deptry]` section, or `None` if it cannot be used
    pub fn read_section(&self) -> Option<ManifestSection> {
        match self.load() {
            Ok(section) => Some(section),
            Err(Error::ManifestNotFound { path }) => {
                tracing::debug!(?path, "No pyproject.toml file to read configuration from.");
                None
            }
            Err(Error::Io { path, source }) => {
                tracing::debug!(?path, error = %source, "Failed to read pyproject.toml");
                None
            }
            Err(Error::TomlParse { path, source }) => {
                tracing::debug!(?path, error = %source, "pyproject.toml could not be parsed");
                None
            }
            Err(e) => {
                tracing::debug!(
                    reason = %e,
                    "No configuration for deptry was found in pyproject.toml."
                );
                None
            }
        }
    }
}

/// The contents of `[tool.deptry]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManifestSection {
    table: Table,
}

impl ManifestSection {
    /// Extract the section from manifest text; `path` is used for error context
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let document: Table = toml::from_str(content).map_err(|source| Error::TomlParse {
            path: path.to_path_buf(),
            source,
        })?;

        document
            .get(TOOL_TABLE)
            .and_then(Value::as_table)
            .and_then(|tools| tools.get(TOOL_NAME))
            .and_then(Value::as_table)
            .map(|table| Self::from_table(table.clone()))
            .ok_or_else(|| Error::SectionMissing {
                path: path.to_path_buf(),
            })
    }

    pub fn from_table(table: Table) -> Self {
        Self { table }
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether the section has a key named exactly like `setting`
    pub fn contains(&self, setting: Setting) -> bool {
        self.table.contains_key(setting.key())
    }

    /// The typed value for `setting`, if the key is present
    ///
    /// A present key is returned even when empty or `false`. A value of the
    /// wrong shape yields [`Error::InvalidValue`]; no coercion is attempted.
    pub fn value(&self, setting: Setting) -> Option<Result<SettingValue>> {
        self.table
            .get(setting.key())
            .map(|raw| convert(setting, raw))
    }

    /// Keys in the section that are not recognized settings
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.table
            .keys()
            .map(String::as_str)
            .filter(|key| Setting::from_key(key).is_none())
    }
}

fn convert(setting: Setting, raw: &Value) -> Result<SettingValue> {
    let invalid = || Error::InvalidValue {
        setting: setting.key(),
        expected: setting.kind(),
    };

    match (setting.kind(), raw) {
        (ValueKind::Flag, Value::Boolean(flag)) => Ok(SettingValue::Flag(*flag)),
        (ValueKind::List, Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect::<Result<Vec<_>>>()
            .map(SettingValue::List),
        _ => Err(invalid()),
    }
}
