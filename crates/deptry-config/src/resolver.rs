//! Configuration resolution across defaults, manifest and overrides
//!
//! Each setting is resolved on its own:
//!
//! 1. start from the built-in default;
//! 2. if `[tool.deptry]` has the key, take the manifest value (even if empty);
//! 3. if the override is truthy, take the override value.
//!
//! Later layers replace earlier values; lists are never merged.

use std::path::{Path, PathBuf};

use crate::defaults::default_value;
use crate::manifest::{MANIFEST_FILE_NAME, Manifest, ManifestSection};
use crate::overrides::Overrides;
use crate::provenance::{SettingChange, Source};
use crate::settings::{Setting, SettingValue};

/// The effective configuration for one deptry run
///
/// Built once by [`ConfigResolver::resolve`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    ignore_obsolete: Vec<String>,
    ignore_missing: Vec<String>,
    ignore_transitive: Vec<String>,
    ignore_directories: Vec<String>,
    ignore_notebooks: bool,
    skip_obsolete: bool,
    skip_missing: bool,
    skip_transitive: bool,

    changes: Vec<SettingChange>,
}

/// Every setting at its value from [`default_value`], with no changes recorded
impl Default for ResolvedConfig {
    fn default() -> Self {
        let mut config = Self {
            ignore_obsolete: Vec::new(),
            ignore_missing: Vec::new(),
            ignore_transitive: Vec::new(),
            ignore_directories: Vec::new(),
            ignore_notebooks: false,
            skip_obsolete: false,
            skip_missing: false,
            skip_transitive: false,
            changes: Vec::new(),
        };
        for setting in Setting::ALL {
            config.store(setting, default_value(setting));
        }
        config
    }
}

impl ResolvedConfig {
    pub fn ignore_obsolete(&self) -> &[String] {
        &self.ignore_obsolete
    }

    pub fn ignore_missing(&self) -> &[String] {
        &self.ignore_missing
    }

    pub fn ignore_transitive(&self) -> &[String] {
        &self.ignore_transitive
    }

    pub fn ignore_directories(&self) -> &[String] {
        &self.ignore_directories
    }

    pub fn ignore_notebooks(&self) -> bool {
        self.ignore_notebooks
    }

    pub fn skip_obsolete(&self) -> bool {
        self.skip_obsolete
    }

    pub fn skip_missing(&self) -> bool {
        self.skip_missing
    }

    pub fn skip_transitive(&self) -> bool {
        self.skip_transitive
    }

    /// The current value of `setting`
    pub fn value(&self, setting: Setting) -> SettingValue {
        match setting {
            Setting::IgnoreObsolete => SettingValue::List(self.ignore_obsolete.clone()),
            Setting::IgnoreMissing => SettingValue::List(self.ignore_missing.clone()),
            Setting::IgnoreTransitive => SettingValue::List(self.ignore_transitive.clone()),
            Setting::IgnoreDirectories => SettingValue::List(self.ignore_directories.clone()),
            Setting::IgnoreNotebooks => SettingValue::Flag(self.ignore_notebooks),
            Setting::SkipObsolete => SettingValue::Flag(self.skip_obsolete),
            Setting::SkipMissing => SettingValue::Flag(self.skip_missing),
            Setting::SkipTransitive => SettingValue::Flag(self.skip_transitive),
        }
    }

    /// Every assignment made on top of the defaults, in order
    pub fn changes(&self) -> &[SettingChange] {
        &self.changes
    }

    /// The layer that last set `setting`
    pub fn provenance(&self, setting: Setting) -> Source {
        self.changes
            .iter()
            .rev()
            .find(|change| change.setting == setting)
            .map_or(Source::Default, |change| change.source)
    }

    /// Take the manifest value for `setting` if the key is present
    pub(crate) fn apply_if_present(&mut self, setting: Setting, section: &ManifestSection) {
        match section.value(setting) {
            None => {}
            Some(Ok(value)) => self.assign(setting, value, Source::Manifest),
            Some(Err(e)) => {
                tracing::debug!(
                    setting = %setting,
                    reason = %e,
                    "Ignoring {} from pyproject.toml: expected {}",
                    setting,
                    setting.kind()
                );
            }
        }
    }

    /// Take the override value for `setting` if it is truthy
    pub(crate) fn apply_override_if_truthy(&mut self, setting: Setting, value: SettingValue) {
        if value.is_truthy() {
            self.assign(setting, value, Source::CommandLine);
        }
    }

    fn assign(&mut self, setting: Setting, value: SettingValue, source: Source) {
        if !self.store(setting, value.clone()) {
            tracing::debug!(setting = %setting, "Ignoring {} of the wrong shape", setting);
            return;
        }

        let change = SettingChange {
            setting,
            value,
            source,
        };
        tracing::debug!(setting = %setting, source = %source, "{}", change);
        self.changes.push(change);
    }

    /// Write `value` into the field for `setting` without recording it
    ///
    /// Returns `false` and leaves the field alone if the shapes differ.
    fn store(&mut self, setting: Setting, value: SettingValue) -> bool {
        match (setting, value) {
            (Setting::IgnoreObsolete, SettingValue::List(v)) => self.ignore_obsolete = v,
            (Setting::IgnoreMissing, SettingValue::List(v)) => self.ignore_missing = v,
            (Setting::IgnoreTransitive, SettingValue::List(v)) => self.ignore_transitive = v,
            (Setting::IgnoreDirectories, SettingValue::List(v)) => self.ignore_directories = v,
            (Setting::IgnoreNotebooks, SettingValue::Flag(v)) => self.ignore_notebooks = v,
            (Setting::SkipObsolete, SettingValue::Flag(v)) => self.skip_obsolete = v,
            (Setting::SkipMissing, SettingValue::Flag(v)) => self.skip_missing = v,
            (Setting::SkipTransitive, SettingValue::Flag(v)) => self.skip_transitive = v,
            _ => return false,
        }
        true
    }
}

/// Resolves deptry's configuration from defaults, `pyproject.toml` and overrides
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    manifest: Manifest,
}

impl ConfigResolver {
    /// Create a resolver reading the manifest at `manifest_path`
    pub fn new(manifest_path: impl Into<PathBuf>) -> Self {
        Self {
            manifest: Manifest::new(manifest_path),
        }
    }

    /// Create a resolver reading `pyproject.toml` in the current directory
    pub fn from_current_dir() -> Self {
        Self::new(Path::new(".").join(MANIFEST_FILE_NAME))
    }

    pub fn manifest_path(&self) -> &Path {
        self.manifest.path()
    }

    /// Resolve the configuration
    ///
    /// Never fails: an absent or unreadable manifest leaves the defaults in
    /// place and is only logged at debug level.
    pub fn resolve(&self, overrides: &Overrides) -> ResolvedConfig {
        let mut config = ResolvedConfig::default();

        if let Some(section) = self.manifest.read_section() {
            if section.is_empty() {
                tracing::debug!("[tool.deptry] in pyproject.toml is empty");
            }
            for setting in Setting::ALL {
                config.apply_if_present(setting, &section);
            }
            for key in section.unknown_keys() {
                tracing::debug!(key, "Ignoring unknown key in [tool.deptry]");
            }
        }

        for setting in Setting::ALL {
            if let Some(value) = overrides.get(setting) {
                config.apply_override_if_truthy(setting, value);
            }
        }

        config
    }
}
