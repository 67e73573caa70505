//! Caller-supplied overrides, the highest-precedence layer

use crate::settings::{Setting, SettingValue};
use crate::{Error, Result};

/// One optional value per setting, usually taken from command-line flags
///
/// `None` means the caller did not provide the setting. A provided value
/// still only wins if it is truthy (non-empty list or `true`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub ignore_obsolete: Option<Vec<String>>,
    pub ignore_missing: Option<Vec<String>>,
    pub ignore_transitive: Option<Vec<String>>,
    pub ignore_directories: Option<Vec<String>>,
    pub ignore_notebooks: Option<bool>,
    pub skip_obsolete: Option<bool>,
    pub skip_missing: Option<bool>,
    pub skip_transitive: Option<bool>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// The provided value for `setting`, if any
    pub fn get(&self, setting: Setting) -> Option<SettingValue> {
        match setting {
            Setting::IgnoreObsolete => list(&self.ignore_obsolete),
            Setting::IgnoreMissing => list(&self.ignore_missing),
            Setting::IgnoreTransitive => list(&self.ignore_transitive),
            Setting::IgnoreDirectories => list(&self.ignore_directories),
            Setting::IgnoreNotebooks => self.ignore_notebooks.map(SettingValue::Flag),
            Setting::SkipObsolete => self.skip_obsolete.map(SettingValue::Flag),
            Setting::SkipMissing => self.skip_missing.map(SettingValue::Flag),
            Setting::SkipTransitive => self.skip_transitive.map(SettingValue::Flag),
        }
    }

    /// Provide a value for `setting`
    ///
    /// Fails if the value's shape does not match the setting.
    pub fn set(&mut self, setting: Setting, value: SettingValue) -> Result<()> {
        match (setting, value) {
            (Setting::IgnoreObsolete, SettingValue::List(v)) => self.ignore_obsolete = Some(v),
            (Setting::IgnoreMissing, SettingValue::List(v)) => self.ignore_missing = Some(v),
            (Setting::IgnoreTransitive, SettingValue::List(v)) => self.ignore_transitive = Some(v),
            (Setting::IgnoreDirectories, SettingValue::List(v)) => {
                self.ignore_directories = Some(v)
            }
            (Setting::IgnoreNotebooks, SettingValue::Flag(v)) => self.ignore_notebooks = Some(v),
            (Setting::SkipObsolete, SettingValue::Flag(v)) => self.skip_obsolete = Some(v),
            (Setting::SkipMissing, SettingValue::Flag(v)) => self.skip_missing = Some(v),
            (Setting::SkipTransitive, SettingValue::Flag(v)) => self.skip_transitive = Some(v),
            (setting, _) => {
                return Err(Error::InvalidValue {
                    setting: setting.key(),
                    expected: setting.kind(),
                });
            }
        }
        Ok(())
    }

    /// Builder form of [`set`](Self::set)
    pub fn with(mut self, setting: Setting, value: impl Into<SettingValue>) -> Result<Self> {
        self.set(setting, value.into())?;
        Ok(self)
    }
}

fn list(items: &Option<Vec<String>>) -> Option<SettingValue> {
    items.clone().map(SettingValue::List)
}
