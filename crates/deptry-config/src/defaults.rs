//! Built-in default values, the lowest-precedence layer

use crate::settings::{Setting, SettingValue};

/// Directories skipped when no other layer says otherwise
pub const DEFAULT_IGNORE_DIRECTORIES: &[&str] = &[".venv", "tests"];

/// The built-in value of `setting`
pub fn default_value(setting: Setting) -> SettingValue {
    match setting {
        Setting::IgnoreDirectories => SettingValue::from(DEFAULT_IGNORE_DIRECTORIES),
        Setting::IgnoreObsolete | Setting::IgnoreMissing | Setting::IgnoreTransitive => {
            SettingValue::List(Vec::new())
        }
        Setting::IgnoreNotebooks
        | Setting::SkipObsolete
        | Setting::SkipMissing
        | Setting::SkipTransitive => SettingValue::Flag(false),
    }
}
