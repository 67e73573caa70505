//! The eight settings deptry recognizes and the values they can hold

use std::fmt;

use serde::Serialize;

/// A recognized configuration key
///
/// The key names are matched exactly (case-sensitive) against
/// `[tool.deptry]` in `pyproject.toml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Setting {
    IgnoreObsolete,
    IgnoreMissing,
    IgnoreTransitive,
    IgnoreDirectories,
    IgnoreNotebooks,
    SkipObsolete,
    SkipMissing,
    SkipTransitive,
}

impl Setting {
    /// Every setting, in resolution order
    pub const ALL: [Setting; 8] = [
        Setting::IgnoreObsolete,
        Setting::IgnoreMissing,
        Setting::IgnoreTransitive,
        Setting::IgnoreDirectories,
        Setting::IgnoreNotebooks,
        Setting::SkipObsolete,
        Setting::SkipMissing,
        Setting::SkipTransitive,
    ];

    /// The manifest key for this setting
    pub fn key(self) -> &'static str {
        match self {
            Setting::IgnoreObsolete => "ignore_obsolete",
            Setting::IgnoreMissing => "ignore_missing",
            Setting::IgnoreTransitive => "ignore_transitive",
            Setting::IgnoreDirectories => "ignore_directories",
            Setting::IgnoreNotebooks => "ignore_notebooks",
            Setting::SkipObsolete => "skip_obsolete",
            Setting::SkipMissing => "skip_missing",
            Setting::SkipTransitive => "skip_transitive",
        }
    }

    /// Look up a setting by its exact manifest key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|setting| setting.key() == key)
    }

    /// The shape of value this setting holds
    pub fn kind(self) -> ValueKind {
        match self {
            Setting::IgnoreObsolete
            | Setting::IgnoreMissing
            | Setting::IgnoreTransitive
            | Setting::IgnoreDirectories => ValueKind::List,
            Setting::IgnoreNotebooks
            | Setting::SkipObsolete
            | Setting::SkipMissing
            | Setting::SkipTransitive => ValueKind::Flag,
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Shape of a setting's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// A sequence of strings (package names or directory patterns)
    List,
    /// A boolean switch
    Flag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::List => f.write_str("a list of strings"),
            ValueKind::Flag => f.write_str("a boolean"),
        }
    }
}

/// A value held by one setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SettingValue {
    List(Vec<String>),
    Flag(bool),
}

impl SettingValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            SettingValue::List(_) => ValueKind::List,
            SettingValue::Flag(_) => ValueKind::Flag,
        }
    }

    /// A non-empty list or `true`.
    ///
    /// Overrides that are not truthy are treated as not provided.
    pub fn is_truthy(&self) -> bool {
        match self {
            SettingValue::List(items) => !items.is_empty(),
            SettingValue::Flag(flag) => *flag,
        }
    }
}

impl From<bool> for SettingValue {
    fn from(flag: bool) -> Self {
        SettingValue::Flag(flag)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(items: Vec<String>) -> Self {
        SettingValue::List(items)
    }
}

impl From<&[&str]> for SettingValue {
    fn from(items: &[&str]) -> Self {
        SettingValue::List(items.iter().map(|s| s.to_string()).collect())
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::List(items) => write!(f, "{:?}", items),
            SettingValue::Flag(flag) => write!(f, "{}", flag),
        }
    }
}
