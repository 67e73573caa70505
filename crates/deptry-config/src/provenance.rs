//! Which layer set a setting's value

use std::fmt;

use serde::Serialize;

use crate::settings::{Setting, SettingValue};

/// A configuration layer, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Default,
    Manifest,
    CommandLine,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Default => f.write_str("default"),
            Source::Manifest => f.write_str("pyproject.toml"),
            Source::CommandLine => f.write_str("command line argument"),
        }
    }
}

/// One assignment made while resolving
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingChange {
    pub setting: Setting,
    pub value: SettingValue,
    pub source: Source,
}

impl fmt::Display for SettingChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} set to {} by {}", self.setting, self.value, self.source)
    }
}
