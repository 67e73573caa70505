//! Configuration resolution for deptry
//!
//! deptry's settings come from three layers, later layers winning per setting:
//!
//! 1. **Defaults** - built-in values (see [`defaults`])
//! 2. **Manifest** - the `[tool.deptry]` section of `pyproject.toml`
//! 3. **Overrides** - values passed by the caller, usually from CLI flags
//!
//! A missing or malformed manifest never fails resolution; it is logged at
//! debug level and the defaults stand. Every assignment is recorded as a
//! [`SettingChange`] so callers can report where each value came from.
//!
//! # Example
//!
//! ```no_run
//! use deptry_config::{ConfigResolver, Overrides, Setting, Source};
//!
//! let overrides = Overrides {
//!     skip_missing: Some(true),
//!     ..Overrides::default()
//! };
//!
//! let config = ConfigResolver::from_current_dir().resolve(&overrides);
//! assert!(config.skip_missing());
//! assert_eq!(config.provenance(Setting::SkipMissing), Source::CommandLine);
//! ```

pub mod defaults;
pub mod error;
pub mod manifest;
pub mod overrides;
pub mod provenance;
pub mod resolver;
pub mod settings;

pub use error::{Error, Result};
pub use manifest::{MANIFEST_FILE_NAME, Manifest, ManifestSection};
pub use overrides::Overrides;
pub use provenance::{SettingChange, Source};
pub use resolver::{ConfigResolver, ResolvedConfig};
pub use settings::{Setting, SettingValue, ValueKind};
