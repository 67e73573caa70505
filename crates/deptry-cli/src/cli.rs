//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use deptry_config::{MANIFEST_FILE_NAME, Overrides};

/// deptry - Find unused, missing and transitive dependencies in a Python project
#[derive(Parser, Debug)]
#[command(name = "deptry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the resolved configuration and where each value came from
    ///
    /// Values are taken from built-in defaults, then [tool.deptry] in
    /// pyproject.toml, then the flags below.
    ///
    /// Examples:
    ///   deptry config
    ///   deptry config --skip-missing --ignore-obsolete click,requests
    ///   deptry config --config path/to/pyproject.toml --json
    Config(ConfigArgs),
}

/// Arguments for `deptry config`
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ConfigArgs {
    /// Path to the pyproject.toml to read [tool.deptry] from
    #[arg(long, env = "DEPTRY_CONFIG", default_value = MANIFEST_FILE_NAME)]
    pub config: PathBuf,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Fail instead of falling back to defaults when pyproject.toml is unusable
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub overrides: OverrideArgs,
}

/// Flags overriding values from pyproject.toml
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideArgs {
    /// Dependencies never reported as obsolete (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "DEPS")]
    pub ignore_obsolete: Vec<String>,

    /// Modules never reported as missing (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "MODULES")]
    pub ignore_missing: Vec<String>,

    /// Modules never reported as transitive (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "MODULES")]
    pub ignore_transitive: Vec<String>,

    /// Directories not scanned for imports (comma-separated)
    #[arg(long, value_delimiter = ',', value_name = "DIRS")]
    pub ignore_directories: Vec<String>,

    /// Do not scan .ipynb files
    #[arg(long)]
    pub ignore_notebooks: bool,

    /// Skip the obsolete dependency check
    #[arg(long)]
    pub skip_obsolete: bool,

    /// Skip the missing dependency check
    #[arg(long)]
    pub skip_missing: bool,

    /// Skip the transitive dependency check
    #[arg(long)]
    pub skip_transitive: bool,
}

impl OverrideArgs {
    /// Flags that were not given become `None`
    pub fn into_overrides(self) -> Overrides {
        fn provided_list(items: Vec<String>) -> Option<Vec<String>> {
            (!items.is_empty()).then_some(items)
        }

        fn provided_flag(flag: bool) -> Option<bool> {
            flag.then_some(true)
        }

        Overrides {
            ignore_obsolete: provided_list(self.ignore_obsolete),
            ignore_missing: provided_list(self.ignore_missing),
            ignore_transitive: provided_list(self.ignore_transitive),
            ignore_directories: provided_list(self.ignore_directories),
            ignore_notebooks: provided_flag(self.ignore_notebooks),
            skip_obsolete: provided_flag(self.skip_obsolete),
            skip_missing: provided_flag(self.skip_missing),
            skip_transitive: provided_flag(self.skip_transitive),
        }
    }
}
