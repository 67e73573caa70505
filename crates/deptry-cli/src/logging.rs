use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::{CliError, Result};

/// Default filter when `--verbose` is not given and `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "warn";

/// Initialize a tracing subscriber writing to stderr.
///
/// `--verbose` forces debug output, which includes one line per setting
/// changed by `pyproject.toml` or a command line flag. Otherwise
/// `RUST_LOG` decides, defaulting to "warn".
pub fn init(verbose: bool) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .with_level(true)
        .compact();

    let filter_layer = if verbose {
        EnvFilter::try_new("debug")
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
    }
    .map_err(|e| CliError::Logging {
        message: e.to_string(),
    })?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| CliError::Logging {
            message: e.to_string(),
        })?;

    if verbose {
        tracing::debug!("Verbose mode enabled");
    }

    Ok(())
}
