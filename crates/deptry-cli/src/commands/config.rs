//! Resolved configuration display

use std::path::Path;

use colored::{ColoredString, Colorize};
use deptry_config::{
    ConfigResolver, Manifest, ResolvedConfig, Setting, SettingChange, SettingValue, Source,
};
use serde::Serialize;

use crate::cli::ConfigArgs;
use crate::error::{CliError, Result};

/// Machine-readable view of a resolved configuration
#[derive(Debug, Serialize)]
pub struct ConfigReport<'a> {
    pub manifest: &'a Path,
    pub settings: Vec<SettingReport>,
    pub changes: &'a [SettingChange],
}

#[derive(Debug, Serialize)]
pub struct SettingReport {
    pub name: Setting,
    pub value: SettingValue,
    pub source: Source,
}

pub fn build_report<'a>(config: &'a ResolvedConfig, manifest: &'a Path) -> ConfigReport<'a> {
    ConfigReport {
        manifest,
        settings: Setting::ALL
            .into_iter()
            .map(|setting| SettingReport {
                name: setting,
                value: config.value(setting),
                source: config.provenance(setting),
            })
            .collect(),
        changes: config.changes(),
    }
}

/// Resolve the configuration for the project in `cwd` and print it
///
/// A relative `--config` path is taken relative to `cwd`.
pub fn run_config(cwd: &Path, args: ConfigArgs) -> Result<()> {
    let manifest_path = cwd.join(&args.config);

    if args.strict {
        check_manifest(&Manifest::new(&manifest_path))?;
    }

    let resolver = ConfigResolver::new(manifest_path);
    let config = resolver.resolve(&args.overrides.into_overrides());

    if args.json {
        let report = build_report(&config, resolver.manifest_path());
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_config(&config, resolver.manifest_path());
    Ok(())
}

/// Reject a manifest that resolution would silently fall back from
fn check_manifest(manifest: &Manifest) -> Result<()> {
    let section = manifest.load()?;

    for setting in Setting::ALL {
        if let Some(Err(e)) = section.value(setting) {
            return Err(e.into());
        }
    }

    let unknown: Vec<&str> = section.unknown_keys().collect();
    if !unknown.is_empty() {
        return Err(CliError::user(format!(
            "Unknown keys in [tool.deptry]: {}",
            unknown.join(", ")
        )));
    }

    Ok(())
}

fn print_config(config: &ResolvedConfig, manifest: &Path) {
    println!("{}", "Resolved Configuration".bold());
    println!();
    println!("  {:<20} {}", "Manifest:".dimmed(), manifest.display());
    println!();

    for setting in Setting::ALL {
        let source = config.provenance(setting);
        println!(
            "  {:<20} {} {}",
            setting.key(),
            colorize(&config.value(setting).to_string(), source),
            format!("({})", source).dimmed()
        );
    }
}

fn colorize(text: &str, source: Source) -> ColoredString {
    match source {
        Source::Default => text.normal(),
        Source::Manifest => text.cyan(),
        Source::CommandLine => text.green(),
    }
}
