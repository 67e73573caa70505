//! deptry CLI
//!
//! Resolves deptry's configuration from defaults, `pyproject.toml` and
//! command-line flags.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands, ConfigArgs};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            // No command provided - show help hint
            println!("{} dependency checker", "deptry".green().bold());
            println!();
            println!("Run {} for available commands.", "deptry --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Config(args) => cmd_config(args),
    }
}

fn cmd_config(args: ConfigArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    commands::run_config(&cwd, args)
}
