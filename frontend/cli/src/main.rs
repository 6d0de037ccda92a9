//! PassField terminal front end
//!
//! Wires terminal input to the shared screen controller:
//! - `passfield check [PASSWORD]` validates one password and reports the
//!   unmet rules
//! - `passfield interactive` runs a line-oriented screen session

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use passfield_shared::logging::{self, LogLevel};
use passfield_shared::{AppConfig, ConfigManager, Screen};

mod check;
mod render;
mod session;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a password (read from stdin when omitted)
    Check {
        /// Password to validate
        password: Option<String>,
    },
    /// Run an interactive input screen session
    Interactive,
}

fn load_config(path: Option<PathBuf>) -> AppConfig {
    let mut manager = match path {
        Some(path) => ConfigManager::new(path),
        None => ConfigManager::with_default_path(),
    };

    let loaded = manager.load().map(|config| config.clone());
    match loaded {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet; report directly
            eprintln!(
                "Failed to load config from {:?}: {}. Using defaults.",
                manager.config_path(),
                e
            );
            AppConfig::default()
        }
    }
}

fn check_password(password: Option<String>) -> Result<ExitCode> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let outcome = check::run_check(password, stdin.lock(), &mut stdout)
        .context("Password check failed")?;
    Ok(outcome.into())
}

fn interactive(config: &AppConfig) -> Result<ExitCode> {
    let mut screen = Screen::new(&config.ui);
    println!("{}", session::HELP);
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session::run_session(&mut screen, stdin.lock(), &mut stdout)
        .context("Interactive session failed")?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut config = load_config(args.config);
    if args.debug {
        config.logging.level = LogLevel::Debug;
    }
    logging::init_logging(&config.logging);

    debug!("Starting PassField v{}", env!("CARGO_PKG_VERSION"));
    if logging::is_debug_enabled() {
        warn!("Debug logging enabled; password values are still never logged");
    }

    match args.command {
        Command::Check { password } => check_password(password),
        Command::Interactive => interactive(&config),
    }
}
