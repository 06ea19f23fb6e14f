//! # brunoc CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use brunoc_cli::fmt::{run_fmt, FmtArgs};
use brunoc_cli::new::{run_new, NewArgs};
use brunoc_cli::validate::{run_validate, ValidateArgs};
use brunoc_cli::EXIT_ERROR;

/// Validate, format and scaffold Bruno collection exports.
#[derive(Parser, Debug)]
#[command(name = "brunoc", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode and validate collection exports.
    Validate(ValidateArgs),

    /// Re-encode a collection export in canonical form.
    Fmt(FmtArgs),

    /// Write a new collection export.
    New(NewArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "brunoc starting");

    let result = match cli.command {
        Commands::Validate(args) => run_validate(&args),
        Commands::Fmt(args) => run_fmt(&args),
        Commands::New(args) => run_new(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
