//! Gapfill CLI - Command Line Operations for Series Gap Filling
//!
//! This is the operational entry point for the gap-filling library.
//!
//! # Commands
//!
//! - `gapfill fill --input <file>` - Fill the gaps in a sample table
//! - `gapfill gaps --input <file>` - List the gaps in a sample table
//!
//! # Architecture
//!
//! As part of the service layer, this crate orchestrates the adapter and
//! engine layers to provide a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;
mod report;

pub use error::{CliError, Result};

/// Gap-filling interpolation CLI
#[derive(Parser)]
#[command(name = "gapfill")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill the gaps in a sample table
    Fill {
        /// Path to the sample table (semicolon-separated, one header line)
        #[arg(short, long)]
        input: String,

        /// Fill strategy (linear, quadratic, quadratic-fallback)
        #[arg(short, long, default_value = "quadratic-fallback")]
        strategy: String,

        /// Quadratic candidate policy (side-balanced, global-nearest)
        #[arg(short, long, default_value = "side-balanced")]
        candidates: String,

        /// Output file for the JSON report (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (json, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List the gaps in a sample table
    Gaps {
        /// Path to the sample table (semicolon-separated, one header line)
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Fill {
            input,
            strategy,
            candidates,
            output,
            format,
        } => commands::fill::run(&input, &strategy, &candidates, output.as_deref(), &format),
        Commands::Gaps { input } => commands::gaps::run(&input),
    }
}
