//! mdweld CLI - markdown include preprocessor.
//!
//! Provides commands for:
//! - `build`: resolve includes and write the preprocessed docs tree
//! - `check`: validate every include without writing output

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BuildArgs, CheckArgs};
use output::Output;

/// mdweld - markdown include preprocessor.
#[derive(Parser)]
#[command(name = "mdweld", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve includes and write the preprocessed docs tree.
    Build(BuildArgs),
    /// Validate every include without writing output.
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    let verbose = match &cli.command {
        Commands::Build(args) => args.verbose,
        Commands::Check(args) => args.verbose,
    };

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Build(args) => args.execute().map(|summary| {
            format!(
                "Processed {} document(s) into {}",
                summary.documents,
                summary.out_dir.display()
            )
        }),
        Commands::Check(args) => args.execute().map(|summary| {
            format!(
                "Checked {} document(s), all includes resolve",
                summary.documents
            )
        }),
    };

    match result {
        Ok(message) => output.success(&message),
        Err(err) => {
            output.error(&format!("Error: {err}"));
            std::process::exit(1);
        }
    }
}
