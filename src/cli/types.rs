//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default location of the key file, relative to the working directory.
pub const DEFAULT_CREDENTIALS_PATH: &str = "credentials/service-account.json";

/// Top-level parser.
#[derive(Parser)]
#[command(name = "credenv")]
#[command(
    about = "Print the deployment-platform commands that register a service-account key as environment variables",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Preview the variables and print the registration commands
    Export(ExportArgs),

    /// Validate the key file without printing any commands
    Check(CheckArgs),
}

/// Arguments for `credenv export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path to the service-account key file
    #[arg(short, long, default_value = DEFAULT_CREDENTIALS_PATH)]
    pub file: PathBuf,
}

/// Arguments for `credenv check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the service-account key file
    #[arg(short, long, default_value = DEFAULT_CREDENTIALS_PATH)]
    pub file: PathBuf,
}
