//! Credenv CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use credenv::cli::{Cli, Commands};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export(args) => credenv::cli::commands::export::execute(&args, cli.json),
        Commands::Check(args) => credenv::cli::commands::check::execute(&args, cli.json),
    };

    if let Err(err) = result {
        credenv::cli::handle_error(&err, cli.json);
    }
}
