//! Seeder CLI entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use seeder_cli::cli::Cli;
use seeder_cli::commands;

#[tokio::main]
async fn main() {
    // Load .env.local if it exists (for SEEDER_TOKEN etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt().with_env_filter(filter).with_target(false).init();

    let result = commands::run(&cli)
        .await
        .and_then(|summary| Ok((commands::render(&summary, cli.format)?, summary)));

    match result {
        Ok((output, summary)) => {
            println!("{}", output);
            std::process::exit(commands::exit_code(&summary));
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
