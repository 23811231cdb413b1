mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use cronpat_core::{config, Config, LogConfig};

use crate::cli::{CliArgs, Command};

fn main() -> Result<()> {
    config::load_dotenv();
    let log = LogConfig::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.filter)),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();
    config.log_summary();

    let args = CliArgs::parse();

    // Flags override the environment config.
    let mut matching = config.matching.clone();
    if let Some(day_match) = args.day_match {
        matching.day_match = day_match;
    }

    let outcome = match args.command {
        Command::Check { expression, json } => commands::check(&expression, &matching, json)?,
        Command::Explain { expression } => commands::explain(&expression, &matching)?,
        Command::Matches {
            expression,
            at,
            ignore_second,
        } => {
            if ignore_second {
                matching.match_second = false;
            }
            commands::matches(&expression, at.as_deref(), &matching)?
        }
    };

    print!("{}", outcome.output);
    if !outcome.success {
        std::process::exit(1);
    }
    Ok(())
}
