use clap::{Parser, Subcommand};

use cronpat_core::DayMatch;

/// Inspect and test cron-style schedule expressions.
///
/// Accepts 5, 6 or 7 field expressions, optionally joined with `|`.
#[derive(Parser, Debug)]
#[command(name = "cronpat", about = "Inspect and test cron-style schedule expressions")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// How day-of-month and day-of-week combine: all or either
    #[arg(long, global = true, env = "CRONPAT_DAY_MATCH")]
    pub day_match: Option<DayMatch>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate an expression, reporting every error and warning
    Check {
        expression: String,

        /// Print the validation result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the values each field of each alternative matches
    Explain { expression: String },

    /// Test whether an instant matches the expression
    Matches {
        expression: String,

        /// RFC 3339 timestamp (default: now, UTC)
        #[arg(long)]
        at: Option<String>,

        /// Match at minute resolution, skipping the seconds field
        #[arg(long)]
        ignore_second: bool,
    },
}
