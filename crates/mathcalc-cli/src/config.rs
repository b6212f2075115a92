//! CLI argument surface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// mathcalc — arbitrary-precision pow, Fibonacci and factorial.
#[derive(Parser, Debug)]
#[command(name = "mathcalc", version, about)]
pub struct AppConfig {
    /// SQLite database path for the computation audit log.
    #[arg(
        long,
        global = true,
        default_value = "computations.sqlite3",
        env = "MATHCALC_DB"
    )]
    pub database: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute base^exp.
    Pow {
        /// Integer base.
        #[arg(short, long, allow_hyphen_values = true)]
        base: i64,

        /// Non-negative integer exponent.
        #[arg(short, long = "exp", allow_hyphen_values = true)]
        exponent: i64,

        /// Pretty table output.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Compute the n-th Fibonacci number.
    Fib {
        /// Index (n >= 0).
        #[arg(allow_hyphen_values = true)]
        n: i64,

        /// Pretty table output.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Compute n! (factorial).
    Fact {
        /// Argument (n >= 0).
        #[arg(allow_hyphen_values = true)]
        n: i64,

        /// Pretty table output.
        #[arg(short, long)]
        verbose: bool,
    },
    /// Show the most recent logged computations.
    History {
        /// Maximum rows to display.
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        AppConfig::command().debug_assert();
    }

    #[test]
    fn negative_values_parse() {
        let config =
            AppConfig::try_parse_from(["mathcalc", "pow", "--base", "-2", "--exp", "-1"]).unwrap();
        match config.command {
            Command::Pow { base, exponent, .. } => {
                assert_eq!(base, -2);
                assert_eq!(exponent, -1);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let config = AppConfig::try_parse_from(["mathcalc", "fib", "-1"]).unwrap();
        assert!(matches!(config.command, Command::Fib { n: -1, .. }));
    }

    #[test]
    fn history_default_limit() {
        let config = AppConfig::try_parse_from(["mathcalc", "history"]).unwrap();
        assert!(matches!(config.command, Command::History { limit: 10 }));
    }
}
