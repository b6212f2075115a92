//! # mathcalc-cli
//!
//! Command-line interface for arbitrary-precision pow, Fibonacci and
//! factorial. Every computation is persisted to the SQLite audit log
//! before it is printed; `history` renders the most recent rows.

pub mod config;
pub mod output;

use anyhow::{Context, Result};

use mathcalc_core::{compute, ComputeRequest, Engine};
use mathcalc_store::Storage;

use config::{AppConfig, Command};

/// Run one CLI invocation.
pub fn run(config: &AppConfig) -> Result<()> {
    let storage = Storage::open(&config.database)
        .with_context(|| format!("opening database {}", config.database.display()))?;

    match config.command {
        Command::Pow {
            base,
            exponent,
            verbose,
        } => run_compute(&storage, &ComputeRequest::Pow { base, exponent }, verbose),
        Command::Fib { n, verbose } => run_compute(&storage, &ComputeRequest::Fib { n }, verbose),
        Command::Fact { n, verbose } => run_compute(&storage, &ComputeRequest::Fact { n }, verbose),
        Command::History { limit } => run_history(&storage, limit),
    }
}

fn run_compute(storage: &Storage, req: &ComputeRequest, verbose: bool) -> Result<()> {
    let engine = Engine::new();
    let record = compute(&engine, req)?;
    storage
        .log(
            req.op().as_str(),
            &req.params_json(),
            &record.result.to_string(),
        )
        .context("logging computation")?;
    output::print_record(&record, verbose);
    Ok(())
}

fn run_history(storage: &Storage, limit: u32) -> Result<()> {
    let rows = storage.recent(limit)?;
    if rows.is_empty() {
        println!("No computations found.");
        return Ok(());
    }
    output::print_history(&rows);
    Ok(())
}
