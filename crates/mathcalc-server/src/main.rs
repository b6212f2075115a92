//! mathcalc-server — HTTP API for arbitrary-precision pow, Fibonacci and
//! factorial with a SQLite audit log.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use mathcalc_server::{router, AppState, LogMode};

/// MathCalc HTTP API server.
#[derive(Parser, Debug)]
#[command(name = "mathcalc-server", version, about)]
struct ServerConfig {
    /// Bind address.
    #[arg(long, default_value = "127.0.0.1:8080", env = "MATHCALC_ADDR")]
    addr: String,

    /// SQLite database path for the computation audit log.
    #[arg(long, default_value = "computations.sqlite3", env = "MATHCALC_DB")]
    database: PathBuf,

    /// Fail requests whose audit-log insert fails.
    #[arg(long)]
    strict_logging: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ServerConfig::parse();
    let storage = mathcalc_store::Storage::open(&config.database)?;
    let state = Arc::new(AppState {
        engine: mathcalc_core::Engine::new(),
        storage,
        log_mode: if config.strict_logging {
            LogMode::Strict
        } else {
            LogMode::BestEffort
        },
    });

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!(addr = %config.addr, db = %config.database.display(), "mathcalc-server listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
