//! mathcalc — arbitrary-precision pow, Fibonacci and factorial from the
//! terminal, with a SQLite audit log.

use anyhow::Result;

use mathcalc_cli::config::AppConfig;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = AppConfig::parse();
    mathcalc_cli::run(&config)
}
