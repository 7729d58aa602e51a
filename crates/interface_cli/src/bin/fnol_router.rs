//! FNOL Router Binary
//!
//! Routes one extracted claim document and prints the result.
//!
//! # Usage
//!
//! ```bash
//! # Read from a file
//! cargo run --bin fnol-router -- claim.json
//!
//! # Read from stdin with compact output
//! FNOL_PRETTY=false cargo run --bin fnol-router < claim.json
//! ```
//!
//! # Environment Variables
//!
//! * `FNOL_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `FNOL_LOG_FORMAT` - Log format: text or json (default: text)
//! * `FNOL_FAST_TRACK_THRESHOLD` - Fast track damage threshold (default: 25000)
//! * `FNOL_PRETTY` - Pretty-print the result (default: true)
//!
//! `RUST_LOG` takes precedence over `FNOL_LOG_LEVEL`. Logs go to stderr.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Context;
use interface_cli::{run, CliConfig, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config);

    let stdout = io::stdout();
    let result = match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "Reading claim document");
            let file = File::open(&path).with_context(|| format!("Failed to open {path}"))?;
            run(&config, BufReader::new(file), stdout.lock())
        }
        None => {
            tracing::info!("Reading claim document from stdin");
            run(&config, io::stdin().lock(), stdout.lock())
        }
    };

    result.context("Failed to route claim")?;
    Ok(())
}

/// Initializes the tracing subscriber, writing to stderr.
///
/// `RUST_LOG` wins over the configured level; an unparseable level falls
/// back to `info`.
fn init_tracing(config: &CliConfig) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    match config.log_format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr),
            )
            .init(),
    }
}
