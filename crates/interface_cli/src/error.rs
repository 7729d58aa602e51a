//! CLI error handling

use thiserror::Error;

use domain_fnol::ClaimError;

/// Errors raised while routing a claim document
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid claim document: {0}")]
    Claim(#[from] ClaimError),

    #[error("Failed to write result: {0}")]
    Output(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
