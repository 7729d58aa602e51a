//! FNOL domain errors

use thiserror::Error;

/// Errors that can occur at the edges of the decision core.
///
/// The decision stages themselves are total over schema-conforming input;
/// these errors cover rejecting malformed input and invalid construction.
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Claim data does not conform to the extraction schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid fast track threshold: {0}")]
    InvalidThreshold(f64),
}
