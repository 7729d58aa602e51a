//! FNOL Router Command-Line Interface
//!
//! Reads one extracted claim document, runs it through the decision core and
//! writes the processing result as JSON.
//!
//! # Example
//!
//! ```bash
//! fnol-router claim.json
//! FNOL_FAST_TRACK_THRESHOLD=10000 fnol-router < claim.json
//! ```

pub mod config;
pub mod error;

use std::io::{Read, Write};

use core_kernel::RequestId;
use domain_fnol::{ClaimData, ClaimProcessingResult, ClaimProcessor, RoutingEngine};

pub use config::{CliConfig, LogFormat};
pub use error::CliError;

/// Routes the claim document read from `input` and writes the result to
/// `output`
pub fn run<R: Read, W: Write>(
    config: &CliConfig,
    mut input: R,
    mut output: W,
) -> Result<ClaimProcessingResult, CliError> {
    let request_id = RequestId::new_v7();
    let span = tracing::info_span!("fnol_request", request_id = %request_id);
    let _entered = span.enter();

    let mut document = String::new();
    input.read_to_string(&mut document)?;
    tracing::debug!(bytes = document.len(), "Read claim document");

    let data = ClaimData::from_json_str(&document).inspect_err(|e| {
        tracing::warn!(error = %e, "Claim document rejected");
    })?;

    let engine = RoutingEngine::with_fast_track_threshold(config.fast_track_threshold)?;
    let result = ClaimProcessor::with_routing_engine(engine).process(data);

    if config.pretty {
        serde_json::to_writer_pretty(&mut output, &result)?;
    } else {
        serde_json::to_writer(&mut output, &result)?;
    }
    writeln!(output)?;
    output.flush()?;

    tracing::info!(
        route = %result.recommended_route,
        missing_fields = result.missing_fields.len(),
        "Claim processed"
    );
    Ok(result)
}
