//! Claim processing pipeline
//!
//! Chains validation, routing and explanation for one extracted claim and
//! assembles the result handed to response formatting.

use serde::{Deserialize, Serialize};

use crate::claim::ClaimData;
use crate::explanation::ExplanationGenerator;
use crate::routing::{Route, RoutingEngine};
use crate::validation::ClaimValidator;

/// Outcome of processing one claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimProcessingResult {
    /// The claim record exactly as received
    pub extracted_fields: ClaimData,
    pub missing_fields: Vec<String>,
    pub recommended_route: Route,
    /// Human-readable explanation of the decision
    pub reasoning: String,
    pub triggered_rules: Vec<String>,
}

/// Runs the decision stages in order
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClaimProcessor {
    routing: RoutingEngine,
}

impl ClaimProcessor {
    /// Creates a processor with the standard routing rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a processor with a specific routing engine
    pub fn with_routing_engine(routing: RoutingEngine) -> Self {
        Self { routing }
    }

    /// Returns the routing engine in use
    pub fn routing_engine(&self) -> &RoutingEngine {
        &self.routing
    }

    /// Processes an extracted claim.
    ///
    /// Validation errors are logged but do not influence the route; only
    /// missing mandatory fields do.
    pub fn process(&self, data: ClaimData) -> ClaimProcessingResult {
        tracing::debug!("Validating claim data");
        let validation = ClaimValidator::validate(&data);

        if !validation.errors.is_empty() {
            tracing::warn!(errors = ?validation.errors, "Claim data has invalid field values");
        }
        if validation.has_missing_fields() {
            tracing::warn!(
                missing_fields = ?validation.missing_fields,
                "Claim data is missing mandatory fields"
            );
        }

        tracing::debug!("Determining route");
        let decision = self
            .routing
            .determine_route(&data, &validation.missing_fields);

        tracing::info!(
            route = %decision.route,
            priority = decision.priority,
            rules = decision.triggered_rules.len(),
            "Claim routed"
        );

        tracing::debug!("Generating explanation");
        let reasoning =
            ExplanationGenerator::generate(&data, &decision, &validation.missing_fields);

        ClaimProcessingResult {
            extracted_fields: data,
            missing_fields: validation.missing_fields,
            recommended_route: decision.route,
            reasoning,
            triggered_rules: decision.triggered_rules,
        }
    }
}

/// Processes a claim with the standard routing rules
pub fn process_claim(data: ClaimData) -> ClaimProcessingResult {
    ClaimProcessor::new().process(data)
}
