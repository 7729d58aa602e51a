//! Routing explanations
//!
//! Renders a fixed-structure narrative for adjusters: the assigned route,
//! the rules that fired, a short claim summary, any missing information and
//! the next step for the route.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use core_kernel::{group_thousands, Currency, Money};

use crate::claim::ClaimData;
use crate::routing::{Route, RoutingDecision};

const FALLBACK_NEXT_STEPS: &str =
    "This claim will be processed according to standard procedures.";

static NEXT_STEPS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            Route::Investigation.label(),
            "This claim will be reviewed by the fraud investigation team for further assessment.",
        ),
        (
            Route::ManualReview.label(),
            "An adjuster will contact the claimant to gather missing information before processing.",
        ),
        (
            Route::SpecialistQueue.label(),
            "This claim will be assigned to a medical specialist for evaluation and settlement.",
        ),
        (
            Route::FastTrack.label(),
            "This claim qualifies for expedited processing. Settlement decision expected within 2-3 business days.",
        ),
        (
            Route::StandardProcessing.label(),
            "This claim will follow the standard review process. Expected processing time: 5-7 business days.",
        ),
    ])
});

/// Generator for routing explanations
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    /// Generates the explanation for a routing decision
    ///
    /// # Arguments
    ///
    /// * `data` - The extracted claim
    /// * `decision` - The routing decision to explain
    /// * `missing_fields` - Dot-paths of missing mandatory fields
    ///
    /// # Returns
    ///
    /// The narrative, lines joined by `\n`. Each section header is preceded
    /// by a blank line.
    pub fn generate<S: AsRef<str>>(
        data: &ClaimData,
        decision: &RoutingDecision,
        missing_fields: &[S],
    ) -> String {
        let mut parts: Vec<String> = Vec::new();

        parts.push(format!(
            "This claim has been routed to **{}** based on the following analysis:",
            decision.route
        ));

        if !decision.triggered_rules.is_empty() {
            parts.push("\n**Decision Factors:**".to_string());
            parts.extend(
                decision
                    .triggered_rules
                    .iter()
                    .enumerate()
                    .map(|(i, rule)| format!("{}. {}", i + 1, rule)),
            );
        }

        parts.push("\n**Claim Summary:**".to_string());
        Self::push_summary(data, &mut parts);

        if !missing_fields.is_empty() {
            parts.push("\n**⚠️ Missing Required Information:**".to_string());
            parts.extend(
                missing_fields
                    .iter()
                    .map(|field| format!("- {}", format_field_name(field.as_ref()))),
            );
        }

        parts.push("\n**Next Steps:**".to_string());
        parts.push(next_steps(decision.route.label()).to_string());

        parts.join("\n")
    }

    fn push_summary(data: &ClaimData, parts: &mut Vec<String>) {
        let text_line = |label: &str, value: Option<&str>| {
            value
                .filter(|v| !v.is_empty())
                .map(|v| format!("- {label}: {v}"))
        };

        parts.extend(text_line(
            "Policy Number",
            data.policy_information.policy_number.as_deref(),
        ));
        parts.extend(text_line("Claim Type", data.claim_type()));
        parts.extend(
            data.effective_damage()
                .map(|amount| format!("- Estimated Damage: {}", display_amount(amount))),
        );
        parts.extend(text_line(
            "Incident Date",
            data.incident_information.incident_date.as_deref(),
        ));
        parts.extend(text_line(
            "Location",
            data.incident_information.incident_location.as_deref(),
        ));
    }
}

/// Generates an explanation with the default generator
pub fn generate_explanation<S: AsRef<str>>(
    data: &ClaimData,
    decision: &RoutingDecision,
    missing_fields: &[S],
) -> String {
    ExplanationGenerator::generate(data, decision, missing_fields)
}

/// Next-step sentence for a route label; unknown labels get a generic sentence
pub fn next_steps(route_label: &str) -> &'static str {
    NEXT_STEPS
        .get(route_label)
        .copied()
        .unwrap_or(FALLBACK_NEXT_STEPS)
}

/// Formats a dot-path for people: `policyInformation.policyNumber` becomes
/// `PolicyInformation > PolicyNumber`
pub fn format_field_name(path: &str) -> String {
    path.split('.')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" > ")
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn display_amount(amount: f64) -> String {
    Money::from_f64(amount, Currency::USD)
        .map(|money| money.to_string())
        .unwrap_or_else(|_| {
            format!("{}{}", Currency::USD.symbol(), group_thousands(&amount.to_string()))
        })
}
