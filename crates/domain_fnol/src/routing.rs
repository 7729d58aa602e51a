//! Claim routing rules
//!
//! Assigns every claim to exactly one downstream workflow by evaluating a
//! fixed cascade of business conditions. The first matching condition wins:
//!
//! | Priority | Route               | Condition                                   |
//! |----------|---------------------|---------------------------------------------|
//! | 1        | Investigation       | description mentions a fraud indicator      |
//! | 2        | Manual Review       | a mandatory field is missing                |
//! | 3        | Specialist Queue    | claim type mentions injury or medical care  |
//! | 4        | Fast Track          | damage amount below the fast track threshold|
//! | 5        | Standard Processing | none of the above                           |
//!
//! Keyword matching is a case-insensitive substring test.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{Currency, Money};

use crate::claim::ClaimData;
use crate::error::ClaimError;

/// Terms in an incident description that send a claim to investigation
pub const FRAUD_INDICATORS: &[&str] = &[
    "fraud",
    "fraudulent",
    "fake",
    "suspicious",
    "fabricated",
    "staged",
    "false claim",
    "questionable",
    "dishonest",
    "deceptive",
    "misleading",
    "exaggerated",
    "inconsistent story",
    "tampered",
    "altered",
];

/// Terms in a claim type that require a medical specialist
pub const INJURY_CLAIM_TYPES: &[&str] = &[
    "injury",
    "medical",
    "bodily injury",
    "personal injury",
    "health",
    "accident injury",
];

/// Damage amounts strictly below this (USD) qualify for fast track
pub const FAST_TRACK_THRESHOLD: f64 = 25_000.0;

pub(crate) const FRAUD_RULE: &str = "Fraud indicators detected in incident description";
pub(crate) const INJURY_RULE: &str = "Claim type indicates injury or medical attention required";
pub(crate) const STANDARD_RULE: &str = "No special conditions detected, routing to standard processing";

/// Downstream workflow a claim is assigned to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Route {
    #[serde(rename = "Investigation")]
    Investigation,
    #[serde(rename = "Manual Review")]
    ManualReview,
    #[serde(rename = "Specialist Queue")]
    SpecialistQueue,
    #[serde(rename = "Fast Track")]
    FastTrack,
    #[serde(rename = "Standard Processing")]
    StandardProcessing,
}

impl Route {
    /// All routes in priority order
    pub const ALL: [Route; 5] = [
        Route::Investigation,
        Route::ManualReview,
        Route::SpecialistQueue,
        Route::FastTrack,
        Route::StandardProcessing,
    ];

    /// Display label, also used on the wire
    pub fn label(self) -> &'static str {
        match self {
            Route::Investigation => "Investigation",
            Route::ManualReview => "Manual Review",
            Route::SpecialistQueue => "Specialist Queue",
            Route::FastTrack => "Fast Track",
            Route::StandardProcessing => "Standard Processing",
        }
    }

    /// Rank in the cascade, 1 is evaluated first
    pub fn priority(self) -> u8 {
        match self {
            Route::Investigation => 1,
            Route::ManualReview => 2,
            Route::SpecialistQueue => 3,
            Route::FastTrack => 4,
            Route::StandardProcessing => 5,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Route {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.label() == s)
            .ok_or_else(|| ClaimError::UnknownRoute(s.to_string()))
    }
}

/// Outcome of routing a single claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingDecision {
    pub route: Route,
    pub priority: u8,
    /// Conditions that produced the decision, in evaluation order
    pub triggered_rules: Vec<String>,
}

impl RoutingDecision {
    /// Creates a decision for a route, carrying the route's priority
    pub fn new(route: Route, triggered_rules: Vec<String>) -> Self {
        Self {
            route,
            priority: route.priority(),
            triggered_rules,
        }
    }
}

/// Routing engine evaluating the priority cascade
///
/// Holds only the fast track threshold, fixed at construction, so a single
/// engine can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoutingEngine {
    fast_track_threshold: f64,
}

impl Default for RoutingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutingEngine {
    /// Creates an engine with the standard fast track threshold
    pub fn new() -> Self {
        Self {
            fast_track_threshold: FAST_TRACK_THRESHOLD,
        }
    }

    /// Creates an engine with a custom fast track threshold.
    ///
    /// The threshold must be finite and non-negative.
    pub fn with_fast_track_threshold(threshold: f64) -> Result<Self, ClaimError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ClaimError::InvalidThreshold(threshold));
        }
        Ok(Self {
            fast_track_threshold: threshold,
        })
    }

    /// Returns the fast track threshold
    pub fn fast_track_threshold(&self) -> f64 {
        self.fast_track_threshold
    }

    /// Determines the route for a claim
    ///
    /// # Arguments
    ///
    /// * `data` - The extracted claim
    /// * `missing_fields` - Dot-paths of missing mandatory fields, as
    ///   reported by validation
    pub fn determine_route<S: AsRef<str>>(
        &self,
        data: &ClaimData,
        missing_fields: &[S],
    ) -> RoutingDecision {
        if has_fraud_indicators(data) {
            return RoutingDecision::new(Route::Investigation, vec![FRAUD_RULE.to_string()]);
        }

        if !missing_fields.is_empty() {
            let listed = missing_fields
                .iter()
                .map(|field| field.as_ref())
                .collect::<Vec<&str>>()
                .join(", ");
            return RoutingDecision::new(
                Route::ManualReview,
                vec![format!("Missing mandatory fields: {listed}")],
            );
        }

        if is_injury_claim(data) {
            return RoutingDecision::new(Route::SpecialistQueue, vec![INJURY_RULE.to_string()]);
        }

        if let Some(amount) = self.fast_track_amount(data) {
            return RoutingDecision::new(
                Route::FastTrack,
                vec![format!(
                    "Estimated damage (${}) is below fast track threshold (${})",
                    plain_amount(amount),
                    plain_amount(self.fast_track_threshold),
                )],
            );
        }

        RoutingDecision::new(Route::StandardProcessing, vec![STANDARD_RULE.to_string()])
    }

    /// The effective damage amount, if it qualifies for fast track
    fn fast_track_amount(&self, data: &ClaimData) -> Option<f64> {
        data.effective_damage()
            .filter(|amount| *amount < self.fast_track_threshold)
    }
}

/// Determines the route for a claim with the standard threshold
pub fn determine_route<S: AsRef<str>>(data: &ClaimData, missing_fields: &[S]) -> RoutingDecision {
    RoutingEngine::new().determine_route(data, missing_fields)
}

/// Returns true if the incident description mentions a fraud indicator
pub fn has_fraud_indicators(data: &ClaimData) -> bool {
    data.incident_description()
        .is_some_and(|description| contains_any(description, FRAUD_INDICATORS))
}

/// Returns true if the claim type mentions injury or medical care
pub fn is_injury_claim(data: &ClaimData) -> bool {
    data.claim_type()
        .is_some_and(|claim_type| contains_any(claim_type, INJURY_CLAIM_TYPES))
}

fn contains_any(text: &str, terms: &[&str]) -> bool {
    let text = text.to_lowercase();
    terms
        .iter()
        .any(|term| text.contains(term.to_lowercase().as_str()))
}

/// Plain rendering of an amount for rule text. Amounts the decimal type
/// cannot hold, or would round to zero, keep their float rendering.
fn plain_amount(amount: f64) -> String {
    match Money::from_f64(amount, Currency::USD) {
        Ok(money) if amount == 0.0 || !money.is_zero() => money.to_plain_string(),
        _ => amount.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for route in Route::ALL {
            assert_eq!(route.label().parse::<Route>().unwrap(), route);
        }
        assert!("Express".parse::<Route>().is_err());
    }

    #[test]
    fn test_priorities_follow_declaration_order() {
        let priorities: Vec<u8> = Route::ALL.iter().map(|r| r.priority()).collect();
        assert_eq!(priorities, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_contains_any_is_case_insensitive() {
        assert!(contains_any("A STAGED collision", FRAUD_INDICATORS));
        assert!(contains_any("Possibly Altered photos", &["ALTERED"]));
        assert!(!contains_any("rear-ended at a light", FRAUD_INDICATORS));
    }

    #[test]
    fn test_plain_amount_falls_back_for_nan() {
        assert_eq!(plain_amount(5000.0), "5000");
        assert_eq!(plain_amount(f64::NAN), "NaN");
    }

    #[test]
    fn test_plain_amount_keeps_values_outside_decimal_range() {
        assert_eq!(plain_amount(1e-30), "0.000000000000000000000000000001");
        assert_eq!(plain_amount(1e30), "1000000000000000000000000000000");
        assert_eq!(plain_amount(-0.0), "0");
    }

    #[test]
    fn test_rejects_invalid_threshold() {
        assert!(RoutingEngine::with_fast_track_threshold(f64::NAN).is_err());
        assert!(RoutingEngine::with_fast_track_threshold(-1.0).is_err());
        assert!(RoutingEngine::with_fast_track_threshold(0.0).is_ok());
    }
}
