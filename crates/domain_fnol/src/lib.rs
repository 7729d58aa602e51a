//! FNOL Decision Core
//!
//! This crate turns an already-extracted first notice of loss (FNOL) record
//! into a routing decision with a human-readable justification.
//!
//! # Pipeline
//!
//! ```text
//! ClaimData -> Validation -> (missing fields, errors)
//!           -> Routing(ClaimData, missing fields) -> RoutingDecision
//!           -> Explanation(ClaimData, RoutingDecision, missing fields) -> narrative
//! ```
//!
//! Every stage is a pure function over borrowed input. Nothing here performs
//! I/O or keeps state between calls.

pub mod claim;
pub mod fields;
pub mod validation;
pub mod routing;
pub mod explanation;
pub mod processing;
pub mod error;

pub use claim::{
    ClaimData, PolicyInformation, EffectiveDates, IncidentInformation, InvolvedParties,
    Claimant, ClaimantContact, ThirdParty, ThirdPartyContact, AssetDetails, MandatoryFields,
};
pub use fields::{MandatoryField, FieldValue};
pub use validation::{ClaimValidator, ValidationResult, FieldError, validate};
pub use routing::{
    Route, RoutingDecision, RoutingEngine, determine_route,
    FRAUD_INDICATORS, INJURY_CLAIM_TYPES, FAST_TRACK_THRESHOLD,
};
pub use explanation::{ExplanationGenerator, generate_explanation, next_steps, format_field_name};
pub use processing::{ClaimProcessor, ClaimProcessingResult, process_claim};
pub use error::ClaimError;
