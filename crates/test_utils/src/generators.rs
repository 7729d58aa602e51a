//! Property-Based Test Generators
//!
//! Provides proptest strategies for claim records and their parts. Every
//! strategy documents which routing conditions its values can trigger.

use domain_fnol::{ClaimData, MandatoryField, FAST_TRACK_THRESHOLD, FRAUD_INDICATORS, INJURY_CLAIM_TYPES};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};

use crate::builders::ClaimDataBuilder;

/// Incident descriptions free of fraud indicators
pub const CLEAN_DESCRIPTIONS: &[&str] = &[
    "Rear-ended at a stop light while waiting to turn left",
    "Hail storm dented the roof and cracked the windshield",
    "Pipe burst in the upstairs bathroom and flooded the kitchen",
    "Tree branch fell on the parked car during high winds",
    "Kitchen fire spread to the cabinets before it was put out",
    "Minor collision in a parking lot, bumper and headlight damaged",
];

/// Claim types free of injury keywords
pub const NON_INJURY_CLAIM_TYPES: &[&str] = &[
    "property damage",
    "auto collision",
    "theft",
    "water damage",
    "fire damage",
    "vandalism",
    "windstorm",
];

/// Words placed before an injury keyword in generated claim types
pub const INJURY_PREFIXES: &[&str] = &["", "auto ", "workplace ", "minor "];

/// Randomly upper- or lower-cases each character of a fixed term
pub fn mixed_case_strategy(term: &'static str) -> impl Strategy<Value = String> {
    proptest::collection::vec(any::<bool>(), term.chars().count()).prop_map(move |flags| {
        term.chars()
            .zip(flags)
            .map(|(ch, upper)| {
                if upper {
                    ch.to_ascii_uppercase()
                } else {
                    ch.to_ascii_lowercase()
                }
            })
            .collect()
    })
}

/// Strategy for descriptions that contain no fraud indicator
pub fn clean_description_strategy() -> impl Strategy<Value = String> {
    select(CLEAN_DESCRIPTIONS).prop_map(str::to_string)
}

/// Strategy for descriptions embedding a fraud indicator in any letter case
pub fn fraud_description_strategy() -> impl Strategy<Value = String> {
    (
        clean_description_strategy(),
        select(FRAUD_INDICATORS).prop_flat_map(mixed_case_strategy),
        any::<bool>(),
    )
        .prop_map(|(clean, indicator, before)| {
            if before {
                format!("{indicator} {clean}")
            } else {
                format!("{clean}, looks {indicator}")
            }
        })
}

/// Strategy for claim types without injury keywords
pub fn non_injury_claim_type_strategy() -> impl Strategy<Value = String> {
    select(NON_INJURY_CLAIM_TYPES).prop_map(str::to_string)
}

/// Strategy for claim types embedding an injury keyword in any letter case
pub fn injury_claim_type_strategy() -> impl Strategy<Value = String> {
    (
        select(INJURY_CLAIM_TYPES).prop_flat_map(mixed_case_strategy),
        select(INJURY_PREFIXES),
    )
        .prop_map(|(keyword, prefix)| format!("{prefix}{keyword}"))
}

/// Strategy for amounts strictly below the fast track threshold
pub fn fast_track_amount_strategy() -> impl Strategy<Value = f64> {
    1.0f64..FAST_TRACK_THRESHOLD
}

/// Strategy for amounts at or above the fast track threshold
pub fn standard_amount_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(FAST_TRACK_THRESHOLD),
        FAST_TRACK_THRESHOLD..10_000_000.0f64,
    ]
}

/// Strategy for any non-zero positive amount
pub fn positive_amount_strategy() -> impl Strategy<Value = f64> {
    1.0f64..10_000_000.0f64
}

/// Strategy for non-empty sets of mandatory fields, in declared order
pub fn missing_fields_strategy() -> impl Strategy<Value = Vec<MandatoryField>> {
    subsequence(MandatoryField::ALL.to_vec(), 1..=MandatoryField::ALL.len())
}

/// Strategy for complete claims with no fraud wording and no injury claim
/// type. Their route depends only on the damage amount.
pub fn complete_clean_claim_strategy() -> impl Strategy<Value = ClaimData> {
    (
        clean_description_strategy(),
        non_injury_claim_type_strategy(),
        positive_amount_strategy(),
    )
        .prop_map(|(description, claim_type, amount)| {
            ClaimDataBuilder::complete()
                .incident_description(description)
                .claim_type(claim_type)
                .estimated_damage(amount)
                .build()
        })
}

/// Strategy for arbitrary claims: any description, claim type, amounts and
/// any subset of missing mandatory fields
pub fn arbitrary_claim_strategy() -> impl Strategy<Value = ClaimData> {
    (
        prop_oneof![clean_description_strategy(), fraud_description_strategy()],
        prop_oneof![non_injury_claim_type_strategy(), injury_claim_type_strategy()],
        proptest::option::of(positive_amount_strategy()),
        proptest::option::of(positive_amount_strategy()),
        subsequence(MandatoryField::ALL.to_vec(), 0..=MandatoryField::ALL.len()),
    )
        .prop_map(|(description, claim_type, estimated, initial, missing)| {
            let mut builder = ClaimDataBuilder::complete()
                .incident_description(description)
                .claim_type(claim_type)
                .no_estimated_damage();
            if let Some(amount) = estimated {
                builder = builder.estimated_damage(amount);
            }
            if let Some(amount) = initial {
                builder = builder.initial_estimate(amount);
            }
            builder.without_all(&missing).build()
        })
}
