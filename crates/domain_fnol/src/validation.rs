//! Claim validation rules
//!
//! Checks an extracted claim for completeness and field-level correctness.
//!
//! # Validation Rules
//!
//! ## Completeness
//! - Each of the eight mandatory fields must resolve to a non-empty,
//!   non-zero value (see [`MandatoryField`])
//!
//! ## Amounts
//! - `assetDetails.estimatedDamage` and `mandatoryFields.initialEstimate`,
//!   when present, must be finite and non-negative
//!
//! ## Dates
//! - `incidentInformation.incidentDate` and both policy effective dates,
//!   when present, must be real calendar dates
//!
//! Errors are informational. Only the missing fields take part in routing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::is_calendar_date;

use crate::claim::ClaimData;
use crate::fields::MandatoryField;

const ESTIMATED_DAMAGE_PATH: &str = "assetDetails.estimatedDamage";
const INITIAL_ESTIMATE_PATH: &str = "mandatoryFields.initialEstimate";
const INCIDENT_DATE_PATH: &str = "incidentInformation.incidentDate";
const START_DATE_PATH: &str = "policyInformation.effectiveDates.startDate";
const END_DATE_PATH: &str = "policyInformation.effectiveDates.endDate";

/// A field-level problem found during validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} must be a valid number")]
    NotANumber(&'static str),

    #[error("{0} cannot be negative")]
    Negative(&'static str),

    #[error("{0} must be a valid date")]
    InvalidDate(&'static str),
}

/// Result of claim validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff nothing is missing and no field errors were found
    pub is_valid: bool,
    /// Dot-paths of missing mandatory fields, in declared order
    pub missing_fields: Vec<String>,
    /// Human-readable field errors
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Builds a result, deriving `is_valid` from the two lists
    pub fn new(missing_fields: Vec<String>, errors: Vec<String>) -> Self {
        Self {
            is_valid: missing_fields.is_empty() && errors.is_empty(),
            missing_fields,
            errors,
        }
    }

    /// Returns true if any mandatory field is missing
    pub fn has_missing_fields(&self) -> bool {
        !self.missing_fields.is_empty()
    }
}

/// Validator for extracted claim records
///
/// # Examples
///
/// ```rust
/// use domain_fnol::claim::ClaimData;
/// use domain_fnol::validation::ClaimValidator;
///
/// let result = ClaimValidator::validate(&ClaimData::default());
/// assert!(!result.is_valid);
/// assert_eq!(result.missing_fields.len(), 8);
/// ```
pub struct ClaimValidator;

impl ClaimValidator {
    /// Validates a claim record. Never fails; every problem is reported in
    /// the returned result.
    pub fn validate(data: &ClaimData) -> ValidationResult {
        let missing_fields = Self::missing_fields(data)
            .map(|field| field.path().to_string())
            .collect();

        let mut errors = Vec::new();
        Self::validate_amounts(data, &mut errors);
        Self::validate_dates(data, &mut errors);

        ValidationResult::new(
            missing_fields,
            errors.iter().map(ToString::to_string).collect(),
        )
    }

    /// Mandatory fields missing from the record, in declared order
    pub fn missing_fields(data: &ClaimData) -> impl Iterator<Item = MandatoryField> + '_ {
        MandatoryField::ALL
            .into_iter()
            .filter(move |field| field.is_missing_in(data))
    }

    fn validate_amounts(data: &ClaimData, errors: &mut Vec<FieldError>) {
        let amounts = [
            (ESTIMATED_DAMAGE_PATH, data.asset_details.estimated_damage),
            (INITIAL_ESTIMATE_PATH, data.mandatory_fields.initial_estimate),
        ];

        for (path, value) in amounts {
            match value {
                Some(amount) if !amount.is_finite() => errors.push(FieldError::NotANumber(path)),
                Some(amount) if amount < 0.0 => errors.push(FieldError::Negative(path)),
                _ => {}
            }
        }
    }

    fn validate_dates(data: &ClaimData, errors: &mut Vec<FieldError>) {
        let effective_dates = data.policy_information.effective_dates.as_ref();
        let dates = [
            (INCIDENT_DATE_PATH, data.incident_information.incident_date.as_deref()),
            (START_DATE_PATH, effective_dates.and_then(|d| d.start_date.as_deref())),
            (END_DATE_PATH, effective_dates.and_then(|d| d.end_date.as_deref())),
        ];

        for (path, value) in dates {
            if let Some(date) = value {
                if !is_calendar_date(date) {
                    errors.push(FieldError::InvalidDate(path));
                }
            }
        }
    }
}

/// Validates a claim record with the default validator
pub fn validate(data: &ClaimData) -> ValidationResult {
    ClaimValidator::validate(data)
}
