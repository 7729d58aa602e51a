//! Mandatory field accessors
//!
//! Each mandatory data point is a variant with a direct accessor into the
//! typed claim record. Iterating [`MandatoryField::ALL`] yields the fields in
//! their declared order, which fixes the order of reported missing fields.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::claim::{ClaimData, Claimant};

/// The eight data points a claim needs before it can skip manual review
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MandatoryField {
    PolicyNumber,
    PolicyholderName,
    IncidentDate,
    IncidentLocation,
    IncidentDescription,
    Claimant,
    ClaimType,
    InitialEstimate,
}

/// Resolved value of a mandatory field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// The field or one of its parents is null
    Null,
    Text(&'a str),
    Amount(f64),
    /// A nested record is present, whatever its contents
    Record(&'a Claimant),
}

impl FieldValue<'_> {
    /// Null, empty text, zero and NaN all count as missing.
    ///
    /// A legitimate zero estimate is therefore reported as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(text) => text.is_empty(),
            FieldValue::Amount(amount) => *amount == 0.0 || amount.is_nan(),
            FieldValue::Record(_) => false,
        }
    }
}

impl MandatoryField {
    /// All mandatory fields in declared order
    pub const ALL: [MandatoryField; 8] = [
        MandatoryField::PolicyNumber,
        MandatoryField::PolicyholderName,
        MandatoryField::IncidentDate,
        MandatoryField::IncidentLocation,
        MandatoryField::IncidentDescription,
        MandatoryField::Claimant,
        MandatoryField::ClaimType,
        MandatoryField::InitialEstimate,
    ];

    /// Dot-path of the field in the wire format
    pub fn path(self) -> &'static str {
        match self {
            MandatoryField::PolicyNumber => "policyInformation.policyNumber",
            MandatoryField::PolicyholderName => "policyInformation.policyholderName",
            MandatoryField::IncidentDate => "incidentInformation.incidentDate",
            MandatoryField::IncidentLocation => "incidentInformation.incidentLocation",
            MandatoryField::IncidentDescription => "incidentInformation.incidentDescription",
            MandatoryField::Claimant => "involvedParties.claimant",
            MandatoryField::ClaimType => "mandatoryFields.claimType",
            MandatoryField::InitialEstimate => "mandatoryFields.initialEstimate",
        }
    }

    /// Looks a field up by its dot-path
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.path() == path)
    }

    /// Reads the field's value from a claim record
    pub fn resolve(self, data: &ClaimData) -> FieldValue<'_> {
        fn text(value: &Option<String>) -> FieldValue<'_> {
            value.as_deref().map_or(FieldValue::Null, FieldValue::Text)
        }

        match self {
            MandatoryField::PolicyNumber => text(&data.policy_information.policy_number),
            MandatoryField::PolicyholderName => text(&data.policy_information.policyholder_name),
            MandatoryField::IncidentDate => text(&data.incident_information.incident_date),
            MandatoryField::IncidentLocation => text(&data.incident_information.incident_location),
            MandatoryField::IncidentDescription => {
                text(&data.incident_information.incident_description)
            }
            MandatoryField::Claimant => data
                .involved_parties
                .claimant
                .as_ref()
                .map_or(FieldValue::Null, FieldValue::Record),
            MandatoryField::ClaimType => text(&data.mandatory_fields.claim_type),
            MandatoryField::InitialEstimate => data
                .mandatory_fields
                .initial_estimate
                .map_or(FieldValue::Null, FieldValue::Amount),
        }
    }

    /// Returns true if the field is missing from the record
    pub fn is_missing_in(self, data: &ClaimData) -> bool {
        self.resolve(data).is_missing()
    }
}

impl fmt::Display for MandatoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        for (i, a) in MandatoryField::ALL.iter().enumerate() {
            for b in &MandatoryField::ALL[i + 1..] {
                assert_ne!(a.path(), b.path());
            }
        }
    }

    #[test]
    fn test_from_path_round_trips() {
        for field in MandatoryField::ALL {
            assert_eq!(MandatoryField::from_path(field.path()), Some(field));
        }
        assert_eq!(MandatoryField::from_path("assetDetails.assetId"), None);
    }

    #[test]
    fn test_empty_claimant_record_is_present() {
        let mut data = ClaimData::default();
        data.involved_parties.claimant = Some(Claimant::default());
        assert!(!MandatoryField::Claimant.is_missing_in(&data));
    }

    #[test]
    fn test_zero_and_nan_estimates_are_missing() {
        assert!(FieldValue::Amount(0.0).is_missing());
        assert!(FieldValue::Amount(-0.0).is_missing());
        assert!(FieldValue::Amount(f64::NAN).is_missing());
        assert!(!FieldValue::Amount(-5.0).is_missing());
    }

    #[test]
    fn test_whitespace_text_is_present() {
        assert!(!FieldValue::Text(" ").is_missing());
        assert!(FieldValue::Text("").is_missing());
    }
}
