//! Claim data model
//!
//! The structured record produced by document extraction. The shape is
//! closed: every field must be present on the wire, and absence is encoded
//! only as an explicit `null`. Unknown keys are rejected.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ClaimError;

/// Deserializes a nullable field whose key is nevertheless required.
///
/// Using `deserialize_with` turns off serde's implicit `None` for a missing
/// `Option` key, so a missing key becomes a schema error.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}

/// Complete extracted claim record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClaimData {
    pub policy_information: PolicyInformation,
    pub incident_information: IncidentInformation,
    pub involved_parties: InvolvedParties,
    pub asset_details: AssetDetails,
    pub mandatory_fields: MandatoryFields,
}

/// Policy section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PolicyInformation {
    #[serde(deserialize_with = "nullable")]
    pub policy_number: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub policyholder_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub effective_dates: Option<EffectiveDates>,
}

/// Policy effective period as written in the document
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EffectiveDates {
    #[serde(deserialize_with = "nullable")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub end_date: Option<String>,
}

/// Incident section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct IncidentInformation {
    #[serde(deserialize_with = "nullable")]
    pub incident_date: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub incident_time: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub incident_location: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub incident_description: Option<String>,
}

/// Parties named in the notice
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InvolvedParties {
    #[serde(deserialize_with = "nullable")]
    pub claimant: Option<Claimant>,
    #[serde(deserialize_with = "nullable")]
    pub third_parties: Option<Vec<ThirdParty>>,
}

/// The person making the claim
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Claimant {
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub contact_details: Option<ClaimantContact>,
}

/// Claimant contact details
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClaimantContact {
    #[serde(deserialize_with = "nullable")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub email: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub address: Option<String>,
}

/// Another party involved in the incident (witness, other driver, ...)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThirdParty {
    #[serde(deserialize_with = "nullable")]
    pub name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub role: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub contact_details: Option<ThirdPartyContact>,
}

/// Third-party contact details
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThirdPartyContact {
    #[serde(deserialize_with = "nullable")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub email: Option<String>,
}

/// Damaged asset
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AssetDetails {
    #[serde(deserialize_with = "nullable")]
    pub asset_type: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub asset_id: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub estimated_damage: Option<f64>,
}

/// Fields the intake process always asks for
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MandatoryFields {
    #[serde(deserialize_with = "nullable")]
    pub claim_type: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub attachments: Option<Vec<String>>,
    #[serde(deserialize_with = "nullable")]
    pub initial_estimate: Option<f64>,
}

impl ClaimData {
    /// Parses a claim record from JSON text, rejecting non-conforming shapes
    pub fn from_json_str(json: &str) -> Result<Self, ClaimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts an already-parsed JSON value, rejecting non-conforming shapes
    pub fn from_value(value: Value) -> Result<Self, ClaimError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Damage amount used for decisions: the asset's estimated damage,
    /// falling back to the initial estimate
    pub fn effective_damage(&self) -> Option<f64> {
        self.asset_details
            .estimated_damage
            .or(self.mandatory_fields.initial_estimate)
    }

    /// Incident description, if any
    pub fn incident_description(&self) -> Option<&str> {
        self.incident_information.incident_description.as_deref()
    }

    /// Claim type, if any
    pub fn claim_type(&self) -> Option<&str> {
        self.mandatory_fields.claim_type.as_deref()
    }
}
