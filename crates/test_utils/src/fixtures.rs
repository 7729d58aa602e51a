//! Pre-built Test Fixtures
//!
//! Provides ready-to-use claim records for the test suite. These fixtures
//! are fixed and predictable; use the builders for variations.

use domain_fnol::{
    AssetDetails, ClaimData, Claimant, ClaimantContact, EffectiveDates, IncidentInformation,
    InvolvedParties, MandatoryFields, PolicyInformation, ThirdParty, ThirdPartyContact,
};
use once_cell::sync::Lazy;

use crate::builders::ClaimDataBuilder;

/// Fixture for common string values
pub struct StringFixtures;

impl StringFixtures {
    pub fn policy_number() -> &'static str {
        "POL-2024-001234"
    }

    pub fn policyholder_name() -> &'static str {
        "Jane Doe"
    }

    pub fn incident_date() -> &'static str {
        "2024-03-15"
    }

    pub fn incident_location() -> &'static str {
        "Main St & 5th Ave, Springfield"
    }

    pub fn incident_description() -> &'static str {
        "Rear-ended at a stop light while waiting to turn left"
    }

    pub fn claim_type() -> &'static str {
        "property damage"
    }
}

/// Fixture for complete and empty claim records
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A claim with every field populated and nothing suspicious.
    ///
    /// Routes to Fast Track (estimated damage 12,500).
    pub fn complete_property_claim() -> ClaimData {
        ClaimData {
            policy_information: PolicyInformation {
                policy_number: Some(StringFixtures::policy_number().to_string()),
                policyholder_name: Some(StringFixtures::policyholder_name().to_string()),
                effective_dates: Some(EffectiveDates {
                    start_date: Some("2024-01-01".to_string()),
                    end_date: Some("2024-12-31".to_string()),
                }),
            },
            incident_information: IncidentInformation {
                incident_date: Some(StringFixtures::incident_date().to_string()),
                incident_time: Some("14:30".to_string()),
                incident_location: Some(StringFixtures::incident_location().to_string()),
                incident_description: Some(StringFixtures::incident_description().to_string()),
            },
            involved_parties: InvolvedParties {
                claimant: Some(Claimant {
                    name: Some(StringFixtures::policyholder_name().to_string()),
                    contact_details: Some(ClaimantContact {
                        phone: Some("+1-555-010-2000".to_string()),
                        email: Some("jane.doe@example.com".to_string()),
                        address: Some("12 Elm St, Springfield".to_string()),
                    }),
                }),
                third_parties: Some(vec![ThirdParty {
                    name: Some("John Smith".to_string()),
                    role: Some("Other driver".to_string()),
                    contact_details: Some(ThirdPartyContact {
                        phone: Some("+1-555-010-3000".to_string()),
                        email: None,
                    }),
                }]),
            },
            asset_details: AssetDetails {
                asset_type: Some("Vehicle".to_string()),
                asset_id: Some("1HGCM82633A004352".to_string()),
                estimated_damage: Some(12_500.0),
            },
            mandatory_fields: MandatoryFields {
                claim_type: Some(StringFixtures::claim_type().to_string()),
                attachments: Some(vec![
                    "photos.zip".to_string(),
                    "police_report.pdf".to_string(),
                ]),
                initial_estimate: Some(12_000.0),
            },
        }
    }

    /// A claim where every leaf is null
    pub fn empty_claim() -> ClaimData {
        ClaimData::default()
    }

    /// JSON text of [`ClaimFixtures::complete_property_claim`]
    pub fn complete_claim_json() -> &'static str {
        static JSON: Lazy<String> = Lazy::new(|| {
            serde_json::to_string_pretty(&ClaimFixtures::complete_property_claim())
                .expect("fixture serializes")
        });
        JSON.as_str()
    }
}

/// Fixture for the reference routing scenarios
pub struct ScenarioFixtures;

impl ScenarioFixtures {
    /// Fraud wording with every mandatory field present: Investigation
    pub fn staged_accident() -> ClaimData {
        ClaimDataBuilder::complete()
            .incident_description("Staged accident for insurance fraud")
            .build()
    }

    /// Every mandatory field null, no fraud wording: Manual Review
    pub fn all_mandatory_missing() -> ClaimData {
        ClaimDataBuilder::empty().build()
    }

    /// Bodily injury with a large estimate: Specialist Queue
    pub fn bodily_injury() -> ClaimData {
        ClaimDataBuilder::complete()
            .claim_type("bodily injury")
            .estimated_damage(50_000.0)
            .build()
    }

    /// Small property damage: Fast Track
    pub fn small_property_damage() -> ClaimData {
        ClaimDataBuilder::complete()
            .claim_type("property damage")
            .estimated_damage(5_000.0)
            .build()
    }

    /// Large property damage: Standard Processing
    pub fn large_property_damage() -> ClaimData {
        ClaimDataBuilder::complete()
            .claim_type("property damage")
            .estimated_damage(30_000.0)
            .build()
    }
}
