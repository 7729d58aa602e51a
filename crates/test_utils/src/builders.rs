//! Test Data Builders
//!
//! Provides a builder for claim records so tests can state only the fields
//! they care about.

use domain_fnol::{
    ClaimData, Claimant, ClaimantContact, EffectiveDates, MandatoryField, ThirdParty,
    ThirdPartyContact,
};
use fake::faker::address::en::StreetName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;

use crate::fixtures::ClaimFixtures;

/// Builder for constructing test claim records
#[derive(Debug, Clone)]
pub struct ClaimDataBuilder {
    data: ClaimData,
}

impl Default for ClaimDataBuilder {
    fn default() -> Self {
        Self::complete()
    }
}

impl From<ClaimData> for ClaimDataBuilder {
    fn from(data: ClaimData) -> Self {
        Self { data }
    }
}

impl ClaimDataBuilder {
    /// Starts from a complete, unremarkable claim
    pub fn complete() -> Self {
        Self {
            data: ClaimFixtures::complete_property_claim(),
        }
    }

    /// Starts from a claim where every leaf is null
    pub fn empty() -> Self {
        Self {
            data: ClaimFixtures::empty_claim(),
        }
    }

    /// Sets the policy number
    pub fn policy_number(mut self, value: impl Into<String>) -> Self {
        self.data.policy_information.policy_number = Some(value.into());
        self
    }

    /// Sets the policyholder name
    pub fn policyholder_name(mut self, value: impl Into<String>) -> Self {
        self.data.policy_information.policyholder_name = Some(value.into());
        self
    }

    /// Sets the policy effective period
    pub fn effective_dates(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.data.policy_information.effective_dates = Some(EffectiveDates {
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
        });
        self
    }

    /// Clears the whole effective period
    pub fn no_effective_dates(mut self) -> Self {
        self.data.policy_information.effective_dates = None;
        self
    }

    /// Sets the incident date
    pub fn incident_date(mut self, value: impl Into<String>) -> Self {
        self.data.incident_information.incident_date = Some(value.into());
        self
    }

    /// Sets the incident location
    pub fn incident_location(mut self, value: impl Into<String>) -> Self {
        self.data.incident_information.incident_location = Some(value.into());
        self
    }

    /// Sets the incident description
    pub fn incident_description(mut self, value: impl Into<String>) -> Self {
        self.data.incident_information.incident_description = Some(value.into());
        self
    }

    /// Sets the claimant's name, creating the claimant record if needed
    pub fn claimant_name(mut self, value: impl Into<String>) -> Self {
        self.data
            .involved_parties
            .claimant
            .get_or_insert_with(Claimant::default)
            .name = Some(value.into());
        self
    }

    /// Sets the claim type
    pub fn claim_type(mut self, value: impl Into<String>) -> Self {
        self.data.mandatory_fields.claim_type = Some(value.into());
        self
    }

    /// Sets the asset's estimated damage
    pub fn estimated_damage(mut self, amount: f64) -> Self {
        self.data.asset_details.estimated_damage = Some(amount);
        self
    }

    /// Clears the asset's estimated damage
    pub fn no_estimated_damage(mut self) -> Self {
        self.data.asset_details.estimated_damage = None;
        self
    }

    /// Sets the initial estimate
    pub fn initial_estimate(mut self, amount: f64) -> Self {
        self.data.mandatory_fields.initial_estimate = Some(amount);
        self
    }

    /// Nulls out a mandatory field
    pub fn without(mut self, field: MandatoryField) -> Self {
        let data = &mut self.data;
        match field {
            MandatoryField::PolicyNumber => data.policy_information.policy_number = None,
            MandatoryField::PolicyholderName => data.policy_information.policyholder_name = None,
            MandatoryField::IncidentDate => data.incident_information.incident_date = None,
            MandatoryField::IncidentLocation => data.incident_information.incident_location = None,
            MandatoryField::IncidentDescription => {
                data.incident_information.incident_description = None
            }
            MandatoryField::Claimant => data.involved_parties.claimant = None,
            MandatoryField::ClaimType => data.mandatory_fields.claim_type = None,
            MandatoryField::InitialEstimate => data.mandatory_fields.initial_estimate = None,
        }
        self
    }

    /// Nulls out each of the given mandatory fields
    pub fn without_all(self, fields: &[MandatoryField]) -> Self {
        fields.iter().fold(self, |builder, field| builder.without(*field))
    }

    /// Adds a third party with the given role and randomly generated details
    pub fn random_third_party(mut self, role: impl Into<String>) -> Self {
        let party = ThirdParty {
            name: Some(Name().fake()),
            role: Some(role.into()),
            contact_details: Some(ThirdPartyContact {
                phone: Some(PhoneNumber().fake()),
                email: Some(SafeEmail().fake()),
            }),
        };
        self.data
            .involved_parties
            .third_parties
            .get_or_insert_with(Vec::new)
            .push(party);
        self
    }

    /// Replaces the claimant with a randomly generated one
    pub fn random_claimant(mut self) -> Self {
        let street: String = StreetName().fake();
        self.data.involved_parties.claimant = Some(Claimant {
            name: Some(Name().fake()),
            contact_details: Some(ClaimantContact {
                phone: Some(PhoneNumber().fake()),
                email: Some(SafeEmail().fake()),
                address: Some(format!("{} {}", (1..999).fake::<u32>(), street)),
            }),
        });
        self
    }

    /// Builds the claim record
    pub fn build(self) -> ClaimData {
        self.data
    }
}
