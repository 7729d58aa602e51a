//! Tests for routing explanations

use domain_fnol::{
    determine_route, format_field_name, generate_explanation, next_steps, validate, ClaimData,
    ExplanationGenerator, Route, RoutingDecision,
};
use test_utils::{
    assert_has_line, assert_no_line_starting_with, ClaimDataBuilder, ScenarioFixtures,
};

fn explain(data: &ClaimData) -> String {
    let missing = validate(data).missing_fields;
    let decision = determine_route(data, &missing);
    generate_explanation(data, &decision, &missing)
}

// ============================================================================
// Full Rendering Tests
// ============================================================================

mod rendering {
    use super::*;

    #[test]
    fn test_fast_track_narrative() {
        let expected = "\
This claim has been routed to **Fast Track** based on the following analysis:

**Decision Factors:**
1. Estimated damage ($5000) is below fast track threshold ($25000)

**Claim Summary:**
- Policy Number: POL-2024-001234
- Claim Type: property damage
- Estimated Damage: $5,000
- Incident Date: 2024-03-15
- Location: Main St & 5th Ave, Springfield

**Next Steps:**
This claim qualifies for expedited processing. Settlement decision expected within 2-3 business days.";

        assert_eq!(explain(&ScenarioFixtures::small_property_damage()), expected);
    }

    #[test]
    fn test_manual_review_narrative_for_empty_claim() {
        let expected = "\
This claim has been routed to **Manual Review** based on the following analysis:

**Decision Factors:**
1. Missing mandatory fields: policyInformation.policyNumber, policyInformation.policyholderName, incidentInformation.incidentDate, incidentInformation.incidentLocation, incidentInformation.incidentDescription, involvedParties.claimant, mandatoryFields.claimType, mandatoryFields.initialEstimate

**Claim Summary:**

**⚠️ Missing Required Information:**
- PolicyInformation > PolicyNumber
- PolicyInformation > PolicyholderName
- IncidentInformation > IncidentDate
- IncidentInformation > IncidentLocation
- IncidentInformation > IncidentDescription
- InvolvedParties > Claimant
- MandatoryFields > ClaimType
- MandatoryFields > InitialEstimate

**Next Steps:**
An adjuster will contact the claimant to gather missing information before processing.";

        assert_eq!(explain(&ScenarioFixtures::all_mandatory_missing()), expected);
    }

    #[test]
    fn test_each_route_ends_with_its_next_steps() {
        let scenarios = [
            (ScenarioFixtures::staged_accident(), Route::Investigation),
            (ScenarioFixtures::all_mandatory_missing(), Route::ManualReview),
            (ScenarioFixtures::bodily_injury(), Route::SpecialistQueue),
            (ScenarioFixtures::small_property_damage(), Route::FastTrack),
            (ScenarioFixtures::large_property_damage(), Route::StandardProcessing),
        ];

        for (data, route) in scenarios {
            let narrative = explain(&data);
            assert!(narrative.starts_with(&format!(
                "This claim has been routed to **{}** based on",
                route.label()
            )));
            assert!(narrative.ends_with(&format!("**Next Steps:**\n{}", next_steps(route.label()))));
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let data = ScenarioFixtures::bodily_injury();
        assert_eq!(explain(&data), explain(&data));
    }
}

// ============================================================================
// Claim Summary Tests
// ============================================================================

mod summary {
    use super::*;

    #[test]
    fn test_absent_values_are_omitted() {
        let data = ClaimDataBuilder::empty().claim_type("theft").build();
        let narrative = explain(&data);

        assert_has_line(&narrative, "- Claim Type: theft");
        assert_no_line_starting_with(&narrative, "- Policy Number:");
        assert_no_line_starting_with(&narrative, "- Estimated Damage:");
        assert_no_line_starting_with(&narrative, "- Incident Date:");
        assert_no_line_starting_with(&narrative, "- Location:");
    }

    #[test]
    fn test_empty_text_is_omitted() {
        let data = ClaimDataBuilder::complete().incident_location("").build();

        assert_no_line_starting_with(&explain(&data), "- Location:");
    }

    #[test]
    fn test_damage_falls_back_to_initial_estimate() {
        let data = ClaimDataBuilder::complete()
            .no_estimated_damage()
            .initial_estimate(12_000.0)
            .build();

        assert_has_line(&explain(&data), "- Estimated Damage: $12,000");
    }

    #[test]
    fn test_zero_damage_is_shown() {
        let data = ClaimDataBuilder::complete().estimated_damage(0.0).build();

        assert_has_line(&explain(&data), "- Estimated Damage: $0");
    }

    #[test]
    fn test_fractional_damage_is_grouped_and_rounded() {
        let data = ClaimDataBuilder::complete().estimated_damage(1_234_567.5).build();
        assert_has_line(&explain(&data), "- Estimated Damage: $1,234,567.5");

        let data = ClaimDataBuilder::complete().estimated_damage(999.25).build();
        assert_has_line(&explain(&data), "- Estimated Damage: $999.25");
    }

    #[test]
    fn test_damage_beyond_decimal_range_is_grouped() {
        let data = ClaimDataBuilder::complete().estimated_damage(1e30).build();

        assert_has_line(
            &explain(&data),
            "- Estimated Damage: $1,000,000,000,000,000,000,000,000,000,000",
        );
    }

    #[test]
    fn test_invalid_date_is_echoed_verbatim() {
        let data = ClaimDataBuilder::complete().incident_date("last tuesday").build();

        assert_has_line(&explain(&data), "- Incident Date: last tuesday");
    }
}

// ============================================================================
// Section Presence Tests
// ============================================================================

mod sections {
    use super::*;

    #[test]
    fn test_no_missing_section_for_complete_claim() {
        let narrative = explain(&ScenarioFixtures::large_property_damage());

        assert!(!narrative.contains("Missing Required Information"));
    }

    #[test]
    fn test_missing_section_lists_formatted_paths() {
        let data = ClaimDataBuilder::complete()
            .incident_date("")
            .initial_estimate(0.0)
            .build();
        let narrative = explain(&data);

        assert_has_line(&narrative, "**⚠️ Missing Required Information:**");
        assert_has_line(&narrative, "- IncidentInformation > IncidentDate");
        assert_has_line(&narrative, "- MandatoryFields > InitialEstimate");
    }

    #[test]
    fn test_rules_are_numbered_in_order() {
        let decision = RoutingDecision::new(
            Route::Investigation,
            vec!["first reason".to_string(), "second reason".to_string()],
        );
        let none: [&str; 0] = [];
        let narrative = ExplanationGenerator::generate(&ClaimData::default(), &decision, &none);

        assert!(narrative.contains("**Decision Factors:**\n1. first reason\n2. second reason\n"));
    }

    #[test]
    fn test_no_decision_factors_without_rules() {
        let decision = RoutingDecision::new(Route::StandardProcessing, Vec::new());
        let none: [&str; 0] = [];
        let narrative = ExplanationGenerator::generate(&ClaimData::default(), &decision, &none);

        assert!(!narrative.contains("Decision Factors"));
        assert!(narrative.contains("analysis:\n\n**Claim Summary:**"));
    }
}

// ============================================================================
// Helper Function Tests
// ============================================================================

mod helpers {
    use super::*;

    #[test]
    fn test_format_field_name() {
        assert_eq!(
            format_field_name("policyInformation.policyNumber"),
            "PolicyInformation > PolicyNumber"
        );
        assert_eq!(format_field_name("claimant"), "Claimant");
        assert_eq!(format_field_name("a.b.c"), "A > B > C");
    }

    #[test]
    fn test_next_steps_for_known_routes() {
        assert_eq!(
            next_steps("Investigation"),
            "This claim will be reviewed by the fraud investigation team for further assessment."
        );
        assert_eq!(
            next_steps("Standard Processing"),
            "This claim will follow the standard review process. Expected processing time: 5-7 business days."
        );
    }

    #[test]
    fn test_next_steps_for_unknown_label() {
        assert_eq!(
            next_steps("Express Lane"),
            "This claim will be processed according to standard procedures."
        );
    }
}
