//! Tests for the command-line front end

use std::collections::HashMap;
use std::io::Cursor;

use config::Environment;
use domain_fnol::Route;
use interface_cli::{run, CliConfig, CliError, LogFormat};
use serde_json::Value;
use test_utils::{ClaimFixtures, ScenarioFixtures};

fn environment(vars: &[(&str, &str)]) -> Environment {
    let source: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    Environment::with_prefix("FNOL").source(Some(source))
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod configuration {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_environment(environment(&[])).unwrap();

        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.fast_track_threshold, 25_000.0);
        assert!(config.pretty);
    }

    #[test]
    fn test_overrides() {
        let config = CliConfig::from_environment(environment(&[
            ("FNOL_LOG_LEVEL", "debug"),
            ("FNOL_LOG_FORMAT", "json"),
            ("FNOL_FAST_TRACK_THRESHOLD", "10000"),
            ("FNOL_PRETTY", "false"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.fast_track_threshold, 10_000.0);
        assert!(!config.pretty);
    }

    #[test]
    fn test_negative_threshold_is_rejected() {
        let result =
            CliConfig::from_environment(environment(&[("FNOL_FAST_TRACK_THRESHOLD", "-5")]));

        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_log_format_is_rejected() {
        let result = CliConfig::from_environment(environment(&[("FNOL_LOG_FORMAT", "xml")]));

        assert!(result.is_err());
    }
}

// ============================================================================
// Run Tests
// ============================================================================

mod running {
    use super::*;

    fn document(data: &domain_fnol::ClaimData) -> String {
        serde_json::to_string(data).unwrap()
    }

    #[test]
    fn test_routes_document_and_writes_result() {
        let mut output = Vec::new();
        let result = run(
            &CliConfig::default(),
            Cursor::new(ClaimFixtures::complete_claim_json()),
            &mut output,
        )
        .unwrap();

        assert_eq!(result.recommended_route, Route::FastTrack);

        let written: Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(written["recommendedRoute"], "Fast Track");
        assert_eq!(
            written["extractedFields"]["policyInformation"]["policyNumber"],
            "POL-2024-001234"
        );
        assert!(written["missingFields"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_demo_documents() {
        let complete = include_str!("../../../demos/complete_claim.json");
        let result = run(&CliConfig::default(), Cursor::new(complete), Vec::new()).unwrap();
        assert_eq!(result.recommended_route, Route::FastTrack);

        let incomplete = include_str!("../../../demos/incomplete_claim.json");
        let result = run(&CliConfig::default(), Cursor::new(incomplete), Vec::new()).unwrap();
        assert_eq!(result.recommended_route, Route::ManualReview);
        assert_eq!(
            result.missing_fields,
            vec![
                "policyInformation.policyholderName",
                "incidentInformation.incidentLocation",
                "involvedParties.claimant",
            ]
        );
    }

    #[test]
    fn test_compact_output_is_one_line() {
        let config = CliConfig {
            pretty: false,
            ..CliConfig::default()
        };
        let mut output = Vec::new();
        run(
            &config,
            Cursor::new(document(&ScenarioFixtures::staged_accident())),
            &mut output,
        )
        .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_configured_threshold_is_applied() {
        let config = CliConfig {
            fast_track_threshold: 1_000.0,
            ..CliConfig::default()
        };
        let result = run(
            &config,
            Cursor::new(document(&ScenarioFixtures::small_property_damage())),
            Vec::new(),
        )
        .unwrap();

        assert_eq!(result.recommended_route, Route::StandardProcessing);
    }

    #[test]
    fn test_invalid_threshold_is_rejected() {
        let config = CliConfig {
            fast_track_threshold: f64::NAN,
            ..CliConfig::default()
        };
        let result = run(
            &config,
            Cursor::new(ClaimFixtures::complete_claim_json()),
            Vec::new(),
        );

        assert!(matches!(result, Err(CliError::Claim(_))));
    }

    #[test]
    fn test_malformed_document_is_rejected() {
        let mut output = Vec::new();
        let result = run(&CliConfig::default(), Cursor::new("{\"policyInformation\": {}}"), &mut output);

        assert!(matches!(result, Err(CliError::Claim(_))));
        assert!(output.is_empty());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let result = run(&CliConfig::default(), Cursor::new(""), Vec::new());

        assert!(matches!(result, Err(CliError::Claim(_))));
    }
}
