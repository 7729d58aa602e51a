//! Custom Test Assertions
//!
//! Provides assertion helpers for routing outcomes that print the whole
//! decision on failure rather than a bare `left != right`.

use domain_fnol::{MandatoryField, Route, RoutingDecision, ValidationResult};

/// Asserts the decision's route and that its priority matches the route
pub fn assert_route(decision: &RoutingDecision, expected: Route) {
    assert_eq!(
        decision.route, expected,
        "Expected route {expected}, got {} (rules: {:?})",
        decision.route, decision.triggered_rules
    );
    assert_eq!(
        decision.priority,
        expected.priority(),
        "Priority {} does not match route {expected}",
        decision.priority
    );
}

/// Asserts that exactly the given mandatory fields are reported missing,
/// in declared order
pub fn assert_missing_exactly(result: &ValidationResult, expected: &[MandatoryField]) {
    let expected_paths: Vec<&str> = expected.iter().map(|field| field.path()).collect();
    assert_eq!(
        result.missing_fields, expected_paths,
        "Missing fields differ (errors: {:?})",
        result.errors
    );
}

/// Asserts that a narrative contains a line exactly equal to `line`
pub fn assert_has_line(narrative: &str, line: &str) {
    assert!(
        narrative.lines().any(|l| l == line),
        "Line {line:?} not found in explanation:\n{narrative}"
    );
}

/// Asserts that a narrative has no line starting with `prefix`
pub fn assert_no_line_starting_with(narrative: &str, prefix: &str) {
    assert!(
        !narrative.lines().any(|l| l.starts_with(prefix)),
        "Unexpected line starting with {prefix:?} in explanation:\n{narrative}"
    );
}
