use super::*;
use crate::model::{Priority, TestType};
use crate::state::test_helpers::dummy_case;

#[test]
fn csv_starts_with_the_fixed_header() {
    let csv = to_csv(&[]);
    assert_eq!(
        csv,
        "Test Type,Priority,Test Name,Description,Given Context,Test Steps,Expected Outcome,Notes,Setup Required,Teardown Required"
    );
}

#[test]
fn csv_joins_steps_with_pipes() {
    let tc = dummy_case(TestType::Unit, "simple");
    let csv = to_csv(&[tc]);
    let row = csv.lines().nth(1).unwrap();
    assert!(row.contains("arrange | act | assert"));
    assert!(row.starts_with("unit,medium,simple,"));
}

#[test]
fn csv_quotes_fields_containing_commas() {
    let mut tc = dummy_case(TestType::Feature, "login, logout, and refresh");
    tc.description = "plain description".into();
    let csv = to_csv(&[tc]);
    let row = csv.lines().nth(1).unwrap();
    assert!(row.contains("\"login, logout, and refresh\""));
}

#[test]
fn csv_doubles_internal_quotes() {
    let mut tc = dummy_case(TestType::Unit, "handles \"quoted\" input");
    tc.notes = Some("watch the \"edge\" case".into());
    let csv = to_csv(&[tc]);
    let row = csv.lines().nth(1).unwrap();
    assert!(row.contains("\"handles \"\"quoted\"\" input\""));
    assert!(row.contains("\"watch the \"\"edge\"\" case\""));
}

#[test]
fn csv_leaves_plain_fields_unquoted() {
    let tc = dummy_case(TestType::Manual, "plain");
    let csv = to_csv(&[tc]);
    let row = csv.lines().nth(1).unwrap();
    assert!(!row.contains('"'));
}

#[test]
fn csv_empty_optionals_render_as_empty_fields() {
    let tc = dummy_case(TestType::Unit, "no extras");
    let csv = to_csv(&[tc]);
    let row = csv.lines().nth(1).unwrap();
    assert!(row.ends_with(",,,"));
}

#[test]
fn json_export_bundles_analysis_cases_and_timestamp() {
    let mut tc = dummy_case(TestType::Performance, "load spike");
    tc.priority = Priority::High;
    let analysis = Analysis { testing_strategy: "spike first".into(), risk_areas: vec!["autoscaling".into()] };
    let doc = to_json(&analysis, &[tc], "2025-06-01T12:00:00Z");

    assert_eq!(doc["analysis"]["testingStrategy"], "spike first");
    assert_eq!(doc["analysis"]["riskAreas"][0], "autoscaling");
    assert_eq!(doc["testCases"][0]["testName"], "load spike");
    assert_eq!(doc["testCases"][0]["priority"], "high");
    assert_eq!(doc["exportedAt"], "2025-06-01T12:00:00Z");
}
