use super::*;
use crate::model::TestType;
use crate::services::settings::{PartialSettings, sanitize_settings};
use crate::state::test_helpers::dummy_case;

fn settings_disabling(types: &[&str]) -> Settings {
    let map: serde_json::Map<String, serde_json::Value> = types
        .iter()
        .map(|&t| (t.to_owned(), serde_json::Value::Bool(true)))
        .collect();
    let partial: PartialSettings =
        serde_json::from_value(serde_json::json!({ "disabledTestTypes": map })).unwrap();
    sanitize_settings(partial)
}

fn mixed_cases() -> Vec<TestCase> {
    let mut cases = Vec::new();
    for i in 0..4 {
        cases.push(dummy_case(TestType::Unit, &format!("unit {i}")));
    }
    for i in 0..3 {
        cases.push(dummy_case(TestType::Integration, &format!("integration {i}")));
    }
    for i in 0..3 {
        cases.push(dummy_case(TestType::Feature, &format!("feature {i}")));
    }
    cases.push(dummy_case(TestType::Performance, "performance 0"));
    for i in 0..3 {
        cases.push(dummy_case(TestType::Manual, &format!("manual {i}")));
    }
    cases
}

#[test]
fn no_disabled_types_is_identity_by_content() {
    let cases = mixed_cases();
    let filtered = filter_by_settings(&cases, &Settings::default());
    assert_eq!(filtered.len(), cases.len());
    for (a, b) in filtered.iter().zip(cases.iter()) {
        assert_eq!(a.test_name, b.test_name);
        assert_eq!(a.test_type, b.test_type);
    }
}

#[test]
fn disabling_manual_drops_three_of_fourteen() {
    let cases = mixed_cases();
    assert_eq!(cases.len(), 14);
    let filtered = filter_by_settings(&cases, &settings_disabling(&["manual"]));
    assert_eq!(filtered.len(), 11);
    assert!(filtered.iter().all(|tc| tc.test_type != TestType::Manual));
}

#[test]
fn filtering_is_idempotent() {
    let settings = settings_disabling(&["manual", "performance"]);
    let once = filter_by_settings(&mixed_cases(), &settings);
    let twice = filter_by_settings(&once, &settings);
    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.test_name, b.test_name);
    }
}

#[test]
fn disabling_everything_empties_the_list() {
    let settings = settings_disabling(&["unit", "integration", "feature", "performance", "manual"]);
    let filtered = filter_by_settings(&mixed_cases(), &settings);
    assert!(filtered.is_empty());
}

#[test]
fn filtering_preserves_order() {
    let filtered = filter_by_settings(&mixed_cases(), &settings_disabling(&["unit"]));
    assert_eq!(filtered[0].test_name, "integration 0");
    assert_eq!(filtered.last().unwrap().test_name, "manual 2");
}
