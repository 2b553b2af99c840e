use std::sync::Arc;

use super::*;
use crate::llm::LlmError;
use crate::model::TestType;
use crate::state::test_helpers::StubCompletion;

fn sample_response() -> String {
    serde_json::json!({
        "testCases": [
            { "testType": "unit", "testName": "parses valid flags", "priority": "high" },
            { "testType": "manual", "testName": "exploratory pass", "priority": "low" }
        ],
        "testingStrategy": "risk-based",
        "riskAreas": ["flag rollout", "cache staleness"]
    })
    .to_string()
}

// =========================================================================
// extract_json_object
// =========================================================================

#[test]
fn extract_finds_balanced_object() {
    let text = "noise before {\"a\": 1} noise after {\"b\": 2}";
    assert_eq!(extract_json_object(text), Some("{\"a\": 1}"));
}

#[test]
fn extract_handles_nested_objects() {
    let text = "x {\"outer\": {\"inner\": {\"deep\": true}}} y";
    assert_eq!(extract_json_object(text), Some("{\"outer\": {\"inner\": {\"deep\": true}}}"));
}

#[test]
fn extract_ignores_braces_inside_strings() {
    let text = "{\"note\": \"uses { and } literally\"}";
    assert_eq!(extract_json_object(text), Some(text));
}

#[test]
fn extract_handles_escaped_quotes() {
    let text = "{\"note\": \"she said \\\"hi}\\\"\"}";
    assert_eq!(extract_json_object(text), Some(text));
}

#[test]
fn extract_returns_none_without_object() {
    assert_eq!(extract_json_object("no braces here"), None);
    assert_eq!(extract_json_object("{ never closed"), None);
}

// =========================================================================
// parse_generated
// =========================================================================

#[test]
fn parse_direct_json() {
    let run = parse_generated(&sample_response()).unwrap();
    assert_eq!(run.test_cases.len(), 2);
    assert_eq!(run.test_cases[0].test_type, TestType::Unit);
    assert_eq!(run.testing_strategy, "risk-based");
}

#[test]
fn parse_recovers_from_markdown_fences() {
    let wrapped = format!("```json\n{}\n```", sample_response());
    let run = parse_generated(&wrapped).unwrap();
    assert_eq!(run.test_cases.len(), 2);
}

#[test]
fn parse_unrecoverable_text_is_generation_error() {
    let err = parse_generated("I'd be happy to help with test cases!").unwrap_err();
    assert!(matches!(err, WizardError::Generation));
    assert_eq!(err.error_code(), "E_GENERATION");
}

#[test]
fn parse_repaired_but_invalid_object_is_generation_error() {
    let err = parse_generated("prefix {\"testCases\": \"not an array\"} suffix").unwrap_err();
    assert!(matches!(err, WizardError::Generation));
}

// =========================================================================
// generate_test_cases
// =========================================================================

#[tokio::test]
async fn generate_returns_unfiltered_run() {
    let llm: Arc<dyn TextCompletion> = Arc::new(StubCompletion::new(vec![Ok(sample_response())]));
    let answers = vec!["Inputs are flag names".to_string()];
    let run = generate_test_cases(&llm, "sk-test", "A feature-flag REST service", Category::BackendApi, &answers)
        .await
        .unwrap();
    assert_eq!(run.test_cases.len(), 2);
    assert_eq!(run.risk_areas.len(), 2);
}

#[tokio::test]
async fn generate_propagates_service_failure() {
    let llm: Arc<dyn TextCompletion> =
        Arc::new(StubCompletion::new(vec![Err(LlmError::ApiResponse { status: 503, body: String::new() })]));
    let err = generate_test_cases(&llm, "sk-test", "desc", Category::Other, &[])
        .await
        .unwrap_err();
    assert!(matches!(err, WizardError::Service(_)));
}
