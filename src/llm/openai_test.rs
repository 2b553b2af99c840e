use super::*;

#[test]
fn parse_text_response() {
    let json = serde_json::json!({
        "model": "gpt-4",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": "backend-api" },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 2 }
    })
    .to_string();
    assert_eq!(parse_completion_text(&json).unwrap(), "backend-api");
}

#[test]
fn parse_missing_choices_errors() {
    let json = serde_json::json!({ "model": "gpt-4", "choices": [] }).to_string();
    let err = parse_completion_text(&json).unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn parse_null_content_errors() {
    let json = serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": null } }]
    })
    .to_string();
    assert!(parse_completion_text(&json).is_err());
}

#[test]
fn parse_invalid_json_errors() {
    let err = parse_completion_text("not json at all").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}

#[test]
fn client_builds_from_default_config() {
    let client = OpenAiClient::new(LlmConfig::from_env()).unwrap();
    assert!(!client.model().is_empty());
}
