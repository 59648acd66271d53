use anyhow::Result;
use fcm_request::{FcmError, Target, models::message::MessageSpec};
use serde_json::json;

/// Test: A JSON message with a token list builds a multi-target request
#[test]
fn test_spec_with_token_list() -> Result<()> {
    let spec: MessageSpec = serde_json::from_value(json!({
        "to": ["token-a", "token-b"],
        "notification": { "title": "Hi", "badge": 2 },
        "options": { "priority": 10, "collapse_key": "greeting" },
        "data": { "kind": "hello" }
    }))?;

    let request = spec.into_request()?;
    let body = request.body()?;

    assert_eq!(
        request.target(),
        &Target::Tokens(vec!["token-a".to_string(), "token-b".to_string()])
    );
    assert_eq!(body["message"]["android"]["priority"], json!("HIGH"));
    assert_eq!(body["message"]["android"]["collapse_key"], json!("greeting"));
    assert_eq!(body["message"]["apns"]["payload"]["aps"]["badge"], json!(2));
    assert_eq!(body["message"]["data"], json!({ "kind": "hello" }));

    Ok(())
}

/// Test: Topic shorthands resolve to topic or condition targets
#[test]
fn test_spec_topics() -> Result<()> {
    let single: MessageSpec = serde_json::from_value(json!({ "to": "t", "topics": "news" }))?;
    assert_eq!(single.into_request()?.target(), &Target::Topic("news".to_string()));

    let any: MessageSpec = serde_json::from_value(json!({ "topics": { "any": ["a", "b"] } }))?;
    assert_eq!(
        any.into_request()?.target(),
        &Target::Condition("'a' in topics || 'b' in topics".to_string())
    );

    let all: MessageSpec = serde_json::from_value(json!({ "topics": { "all": ["a", "b"] } }))?;
    assert_eq!(
        all.into_request()?.target(),
        &Target::Condition("'a' in topics && 'b' in topics".to_string())
    );

    Ok(())
}

/// Test: Messages without a target or with an empty topic list are rejected
#[test]
fn test_spec_errors() -> Result<()> {
    let empty: MessageSpec = serde_json::from_value(json!({ "data": { "k": "v" } }))?;
    assert_eq!(empty.into_request().unwrap_err(), FcmError::NoTarget);

    let no_topics: MessageSpec = serde_json::from_value(json!({ "topics": { "any": [] } }))?;
    assert_eq!(no_topics.into_request().unwrap_err(), FcmError::NoTopicProvided);

    Ok(())
}
