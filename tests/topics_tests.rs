use anyhow::Result;
use fcm_request::{FcmError, TopicTarget, Topics};

/// Test: One topic resolves to a bare topic name
#[test]
fn test_single_topic() -> Result<()> {
    let topics = Topics::single("weather")?;

    assert!(topics.has_only_one_topic());
    assert_eq!(topics.target(), TopicTarget::Topic("weather".to_string()));

    Ok(())
}

/// Test: Operators and groups render as an FCM condition
#[test]
fn test_condition_rendering() -> Result<()> {
    let topics = Topics::builder()
        .topic("TopicA")
        .and_group(|t| t.topic("TopicB").or_topic("TopicC"))
        .build()?;

    assert!(!topics.has_only_one_topic());
    assert_eq!(topics.topic_count(), 3);
    assert_eq!(
        topics.target(),
        TopicTarget::Condition(
            "'TopicA' in topics && ('TopicB' in topics || 'TopicC' in topics)".to_string()
        )
    );

    Ok(())
}

/// Test: Nested groups keep their parentheses
#[test]
fn test_nested_groups() -> Result<()> {
    let topics = Topics::builder()
        .group(|t| t.topic("a").and_topic("b"))
        .or_group(|t| t.topic("c").and_group(|t| t.topic("d").or_topic("e")))
        .build()?;

    assert_eq!(
        topics.target(),
        TopicTarget::Condition(
            "('a' in topics && 'b' in topics) || ('c' in topics && ('d' in topics || 'e' in topics))"
                .to_string()
        )
    );

    Ok(())
}

/// Test: A lone group is unwrapped to its contents
#[test]
fn test_lone_group_is_unwrapped() -> Result<()> {
    let single = Topics::builder().group(|t| t.topic("news")).build()?;
    assert!(single.has_only_one_topic());
    assert_eq!(single.target(), TopicTarget::Topic("news".to_string()));

    let pair = Topics::builder()
        .group(|t| t.group(|t| t.topic("a").or_topic("b")))
        .build()?;
    assert_eq!(
        pair.target(),
        TopicTarget::Condition("'a' in topics || 'b' in topics".to_string())
    );

    Ok(())
}

/// Test: Malformed descriptors are rejected at build time
#[test]
fn test_malformed_descriptors() {
    assert_eq!(
        Topics::builder().build().unwrap_err(),
        FcmError::NoTopicProvided
    );
    assert_eq!(
        Topics::builder().and_topic("a").build().unwrap_err(),
        FcmError::MisplacedOperator
    );
    assert_eq!(
        Topics::builder().topic("a").topic("b").build().unwrap_err(),
        FcmError::MissingOperator
    );
    assert_eq!(
        Topics::builder().topic("a").or_group(|t| t).build().unwrap_err(),
        FcmError::EmptyTopicGroup
    );
    assert_eq!(
        Topics::builder()
            .topic("a")
            .and_group(|t| t.or_topic("b"))
            .build()
            .unwrap_err(),
        FcmError::MisplacedOperator
    );
}

/// Test: Topic names outside the FCM character set are rejected
#[test]
fn test_invalid_topic_names() {
    for name in ["", "has space", "quote'd", "/topics/news"] {
        assert_eq!(
            Topics::single(name).unwrap_err(),
            FcmError::InvalidTopicName(name.to_string()),
            "name {:?} should be rejected",
            name
        );
    }

    assert!(Topics::single("Valid-name_1.2~%").is_ok());
}

/// Test: Conditions are capped at five topics
#[test]
fn test_topic_limit() {
    let five = Topics::builder()
        .topic("a")
        .or_topic("b")
        .or_topic("c")
        .or_topic("d")
        .or_topic("e")
        .build();
    assert!(five.is_ok());

    let six = Topics::builder()
        .topic("a")
        .or_topic("b")
        .or_topic("c")
        .or_group(|t| t.topic("d").and_topic("e").and_topic("f"))
        .build();
    assert_eq!(six.unwrap_err(), FcmError::TooManyTopics(6));
}
