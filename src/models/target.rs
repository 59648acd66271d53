use serde::Deserialize;

use crate::{
    errors::FcmError,
    models::topics::{TopicTarget, Topics},
};

/// Device addressing as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Recipient {
    Token(String),
    Tokens(Vec<String>),
}

impl From<String> for Recipient {
    fn from(token: String) -> Self {
        Recipient::Token(token)
    }
}

impl From<&str> for Recipient {
    fn from(token: &str) -> Self {
        Recipient::Token(token.to_string())
    }
}

impl From<Vec<String>> for Recipient {
    fn from(tokens: Vec<String>) -> Self {
        Recipient::Tokens(tokens)
    }
}

impl From<Vec<&str>> for Recipient {
    fn from(tokens: Vec<&str>) -> Self {
        Recipient::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

/// Where a message goes. Exactly one variant is rendered per message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Token(String),
    Tokens(Vec<String>),
    Topic(String),
    Condition(String),
}

impl Target {
    pub fn field_name(&self) -> &'static str {
        match self {
            Target::Token(_) => "token",
            Target::Tokens(_) => "tokens",
            Target::Topic(_) => "topic",
            Target::Condition(_) => "condition",
        }
    }
}

/// A topic descriptor always wins over device addressing. A multi-topic
/// descriptor becomes a `condition` rather than sitting next to a token.
/// Empty tokens and empty token lists count as no target.
pub fn resolve_target(
    recipient: Option<&Recipient>,
    topics: Option<&Topics>,
) -> Result<Target, FcmError> {
    if let Some(topics) = topics {
        return Ok(match topics.target() {
            TopicTarget::Topic(name) => Target::Topic(name),
            TopicTarget::Condition(condition) => Target::Condition(condition),
        });
    }

    match recipient {
        Some(Recipient::Token(token)) if !token.is_empty() => Ok(Target::Token(token.clone())),
        Some(Recipient::Tokens(tokens)) if !tokens.is_empty() => {
            Ok(Target::Tokens(tokens.clone()))
        }
        _ => Err(FcmError::NoTarget),
    }
}
