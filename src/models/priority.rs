use std::fmt::{Display, Formatter, Result};

use serde::Deserialize;

/// Delivery priority shared by the Android and APNs blocks of a message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPriority")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

/// Priority as callers hand it in: an APNs-style number or a name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPriority {
    Number(i64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AndroidPriority {
    Normal,
    High,
}

impl AndroidPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            AndroidPriority::Normal => "NORMAL",
            AndroidPriority::High => "HIGH",
        }
    }
}

impl Display for AndroidPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

impl Priority {
    pub fn from_number(value: i64) -> Self {
        match value {
            10 => Priority::High,
            1 => Priority::Low,
            _ => Priority::Normal,
        }
    }

    pub fn from_name(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Priority::High,
            "LOW" => Priority::Low,
            _ => Priority::Normal,
        }
    }

    pub fn android(&self) -> AndroidPriority {
        match self {
            Priority::High => AndroidPriority::High,
            Priority::Normal | Priority::Low => AndroidPriority::Normal,
        }
    }

    /// Value of the `apns-priority` header.
    pub fn apns(&self) -> u8 {
        match self {
            Priority::High => 10,
            Priority::Normal => 5,
            Priority::Low => 1,
        }
    }
}

impl From<RawPriority> for Priority {
    fn from(raw: RawPriority) -> Self {
        match raw {
            RawPriority::Number(value) => Priority::from_number(value),
            RawPriority::Text(value) => match value.trim().parse::<i64>() {
                Ok(number) => Priority::from_number(number),
                Err(_) => Priority::from_name(&value),
            },
        }
    }
}

impl From<i64> for Priority {
    fn from(value: i64) -> Self {
        Priority::from_number(value)
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Priority::from(RawPriority::Text(value.to_string()))
    }
}
