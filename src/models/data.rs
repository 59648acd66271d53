use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Application-defined key/value pairs delivered under `message.data`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PayloadData(HashMap<String, String>);

impl PayloadData {
    pub fn builder() -> PayloadDataBuilder {
        PayloadDataBuilder::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.0
    }
}

impl From<HashMap<String, String>> for PayloadData {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PayloadDataBuilder {
    data: HashMap<String, String>,
}

impl PayloadDataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Replaces everything added so far.
    pub fn set_data(mut self, data: HashMap<String, String>) -> Self {
        self.data = data;
        self
    }

    pub fn remove_all_data(mut self) -> Self {
        self.data.clear();
        self
    }

    pub fn build(self) -> PayloadData {
        PayloadData(self.data)
    }
}
