use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// Unset fields serialize as null and are pruned after serialization, so none
// of these carry `skip_serializing_if`.

#[derive(Debug, Clone, Serialize)]
pub struct FcmRequest {
    pub validate_only: Option<bool>,
    pub message: FcmMessage,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FcmMessage {
    pub token: Option<String>,
    pub tokens: Option<Vec<String>>,
    pub topic: Option<String>,
    pub condition: Option<String>,
    pub notification: FcmNotification,
    pub data: Option<HashMap<String, String>>,
    pub android: AndroidConfig,
    pub apns: ApnsConfig,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FcmNotification {
    pub title: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AndroidConfig {
    pub collapse_key: Option<String>,
    pub priority: Option<String>,
    pub ttl: Option<String>,
    pub restricted_package_name: Option<String>,
    pub notification: AndroidNotification,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AndroidNotification {
    pub channel_id: Option<String>,
    pub icon: Option<String>,
    pub sound: Option<String>,
    pub tag: Option<String>,
    pub color: Option<String>,
    pub click_action: Option<String>,
    pub body_loc_key: Option<String>,
    pub body_loc_args: Option<Vec<String>>,
    pub title_loc_key: Option<String>,
    pub title_loc_args: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApnsConfig {
    pub payload: ApnsPayload,
    pub headers: ApnsHeaders,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApnsPayload {
    pub aps: Aps,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Aps {
    pub badge: Option<u32>,
    pub sound: Option<String>,
    pub content_available: Option<u8>,
    pub mutable_content: Option<u8>,
    pub alert: ApsAlert,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApsAlert {
    pub loc_key: Option<String>,
    pub loc_args: Option<Vec<String>>,
    pub title_loc_key: Option<String>,
    pub title_loc_args: Option<Vec<String>>,
}

/// APNs headers are a string map on the wire.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ApnsHeaders {
    pub apns_priority: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FcmResponse {
    /// `projects/{project}/messages/{message_id}`
    pub name: Option<String>,
}

impl FcmResponse {
    pub fn message_id(&self) -> Option<&str> {
        self.name
            .as_deref()
            .and_then(|name| name.rsplit('/').next())
            .filter(|id| !id.is_empty())
    }
}
