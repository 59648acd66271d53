use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use dotenvy::dotenv;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT_URL: &str =
    "https://fcm.googleapis.com/v1/projects/{project-id}/messages:send";

const PROJECT_ID_PLACEHOLDER: &str = "{project-id}";

/// Transport settings, read from `FCM_*` environment variables.
#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    /// Static bearer token. When absent, a Google OAuth2 token is fetched instead.
    #[serde(default)]
    pub server_key: Option<String>,

    #[serde(default)]
    pub sender_id: Option<String>,

    pub project_id: String,

    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,

    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: f64,

    #[serde(default)]
    pub log_enabled: bool,
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

fn default_timeout_seconds() -> f64 {
    30.0
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        dotenv().ok();

        let config = envy::prefixed("FCM_")
            .from_env::<Self>()
            .map_err(|e| anyhow!("Invalid or missing FCM environment variable: {}", e))?;
        config.validate()
    }

    /// Builds a config from `FCM_*` key/value pairs without touching the process environment.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let config = envy::prefixed("FCM_")
            .from_iter::<_, Self>(pairs.into_iter().map(|(k, v)| (k.into(), v.into())))
            .map_err(|e| anyhow!("Invalid FCM configuration: {}", e))?;
        config.validate()
    }

    pub fn send_url(&self) -> String {
        self.endpoint_url
            .replace(PROJECT_ID_PLACEHOLDER, &self.project_id)
    }

    pub fn timeout(&self) -> Result<Duration, Error> {
        Duration::try_from_secs_f64(self.timeout_seconds)
            .ok()
            .filter(|timeout| !timeout.is_zero())
            .ok_or_else(|| {
                anyhow!(
                    "FCM_TIMEOUT_SECONDS must be a positive number of seconds, got {}",
                    self.timeout_seconds
                )
            })
    }

    fn validate(self) -> Result<Self, Error> {
        if self.project_id.trim().is_empty() {
            return Err(anyhow!("FCM_PROJECT_ID cannot be empty"));
        }

        self.timeout()?;

        Ok(self)
    }
}
