use anyhow::{Error, Result, anyhow};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    models::{fcm::FcmResponse, request::Request},
};

const FIREBASE_MESSAGING_SCOPE: &str = "https://www.googleapis.com/auth/firebase.messaging";

/// Posts built requests to the FCM send endpoint. No retries: a failed send
/// is returned to the caller as is.
pub struct FcmClient {
    http_client: Client,
    send_url: String,
    server_key: Option<String>,
    log_enabled: bool,
}

impl FcmClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let http_client = Client::builder()
            .timeout(config.timeout()?)
            .build()
            .map_err(|_| anyhow!("Failed to create HTTP client"))?;

        let send_url = config.send_url();

        info!(
            project_id = %config.project_id,
            send_url = %send_url,
            static_key = config.server_key.is_some(),
            "FCM client initialized"
        );

        Ok(Self {
            http_client,
            send_url,
            server_key: config.server_key.clone(),
            log_enabled: config.log_enabled,
        })
    }

    pub fn send_url(&self) -> &str {
        &self.send_url
    }

    pub async fn send(&self, request: &Request) -> Result<FcmResponse, Error> {
        let body = request.body()?;

        if self.log_enabled {
            info!(target_field = request.target().field_name(), body = %body, "Sending FCM request");
        } else {
            debug!(target_field = request.target().field_name(), "Sending FCM request");
        }

        let token = self.access_token().await?;

        let response = self
            .http_client
            .post(&self.send_url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status.is_success() {
            let parsed = response.json::<FcmResponse>().await?;
            info!(
                message_id = parsed.message_id().unwrap_or("unknown"),
                "FCM push notification sent successfully"
            );
            Ok(parsed)
        } else {
            let error_text = response.text().await?;
            warn!(status = %status, error = %error_text, "FCM request rejected");
            Err(anyhow!("FCM request failed with status {}: {}", status, error_text))
        }
    }

    async fn access_token(&self) -> Result<String, Error> {
        if let Some(server_key) = &self.server_key {
            return Ok(server_key.clone());
        }

        let provider = gcp_auth::provider().await?;
        let token = provider.token(&[FIREBASE_MESSAGING_SCOPE]).await?;

        Ok(token.as_str().to_string())
    }
}
