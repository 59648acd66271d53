use std::io::Read;

use anyhow::{Context, Error, Result};
use fcm_request::{FcmClient, config::Config, models::message::MessageSpec};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: fcm_send [--print] [MESSAGE_JSON_FILE]";

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let mut print_only = false;
    let mut path = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--print" => print_only = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ => path = Some(arg),
        }
    }

    let raw = match &path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read message file {}", path))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read message from stdin")?;
            buffer
        }
    };

    let spec: MessageSpec = serde_json::from_str(&raw).context("Invalid message JSON")?;
    let request = spec.into_request()?;

    if print_only {
        println!("{}", serde_json::to_string_pretty(&request.body()?)?);
        return Ok(());
    }

    let config = Config::load()?;
    let client = FcmClient::new(&config)?;
    let response = client.send(&request).await?;

    info!(
        target_field = request.target().field_name(),
        message_id = response.message_id().unwrap_or("unknown"),
        "Message delivered to FCM"
    );

    Ok(())
}
