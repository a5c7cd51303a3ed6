use std::time::Duration;

use anyhow::anyhow;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::DispatchError,
    models::line::{BroadcastPayload, MulticastPayload, PushMessage},
};

pub struct LineClient {
    http_client: Client,
    base_url: String,
    channel_token: String,
}

impl LineClient {
    /// Fails fast when the channel credential is missing; no network call
    /// is ever attempted without one.
    pub fn new(config: &Config) -> Result<Self, DispatchError> {
        if config.line_channel_token.trim().is_empty() {
            return Err(DispatchError::MissingCredential);
        }

        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|_| DispatchError::Internal(anyhow!("Failed to create HTTP client")))?;

        Ok(Self {
            http_client,
            base_url: config.line_api_url.trim_end_matches('/').to_string(),
            channel_token: config.line_channel_token.clone(),
        })
    }

    pub async fn broadcast(&self, message: &PushMessage) -> Result<(), DispatchError> {
        debug!("Broadcasting push message to all subscribers");

        let url = format!("{}/v2/bot/message/broadcast", self.base_url);
        let payload = BroadcastPayload {
            messages: vec![message.clone()],
        };

        self.send(&url, &payload).await
    }

    pub async fn multicast(
        &self,
        to: Vec<String>,
        message: &PushMessage,
    ) -> Result<(), DispatchError> {
        debug!(recipient_count = to.len(), "Multicasting push message");

        let url = format!("{}/v2/bot/message/multicast", self.base_url);
        let payload = MulticastPayload {
            to,
            messages: vec![message.clone()],
        };

        self.send(&url, &payload).await
    }

    /// Exactly one POST, no retries. A non-2xx response surfaces the
    /// provider's status and error body verbatim for operator diagnosis.
    async fn send<T: Serialize>(&self, url: &str, payload: &T) -> Result<(), DispatchError> {
        let response = self
            .http_client
            .post(url)
            .bearer_auth(&self.channel_token)
            .json(payload)
            .send()
            .await
            .map_err(|e| DispatchError::Internal(anyhow!("Push request failed: {}", e)))?;

        let status = response.status();

        if status.is_success() {
            info!(status = %status, "Push message delivered");
            return Ok(());
        }

        let body = response
            .text()
            .await
            .map_err(|e| DispatchError::Internal(anyhow!("Failed to read error body: {}", e)))?;

        let body = serde_json::from_str::<JsonValue>(&body)
            .unwrap_or_else(|_| JsonValue::String(body));

        warn!(status = %status, "Push provider rejected the message");

        Err(DispatchError::Provider {
            status: status.as_u16(),
            body,
        })
    }
}
