//! One-shot heartbeat delivery over HTTP.

use std::time::Duration;

use reqwest::{header, Client};
use tracing::debug;

use crate::config::Config;
use crate::error::{Result, TrackioError};

/// Deadline for the whole request/response cycle.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends a single heartbeat batch to the Code Tracker API.
pub struct HeartbeatSender {
    client: Client,
    api_url: String,
    api_key: String,
    user_agent: String,
}

impl HeartbeatSender {
    /// Build a sender with a time-bounded HTTP client.
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TrackioError::Transport)?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            user_agent: config.plugin.clone(),
        })
    }

    /// POST the payload and classify the outcome.
    ///
    /// Exactly one request is issued; there are no retries. A response with
    /// status < 400 is success. Anything else comes back as
    /// [`TrackioError::Api`] so the caller can tell a 401 apart from other
    /// failures.
    pub async fn send(&self, payload: &[u8]) -> Result<()> {
        let mut request = self
            .client
            .post(&self.api_url)
            .header(header::CONTENT_TYPE, "application/json")
            .header("X-Api-Key", &self.api_key)
            .body(payload.to_vec());

        // No plugin identifier means no User-Agent header at all, not an
        // empty one.
        if !self.user_agent.is_empty() {
            request = request.header(header::USER_AGENT, &self.user_agent);
        }

        debug!(url = %self.api_url, bytes = payload.len(), "sending heartbeat batch");

        let response = request.send().await.map_err(TrackioError::Transport)?;
        let status = response.status();

        if status.as_u16() >= 400 {
            // Best effort: a body that cannot be read still yields a usable
            // API error, just with a placeholder diagnostic.
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("(could not read response body: {})", e));
            return Err(TrackioError::Api {
                status: status.as_u16(),
                body,
            });
        }

        // Drain whatever the server sent so the connection can be reused.
        let _ = response.bytes().await;

        debug!(status = status.as_u16(), "heartbeat batch accepted");
        Ok(())
    }
}
