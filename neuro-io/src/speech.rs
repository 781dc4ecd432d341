//! Speech-to-text adapter.
//!
//! Polls a local Whisper-style HTTP endpoint for finalized utterances. The
//! endpoint contract is a GET returning a JSON array of utterances recognised
//! since the previous poll:
//!
//! ```json
//! [{ "text": "hello there" }, { "text": "how are you" }]
//! ```
//!
//! An unreachable endpoint is logged and retried at the poll interval —
//! speech input degrades to silence instead of crashing the companion.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use neuro_core::config::SpeechConfig;

use crate::error::AdapterError;
use crate::event::InputEvent;

/// One finalized utterance from the endpoint.
#[derive(Debug, Deserialize)]
struct Utterance {
    text: String,
}

/// Polling speech adapter.
pub struct SpeechAdapter {
    endpoint: String,
    poll_interval: Duration,
    http: Client,
}

impl SpeechAdapter {
    /// Build an adapter from configuration.
    #[must_use]
    pub fn new(config: &SpeechConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            http: Client::new(),
        }
    }

    /// Run the poll loop, forwarding every utterance into `tx` as a
    /// `"[Voice] {text}"` event. Returns when the consumer drops the
    /// receiving end.
    ///
    /// # Errors
    ///
    /// Only [`AdapterError::ChannelClosed`] terminates the loop with an
    /// error-shaped result; endpoint failures are retried indefinitely.
    pub async fn run(self, tx: mpsc::Sender<InputEvent>) -> Result<(), AdapterError> {
        info!(endpoint = %self.endpoint, "Speech adapter started");

        loop {
            match self.poll_once().await {
                Ok(utterances) => {
                    for utterance in utterances {
                        if utterance.text.trim().is_empty() {
                            continue;
                        }
                        debug!(text = %utterance.text, "Recognised utterance");
                        if tx.send(InputEvent::voice(&utterance.text)).await.is_err() {
                            info!("Speech adapter stopping, channel closed");
                            return Err(AdapterError::ChannelClosed);
                        }
                    }
                }
                Err(err) => {
                    warn!(endpoint = %self.endpoint, error = %err, "Speech poll failed");
                }
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }

    async fn poll_once(&self) -> Result<Vec<Utterance>, AdapterError> {
        let response = self.http.get(&self.endpoint).send().await?;
        let response = response.error_for_status()?;
        let utterances = response.json::<Vec<Utterance>>().await?;
        Ok(utterances)
    }
}
