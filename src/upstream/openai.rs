//! OpenAI chat-completion API client wrapper.

use std::time::{Duration, Instant};

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::metrics;

use super::UpstreamError;

/// Metric label for completion provider calls.
const PROVIDER_LABEL: &str = "openai";

/// Client for the OpenAI chat-completion API.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the completion API.
    base_url: String,
    /// API key sent as a bearer credential.
    api_key: String,
    /// Model requested for every completion.
    model: String,
}

/// Completion API response body, reduced to the fields we read.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Option<Vec<ChatChoice>>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

impl OpenAiClient {
    /// Create a new completion client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.http_timeout_ms))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.openai_url.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
        }
    }

    /// Request a single-turn completion for a user prompt.
    #[instrument(skip(self, prompt))]
    pub async fn complete(&self, prompt: &str) -> Result<String, UpstreamError> {
        if self.api_key.is_empty() {
            return Err(UpstreamError::CredentialMissing);
        }

        let start = Instant::now();
        let result = self.request(prompt).await;
        metrics::record_upstream_latency(start, PROVIDER_LABEL);

        if result.is_err() {
            metrics::inc_upstream_failure(PROVIDER_LABEL);
        }

        result
    }

    async fn request(&self, prompt: &str) -> Result<String, UpstreamError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let body = json!({
            "model": self.model,
            "messages": [{"role": "user", "content": prompt}],
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(UpstreamError::AuthRejected);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ChatCompletionResponse = response.json().await.map_err(|err| {
            if err.is_timeout() {
                UpstreamError::Timeout
            } else {
                UpstreamError::Contract(err.to_string())
            }
        })?;

        let content = extract_content(payload)?;
        debug!(chars = content.len(), "Retrieved completion");

        Ok(content)
    }
}

/// Pull the assistant message out of a completion response.
fn extract_content(payload: ChatCompletionResponse) -> Result<String, UpstreamError> {
    payload
        .choices
        .and_then(|choices| choices.into_iter().next())
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| {
            UpstreamError::Contract("missing choices[0].message.content".to_string())
        })
}
