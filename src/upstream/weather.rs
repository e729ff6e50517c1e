//! OpenWeather API client wrapper.

use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::Config;
use crate::metrics;

use super::UpstreamError;

/// Metric label for weather provider calls.
const PROVIDER_LABEL: &str = "openweather";

/// Current conditions extracted from a weather API response.
#[derive(Debug, Clone)]
pub struct WeatherReport {
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Short text description of current conditions.
    pub description: String,
}

/// Client for the OpenWeather current-conditions API.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    /// HTTP client for API requests.
    http: reqwest::Client,
    /// Base URL for the weather API.
    base_url: String,
    /// API key sent with every request.
    api_key: String,
}

/// Weather API response body. Fields are optional so that contract
/// violations surface as typed errors instead of decode failures.
#[derive(Debug, Deserialize)]
struct WeatherApiResponse {
    main: Option<MainConditions>,
    weather: Option<Vec<WeatherCondition>>,
}

#[derive(Debug, Deserialize)]
struct MainConditions {
    temp: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: Option<String>,
}

impl WeatherClient {
    /// Create a new weather client from config.
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.http_timeout_ms))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            base_url: config.openweather_url.trim_end_matches('/').to_string(),
            api_key: config.openweather_key.clone(),
        }
    }

    /// Fetch current weather conditions for a city.
    #[instrument(skip(self), fields(city = %city))]
    pub async fn current(&self, city: &str) -> Result<WeatherReport, UpstreamError> {
        if self.api_key.is_empty() {
            return Err(UpstreamError::CredentialMissing);
        }

        let start = Instant::now();
        let result = self.fetch(city).await;
        metrics::record_upstream_latency(start, PROVIDER_LABEL);

        if result.is_err() {
            metrics::inc_upstream_failure(PROVIDER_LABEL);
        }

        result
    }

    async fn fetch(&self, city: &str) -> Result<WeatherReport, UpstreamError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: WeatherApiResponse = response.json().await.map_err(|err| {
            if err.is_timeout() {
                UpstreamError::Timeout
            } else {
                UpstreamError::Contract(err.to_string())
            }
        })?;

        let report = extract_report(payload)?;
        debug!(temperature = report.temperature, "Retrieved weather conditions");

        Ok(report)
    }
}

/// Pull the fields the API promises out of a response body.
fn extract_report(payload: WeatherApiResponse) -> Result<WeatherReport, UpstreamError> {
    let temperature = payload
        .main
        .and_then(|main| main.temp)
        .ok_or_else(|| UpstreamError::Contract("missing main.temp".to_string()))?;

    let description = payload
        .weather
        .and_then(|conditions| conditions.into_iter().next())
        .and_then(|condition| condition.description)
        .ok_or_else(|| {
            UpstreamError::Contract("missing weather[0].description".to_string())
        })?;

    Ok(WeatherReport {
        temperature,
        description,
    })
}
