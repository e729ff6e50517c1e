//! Clients for external provider APIs.

pub mod openai;
pub mod weather;

pub use openai::OpenAiClient;
pub use weather::WeatherClient;

use thiserror::Error;

/// Caller-facing name of the weather provider.
pub const WEATHER_PROVIDER: &str = "OpenWeather";

/// Caller-facing name of the completion provider.
pub const COMPLETION_PROVIDER: &str = "OpenAI";

/// Failures from an outbound provider call.
///
/// Clients classify every failure into one of these variants; the API
/// boundary maps them onto HTTP status codes.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// The provider credential is not configured.
    #[error("API key is not configured")]
    CredentialMissing,

    /// The request exceeded the client timeout.
    #[error("request timed out")]
    Timeout,

    /// The provider rejected the credential.
    #[error("authentication rejected by upstream")]
    AuthRejected,

    /// The provider answered with a non-success status.
    #[error("upstream returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code from the provider.
        status: u16,
        /// Response body text from the provider.
        body: String,
    },

    /// The request failed below the HTTP layer.
    #[error("transport failure: {0}")]
    Transport(String),

    /// The provider answered 2xx with a body that violates its contract.
    #[error("unexpected response shape: {0}")]
    Contract(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_upstream_text() {
        let err = UpstreamError::Status {
            status: 503,
            body: "service unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "upstream returned HTTP 503: service unavailable"
        );
    }
}
