//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the single error type handlers return. It implements
//! `axum::response::IntoResponse`, so every failure becomes a
//! `{"detail": ...}` JSON body with the right status code. Upstream and
//! unexpected failures are logged with full detail server-side; the
//! caller only sees the sanitized message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::upstream::UpstreamError;
use crate::wellness::WellnessError;

/// Convenient Result type alias for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// One invalid or missing query parameter in a 422 response body.
#[derive(Debug, Clone, Serialize)]
pub struct ParamError {
    /// Name of the offending query parameter.
    pub param: &'static str,
    /// What was wrong with it.
    pub message: String,
}

impl ParamError {
    /// A required parameter was absent.
    pub fn missing(param: &'static str) -> Self {
        Self {
            param,
            message: "required query parameter is missing".to_string(),
        }
    }

    /// A parameter was present but could not be interpreted.
    pub fn invalid(param: &'static str, reason: &str) -> Self {
        Self {
            param,
            message: reason.to_string(),
        }
    }
}

/// Unified API error type.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Client supplied a value outside the endpoint's domain (400).
    #[error("{0}")]
    BadRequest(String),

    /// Query parameters were missing or untypeable (422).
    #[error("invalid request parameters")]
    Validation(Vec<ParamError>),

    /// A provider credential is not configured (500).
    #[error("missing {0} API key")]
    MissingCredential(&'static str),

    /// The provider rejected our credential (401).
    #[error("invalid {0} API key")]
    UpstreamAuth(&'static str),

    /// The provider answered with a body violating its contract (500).
    #[error("unexpected response format from the {provider} API")]
    UpstreamContract {
        /// Provider name.
        provider: &'static str,
        /// Full violation detail, logged but not surfaced.
        detail: String,
    },

    /// The provider call exceeded its timeout (504).
    #[error("{0} API request timed out")]
    UpstreamTimeout(&'static str),

    /// The provider call failed at the transport or protocol level (502).
    #[error("bad gateway: {detail}")]
    UpstreamTransport {
        /// Provider name.
        provider: &'static str,
        /// Upstream error text, surfaced to the caller.
        detail: String,
    },

    /// Any other failure (500). Caller sees a generic message.
    #[error("internal server error")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl ApiError {
    /// Translate an upstream client failure for a given provider.
    pub fn upstream(provider: &'static str, err: UpstreamError) -> Self {
        match err {
            UpstreamError::CredentialMissing => Self::MissingCredential(provider),
            UpstreamError::Timeout => Self::UpstreamTimeout(provider),
            UpstreamError::AuthRejected => Self::UpstreamAuth(provider),
            UpstreamError::Status { status, body } => Self::UpstreamTransport {
                provider,
                detail: format!("HTTP {status}: {body}"),
            },
            UpstreamError::Transport(detail) => Self::UpstreamTransport { provider, detail },
            UpstreamError::Contract(detail) => Self::UpstreamContract { provider, detail },
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MissingCredential(_) | Self::UpstreamContract { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::UpstreamAuth(_) => StatusCode::UNAUTHORIZED,
            Self::UpstreamTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::UpstreamTransport { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    /// Log server-side with full detail. Client errors stay quiet.
    fn log(&self) {
        match self {
            Self::BadRequest(_) => {}
            Self::Validation(errors) => {
                error!(?errors, "request validation failed");
            }
            Self::MissingCredential(provider) => {
                error!(provider, "provider API key is not configured");
            }
            Self::UpstreamAuth(provider) => {
                error!(provider, "provider rejected the API key");
            }
            Self::UpstreamContract { provider, detail } => {
                error!(provider, detail = %detail, "upstream contract violation");
            }
            Self::UpstreamTimeout(provider) => {
                error!(provider, "upstream request timed out");
            }
            Self::UpstreamTransport { provider, detail } => {
                error!(provider, detail = %detail, "upstream request failed");
            }
            Self::Internal(err) => {
                error!(error = ?err, "unhandled error");
            }
        }
    }
}

impl From<WellnessError> for ApiError {
    fn from(err: WellnessError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();

        let status = self.status_code();
        let detail = match &self {
            ApiError::Validation(errors) => json!(errors),
            other => json!(other.to_string()),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
