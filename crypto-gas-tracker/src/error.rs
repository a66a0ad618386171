use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Message returned to API clients for any upstream failure
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch gas fee";

/// Message returned to API clients for an unknown network key
pub const UNSUPPORTED_NETWORK_MESSAGE: &str = "Unsupported network";

/// Errors that can occur while looking up a gas quote
///
/// Each variant represents a specific failure case and includes relevant details.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The network key is not one the tracker supports
    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),

    /// No API key is configured for the network
    #[error("No API key configured for {0}")]
    MissingCredential(String),

    /// The oracle could not be reached
    #[error("Oracle request failed: {0}")]
    Transport(String),

    /// The oracle did not answer before the request timeout
    #[error("Oracle request timed out: {0}")]
    Timeout(String),

    /// The oracle answered with something that is not a gas oracle envelope
    #[error("Malformed oracle response: {0}")]
    MalformedResponse(String),

    /// The oracle rejected the request or had no data for it
    #[error("Oracle returned an error: {0}")]
    Provider(String),
}

/// Structured error response for the API
///
/// Unsupported networks answer with only the `error` field; upstream failures
/// also carry a machine-readable code and the underlying cause.
#[derive(Serialize)]
struct ErrorResponse {
    /// Human-readable error message
    error: String,

    /// Machine-readable error code
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<&'static str>,

    /// Detailed error information
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::UnsupportedNetwork(_) => "UNSUPPORTED_NETWORK",
            FetchError::MissingCredential(_) => "MISSING_CREDENTIAL",
            FetchError::Transport(_) => "ORACLE_UNREACHABLE",
            FetchError::Timeout(_) => "ORACLE_TIMEOUT",
            FetchError::MalformedResponse(_) => "MALFORMED_ORACLE_RESPONSE",
            FetchError::Provider(_) => "ORACLE_ERROR",
        }
    }
}

impl ResponseError for FetchError {
    fn error_response(&self) -> HttpResponse {
        let body = match self {
            FetchError::UnsupportedNetwork(_) => ErrorResponse {
                error: UNSUPPORTED_NETWORK_MESSAGE.to_string(),
                error_code: None,
                details: None,
            },
            _ => ErrorResponse {
                error: FETCH_FAILED_MESSAGE.to_string(),
                error_code: Some(self.error_code()),
                details: Some(self.to_string()),
            },
        };

        HttpResponse::build(self.status_code()).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            FetchError::UnsupportedNetwork(_) => StatusCode::BAD_REQUEST,
            FetchError::MissingCredential(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FetchError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            FetchError::Transport(_)
            | FetchError::MalformedResponse(_)
            | FetchError::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
