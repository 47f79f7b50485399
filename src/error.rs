//! Error types for droplet creation

use thiserror::Error;

/// Failures that end a run with a non-zero exit status.
///
/// A provider response with an unexpected status code is not one of these:
/// it is reported to the user and the run completes normally.
#[derive(Error, Debug)]
pub enum CreateError {
    /// No response was received (DNS, connection refused, TLS, timeout).
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Access token cannot be sent in an HTTP header")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Malformed droplet response: {0}")]
    MalformedResponse(String),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CreateError>;
