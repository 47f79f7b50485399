//! # Request Builder
//!
//! Turns the droplet parameters and the access token into the URL, headers
//! and JSON body of a `POST /droplets` call.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;

use crate::config::{DEFAULT_IMAGE, DEFAULT_NAME, DEFAULT_REGION, DEFAULT_SIZE};
use crate::droplet::AccessToken;
use crate::error::Result;

/// Resource path appended to the API endpoint
pub const DROPLETS_PATH: &str = "droplets";

/// Body of a droplet creation call. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropletRequest {
    pub name: String,
    pub region: String,
    pub size: String,
    pub image: String,
}

impl DropletRequest {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        region: impl Into<String>,
        size: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
            size: size.into(),
            image: image.into(),
        }
    }
}

impl Default for DropletRequest {
    fn default() -> Self {
        Self::new(DEFAULT_NAME, DEFAULT_IMAGE, DEFAULT_REGION, DEFAULT_SIZE)
    }
}

/// A fully assembled request, ready for an [`HttpTransport`](crate::services::HttpTransport).
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub url: String,
    pub headers: HeaderMap,
    pub body: String,
}

/// Build the creation call for `droplet` against `endpoint`.
///
/// The endpoint is expected to end with `/`; the resource path is appended
/// without inserting a separator.
pub fn build_create_request(
    endpoint: &str,
    token: &AccessToken,
    droplet: &DropletRequest,
) -> Result<PreparedRequest> {
    let url = format!("{endpoint}{DROPLETS_PATH}");

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(AUTHORIZATION, token.bearer_header()?);

    let body = serde_json::to_string(droplet)?;

    tracing::debug!("Prepared droplet request for {}: {}", url, body);
    Ok(PreparedRequest { url, headers, body })
}
