//! # Access Token
//!
//! Bearer credential for the DigitalOcean API. Held only in memory and
//! redacted wherever it could be formatted.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use reqwest::header::{HeaderValue, InvalidHeaderValue};

/// Personal access token sent as `Authorization: Bearer <token>`.
///
/// Any string is accepted; the provider decides whether it is valid. Only
/// a token that cannot be written into a header at all (control
/// characters) fails, when the header is built.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Header value for the `Authorization` header, flagged sensitive so
    /// reqwest and hyper keep it out of their debug output.
    pub fn bearer_header(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))?;
        value.set_sensitive(true);
        Ok(value)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccessToken {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}
