//! # HTTP Service
//!
//! Sends a prepared request and hands the raw response back to the caller.
//! Status codes are not interpreted here.

use reqwest::StatusCode;

use crate::droplet::PreparedRequest;
use crate::error::Result;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: StatusCode,
    body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

/// Anything that can perform a single POST.
///
/// `Err` means no response was received at all; every status code the
/// server answers with comes back as `Ok`.
pub trait HttpTransport {
    fn post(&self, request: &PreparedRequest) -> Result<HttpResponse>;
}

/// Blocking reqwest client. The program sets no timeout of its own; reqwest's default applies.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a client with reqwest's defaults. Fails if the TLS backend
    /// cannot be initialised.
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Use a preconfigured client (proxy settings, custom roots, ...)
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl HttpTransport for ReqwestTransport {
    fn post(&self, request: &PreparedRequest) -> Result<HttpResponse> {
        tracing::debug!("POST {}", request.url);

        let response = self
            .client
            .post(&request.url)
            .headers(request.headers.clone())
            .body(request.body.clone())
            .send()?;

        let status = response.status();
        let body = response.text()?;
        tracing::info!("POST {} -> {}", request.url, status.as_u16());

        Ok(HttpResponse::new(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::droplet::{build_create_request, AccessToken, DropletRequest};
    use crate::error::CreateError;

    #[test]
    fn http_response_should_expose_status_and_body() {
        let response = HttpResponse::new(StatusCode::ACCEPTED, "{}");
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(response.body(), "{}");
    }

    #[test]
    fn reqwest_transport_should_report_connection_refused_as_transport_error() {
        // Bind then drop to get a local port with nothing listening on it.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let endpoint = format!("http://127.0.0.1:{port}/v2/");

        let token = AccessToken::new("test-token");
        let request = build_create_request(&endpoint, &token, &DropletRequest::default()).unwrap();

        let client = reqwest::blocking::Client::builder()
            .no_proxy()
            .build()
            .unwrap();
        let result = ReqwestTransport::with_client(client).post(&request);

        assert!(matches!(result, Err(CreateError::Transport(_))));
    }
}
