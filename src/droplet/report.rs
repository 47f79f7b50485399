//! # Result Interpreter
//!
//! Decides what a provider response means and prints it. DigitalOcean
//! answers a successful creation with `202 Accepted`; anything else is
//! shown to the user verbatim.

use std::io::Write;

use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{CreateError, Result};
use crate::services::HttpResponse;

pub const SUCCESS_BANNER: &str = "Droplet successfully created:";

/// Body of a `202 Accepted` reply
#[derive(Debug, Deserialize)]
struct CreateDropletResponse {
    droplet: Map<String, Value>,
}

/// How a completed exchange ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The provider accepted the droplet; fields as returned, in order.
    Created(Map<String, Value>),
    /// The provider answered with something other than 202.
    Rejected { status: StatusCode, body: String },
}

impl Outcome {
    /// Process exit status for this outcome. Rejections exit 0, matching the
    /// long-standing behaviour scripts may depend on.
    pub fn exit_code(&self) -> u8 {
        0
    }
}

/// Print `response` to `out` and classify it.
///
/// A 202 whose body is not a JSON object with a `droplet` object is an
/// error; nothing is written in that case.
pub fn report(response: &HttpResponse, out: &mut impl Write) -> Result<Outcome> {
    if response.status() != StatusCode::ACCEPTED {
        tracing::info!(
            "Droplet creation rejected with status {}",
            response.status().as_u16()
        );
        writeln!(
            out,
            "There was an issue with creating the droplet. Received HTTP status code {}, expected a 202.",
            response.status().as_u16()
        )?;
        writeln!(out, "{}", response.body())?;
        return Ok(Outcome::Rejected {
            status: response.status(),
            body: response.body().to_string(),
        });
    }

    let parsed: CreateDropletResponse = serde_json::from_str(response.body())
        .map_err(|e| CreateError::MalformedResponse(e.to_string()))?;

    writeln!(out, "{SUCCESS_BANNER}")?;
    for (key, value) in &parsed.droplet {
        writeln!(out, "{key}: {}", display_value(value))?;
    }

    Ok(Outcome::Created(parsed.droplet))
}

/// Strings print bare, everything else as compact JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
