//! # Droplet creation run
//!
//! One invocation, one request: build, send, report.

use std::io::Write;

use crate::cmd_args::CommandLineArgs;
use crate::droplet::{build_create_request, report, Outcome};
use crate::error::Result;
use crate::services::HttpTransport;

/// Create the droplet described by `args` through `transport`, printing the
/// result to `out`.
///
/// Exactly one request is sent. Transport failures are returned untouched;
/// the caller decides how to surface them.
pub fn run(
    args: &CommandLineArgs,
    endpoint: &str,
    transport: &impl HttpTransport,
    out: &mut impl Write,
) -> Result<Outcome> {
    let request = build_create_request(endpoint, args.token(), args.droplet())?;
    let response = transport.post(&request)?;
    report(&response, out)
}
