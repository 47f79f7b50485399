//! # mkdroplet Main Entry Point
//!
//! Exit status: 0 when the provider answered (whatever the status code),
//! 1 when no usable answer arrived, 2 on invalid arguments.

use std::io::{IsTerminal, Write};
use std::process::ExitCode;

use anyhow::Result;
use mkdroplet::config::{get_api_endpoint, LOG_LEVEL_ENV_VAR};
use mkdroplet::{CommandLineArgs, Outcome, ReqwestTransport};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

fn main() -> ExitCode {
    // clap exits with status 2 before anything else runs
    let cmd_args = CommandLineArgs::parse();

    if let Err(e) = init_tracing_subscriber(cmd_args.verbose()) {
        eprintln!("Failed to initialize logging: {e:#}");
    }

    match create_droplet(&cmd_args) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            tracing::error!("Droplet creation failed: {e:#}");
            // Errors share stdout with regular output
            println!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn create_droplet(cmd_args: &CommandLineArgs) -> Result<Outcome> {
    let endpoint = get_api_endpoint();
    tracing::debug!("Using API endpoint '{}'", endpoint);
    tracing::debug!("Droplet request: {:?}", cmd_args.droplet());

    let transport = ReqwestTransport::new()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let outcome = mkdroplet::run(cmd_args, &endpoint, &transport, &mut out)?;
    out.flush()?;
    Ok(outcome)
}

fn init_tracing_subscriber(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level))
        .add_directive("reqwest=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("hyper_util=warn".parse()?)
        .add_directive("rustls=warn".parse()?);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_timer(ChronoLocal::rfc_3339())
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_subscriber_should_initialize_logging_without_panic() {
        assert!(init_tracing_subscriber(true).is_ok());
    }
}
