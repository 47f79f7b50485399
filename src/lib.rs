//! # mkdroplet - Create a DigitalOcean droplet
//!
//! Sends one `POST /v2/droplets` call and prints what the provider returned.
//!
//! ```text
//! CommandLineArgs ──► build_create_request ──► HttpTransport::post ──► report
//!   (flags, token)       (url, headers, body)      (status, body)       (stdout)
//! ```

pub mod app;
pub mod cmd_args;
pub mod config;
pub mod droplet;
pub mod error;
pub mod services;

// Re-export main types for easy access
pub use app::run;
pub use cmd_args::CommandLineArgs;
pub use droplet::{AccessToken, DropletRequest, Outcome};
pub use error::CreateError;
pub use services::{HttpTransport, ReqwestTransport};
