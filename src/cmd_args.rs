use std::ffi::OsString;

pub use clap::Parser;

use crate::config::{DEFAULT_IMAGE, DEFAULT_NAME, DEFAULT_REGION, DEFAULT_SIZE};
use crate::droplet::{AccessToken, DropletRequest};

/// Create a droplet on DigitalOcean using their v2 API
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Access token
    /// Required. Passed through untouched as a bearer token; never stored or logged.
    #[clap(long, help = "DigitalOcean personal access token")]
    token: AccessToken,

    #[clap(long, default_value = DEFAULT_NAME, help = "Droplet name")]
    name: String,

    #[clap(long, default_value = DEFAULT_IMAGE, help = "Operating system image to spin up")]
    image: String,

    #[clap(long, default_value = DEFAULT_SIZE, help = "Droplet size slug")]
    size: String,

    #[clap(long, default_value = DEFAULT_REGION, help = "DigitalOcean region to use")]
    region: String,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(
        short = 'v',
        long,
        help = "Print verbose message",
        default_value = "false"
    )]
    verbose: bool,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    token: AccessToken,
    droplet: DropletRequest,
    verbose: bool,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            token: args.token,
            droplet: DropletRequest::new(args.name, args.image, args.region, args.size),
            verbose: args.verbose,
        }
    }
}

impl CommandLineArgs {
    /// Parse process arguments, exiting with usage on error
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Into::into)
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    pub fn droplet(&self) -> &DropletRequest {
        &self.droplet
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_parse_args_token_only() {
        let args = CommandLineArgs::parse_from(["program", "--token", "abc"]);
        assert_eq!(args.token().expose(), "abc");
        assert!(!args.verbose());
    }

    #[test]
    fn test_default_values() {
        let args = CommandLineArgs::parse_from(["program", "--token", "abc"]);
        let droplet = args.droplet();
        assert_eq!(droplet.name, "no-imagination.used");
        assert_eq!(droplet.image, "ubuntu-14-04-x64");
        assert_eq!(droplet.size, "s-1vcpu-1gb");
        assert_eq!(droplet.region, "sfo2");
    }

    #[test]
    fn test_parse_all_flags() {
        let args = CommandLineArgs::parse_from([
            "program", "--token", "abc", "--name", "web-1", "--image", "debian-12-x64",
            "--size", "s-2vcpu-4gb", "--region", "ams3", "-v",
        ]);
        assert_eq!(
            args.droplet(),
            &DropletRequest::new("web-1", "debian-12-x64", "ams3", "s-2vcpu-4gb")
        );
        assert!(args.verbose());
    }

    #[test]
    fn test_missing_token_is_rejected() {
        let err = CommandLineArgs::try_parse_from(["program", "--name", "web-1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_empty_and_spaced_tokens_are_accepted() {
        let args = CommandLineArgs::try_parse_from(["program", "--token", ""]).unwrap();
        assert_eq!(args.token().expose(), "");

        let args = CommandLineArgs::try_parse_from(["program", "--token", "abc def"]).unwrap();
        assert_eq!(args.token().expose(), "abc def");
    }

    #[test]
    fn test_debug_output_redacts_token() {
        let args = CommandLineArgs::parse_from(["program", "--token", "very-secret"]);
        assert!(!format!("{args:?}").contains("very-secret"));
    }
}
