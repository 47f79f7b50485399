//! Configuration constants and utilities for mkdroplet
//!
//! Flag defaults, the API endpoint and the environment variables that
//! override them. Nothing here is read from disk and no credential is stored.

/// Base URL of the DigitalOcean v2 API. Resource paths are appended verbatim.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.digitalocean.com/v2/";

/// Environment variable name for overriding the API endpoint
pub const API_ENDPOINT_ENV_VAR: &str = "MKDROPLET_API_ENDPOINT";

/// Environment variable holding the `EnvFilter` directives for logging
pub const LOG_LEVEL_ENV_VAR: &str = "MKDROPLET_LOG_LEVEL";

pub const DEFAULT_NAME: &str = "no-imagination.used";
pub const DEFAULT_IMAGE: &str = "ubuntu-14-04-x64";
pub const DEFAULT_SIZE: &str = "s-1vcpu-1gb";
pub const DEFAULT_REGION: &str = "sfo2";

/// Get the API endpoint, checking environment variable first, then falling back to default
pub fn get_api_endpoint() -> String {
    std::env::var_os(API_ENDPOINT_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint_ends_with_slash() {
        assert_eq!(DEFAULT_API_ENDPOINT, "https://api.digitalocean.com/v2/");
        assert!(DEFAULT_API_ENDPOINT.ends_with('/'));
    }

    #[test]
    fn test_env_var_names() {
        assert_eq!(API_ENDPOINT_ENV_VAR, "MKDROPLET_API_ENDPOINT");
        assert_eq!(LOG_LEVEL_ENV_VAR, "MKDROPLET_LOG_LEVEL");
    }

    // Both cases share one test so they never race on the process environment.
    #[test]
    fn test_get_api_endpoint_default_and_override() {
        let original = std::env::var_os(API_ENDPOINT_ENV_VAR);

        std::env::remove_var(API_ENDPOINT_ENV_VAR);
        assert_eq!(get_api_endpoint(), DEFAULT_API_ENDPOINT);

        let test_endpoint = "http://127.0.0.1:8080/v2/";
        std::env::set_var(API_ENDPOINT_ENV_VAR, test_endpoint);
        assert_eq!(get_api_endpoint(), test_endpoint);

        match original {
            Some(val) => std::env::set_var(API_ENDPOINT_ENV_VAR, val),
            None => std::env::remove_var(API_ENDPOINT_ENV_VAR),
        }
    }
}
