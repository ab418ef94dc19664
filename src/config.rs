//! Trello credential and endpoint configuration.
//!
//! Credentials are process-wide and caller-independent: every outbound
//! request carries the same API key and token. They are loaded once at
//! startup and handed to the client by value.

use std::env;

use miette::Diagnostic;
use thiserror::Error;

/// Default upstream endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com";

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {name}")]
    #[diagnostic(
        code(trello_mcp::config::missing_var),
        help(
            "Set {name} to the value from https://trello.com/power-ups/admin.\nBoth TRELLO_API_KEY and TRELLO_API_TOKEN are required."
        )
    )]
    MissingVar { name: &'static str },
}

/// Settings for talking to the Trello REST API.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key, sent as the `key` query parameter on every request.
    pub api_key: String,
    /// Member token, sent as the `token` query parameter on every request.
    pub api_token: String,
    /// Base URL of the upstream API, without a trailing slash.
    pub base_url: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Reads `TRELLO_API_KEY` and `TRELLO_API_TOKEN` (both required,
    /// empty counts as missing) and the optional `TRELLO_BASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("TRELLO_API_KEY").ok(),
            env::var("TRELLO_API_TOKEN").ok(),
            env::var("TRELLO_BASE_URL").ok(),
        )
    }

    fn from_vars(
        api_key: Option<String>,
        api_token: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = non_empty(api_key).ok_or(ConfigError::MissingVar {
            name: "TRELLO_API_KEY",
        })?;
        let api_token = non_empty(api_token).ok_or(ConfigError::MissingVar {
            name: "TRELLO_API_TOKEN",
        })?;
        let base_url = non_empty(base_url)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            api_token,
            base_url,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
