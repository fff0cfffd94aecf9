// ABOUTME: Client configuration sourced from the environment or built programmatically
// ABOUTME: Owns base URL normalization and API key handling for WardenClient
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

//! Environment-driven configuration for the Warden API client.
//!
//! Hosts embedding this crate can either call [`WardenConfig::from_env`] or
//! construct a config directly when credentials come from somewhere else
//! (a secrets manager, a per-tenant store).

use std::env;

use url::Url;

use crate::errors::{Result, WardenError};

/// Default public endpoint of the Warden service
pub const DEFAULT_BASE_URL: &str = "https://api.warden.dev/v1";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the Warden API
#[derive(Debug, Clone)]
pub struct WardenConfig {
    /// Base URL of the Warden REST API, no trailing slash
    pub base_url: String,
    /// Bearer credential sent on every request
    pub api_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WardenConfig {
    /// Build a configuration from an explicit key and base URL.
    ///
    /// # Errors
    ///
    /// Returns `WardenError::Config` when the API key is empty or the base
    /// URL does not parse as an absolute http(s) URL.
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(WardenError::config("API key must not be empty"));
        }

        let base_url = normalize_base_url(&base_url.into())?;

        Ok(Self {
            base_url,
            api_key,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `WARDEN_API_KEY` (required), `WARDEN_BASE_URL` (defaults to the
    /// public endpoint), and `WARDEN_HTTP_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `WardenError::Config` when `WARDEN_API_KEY` is unset or a
    /// variable has an unusable value.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("WARDEN_API_KEY")
            .map_err(|_| WardenError::config("WARDEN_API_KEY environment variable is not set"))?;

        let base_url =
            env::var("WARDEN_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_owned());

        let timeout_secs = match env::var("WARDEN_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw.parse().map_err(|_| {
                WardenError::config("WARDEN_HTTP_TIMEOUT_SECS must be a positive integer")
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let mut config = Self::new(api_key, base_url)?;
        config.timeout_secs = timeout_secs;
        Ok(config)
    }

    /// Override the request timeout
    #[must_use]
    pub const fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Validate the base URL and strip any trailing slash so path concatenation
/// stays predictable.
fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw)
        .map_err(|_| WardenError::config(format!("Invalid base URL: {raw}")))?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(WardenError::config(format!(
            "Base URL must be http or https, got: {raw}"
        )));
    }

    Ok(raw.trim_end_matches('/').to_owned())
}
