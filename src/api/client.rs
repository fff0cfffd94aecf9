// ABOUTME: WardenClient executes translated requests against the Warden REST API
// ABOUTME: Owns the pooled reqwest client, bearer credential, and error normalization
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

//! # Transport Executor
//!
//! One HTTP call per invocation, no retries, no caching. Every request
//! carries the bearer credential and a JSON content type. Responses are
//! normalized to a uniform contract:
//! - 204 yields an empty object
//! - any other 2xx is parsed as JSON and returned verbatim
//! - non-2xx becomes [`WardenError::Api`] with the message extracted from
//!   the error body when the body is JSON, else `"{status} {reason}"`

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::WardenConfig;
use crate::errors::{Result, WardenError};
use crate::tools::registry::ToolId;

use super::request::ApiRequest;

/// Credentialed client for the Warden API.
///
/// Cheap to clone is not a goal; build one at startup and share it. The
/// base URL and API key are read-only for the client's lifetime, so
/// concurrent dispatches need no locking.
pub struct WardenClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WardenClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns `WardenError::Config` when the underlying HTTP client cannot
    /// be constructed (malformed TLS backend state, usually).
    pub fn new(config: WardenConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WardenError::config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
        })
    }

    /// Dispatch a named tool call: resolve the tool, translate the argument
    /// record, and execute the resulting request.
    ///
    /// Unknown tool names fail before any translation or network activity.
    ///
    /// # Errors
    ///
    /// Returns `WardenError::UnknownTool` for unregistered names, a
    /// translation error for unusable argument records, and transport/API
    /// errors from [`Self::execute`].
    pub async fn call(&self, tool_name: &str, args: &Value) -> Result<Value> {
        let Some(tool) = ToolId::from_name(tool_name) else {
            warn!("Rejecting dispatch of unknown tool '{tool_name}'");
            return Err(WardenError::unknown_tool(tool_name));
        };

        let request = tool.build_request(args)?;
        debug!(
            tool = tool.name(),
            method = %request.method,
            path = %request.path,
            "Dispatching tool call"
        );
        self.execute(request).await
    }

    /// Execute one translated request and normalize the outcome.
    ///
    /// # Errors
    ///
    /// Returns `WardenError::Http` when the call never completes,
    /// `WardenError::Api` for non-2xx statuses, and
    /// `WardenError::InvalidResponse` when a success body is not JSON.
    pub async fn execute(&self, request: ApiRequest) -> Result<Value> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .http
            .request(request.method.into(), &url)
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json");

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                warn!("Failed to read error response body: {e}");
                String::new()
            });
            warn!("Warden API error: {status} - {body}");
            return Err(WardenError::Api {
                message: extract_error_message(status, &body),
            });
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(json!({}));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| WardenError::InvalidResponse {
            reason: format!("expected JSON body, got parse error: {e}"),
        })
    }

    /// Base URL this client targets, trailing slash already stripped
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Pull a human-readable message out of an error body.
///
/// The Warden API reports failures as `{"message": "..."}` (older endpoints
/// use `"error"`). Bodies that are not JSON, or JSON without a message-like
/// field, fall back to the status line so the numeric code is never lost.
fn extract_error_message(status: StatusCode, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<Value>(body) {
        for key in ["message", "error"] {
            if let Some(message) = parsed.get(key).and_then(Value::as_str) {
                return message.to_owned();
            }
        }
    }

    format!(
        "Warden API request failed: {} {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown Error")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_message_field() {
        let message = extract_error_message(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "Invalid API key"}"#,
        );
        assert_eq!(message, "Invalid API key");
    }

    #[test]
    fn error_message_accepts_error_field() {
        let message =
            extract_error_message(StatusCode::NOT_FOUND, r#"{"error": "gate not found"}"#);
        assert_eq!(message, "gate not found");
    }

    #[test]
    fn malformed_body_falls_back_to_status_line() {
        let message = extract_error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>boom");
        assert!(message.contains("500"));
        assert!(message.contains("Internal Server Error"));
    }

    #[test]
    fn empty_json_body_falls_back_to_status_line() {
        let message = extract_error_message(StatusCode::INTERNAL_SERVER_ERROR, "{}");
        assert!(message.contains("500"));
    }
}
