// ABOUTME: Unified error taxonomy for tool dispatch, request translation, and transport
// ABOUTME: Defines WardenError with structured context for every failure class
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

//! # Error Types
//!
//! Every failure in this crate surfaces as a [`WardenError`]:
//! - `UnknownTool` - the dispatch table has no entry for the requested name,
//!   raised before any translation or network activity
//! - `MissingParameter` / `InvalidParameter` - a translator could not read a
//!   required argument from the argument record
//! - `Api` - the Warden service answered with a non-2xx status; the message is
//!   taken from the response body when it carries one
//! - `Http` - the request never completed (connect failure, timeout, TLS)
//! - `InvalidResponse` - a 2xx response whose body was not valid JSON
//!
//! Nothing is retried or swallowed here; callers decide what to do with a
//! failed dispatch.

use thiserror::Error;

/// Common error type for tool dispatch and Warden API operations
#[derive(Debug, Error)]
pub enum WardenError {
    /// The requested tool does not exist in the dispatch table
    #[error("Unknown tool '{tool}'")]
    UnknownTool {
        /// Name that failed to resolve
        tool: String,
    },

    /// A required argument was absent from the argument record
    #[error("Missing required parameter '{parameter}' for tool '{tool}'")]
    MissingParameter {
        /// Tool whose translation failed
        tool: &'static str,
        /// Name of the missing argument
        parameter: &'static str,
    },

    /// An argument was present but had the wrong shape
    #[error("Invalid parameter '{parameter}' for tool '{tool}': {reason}")]
    InvalidParameter {
        /// Tool whose translation failed
        tool: &'static str,
        /// Name of the offending argument
        parameter: &'static str,
        /// Why the value was rejected
        reason: &'static str,
    },

    /// The Warden service returned a non-2xx status
    #[error("{message}")]
    Api {
        /// Message extracted from the error body, or a status-line fallback
        message: String,
    },

    /// The HTTP request itself failed before a status was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A successful status carried a body that was not valid JSON
    #[error("Invalid response from Warden API: {reason}")]
    InvalidResponse {
        /// What was wrong with the payload
        reason: String,
    },

    /// Client configuration was unusable
    #[error("Configuration error: {reason}")]
    Config {
        /// What was wrong with the configuration
        reason: String,
    },
}

impl WardenError {
    /// Create an "unknown tool" error
    #[must_use]
    pub fn unknown_tool(tool: impl Into<String>) -> Self {
        Self::UnknownTool { tool: tool.into() }
    }

    /// Create a "missing parameter" error
    #[must_use]
    pub const fn missing_parameter(tool: &'static str, parameter: &'static str) -> Self {
        Self::MissingParameter { tool, parameter }
    }

    /// Create an "invalid parameter" error
    #[must_use]
    pub const fn invalid_parameter(
        tool: &'static str,
        parameter: &'static str,
        reason: &'static str,
    ) -> Self {
        Self::InvalidParameter {
            tool,
            parameter,
            reason,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, WardenError>;
