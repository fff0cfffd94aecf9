// ABOUTME: ApiRequest value type produced by request translators
// ABOUTME: Carries method, relative path, ordered query pairs, and optional JSON body
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

//! The translated-request value handed from a tool translator to the
//! transport executor.
//!
//! Translators never touch the network; they only build one of these.
//! The invariants the builders maintain:
//! - arguments interpolated into `path` are structurally absent from
//!   `query` and `body`
//! - `query` holds only present values, in the order the builder pushed
//!   them; omitted optionals never appear
//! - `body` is `None` for reads and deletes, `Some` (possibly `{}`) for
//!   writes

use serde_json::Value;

/// HTTP methods the Warden API uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read a resource or listing
    Get,
    /// Create a resource or perform an action
    Post,
    /// Replace a sub-resource
    Put,
    /// Partially update a resource
    Patch,
    /// Remove or revoke a resource
    Delete,
}

impl Method {
    /// Wire name of the method
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Patch => Self::PATCH,
            Method::Delete => Self::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fully translated Warden API request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Path relative to the configured base URL, leading slash included
    pub path: String,
    /// Query pairs in builder-supplied order; values are pre-stringified,
    /// URL-encoding is left to the HTTP client
    pub query: Vec<(&'static str, String)>,
    /// JSON body for write operations
    pub body: Option<Value>,
}

impl ApiRequest {
    /// A GET request with no query parameters yet
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// A POST request carrying the given body
    #[must_use]
    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// A PUT request carrying the given body
    #[must_use]
    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Put,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// A PATCH request carrying the given body
    #[must_use]
    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: Method::Patch,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// A DELETE request; the Warden API never takes delete bodies
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Append a query pair, preserving insertion order
    #[must_use]
    pub fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }
}
