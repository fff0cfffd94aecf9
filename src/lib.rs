// ABOUTME: Main library entry point for the Warden MCP tool layer
// ABOUTME: Exposes the Warden authorization API as named, schema-described MCP tools
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

#![deny(unsafe_code)]

//! # Warden MCP Server
//!
//! A library exposing the Warden agent-authorization platform (access
//! gates, passports, permission catalogs, constraints, enforcement,
//! billing) as named MCP tools. Each tool call is translated into exactly
//! one HTTP request against the Warden REST API and the response is
//! returned verbatim; the authorization decisions themselves are made
//! server-side.
//!
//! ## Architecture
//!
//! - **[`tools`]**: the dispatch table ([`tools::ToolId`]), the advertised
//!   tool catalog, and one pure request builder per operation
//! - **[`api`]**: the transport executor - one bearer-authenticated JSON
//!   HTTP call per dispatch, failures normalized to [`errors::WardenError`]
//! - **[`config`]**: environment-driven client configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use serde_json::json;
//! use warden_mcp_server::api::WardenClient;
//! use warden_mcp_server::config::WardenConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = WardenClient::new(WardenConfig::from_env()?)?;
//!
//!     let gate = client
//!         .call("get_gate", &json!({"gate_id": "gate_7f3a"}))
//!         .await?;
//!     println!("{gate}");
//!
//!     Ok(())
//! }
//! ```

/// HTTP transport layer: translated requests and the executing client
pub mod api;

/// Client configuration from the environment or embedding hosts
pub mod config;

/// Unified error taxonomy for dispatch, translation, and transport
pub mod errors;

/// Tool registry, schemas, and per-operation request builders
pub mod tools;

pub use api::{ApiRequest, Method, WardenClient};
pub use config::WardenConfig;
pub use errors::WardenError;
pub use tools::{tool_schemas, ToolId};
