// ABOUTME: Tool layer: registry, schemas, and per-family request builders
// ABOUTME: Maps MCP tool names onto Warden REST API requests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

//! # Warden Tools
//!
//! Everything between an inbound `tools/call` and the HTTP layer:
//! - [`registry::ToolId`] - the dispatch table, one variant per operation
//! - [`schema`] - the advertised tool catalog for `tools/list`
//! - [`builders`] - pure translators from argument records to
//!   [`crate::api::ApiRequest`] values

pub mod builders;
pub mod registry;
pub mod schema;

pub use registry::ToolId;
pub use schema::{tool_schemas, JsonSchema, PropertySchema, ToolSchema};
