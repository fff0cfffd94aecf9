// ABOUTME: Shared helpers for request builders plus one module per resource family
// ABOUTME: Enforces path/body disjointness, presence-checked bodies, and query omission rules
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

//! # Request Builders
//!
//! One pure function per tool, grouped by resource family. Every builder
//! follows the same discipline:
//! - path identifiers are read out of the argument record first and never
//!   reappear in the query or body
//! - GET arguments become query pairs; absent and `null` values are omitted
//!   outright, never serialized as placeholders
//! - write bodies are either pass-through (everything minus path ids,
//!   nested values untouched) or selective (fixed field list with per-field
//!   presence checks, so a minimal call produces a genuinely empty `{}`)
//!
//! An explicit `null` argument is indistinguishable from an omitted one on
//! the caller side of the MCP boundary, so the helpers here treat the two
//! identically.

pub mod api_keys;
pub mod attestations;
pub mod authorization;
pub mod billing;
pub mod catalogs;
pub mod constraints;
pub mod discovery;
pub mod enforcement;
pub mod gates;
pub mod guest_access;
pub mod passports;
pub mod sla;
pub mod usage;

use serde_json::{Map, Value};

use crate::api::ApiRequest;
use crate::errors::{Result, WardenError};

/// Argument record handed to every builder
pub type Args = Map<String, Value>;

/// Look up an argument, treating explicit `null` as absent
pub(crate) fn present<'a>(args: &'a Args, param: &str) -> Option<&'a Value> {
    args.get(param).filter(|value| !value.is_null())
}

/// Read a required string argument, typically a path identifier
pub(crate) fn required_str<'a>(
    args: &'a Args,
    tool: &'static str,
    param: &'static str,
) -> Result<&'a str> {
    match present(args, param) {
        Some(value) => value
            .as_str()
            .ok_or_else(|| WardenError::invalid_parameter(tool, param, "must be a string")),
        None => Err(WardenError::missing_parameter(tool, param)),
    }
}

/// Read a required argument of any JSON shape
pub(crate) fn required_value<'a>(
    args: &'a Args,
    tool: &'static str,
    param: &'static str,
) -> Result<&'a Value> {
    present(args, param).ok_or_else(|| WardenError::missing_parameter(tool, param))
}

/// Stringify a query value: strings go bare, everything else via JSON
/// rendering (numbers and booleans come out as expected; URL-encoding is
/// the transport's job).
fn query_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Append a query pair for `param` under the wire name `key` when the
/// argument is present. The wire name differs from the caller name only
/// for the documented renames (`from_date`/`to_date` → `since`/`until`).
#[must_use]
pub(crate) fn optional_query(
    mut request: ApiRequest,
    args: &Args,
    param: &str,
    key: &'static str,
) -> ApiRequest {
    if let Some(value) = present(args, param) {
        request = request.with_query(key, query_value(value));
    }
    request
}

/// Build a selective body: copy exactly the listed fields, each only when
/// present. A call with no listed field supplied yields an empty `{}`.
pub(crate) fn selective_body(args: &Args, fields: &[&str]) -> Map<String, Value> {
    let mut body = Map::new();
    for &field in fields {
        if let Some(value) = present(args, field) {
            body.insert(field.to_owned(), value.clone());
        }
    }
    body
}

/// Build a pass-through body: every argument not consumed by the path is
/// forwarded unchanged, nested objects and arrays included.
pub(crate) fn passthrough_body(args: &Args, consumed_by_path: &[&str]) -> Map<String, Value> {
    let mut body = Map::new();
    for (field, value) in args {
        if consumed_by_path.contains(&field.as_str()) || value.is_null() {
            continue;
        }
        body.insert(field.clone(), value.clone());
    }
    body
}

/// Append the shared reporting-window filters, applying the caller-to-wire
/// rename for the date pair.
#[must_use]
pub(crate) fn date_window_query(mut request: ApiRequest, args: &Args) -> ApiRequest {
    request = optional_query(request, args, "from_date", "since");
    optional_query(request, args, "to_date", "until")
}
