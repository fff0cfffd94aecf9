// ABOUTME: Request builders for access gate management tools
// ABOUTME: Covers gate listing, lookup, creation, update, and deletion
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use serde_json::Value;

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{optional_query, passthrough_body, required_str, selective_body, Args};

/// `list_gates` - paginated gate listing
pub(crate) fn list_gates(args: &Args) -> Result<ApiRequest> {
    let mut request = ApiRequest::get("/gates");
    request = optional_query(request, args, "limit", "limit");
    request = optional_query(request, args, "offset", "offset");
    Ok(request)
}

pub(crate) fn get_gate(args: &Args) -> Result<ApiRequest> {
    let gate_id = required_str(args, "get_gate", "gate_id")?;
    Ok(ApiRequest::get(format!("/gates/{gate_id}")))
}

/// `create_gate` - pass-through body, no path identifiers to strip
pub(crate) fn create_gate(args: &Args) -> Result<ApiRequest> {
    required_str(args, "create_gate", "name")?;
    Ok(ApiRequest::post(
        "/gates",
        Value::Object(passthrough_body(args, &[])),
    ))
}

/// `update_gate` - PATCH with a presence-checked field subset
pub(crate) fn update_gate(args: &Args) -> Result<ApiRequest> {
    let gate_id = required_str(args, "update_gate", "gate_id")?;
    let body = selective_body(args, &["name", "description", "trust_profile", "catalog_id"]);
    Ok(ApiRequest::patch(
        format!("/gates/{gate_id}"),
        Value::Object(body),
    ))
}

pub(crate) fn delete_gate(args: &Args) -> Result<ApiRequest> {
    let gate_id = required_str(args, "delete_gate", "gate_id")?;
    Ok(ApiRequest::delete(format!("/gates/{gate_id}")))
}
