// ABOUTME: Request builders for authorization check and dry-run tools
// ABOUTME: Both are POST actions against a gate; the decision logic lives server-side
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use serde_json::Value;

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{passthrough_body, required_str, selective_body, Args};

/// `check_permission` - enforcing check; the result is attested and counts
/// against usage.
pub(crate) fn check_permission(args: &Args) -> Result<ApiRequest> {
    let gate_id = required_str(args, "check_permission", "gate_id")?;
    required_str(args, "check_permission", "passport")?;
    required_str(args, "check_permission", "permission")?;
    let body = selective_body(args, &["passport", "permission", "context"]);
    Ok(ApiRequest::post(
        format!("/gates/{gate_id}/check"),
        Value::Object(body),
    ))
}

/// `simulate_permission` - dry run with no side effects; the whole
/// argument record minus the gate id is forwarded so callers can probe
/// arbitrary request shapes.
pub(crate) fn simulate_permission(args: &Args) -> Result<ApiRequest> {
    let gate_id = required_str(args, "simulate_permission", "gate_id")?;
    let body = passthrough_body(args, &["gate_id"]);
    Ok(ApiRequest::post(
        format!("/gates/{gate_id}/simulate"),
        Value::Object(body),
    ))
}
