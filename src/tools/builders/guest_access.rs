// ABOUTME: Request builders for anonymous (guest) access policy tools
// ABOUTME: A gate's guest policy governs callers presenting no passport at all
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use serde_json::Value;

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{required_str, selective_body, Args};

pub(crate) fn get_guest_policy(args: &Args) -> Result<ApiRequest> {
    let gate_id = required_str(args, "get_guest_policy", "gate_id")?;
    Ok(ApiRequest::get(format!("/gates/{gate_id}/guest-policy")))
}

/// `update_guest_policy` - PUT replaces the whole policy; fields left out
/// fall back to service defaults, so they must not be sent as nulls.
pub(crate) fn update_guest_policy(args: &Args) -> Result<ApiRequest> {
    let gate_id = required_str(args, "update_guest_policy", "gate_id")?;
    let body = selective_body(args, &["enabled", "permissions", "rate_limit"]);
    Ok(ApiRequest::put(
        format!("/gates/{gate_id}/guest-policy"),
        Value::Object(body),
    ))
}
