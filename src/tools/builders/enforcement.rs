// ABOUTME: Request builders for enforcement attestation tools
// ABOUTME: Enforcement records are signed accounts of allow/deny decisions at a gate
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use serde_json::Value;

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{date_window_query, optional_query, passthrough_body, required_str, Args};

pub(crate) fn list_enforcements(args: &Args) -> Result<ApiRequest> {
    let mut request = ApiRequest::get("/enforcements");
    request = optional_query(request, args, "gate_id", "gate_id");
    request = optional_query(request, args, "passport_id", "passport_id");
    request = optional_query(request, args, "outcome", "outcome");
    request = date_window_query(request, args);
    Ok(request)
}

pub(crate) fn get_enforcement(args: &Args) -> Result<ApiRequest> {
    let enforcement_id = required_str(args, "get_enforcement", "enforcement_id")?;
    Ok(ApiRequest::get(format!("/enforcements/{enforcement_id}")))
}

/// `record_enforcement` - pass-through: the enforcement payload shape is
/// owned by the service and evolves without client changes.
pub(crate) fn record_enforcement(args: &Args) -> Result<ApiRequest> {
    required_str(args, "record_enforcement", "gate_id")?;
    required_str(args, "record_enforcement", "outcome")?;
    Ok(ApiRequest::post(
        "/enforcements",
        Value::Object(passthrough_body(args, &[])),
    ))
}
