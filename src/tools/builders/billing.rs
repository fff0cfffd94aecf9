// ABOUTME: Request builders for consumption recording and settlement tools
// ABOUTME: Carries the one default-filled field in the catalog: quantity defaults to 1
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use serde_json::{json, Value};

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{date_window_query, optional_query, present, required_str, selective_body, Args};

/// `record_consumption` - the only operation with a default-fill rule:
/// an omitted `quantity` is sent as `1`. Every other optional field in the
/// catalog defaults to omitted.
pub(crate) fn record_consumption(args: &Args) -> Result<ApiRequest> {
    required_str(args, "record_consumption", "passport_id")?;
    required_str(args, "record_consumption", "permission")?;

    let mut body = selective_body(args, &["passport_id", "permission", "quantity", "metadata"]);
    if present(args, "quantity").is_none() {
        body.insert("quantity".to_owned(), json!(1));
    }
    Ok(ApiRequest::post("/consumption", Value::Object(body)))
}

pub(crate) fn list_settlements(args: &Args) -> Result<ApiRequest> {
    let mut request = ApiRequest::get("/settlements");
    request = optional_query(request, args, "gate_id", "gate_id");
    request = optional_query(request, args, "agent_id", "agent_id");
    request = optional_query(request, args, "status", "status");
    request = date_window_query(request, args);
    Ok(request)
}

pub(crate) fn get_settlement(args: &Args) -> Result<ApiRequest> {
    let settlement_id = required_str(args, "get_settlement", "settlement_id")?;
    Ok(ApiRequest::get(format!("/settlements/{settlement_id}")))
}

/// `transition_settlement` - status transitions go through POST, not
/// PATCH; the service treats them as actions with their own audit trail.
pub(crate) fn transition_settlement(args: &Args) -> Result<ApiRequest> {
    let settlement_id = required_str(args, "transition_settlement", "settlement_id")?;
    required_str(args, "transition_settlement", "status")?;
    let body = selective_body(args, &["status", "reason"]);
    Ok(ApiRequest::post(
        format!("/settlements/{settlement_id}/status"),
        Value::Object(body),
    ))
}
