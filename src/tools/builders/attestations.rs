// ABOUTME: Request builders for audit attestation tools
// ABOUTME: Covers attestation listing with date filters, lookup, and signature verification
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use serde_json::Value;

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{date_window_query, optional_query, required_str, selective_body, Args};

/// `list_attestations` - the caller-facing `from_date`/`to_date` pair is
/// renamed to `since`/`until` on the wire.
pub(crate) fn list_attestations(args: &Args) -> Result<ApiRequest> {
    let mut request = ApiRequest::get("/attestations");
    request = optional_query(request, args, "gate_id", "gate_id");
    request = optional_query(request, args, "agent_id", "agent_id");
    request = date_window_query(request, args);
    request = optional_query(request, args, "limit", "limit");
    Ok(request)
}

pub(crate) fn get_attestation(args: &Args) -> Result<ApiRequest> {
    let attestation_id = required_str(args, "get_attestation", "attestation_id")?;
    Ok(ApiRequest::get(format!("/attestations/{attestation_id}")))
}

/// `verify_attestation` - POST action; with no key supplied the service
/// verifies against the gate's registered key and the body is `{}`.
pub(crate) fn verify_attestation(args: &Args) -> Result<ApiRequest> {
    let attestation_id = required_str(args, "verify_attestation", "attestation_id")?;
    let body = selective_body(args, &["public_key"]);
    Ok(ApiRequest::post(
        format!("/attestations/{attestation_id}/verify"),
        Value::Object(body),
    ))
}
