// ABOUTME: Request builders for passport lifecycle tools
// ABOUTME: Covers issuance, reissue, revocation, lookup, and signature verification
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use serde_json::Value;

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{optional_query, required_str, selective_body, Args};

pub(crate) fn list_passports(args: &Args) -> Result<ApiRequest> {
    let mut request = ApiRequest::get("/passports");
    request = optional_query(request, args, "gate_id", "gate_id");
    request = optional_query(request, args, "agent_id", "agent_id");
    request = optional_query(request, args, "status", "status");
    request = optional_query(request, args, "limit", "limit");
    request = optional_query(request, args, "offset", "offset");
    Ok(request)
}

pub(crate) fn get_passport(args: &Args) -> Result<ApiRequest> {
    let passport_id = required_str(args, "get_passport", "passport_id")?;
    Ok(ApiRequest::get(format!("/passports/{passport_id}")))
}

/// `issue_passport` - selective body so a minimal grant carries only the
/// gate and agent; the optional agent metadata and expiry are copied only
/// when supplied.
pub(crate) fn issue_passport(args: &Args) -> Result<ApiRequest> {
    required_str(args, "issue_passport", "gate_id")?;
    required_str(args, "issue_passport", "agent_id")?;
    let body = selective_body(
        args,
        &[
            "gate_id",
            "agent_id",
            "agent_name",
            "public_key",
            "permissions",
            "expires_at",
        ],
    );
    Ok(ApiRequest::post("/passports", Value::Object(body)))
}

/// `reissue_passport` - the optional catalog version pin is the only body
/// field; omitting it must produce an empty `{}`, not a null placeholder.
pub(crate) fn reissue_passport(args: &Args) -> Result<ApiRequest> {
    let passport_id = required_str(args, "reissue_passport", "passport_id")?;
    let body = selective_body(args, &["catalog_version"]);
    Ok(ApiRequest::post(
        format!("/passports/{passport_id}/reissue"),
        Value::Object(body),
    ))
}

pub(crate) fn revoke_passport(args: &Args) -> Result<ApiRequest> {
    let passport_id = required_str(args, "revoke_passport", "passport_id")?;
    Ok(ApiRequest::delete(format!("/passports/{passport_id}")))
}

/// `verify_passport` - POST by API contract even though it is conceptually
/// a read; the passport travels in the body, not the path.
pub(crate) fn verify_passport(args: &Args) -> Result<ApiRequest> {
    required_str(args, "verify_passport", "passport")?;
    let body = selective_body(args, &["passport", "signature", "nonce"]);
    Ok(ApiRequest::post("/passports/verify", Value::Object(body)))
}
