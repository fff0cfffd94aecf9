// ABOUTME: Request builders for API key management tools
// ABOUTME: Covers key listing, creation, revocation, and rotation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use serde_json::{json, Value};

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{optional_query, required_str, selective_body, Args};

pub(crate) fn list_api_keys(args: &Args) -> Result<ApiRequest> {
    let request = ApiRequest::get("/api-keys");
    Ok(optional_query(request, args, "include_revoked", "include_revoked"))
}

/// `create_api_key` - scopes and expiry are copied only when supplied so a
/// bare `{"name": ...}` call creates a full-scope, non-expiring key.
pub(crate) fn create_api_key(args: &Args) -> Result<ApiRequest> {
    required_str(args, "create_api_key", "name")?;
    let body = selective_body(args, &["name", "scopes", "expires_at"]);
    Ok(ApiRequest::post("/api-keys", Value::Object(body)))
}

pub(crate) fn revoke_api_key(args: &Args) -> Result<ApiRequest> {
    let key_id = required_str(args, "revoke_api_key", "key_id")?;
    Ok(ApiRequest::delete(format!("/api-keys/{key_id}")))
}

/// `rotate_api_key` - POST action, fixed empty body; the new secret comes
/// back in the response.
pub(crate) fn rotate_api_key(args: &Args) -> Result<ApiRequest> {
    let key_id = required_str(args, "rotate_api_key", "key_id")?;
    Ok(ApiRequest::post(format!("/api-keys/{key_id}/rotate"), json!({})))
}
