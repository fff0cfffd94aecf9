// ABOUTME: Request builders for cumulative usage state tools
// ABOUTME: Usage counters accumulate per passport until explicitly reset
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use serde_json::json;

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{required_str, Args};

pub(crate) fn get_usage(args: &Args) -> Result<ApiRequest> {
    let passport_id = required_str(args, "get_usage", "passport_id")?;
    Ok(ApiRequest::get(format!("/passports/{passport_id}/usage")))
}

/// `reset_usage` - POST action with a fixed empty body; the passport id is
/// consumed by the path.
pub(crate) fn reset_usage(args: &Args) -> Result<ApiRequest> {
    let passport_id = required_str(args, "reset_usage", "passport_id")?;
    Ok(ApiRequest::post(
        format!("/passports/{passport_id}/usage/reset"),
        json!({}),
    ))
}
