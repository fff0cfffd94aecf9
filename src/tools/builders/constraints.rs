// ABOUTME: Request builders for constraint and constraint template tools
// ABOUTME: Constraints attach limits to passports directly or via named templates
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use serde_json::Value;

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{optional_query, required_str, required_value, selective_body, Args};

pub(crate) fn list_constraints(args: &Args) -> Result<ApiRequest> {
    let passport_id = required_str(args, "list_constraints", "passport_id")?;
    Ok(ApiRequest::get(format!("/passports/{passport_id}/constraints")))
}

/// `set_constraint` - PUT is deliberate: setting the same constraint twice
/// replaces it rather than stacking. The limit may be any JSON shape
/// (number for rate limits, object for cost ceilings).
pub(crate) fn set_constraint(args: &Args) -> Result<ApiRequest> {
    let passport_id = required_str(args, "set_constraint", "passport_id")?;
    let name = required_str(args, "set_constraint", "name")?;
    required_value(args, "set_constraint", "limit")?;
    let body = selective_body(args, &["limit", "window", "action"]);
    Ok(ApiRequest::put(
        format!("/passports/{passport_id}/constraints/{name}"),
        Value::Object(body),
    ))
}

pub(crate) fn remove_constraint(args: &Args) -> Result<ApiRequest> {
    let passport_id = required_str(args, "remove_constraint", "passport_id")?;
    let name = required_str(args, "remove_constraint", "name")?;
    Ok(ApiRequest::delete(format!(
        "/passports/{passport_id}/constraints/{name}"
    )))
}

pub(crate) fn list_constraint_templates(args: &Args) -> Result<ApiRequest> {
    let request = ApiRequest::get("/constraint-templates");
    Ok(optional_query(request, args, "category", "category"))
}

pub(crate) fn get_constraint_template(args: &Args) -> Result<ApiRequest> {
    let template_id = required_str(args, "get_constraint_template", "template_id")?;
    Ok(ApiRequest::get(format!("/constraint-templates/{template_id}")))
}

/// `apply_constraint_template` - the template id names a server-side
/// bundle; per-passport overrides are optional.
pub(crate) fn apply_constraint_template(args: &Args) -> Result<ApiRequest> {
    let passport_id = required_str(args, "apply_constraint_template", "passport_id")?;
    required_str(args, "apply_constraint_template", "template_id")?;
    let body = selective_body(args, &["template_id", "overrides"]);
    Ok(ApiRequest::post(
        format!("/passports/{passport_id}/constraints/apply"),
        Value::Object(body),
    ))
}
