// ABOUTME: Request builders for service discovery tools
// ABOUTME: Discovery lists gated services an agent can request passports for
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{optional_query, required_str, Args};

pub(crate) fn discover_services(args: &Args) -> Result<ApiRequest> {
    let mut request = ApiRequest::get("/discovery/services");
    request = optional_query(request, args, "capability", "capability");
    request = optional_query(request, args, "status", "status");
    request = optional_query(request, args, "limit", "limit");
    Ok(request)
}

pub(crate) fn get_service(args: &Args) -> Result<ApiRequest> {
    let service_id = required_str(args, "get_service", "service_id")?;
    Ok(ApiRequest::get(format!("/discovery/services/{service_id}")))
}
