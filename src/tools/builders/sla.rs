// ABOUTME: Request builder for gate SLA metrics
// ABOUTME: Read-only reporting over a date window with optional resolution
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{date_window_query, optional_query, required_str, Args};

pub(crate) fn get_sla_metrics(args: &Args) -> Result<ApiRequest> {
    let gate_id = required_str(args, "get_sla_metrics", "gate_id")?;
    let mut request = ApiRequest::get(format!("/gates/{gate_id}/sla"));
    request = date_window_query(request, args);
    request = optional_query(request, args, "resolution", "resolution");
    Ok(request)
}
