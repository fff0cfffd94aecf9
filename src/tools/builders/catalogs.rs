// ABOUTME: Request builders for permission catalog and catalog version tools
// ABOUTME: Covers catalog CRUD, version listing and lookup, and publishing drafts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

use serde_json::Value;

use crate::api::ApiRequest;
use crate::errors::Result;

use super::{optional_query, passthrough_body, required_str, selective_body, Args};

pub(crate) fn list_catalogs(args: &Args) -> Result<ApiRequest> {
    let gate_id = required_str(args, "list_catalogs", "gate_id")?;
    let request = ApiRequest::get(format!("/gates/{gate_id}/catalogs"));
    Ok(optional_query(request, args, "status", "status"))
}

pub(crate) fn get_catalog(args: &Args) -> Result<ApiRequest> {
    let catalog_id = required_str(args, "get_catalog", "catalog_id")?;
    Ok(ApiRequest::get(format!("/catalogs/{catalog_id}")))
}

/// `create_catalog` - the gate id rides in the path; everything else is
/// forwarded into the body unchanged, nested permission definitions
/// included.
pub(crate) fn create_catalog(args: &Args) -> Result<ApiRequest> {
    let gate_id = required_str(args, "create_catalog", "gate_id")?;
    required_str(args, "create_catalog", "name")?;
    let body = passthrough_body(args, &["gate_id"]);
    Ok(ApiRequest::post(
        format!("/gates/{gate_id}/catalogs"),
        Value::Object(body),
    ))
}

pub(crate) fn update_catalog(args: &Args) -> Result<ApiRequest> {
    let catalog_id = required_str(args, "update_catalog", "catalog_id")?;
    let body = selective_body(args, &["name", "description", "permissions"]);
    Ok(ApiRequest::patch(
        format!("/catalogs/{catalog_id}"),
        Value::Object(body),
    ))
}

pub(crate) fn delete_catalog(args: &Args) -> Result<ApiRequest> {
    let catalog_id = required_str(args, "delete_catalog", "catalog_id")?;
    Ok(ApiRequest::delete(format!("/catalogs/{catalog_id}")))
}

pub(crate) fn list_catalog_versions(args: &Args) -> Result<ApiRequest> {
    let catalog_id = required_str(args, "list_catalog_versions", "catalog_id")?;
    Ok(ApiRequest::get(format!("/catalogs/{catalog_id}/versions")))
}

/// `get_catalog_version` - two path identifiers, both stripped from the
/// outgoing request beyond the path itself.
pub(crate) fn get_catalog_version(args: &Args) -> Result<ApiRequest> {
    let catalog_id = required_str(args, "get_catalog_version", "catalog_id")?;
    let version = required_str(args, "get_catalog_version", "version")?;
    Ok(ApiRequest::get(format!(
        "/catalogs/{catalog_id}/versions/{version}"
    )))
}

/// `publish_catalog` - publishing a draft with no release notes or
/// metadata sends `{}`.
pub(crate) fn publish_catalog(args: &Args) -> Result<ApiRequest> {
    let catalog_id = required_str(args, "publish_catalog", "catalog_id")?;
    let body = selective_body(args, &["notes", "metadata"]);
    Ok(ApiRequest::post(
        format!("/catalogs/{catalog_id}/publish"),
        Value::Object(body),
    ))
}
