// ABOUTME: Property tests for the per-tool request builders
// ABOUTME: Verifies path/body disjointness, omission rules, renames, and method quirks
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project
#![allow(clippy::expect_used, clippy::unwrap_used)]

use serde_json::{json, Value};
use warden_mcp_server::{ApiRequest, Method, ToolId, WardenError};

fn build(name: &str, args: Value) -> ApiRequest {
    ToolId::from_name(name)
        .unwrap_or_else(|| panic!("tool '{name}' should be registered"))
        .build_request(&args)
        .unwrap_or_else(|e| panic!("builder for '{name}' should succeed: {e}"))
}

fn build_err(name: &str, args: Value) -> WardenError {
    match ToolId::from_name(name)
        .unwrap_or_else(|| panic!("tool '{name}' should be registered"))
        .build_request(&args)
    {
        Ok(request) => panic!("builder for '{name}' should fail, got {request:?}"),
        Err(e) => e,
    }
}

fn body_object(request: &ApiRequest) -> &serde_json::Map<String, Value> {
    request
        .body
        .as_ref()
        .and_then(Value::as_object)
        .unwrap_or_else(|| panic!("request should carry an object body: {request:?}"))
}

#[test]
fn path_identifiers_are_interpolated_literally() {
    let request = build("get_gate", json!({"gate_id": "gate_7f3a"}));
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "/gates/gate_7f3a");
    assert!(request.query.is_empty());
    assert!(request.body.is_none());
}

#[test]
fn path_identifiers_never_leak_into_the_body() {
    let request = build(
        "update_gate",
        json!({"gate_id": "gate_1", "name": "Billing Gate"}),
    );
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.path, "/gates/gate_1");
    let body = body_object(&request);
    assert!(!body.contains_key("gate_id"));
    assert_eq!(body.get("name"), Some(&json!("Billing Gate")));
}

#[test]
fn path_identifiers_never_leak_into_the_query() {
    let request = build(
        "list_catalogs",
        json!({"gate_id": "gate_1", "status": "published"}),
    );
    assert_eq!(request.path, "/gates/gate_1/catalogs");
    assert!(request.query.iter().all(|(key, _)| *key != "gate_id"));
    assert_eq!(request.query, vec![("status", "published".to_owned())]);
}

#[test]
fn two_path_identifiers_are_both_consumed() {
    let request = build(
        "get_catalog_version",
        json!({"catalog_id": "cat_9", "version": "v3"}),
    );
    assert_eq!(request.path, "/catalogs/cat_9/versions/v3");
    assert!(request.query.is_empty());
    assert!(request.body.is_none());

    let request = build(
        "set_constraint",
        json!({"passport_id": "pp_1", "name": "rate", "limit": 100}),
    );
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "/passports/pp_1/constraints/rate");
    let body = body_object(&request);
    assert!(!body.contains_key("passport_id"));
    assert!(!body.contains_key("name"));
    assert_eq!(body.get("limit"), Some(&json!(100)));
}

#[test]
fn omitted_optional_query_fields_are_absent() {
    let request = build("list_passports", json!({"gate_id": "gate_1"}));
    assert_eq!(request.query, vec![("gate_id", "gate_1".to_owned())]);
}

#[test]
fn explicit_null_is_treated_as_omitted() {
    let request = build(
        "list_passports",
        json!({"gate_id": "gate_1", "status": null, "limit": null}),
    );
    assert_eq!(request.query, vec![("gate_id", "gate_1".to_owned())]);

    let request = build(
        "update_gate",
        json!({"gate_id": "gate_1", "description": null}),
    );
    assert_eq!(body_object(&request).len(), 0);
}

#[test]
fn query_values_are_stringified() {
    let request = build("list_gates", json!({"limit": 25, "offset": 50}));
    assert_eq!(
        request.query,
        vec![("limit", "25".to_owned()), ("offset", "50".to_owned())]
    );

    let request = build("list_api_keys", json!({"include_revoked": true}));
    assert_eq!(request.query, vec![("include_revoked", "true".to_owned())]);
}

#[test]
fn date_window_filters_use_wire_names() {
    for (name, expected_path) in [
        ("list_attestations", "/attestations"),
        ("list_enforcements", "/enforcements"),
        ("list_settlements", "/settlements"),
    ] {
        let request = build(
            name,
            json!({"from_date": "2025-01-01T00:00:00Z", "to_date": "2025-02-01T00:00:00Z"}),
        );
        assert_eq!(request.path, expected_path);
        let keys: Vec<&str> = request.query.iter().map(|(key, _)| *key).collect();
        assert!(keys.contains(&"since"), "{name} should send 'since'");
        assert!(keys.contains(&"until"), "{name} should send 'until'");
        assert!(!keys.contains(&"from_date"), "{name} leaked 'from_date'");
        assert!(!keys.contains(&"to_date"), "{name} leaked 'to_date'");
    }

    let request = build(
        "get_sla_metrics",
        json!({"gate_id": "gate_1", "from_date": "2025-01-01T00:00:00Z"}),
    );
    assert_eq!(request.path, "/gates/gate_1/sla");
    assert_eq!(
        request.query,
        vec![("since", "2025-01-01T00:00:00Z".to_owned())]
    );
}

#[test]
fn reissue_with_only_the_passport_id_sends_an_empty_body() {
    let request = build("reissue_passport", json!({"passport_id": "pp_1"}));
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/passports/pp_1/reissue");
    assert_eq!(request.body, Some(json!({})));
}

#[test]
fn reissue_with_a_version_pin_carries_only_that_field() {
    let request = build(
        "reissue_passport",
        json!({"passport_id": "pp_1", "catalog_version": "v7"}),
    );
    assert_eq!(request.body, Some(json!({"catalog_version": "v7"})));
}

#[test]
fn selective_bodies_stay_minimal() {
    let request = build("publish_catalog", json!({"catalog_id": "cat_1"}));
    assert_eq!(request.body, Some(json!({})));

    let request = build("verify_attestation", json!({"attestation_id": "att_1"}));
    assert_eq!(request.path, "/attestations/att_1/verify");
    assert_eq!(request.body, Some(json!({})));

    let request = build(
        "issue_passport",
        json!({"gate_id": "gate_1", "agent_id": "agent_9"}),
    );
    assert_eq!(
        request.body,
        Some(json!({"gate_id": "gate_1", "agent_id": "agent_9"}))
    );
}

#[test]
fn issue_passport_carries_the_richer_optional_fields_when_supplied() {
    let request = build(
        "issue_passport",
        json!({
            "gate_id": "gate_1",
            "agent_id": "agent_9",
            "agent_name": "deploy-bot",
            "public_key": "ed25519:AAAA",
            "expires_at": "2025-12-31T00:00:00Z"
        }),
    );
    let body = body_object(&request);
    assert_eq!(body.get("agent_name"), Some(&json!("deploy-bot")));
    assert_eq!(body.get("public_key"), Some(&json!("ed25519:AAAA")));
    assert_eq!(body.get("expires_at"), Some(&json!("2025-12-31T00:00:00Z")));
}

#[test]
fn passthrough_bodies_forward_nested_values_unchanged() {
    let permissions = json!([
        {"name": "invoices:read", "cost": 0},
        {"name": "invoices:write", "cost": 3}
    ]);
    let request = build(
        "create_catalog",
        json!({
            "gate_id": "gate_1",
            "name": "billing",
            "permissions": permissions.clone()
        }),
    );
    assert_eq!(request.path, "/gates/gate_1/catalogs");
    let body = body_object(&request);
    assert!(!body.contains_key("gate_id"));
    assert_eq!(body.get("permissions"), Some(&permissions));

    let request = build(
        "record_enforcement",
        json!({
            "gate_id": "gate_1",
            "outcome": "denied",
            "metadata": {"ip": "10.0.0.8", "depth": {"nested": true}}
        }),
    );
    assert_eq!(request.path, "/enforcements");
    let body = body_object(&request);
    assert_eq!(body.get("gate_id"), Some(&json!("gate_1")));
    assert_eq!(
        body.get("metadata"),
        Some(&json!({"ip": "10.0.0.8", "depth": {"nested": true}}))
    );
}

#[test]
fn consumption_quantity_defaults_to_one() {
    let request = build(
        "record_consumption",
        json!({"passport_id": "pp_1", "permission": "invoices:read"}),
    );
    assert_eq!(body_object(&request).get("quantity"), Some(&json!(1)));
}

#[test]
fn consumption_quantity_is_passed_through_when_supplied() {
    let request = build(
        "record_consumption",
        json!({"passport_id": "pp_1", "permission": "invoices:read", "quantity": 12}),
    );
    assert_eq!(body_object(&request).get("quantity"), Some(&json!(12)));
}

#[test]
fn action_tools_use_post_by_contract() {
    let request = build("verify_passport", json!({"passport": "wp_token"}));
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/passports/verify");

    let request = build(
        "transition_settlement",
        json!({"settlement_id": "stl_1", "status": "invoiced"}),
    );
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/settlements/stl_1/status");
    assert_eq!(request.body, Some(json!({"status": "invoiced"})));

    let request = build("reset_usage", json!({"passport_id": "pp_1"}));
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/passports/pp_1/usage/reset");
    assert_eq!(request.body, Some(json!({})));

    let request = build("rotate_api_key", json!({"key_id": "key_1"}));
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/api-keys/key_1/rotate");
    assert_eq!(request.body, Some(json!({})));
}

#[test]
fn replacement_tools_use_put_by_contract() {
    let request = build(
        "update_guest_policy",
        json!({"gate_id": "gate_1", "enabled": false}),
    );
    assert_eq!(request.method, Method::Put);
    assert_eq!(request.path, "/gates/gate_1/guest-policy");
    assert_eq!(request.body, Some(json!({"enabled": false})));
}

#[test]
fn missing_required_arguments_are_reported_by_name() {
    let error = build_err("get_gate", json!({}));
    match error {
        WardenError::MissingParameter { tool, parameter } => {
            assert_eq!(tool, "get_gate");
            assert_eq!(parameter, "gate_id");
        }
        other => panic!("expected MissingParameter, got {other}"),
    }

    let error = build_err("set_constraint", json!({"passport_id": "pp_1", "name": "rate"}));
    match error {
        WardenError::MissingParameter { parameter, .. } => assert_eq!(parameter, "limit"),
        other => panic!("expected MissingParameter, got {other}"),
    }
}

#[test]
fn wrongly_typed_identifiers_are_rejected() {
    let error = build_err("get_gate", json!({"gate_id": 42}));
    assert!(matches!(error, WardenError::InvalidParameter { .. }));
}

#[test]
fn non_object_argument_records_are_rejected() {
    let error = build_err("list_gates", json!([1, 2, 3]));
    assert!(matches!(error, WardenError::InvalidParameter { .. }));

    // null stands for "no arguments" and must work for tools without
    // required fields
    let request = ToolId::ListGates
        .build_request(&Value::Null)
        .unwrap_or_else(|e| panic!("null argument record should be accepted: {e}"));
    assert_eq!(request.path, "/gates");
}

#[test]
fn apply_constraint_template_splits_path_and_body() {
    let request = build(
        "apply_constraint_template",
        json!({
            "passport_id": "pp_1",
            "template_id": "tpl_strict",
            "overrides": {"rate": 10}
        }),
    );
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/passports/pp_1/constraints/apply");
    assert_eq!(
        request.body,
        Some(json!({"template_id": "tpl_strict", "overrides": {"rate": 10}}))
    );
}

#[test]
fn check_permission_keeps_the_gate_in_the_path_only() {
    let request = build(
        "check_permission",
        json!({
            "gate_id": "gate_1",
            "passport": "wp_token",
            "permission": "invoices:read",
            "context": {"amount": 40}
        }),
    );
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "/gates/gate_1/check");
    let body = body_object(&request);
    assert!(!body.contains_key("gate_id"));
    assert_eq!(body.get("context"), Some(&json!({"amount": 40})));
}
