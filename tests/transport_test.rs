// ABOUTME: Transport executor tests against a mock HTTP server
// ABOUTME: Verifies headers, single-call semantics, response parsing, and error extraction
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project
#![allow(clippy::expect_used, clippy::unwrap_used)]

mod common;

use serde_json::json;
use warden_mcp_server::WardenError;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn dispatch_performs_exactly_one_authenticated_call() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gates/gate_7f3a"))
        .and(header("authorization", "Bearer wk_test_0123456789"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "gate_7f3a"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::test_client(&server.uri());
    let result = client
        .call("get_gate", &json!({"gate_id": "gate_7f3a"}))
        .await
        .unwrap_or_else(|e| panic!("dispatch should succeed: {e}"));

    assert_eq!(result, json!({"id": "gate_7f3a"}));
    server.verify().await;
}

#[tokio::test]
async fn query_parameters_reach_the_wire_under_their_wire_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/attestations"))
        .and(query_param("since", "2025-01-01T00:00:00Z"))
        .and(query_param("until", "2025-02-01T00:00:00Z"))
        .and(query_param("gate_id", "gate_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::test_client(&server.uri());
    client
        .call(
            "list_attestations",
            &json!({
                "gate_id": "gate_1",
                "from_date": "2025-01-01T00:00:00Z",
                "to_date": "2025-02-01T00:00:00Z"
            }),
        )
        .await
        .unwrap_or_else(|e| panic!("dispatch should succeed: {e}"));
    server.verify().await;
}

#[tokio::test]
async fn write_bodies_are_sent_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/passports/pp_1/reissue"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "pp_2"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::test_client(&server.uri());
    let result = client
        .call("reissue_passport", &json!({"passport_id": "pp_1"}))
        .await
        .unwrap_or_else(|e| panic!("dispatch should succeed: {e}"));
    assert_eq!(result, json!({"id": "pp_2"}));
    server.verify().await;
}

#[tokio::test]
async fn default_quantity_reaches_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/consumption"))
        .and(body_json(json!({
            "passport_id": "pp_1",
            "permission": "invoices:read",
            "quantity": 1
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"recorded": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::test_client(&server.uri());
    client
        .call(
            "record_consumption",
            &json!({"passport_id": "pp_1", "permission": "invoices:read"}),
        )
        .await
        .unwrap_or_else(|e| panic!("dispatch should succeed: {e}"));
    server.verify().await;
}

#[tokio::test]
async fn no_content_yields_an_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/gates/gate_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = common::test_client(&server.uri());
    let result = client
        .call("delete_gate", &json!({"gate_id": "gate_1"}))
        .await
        .unwrap_or_else(|e| panic!("dispatch should succeed: {e}"));
    assert_eq!(result, json!({}));
}

#[tokio::test]
async fn api_error_messages_come_from_the_response_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/passports"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid API key"})),
        )
        .mount(&server)
        .await;

    let client = common::test_client(&server.uri());
    let error = client
        .call("list_passports", &json!({}))
        .await
        .expect_err("401 should surface as an error");
    match &error {
        WardenError::Api { message } => assert_eq!(message, "Invalid API key"),
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn empty_error_bodies_fall_back_to_the_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/settlements"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = common::test_client(&server.uri());
    let error = client
        .call("list_settlements", &json!({}))
        .await
        .expect_err("500 should surface as an error");
    match &error {
        WardenError::Api { message } => {
            assert!(message.contains("500"), "message should name the status: {message}");
        }
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn non_json_error_bodies_do_not_panic_the_extractor() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gates"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .mount(&server)
        .await;

    let client = common::test_client(&server.uri());
    let error = client
        .call("list_gates", &json!({}))
        .await
        .expect_err("502 should surface as an error");
    match &error {
        WardenError::Api { message } => assert!(message.contains("502")),
        other => panic!("expected Api error, got {other}"),
    }
}

#[tokio::test]
async fn unknown_tools_fail_before_any_network_activity() {
    let server = MockServer::start().await;

    let client = common::test_client(&server.uri());
    let error = client
        .call("open_sesame", &json!({}))
        .await
        .expect_err("unknown tool should be rejected");
    match &error {
        WardenError::UnknownTool { tool } => assert_eq!(tool, "open_sesame"),
        other => panic!("expected UnknownTool error, got {other}"),
    }

    let requests = server
        .received_requests()
        .await
        .unwrap_or_else(|| panic!("request recording should be enabled"));
    assert!(requests.is_empty(), "no network call may be issued");
}

#[tokio::test]
async fn translation_failures_also_short_circuit_the_network() {
    let server = MockServer::start().await;

    let client = common::test_client(&server.uri());
    let error = client
        .call("get_gate", &json!({}))
        .await
        .expect_err("missing gate_id should be rejected");
    assert!(matches!(error, WardenError::MissingParameter { .. }));

    let requests = server
        .received_requests()
        .await
        .unwrap_or_else(|| panic!("request recording should be enabled"));
    assert!(requests.is_empty(), "no network call may be issued");
}
