// ABOUTME: Shared test utilities for integration tests
// ABOUTME: Provides quiet logging setup and argument-record helpers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project
#![allow(dead_code, clippy::missing_panics_doc)]

//! Shared test utilities for `warden_mcp_server` integration tests.

use std::sync::Once;

use warden_mcp_server::config::WardenConfig;
use warden_mcp_server::WardenClient;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Client pointed at a test server
pub fn test_client(base_url: &str) -> WardenClient {
    init_test_logging();
    let config = WardenConfig::new("wk_test_0123456789", base_url)
        .unwrap_or_else(|e| panic!("test config should be valid: {e}"));
    WardenClient::new(config).unwrap_or_else(|e| panic!("test client should build: {e}"))
}
