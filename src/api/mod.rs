// ABOUTME: HTTP layer for the Warden REST API
// ABOUTME: Re-exports the translated request types and the executing client
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

//! Transport layer: translated requests and the client that executes them.

pub mod client;
pub mod request;

pub use client::WardenClient;
pub use request::{ApiRequest, Method};
