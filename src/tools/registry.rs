// ABOUTME: Type-safe dispatch table mapping tool names to request builders
// ABOUTME: ToolId gives compile-time exhaustiveness over the whole operation catalog
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

//! # Tool Registry
//!
//! [`ToolId`] is the dispatch table: one variant per operation, with
//! exhaustive `match`es for name resolution, descriptions, and request
//! builders. Adding an operation without wiring every table is a compile
//! error, which is what keeps the advertised catalog, the dispatch path,
//! and the translator set from drifting apart.
//!
//! The table is fixed at compile time and never mutated; resolving an
//! unknown name is the first check in a dispatch and fails before any
//! translation or network activity.

use serde_json::{Map, Value};

use crate::api::ApiRequest;
use crate::errors::{Result, WardenError};

use super::builders::{
    api_keys, attestations, authorization, billing, catalogs, constraints, discovery, enforcement,
    gates, guest_access, passports, sla, usage,
};

/// Strongly typed identifier for every tool in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    // Access gates
    /// List access gates for the authenticated account
    ListGates,
    /// Get a single gate by id
    GetGate,
    /// Create a new access gate
    CreateGate,
    /// Update fields of an existing gate
    UpdateGate,
    /// Delete a gate
    DeleteGate,

    // Passports
    /// List passports with optional gate/agent/status filters
    ListPassports,
    /// Get a single passport by id
    GetPassport,
    /// Issue a new passport for an agent against a gate
    IssuePassport,
    /// Reissue a passport, optionally pinning a catalog version
    ReissuePassport,
    /// Revoke a passport
    RevokePassport,
    /// Verify a presented passport and its signature
    VerifyPassport,

    // Audit attestations
    /// List verification attestations over a date window
    ListAttestations,
    /// Get a single attestation by id
    GetAttestation,
    /// Verify an attestation's signature
    VerifyAttestation,

    // Permission catalogs
    /// List a gate's permission catalogs
    ListCatalogs,
    /// Get a single catalog by id
    GetCatalog,
    /// Create a draft catalog under a gate
    CreateCatalog,
    /// Update a draft catalog
    UpdateCatalog,
    /// Delete a catalog
    DeleteCatalog,
    /// List the published versions of a catalog
    ListCatalogVersions,
    /// Get a specific published catalog version
    GetCatalogVersion,
    /// Publish the current draft of a catalog
    PublishCatalog,

    // Authorization
    /// Check a permission against a gate (enforcing)
    CheckPermission,
    /// Dry-run a permission check with no side effects
    SimulatePermission,

    // Constraints
    /// List the constraints attached to a passport
    ListConstraints,
    /// Set or replace a named constraint on a passport
    SetConstraint,
    /// Remove a named constraint from a passport
    RemoveConstraint,
    /// List available constraint templates
    ListConstraintTemplates,
    /// Get a constraint template by id
    GetConstraintTemplate,
    /// Apply a constraint template to a passport
    ApplyConstraintTemplate,

    // Enforcement attestations
    /// List enforcement records with optional filters
    ListEnforcements,
    /// Get a single enforcement record
    GetEnforcement,
    /// Record an enforcement decision
    RecordEnforcement,

    // Anonymous access
    /// Get a gate's guest access policy
    GetGuestPolicy,
    /// Replace a gate's guest access policy
    UpdateGuestPolicy,

    // Cumulative usage
    /// Get a passport's cumulative usage counters
    GetUsage,
    /// Reset a passport's usage counters
    ResetUsage,

    // Service discovery
    /// Discover gated services by capability
    DiscoverServices,
    /// Get a discovered service by id
    GetService,

    // Consumption and settlements
    /// Record consumption of a permission
    RecordConsumption,
    /// List billing settlements
    ListSettlements,
    /// Get a single settlement
    GetSettlement,
    /// Transition a settlement's status
    TransitionSettlement,

    // SLA metrics
    /// Get SLA metrics for a gate over a date window
    GetSlaMetrics,

    // API keys
    /// List API keys for the account
    ListApiKeys,
    /// Create a new API key
    CreateApiKey,
    /// Revoke an API key
    RevokeApiKey,
    /// Rotate an API key's secret
    RotateApiKey,
}

/// Every tool in registration order; this slice is the advertised
/// capability set.
const ALL_TOOLS: &[ToolId] = &[
    ToolId::ListGates,
    ToolId::GetGate,
    ToolId::CreateGate,
    ToolId::UpdateGate,
    ToolId::DeleteGate,
    ToolId::ListPassports,
    ToolId::GetPassport,
    ToolId::IssuePassport,
    ToolId::ReissuePassport,
    ToolId::RevokePassport,
    ToolId::VerifyPassport,
    ToolId::ListAttestations,
    ToolId::GetAttestation,
    ToolId::VerifyAttestation,
    ToolId::ListCatalogs,
    ToolId::GetCatalog,
    ToolId::CreateCatalog,
    ToolId::UpdateCatalog,
    ToolId::DeleteCatalog,
    ToolId::ListCatalogVersions,
    ToolId::GetCatalogVersion,
    ToolId::PublishCatalog,
    ToolId::CheckPermission,
    ToolId::SimulatePermission,
    ToolId::ListConstraints,
    ToolId::SetConstraint,
    ToolId::RemoveConstraint,
    ToolId::ListConstraintTemplates,
    ToolId::GetConstraintTemplate,
    ToolId::ApplyConstraintTemplate,
    ToolId::ListEnforcements,
    ToolId::GetEnforcement,
    ToolId::RecordEnforcement,
    ToolId::GetGuestPolicy,
    ToolId::UpdateGuestPolicy,
    ToolId::GetUsage,
    ToolId::ResetUsage,
    ToolId::DiscoverServices,
    ToolId::GetService,
    ToolId::RecordConsumption,
    ToolId::ListSettlements,
    ToolId::GetSettlement,
    ToolId::TransitionSettlement,
    ToolId::GetSlaMetrics,
    ToolId::ListApiKeys,
    ToolId::CreateApiKey,
    ToolId::RevokeApiKey,
    ToolId::RotateApiKey,
];

impl ToolId {
    /// Convert from string tool name to strongly-typed id.
    /// Returns `None` for unknown tool names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "list_gates" => Some(Self::ListGates),
            "get_gate" => Some(Self::GetGate),
            "create_gate" => Some(Self::CreateGate),
            "update_gate" => Some(Self::UpdateGate),
            "delete_gate" => Some(Self::DeleteGate),
            "list_passports" => Some(Self::ListPassports),
            "get_passport" => Some(Self::GetPassport),
            "issue_passport" => Some(Self::IssuePassport),
            "reissue_passport" => Some(Self::ReissuePassport),
            "revoke_passport" => Some(Self::RevokePassport),
            "verify_passport" => Some(Self::VerifyPassport),
            "list_attestations" => Some(Self::ListAttestations),
            "get_attestation" => Some(Self::GetAttestation),
            "verify_attestation" => Some(Self::VerifyAttestation),
            "list_catalogs" => Some(Self::ListCatalogs),
            "get_catalog" => Some(Self::GetCatalog),
            "create_catalog" => Some(Self::CreateCatalog),
            "update_catalog" => Some(Self::UpdateCatalog),
            "delete_catalog" => Some(Self::DeleteCatalog),
            "list_catalog_versions" => Some(Self::ListCatalogVersions),
            "get_catalog_version" => Some(Self::GetCatalogVersion),
            "publish_catalog" => Some(Self::PublishCatalog),
            "check_permission" => Some(Self::CheckPermission),
            "simulate_permission" => Some(Self::SimulatePermission),
            "list_constraints" => Some(Self::ListConstraints),
            "set_constraint" => Some(Self::SetConstraint),
            "remove_constraint" => Some(Self::RemoveConstraint),
            "list_constraint_templates" => Some(Self::ListConstraintTemplates),
            "get_constraint_template" => Some(Self::GetConstraintTemplate),
            "apply_constraint_template" => Some(Self::ApplyConstraintTemplate),
            "list_enforcements" => Some(Self::ListEnforcements),
            "get_enforcement" => Some(Self::GetEnforcement),
            "record_enforcement" => Some(Self::RecordEnforcement),
            "get_guest_policy" => Some(Self::GetGuestPolicy),
            "update_guest_policy" => Some(Self::UpdateGuestPolicy),
            "get_usage" => Some(Self::GetUsage),
            "reset_usage" => Some(Self::ResetUsage),
            "discover_services" => Some(Self::DiscoverServices),
            "get_service" => Some(Self::GetService),
            "record_consumption" => Some(Self::RecordConsumption),
            "list_settlements" => Some(Self::ListSettlements),
            "get_settlement" => Some(Self::GetSettlement),
            "transition_settlement" => Some(Self::TransitionSettlement),
            "get_sla_metrics" => Some(Self::GetSlaMetrics),
            "list_api_keys" => Some(Self::ListApiKeys),
            "create_api_key" => Some(Self::CreateApiKey),
            "revoke_api_key" => Some(Self::RevokeApiKey),
            "rotate_api_key" => Some(Self::RotateApiKey),
            _ => None,
        }
    }

    /// Get the string name for this tool id
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ListGates => "list_gates",
            Self::GetGate => "get_gate",
            Self::CreateGate => "create_gate",
            Self::UpdateGate => "update_gate",
            Self::DeleteGate => "delete_gate",
            Self::ListPassports => "list_passports",
            Self::GetPassport => "get_passport",
            Self::IssuePassport => "issue_passport",
            Self::ReissuePassport => "reissue_passport",
            Self::RevokePassport => "revoke_passport",
            Self::VerifyPassport => "verify_passport",
            Self::ListAttestations => "list_attestations",
            Self::GetAttestation => "get_attestation",
            Self::VerifyAttestation => "verify_attestation",
            Self::ListCatalogs => "list_catalogs",
            Self::GetCatalog => "get_catalog",
            Self::CreateCatalog => "create_catalog",
            Self::UpdateCatalog => "update_catalog",
            Self::DeleteCatalog => "delete_catalog",
            Self::ListCatalogVersions => "list_catalog_versions",
            Self::GetCatalogVersion => "get_catalog_version",
            Self::PublishCatalog => "publish_catalog",
            Self::CheckPermission => "check_permission",
            Self::SimulatePermission => "simulate_permission",
            Self::ListConstraints => "list_constraints",
            Self::SetConstraint => "set_constraint",
            Self::RemoveConstraint => "remove_constraint",
            Self::ListConstraintTemplates => "list_constraint_templates",
            Self::GetConstraintTemplate => "get_constraint_template",
            Self::ApplyConstraintTemplate => "apply_constraint_template",
            Self::ListEnforcements => "list_enforcements",
            Self::GetEnforcement => "get_enforcement",
            Self::RecordEnforcement => "record_enforcement",
            Self::GetGuestPolicy => "get_guest_policy",
            Self::UpdateGuestPolicy => "update_guest_policy",
            Self::GetUsage => "get_usage",
            Self::ResetUsage => "reset_usage",
            Self::DiscoverServices => "discover_services",
            Self::GetService => "get_service",
            Self::RecordConsumption => "record_consumption",
            Self::ListSettlements => "list_settlements",
            Self::GetSettlement => "get_settlement",
            Self::TransitionSettlement => "transition_settlement",
            Self::GetSlaMetrics => "get_sla_metrics",
            Self::ListApiKeys => "list_api_keys",
            Self::CreateApiKey => "create_api_key",
            Self::RevokeApiKey => "revoke_api_key",
            Self::RotateApiKey => "rotate_api_key",
        }
    }

    /// Get the tool description for catalog generation
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ListGates => "List access gates for the authenticated account",
            Self::GetGate => "Get a single access gate by id",
            Self::CreateGate => "Create a new access gate",
            Self::UpdateGate => "Update name, description, trust profile, or catalog of a gate",
            Self::DeleteGate => "Delete an access gate",
            Self::ListPassports => "List passports filtered by gate, agent, or status",
            Self::GetPassport => "Get a single passport by id",
            Self::IssuePassport => "Issue a passport granting an agent permissions at a gate",
            Self::ReissuePassport => "Reissue a passport, optionally pinned to a catalog version",
            Self::RevokePassport => "Revoke a passport immediately",
            Self::VerifyPassport => "Verify a presented passport and optional signature",
            Self::ListAttestations => "List verification attestations over a date window",
            Self::GetAttestation => "Get a single attestation by id",
            Self::VerifyAttestation => "Verify an attestation's signature",
            Self::ListCatalogs => "List a gate's permission catalogs",
            Self::GetCatalog => "Get a permission catalog by id",
            Self::CreateCatalog => "Create a draft permission catalog under a gate",
            Self::UpdateCatalog => "Update a draft catalog's fields",
            Self::DeleteCatalog => "Delete a permission catalog",
            Self::ListCatalogVersions => "List the published versions of a catalog",
            Self::GetCatalogVersion => "Get a specific published catalog version",
            Self::PublishCatalog => "Publish the current draft of a catalog",
            Self::CheckPermission => "Check a permission against a gate (enforcing, attested)",
            Self::SimulatePermission => "Dry-run a permission check with no side effects",
            Self::ListConstraints => "List the constraints attached to a passport",
            Self::SetConstraint => "Set or replace a named constraint on a passport",
            Self::RemoveConstraint => "Remove a named constraint from a passport",
            Self::ListConstraintTemplates => "List available constraint templates",
            Self::GetConstraintTemplate => "Get a constraint template by id",
            Self::ApplyConstraintTemplate => "Apply a constraint template to a passport",
            Self::ListEnforcements => "List enforcement records with optional filters",
            Self::GetEnforcement => "Get a single enforcement record by id",
            Self::RecordEnforcement => "Record an enforcement decision at a gate",
            Self::GetGuestPolicy => "Get a gate's anonymous access policy",
            Self::UpdateGuestPolicy => "Replace a gate's anonymous access policy",
            Self::GetUsage => "Get a passport's cumulative usage counters",
            Self::ResetUsage => "Reset a passport's cumulative usage counters",
            Self::DiscoverServices => "Discover gated services by capability",
            Self::GetService => "Get a discovered service by id",
            Self::RecordConsumption => "Record consumption of a permission for billing",
            Self::ListSettlements => "List billing settlements",
            Self::GetSettlement => "Get a single settlement by id",
            Self::TransitionSettlement => "Transition a settlement to a new status",
            Self::GetSlaMetrics => "Get SLA metrics for a gate over a date window",
            Self::ListApiKeys => "List API keys for the account",
            Self::CreateApiKey => "Create a new API key",
            Self::RevokeApiKey => "Revoke an API key",
            Self::RotateApiKey => "Rotate an API key's secret",
        }
    }

    /// All tools in registration order
    #[must_use]
    pub const fn all() -> &'static [Self] {
        ALL_TOOLS
    }

    /// Translate an argument record into the request this tool performs.
    ///
    /// The argument value may be `null` or missing entirely (treated as an
    /// empty record); anything else non-object is rejected.
    ///
    /// # Errors
    ///
    /// Returns `WardenError::MissingParameter` / `InvalidParameter` when the
    /// record cannot satisfy the tool's contract.
    pub fn build_request(self, args: &Value) -> Result<ApiRequest> {
        let empty = Map::new();
        let record = match args {
            Value::Object(map) => map,
            Value::Null => &empty,
            _ => {
                return Err(WardenError::invalid_parameter(
                    self.name(),
                    "arguments",
                    "must be an object",
                ))
            }
        };

        match self {
            Self::ListGates => gates::list_gates(record),
            Self::GetGate => gates::get_gate(record),
            Self::CreateGate => gates::create_gate(record),
            Self::UpdateGate => gates::update_gate(record),
            Self::DeleteGate => gates::delete_gate(record),
            Self::ListPassports => passports::list_passports(record),
            Self::GetPassport => passports::get_passport(record),
            Self::IssuePassport => passports::issue_passport(record),
            Self::ReissuePassport => passports::reissue_passport(record),
            Self::RevokePassport => passports::revoke_passport(record),
            Self::VerifyPassport => passports::verify_passport(record),
            Self::ListAttestations => attestations::list_attestations(record),
            Self::GetAttestation => attestations::get_attestation(record),
            Self::VerifyAttestation => attestations::verify_attestation(record),
            Self::ListCatalogs => catalogs::list_catalogs(record),
            Self::GetCatalog => catalogs::get_catalog(record),
            Self::CreateCatalog => catalogs::create_catalog(record),
            Self::UpdateCatalog => catalogs::update_catalog(record),
            Self::DeleteCatalog => catalogs::delete_catalog(record),
            Self::ListCatalogVersions => catalogs::list_catalog_versions(record),
            Self::GetCatalogVersion => catalogs::get_catalog_version(record),
            Self::PublishCatalog => catalogs::publish_catalog(record),
            Self::CheckPermission => authorization::check_permission(record),
            Self::SimulatePermission => authorization::simulate_permission(record),
            Self::ListConstraints => constraints::list_constraints(record),
            Self::SetConstraint => constraints::set_constraint(record),
            Self::RemoveConstraint => constraints::remove_constraint(record),
            Self::ListConstraintTemplates => constraints::list_constraint_templates(record),
            Self::GetConstraintTemplate => constraints::get_constraint_template(record),
            Self::ApplyConstraintTemplate => constraints::apply_constraint_template(record),
            Self::ListEnforcements => enforcement::list_enforcements(record),
            Self::GetEnforcement => enforcement::get_enforcement(record),
            Self::RecordEnforcement => enforcement::record_enforcement(record),
            Self::GetGuestPolicy => guest_access::get_guest_policy(record),
            Self::UpdateGuestPolicy => guest_access::update_guest_policy(record),
            Self::GetUsage => usage::get_usage(record),
            Self::ResetUsage => usage::reset_usage(record),
            Self::DiscoverServices => discovery::discover_services(record),
            Self::GetService => discovery::get_service(record),
            Self::RecordConsumption => billing::record_consumption(record),
            Self::ListSettlements => billing::list_settlements(record),
            Self::GetSettlement => billing::get_settlement(record),
            Self::TransitionSettlement => billing::transition_settlement(record),
            Self::GetSlaMetrics => sla::get_sla_metrics(record),
            Self::ListApiKeys => api_keys::list_api_keys(record),
            Self::CreateApiKey => api_keys::create_api_key(record),
            Self::RevokeApiKey => api_keys::revoke_api_key(record),
            Self::RotateApiKey => api_keys::rotate_api_key(record),
        }
    }
}
