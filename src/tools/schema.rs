// ABOUTME: MCP tool schema types and the advertised input schema for every tool
// ABOUTME: Keeps the published catalog in lockstep with the ToolId dispatch table
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Warden Project

//! # Tool Catalog Schemas
//!
//! Type-safe schema definitions for `tools/list` responses. The catalog is
//! generated from [`ToolId::all`], so a tool cannot be advertised without a
//! registered builder or vice versa.
//!
//! Of the two historical description sets for the gate/passport/catalog
//! tools, the richer variant (agent name, public key, expiry string on
//! passport issuance) is the one published here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::registry::ToolId;

/// MCP tool schema definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Unique tool name
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// Input schema describing the argument record
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema definition for a tool's argument record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Always `"object"` for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Named argument fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Names of required fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// Schema for a single argument field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// JSON type of the field
    #[serde(rename = "type")]
    pub property_type: String,
    /// What the field means
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Build the full advertised tool catalog
#[must_use]
pub fn tool_schemas() -> Vec<ToolSchema> {
    ToolId::all()
        .iter()
        .map(|&tool| ToolSchema {
            name: tool.name().to_owned(),
            description: tool.description().to_owned(),
            input_schema: input_schema(tool),
        })
        .collect()
}

/// Shorthand for building an object schema from `(name, type, description)`
/// triples plus the required-field list.
fn object_schema(props: &[(&str, &str, &str)], required: &[&str]) -> JsonSchema {
    let properties = props
        .iter()
        .map(|&(name, property_type, description)| {
            (
                name.to_owned(),
                PropertySchema {
                    property_type: property_type.to_owned(),
                    description: Some(description.to_owned()),
                },
            )
        })
        .collect();

    JsonSchema {
        schema_type: "object".to_owned(),
        properties: Some(properties),
        required: if required.is_empty() {
            None
        } else {
            Some(required.iter().map(|&r| r.to_owned()).collect())
        },
    }
}

/// The advertised input schema for one tool. Field lists here mirror the
/// request builders exactly; drift between the two is a test failure.
#[must_use]
pub fn input_schema(tool: ToolId) -> JsonSchema {
    match tool {
        ToolId::ListGates => object_schema(
            &[
                ("limit", "number", "Maximum gates to return"),
                ("offset", "number", "Pagination offset"),
            ],
            &[],
        ),
        ToolId::GetGate => object_schema(&[("gate_id", "string", "Gate identifier")], &["gate_id"]),
        ToolId::CreateGate => object_schema(
            &[
                ("name", "string", "Display name for the gate"),
                ("description", "string", "What the gate protects"),
                ("trust_profile", "string", "Trust profile applied to verifications"),
                ("catalog_id", "string", "Initial permission catalog"),
            ],
            &["name"],
        ),
        ToolId::UpdateGate => object_schema(
            &[
                ("gate_id", "string", "Gate identifier"),
                ("name", "string", "New display name"),
                ("description", "string", "New description"),
                ("trust_profile", "string", "New trust profile"),
                ("catalog_id", "string", "New active catalog"),
            ],
            &["gate_id"],
        ),
        ToolId::DeleteGate => {
            object_schema(&[("gate_id", "string", "Gate identifier")], &["gate_id"])
        }
        ToolId::ListPassports => object_schema(
            &[
                ("gate_id", "string", "Only passports for this gate"),
                ("agent_id", "string", "Only passports held by this agent"),
                ("status", "string", "Filter by status: active, expired, revoked"),
                ("limit", "number", "Maximum passports to return"),
                ("offset", "number", "Pagination offset"),
            ],
            &[],
        ),
        ToolId::GetPassport => object_schema(
            &[("passport_id", "string", "Passport identifier")],
            &["passport_id"],
        ),
        ToolId::IssuePassport => object_schema(
            &[
                ("gate_id", "string", "Gate the passport is valid at"),
                ("agent_id", "string", "Agent the passport is issued to"),
                ("agent_name", "string", "Human-readable agent name"),
                ("public_key", "string", "Agent public key for signed presentations"),
                ("permissions", "array", "Permission names granted; defaults to the gate's catalog"),
                ("expires_at", "string", "Expiry timestamp (RFC 3339)"),
            ],
            &["gate_id", "agent_id"],
        ),
        ToolId::ReissuePassport => object_schema(
            &[
                ("passport_id", "string", "Passport to reissue"),
                ("catalog_version", "string", "Pin the reissued passport to this catalog version"),
            ],
            &["passport_id"],
        ),
        ToolId::RevokePassport => object_schema(
            &[("passport_id", "string", "Passport to revoke")],
            &["passport_id"],
        ),
        ToolId::VerifyPassport => object_schema(
            &[
                ("passport", "string", "Encoded passport token"),
                ("signature", "string", "Signature over the presentation"),
                ("nonce", "string", "Challenge nonce the signature covers"),
            ],
            &["passport"],
        ),
        ToolId::ListAttestations => object_schema(
            &[
                ("gate_id", "string", "Only attestations from this gate"),
                ("agent_id", "string", "Only attestations about this agent"),
                ("from_date", "string", "Window start (RFC 3339)"),
                ("to_date", "string", "Window end (RFC 3339)"),
                ("limit", "number", "Maximum attestations to return"),
            ],
            &[],
        ),
        ToolId::GetAttestation => object_schema(
            &[("attestation_id", "string", "Attestation identifier")],
            &["attestation_id"],
        ),
        ToolId::VerifyAttestation => object_schema(
            &[
                ("attestation_id", "string", "Attestation identifier"),
                ("public_key", "string", "Key to verify against; defaults to the gate's registered key"),
            ],
            &["attestation_id"],
        ),
        ToolId::ListCatalogs => object_schema(
            &[
                ("gate_id", "string", "Gate whose catalogs to list"),
                ("status", "string", "Filter by state: draft or published"),
            ],
            &["gate_id"],
        ),
        ToolId::GetCatalog => object_schema(
            &[("catalog_id", "string", "Catalog identifier")],
            &["catalog_id"],
        ),
        ToolId::CreateCatalog => object_schema(
            &[
                ("gate_id", "string", "Gate the catalog belongs to"),
                ("name", "string", "Catalog name"),
                ("description", "string", "What the catalog covers"),
                ("permissions", "array", "Permission definitions"),
            ],
            &["gate_id", "name"],
        ),
        ToolId::UpdateCatalog => object_schema(
            &[
                ("catalog_id", "string", "Catalog identifier"),
                ("name", "string", "New name"),
                ("description", "string", "New description"),
                ("permissions", "array", "Replacement permission definitions"),
            ],
            &["catalog_id"],
        ),
        ToolId::DeleteCatalog => object_schema(
            &[("catalog_id", "string", "Catalog identifier")],
            &["catalog_id"],
        ),
        ToolId::ListCatalogVersions => object_schema(
            &[("catalog_id", "string", "Catalog identifier")],
            &["catalog_id"],
        ),
        ToolId::GetCatalogVersion => object_schema(
            &[
                ("catalog_id", "string", "Catalog identifier"),
                ("version", "string", "Published version label"),
            ],
            &["catalog_id", "version"],
        ),
        ToolId::PublishCatalog => object_schema(
            &[
                ("catalog_id", "string", "Catalog whose draft to publish"),
                ("notes", "string", "Release notes"),
                ("metadata", "object", "Arbitrary metadata attached to the version"),
            ],
            &["catalog_id"],
        ),
        ToolId::CheckPermission => object_schema(
            &[
                ("gate_id", "string", "Gate to check against"),
                ("passport", "string", "Encoded passport token"),
                ("permission", "string", "Permission name to check"),
                ("context", "object", "Request context for constraint evaluation"),
            ],
            &["gate_id", "passport", "permission"],
        ),
        ToolId::SimulatePermission => object_schema(
            &[
                ("gate_id", "string", "Gate to simulate against"),
                ("passport", "string", "Encoded passport token"),
                ("permission", "string", "Permission name to check"),
                ("context", "object", "Request context for constraint evaluation"),
            ],
            &["gate_id"],
        ),
        ToolId::ListConstraints => object_schema(
            &[("passport_id", "string", "Passport identifier")],
            &["passport_id"],
        ),
        ToolId::SetConstraint => object_schema(
            &[
                ("passport_id", "string", "Passport to constrain"),
                ("name", "string", "Constraint name, e.g. rate or cost"),
                ("limit", "number", "Limit value"),
                ("window", "string", "Evaluation window, e.g. 1h or 30d"),
                ("action", "string", "What happens at the limit: block or warn"),
            ],
            &["passport_id", "name", "limit"],
        ),
        ToolId::RemoveConstraint => object_schema(
            &[
                ("passport_id", "string", "Passport identifier"),
                ("name", "string", "Constraint name to remove"),
            ],
            &["passport_id", "name"],
        ),
        ToolId::ListConstraintTemplates => object_schema(
            &[("category", "string", "Filter templates by category")],
            &[],
        ),
        ToolId::GetConstraintTemplate => object_schema(
            &[("template_id", "string", "Template identifier")],
            &["template_id"],
        ),
        ToolId::ApplyConstraintTemplate => object_schema(
            &[
                ("passport_id", "string", "Passport to constrain"),
                ("template_id", "string", "Template to apply"),
                ("overrides", "object", "Per-passport overrides of template values"),
            ],
            &["passport_id", "template_id"],
        ),
        ToolId::ListEnforcements => object_schema(
            &[
                ("gate_id", "string", "Only records from this gate"),
                ("passport_id", "string", "Only records about this passport"),
                ("outcome", "string", "Filter by outcome: allowed or denied"),
                ("from_date", "string", "Window start (RFC 3339)"),
                ("to_date", "string", "Window end (RFC 3339)"),
            ],
            &[],
        ),
        ToolId::GetEnforcement => object_schema(
            &[("enforcement_id", "string", "Enforcement record identifier")],
            &["enforcement_id"],
        ),
        ToolId::RecordEnforcement => object_schema(
            &[
                ("gate_id", "string", "Gate where the decision happened"),
                ("outcome", "string", "Decision outcome: allowed or denied"),
                ("passport_id", "string", "Passport involved, if any"),
                ("permission", "string", "Permission that was checked"),
                ("reason", "string", "Why the decision was made"),
                ("metadata", "object", "Additional decision context"),
            ],
            &["gate_id", "outcome"],
        ),
        ToolId::GetGuestPolicy => object_schema(
            &[("gate_id", "string", "Gate identifier")],
            &["gate_id"],
        ),
        ToolId::UpdateGuestPolicy => object_schema(
            &[
                ("gate_id", "string", "Gate identifier"),
                ("enabled", "boolean", "Whether anonymous access is allowed"),
                ("permissions", "array", "Permissions granted to anonymous callers"),
                ("rate_limit", "number", "Requests per minute for anonymous callers"),
            ],
            &["gate_id"],
        ),
        ToolId::GetUsage => object_schema(
            &[("passport_id", "string", "Passport identifier")],
            &["passport_id"],
        ),
        ToolId::ResetUsage => object_schema(
            &[("passport_id", "string", "Passport whose counters to reset")],
            &["passport_id"],
        ),
        ToolId::DiscoverServices => object_schema(
            &[
                ("capability", "string", "Required capability name"),
                ("status", "string", "Filter by service status"),
                ("limit", "number", "Maximum services to return"),
            ],
            &[],
        ),
        ToolId::GetService => object_schema(
            &[("service_id", "string", "Service identifier")],
            &["service_id"],
        ),
        ToolId::RecordConsumption => object_schema(
            &[
                ("passport_id", "string", "Passport that consumed"),
                ("permission", "string", "Permission that was exercised"),
                ("quantity", "number", "Units consumed; defaults to 1"),
                ("metadata", "object", "Additional billing context"),
            ],
            &["passport_id", "permission"],
        ),
        ToolId::ListSettlements => object_schema(
            &[
                ("gate_id", "string", "Only settlements for this gate"),
                ("agent_id", "string", "Only settlements for this agent"),
                ("status", "string", "Filter by status: open, invoiced, settled"),
                ("from_date", "string", "Window start (RFC 3339)"),
                ("to_date", "string", "Window end (RFC 3339)"),
            ],
            &[],
        ),
        ToolId::GetSettlement => object_schema(
            &[("settlement_id", "string", "Settlement identifier")],
            &["settlement_id"],
        ),
        ToolId::TransitionSettlement => object_schema(
            &[
                ("settlement_id", "string", "Settlement identifier"),
                ("status", "string", "Target status"),
                ("reason", "string", "Why the transition happened"),
            ],
            &["settlement_id", "status"],
        ),
        ToolId::GetSlaMetrics => object_schema(
            &[
                ("gate_id", "string", "Gate identifier"),
                ("from_date", "string", "Window start (RFC 3339)"),
                ("to_date", "string", "Window end (RFC 3339)"),
                ("resolution", "string", "Bucket size: hour or day"),
            ],
            &["gate_id"],
        ),
        ToolId::ListApiKeys => object_schema(
            &[("include_revoked", "boolean", "Include revoked keys in the listing")],
            &[],
        ),
        ToolId::CreateApiKey => object_schema(
            &[
                ("name", "string", "Key name"),
                ("scopes", "array", "Scopes granted to the key"),
                ("expires_at", "string", "Expiry timestamp (RFC 3339)"),
            ],
            &["name"],
        ),
        ToolId::RevokeApiKey => object_schema(
            &[("key_id", "string", "Key identifier")],
            &["key_id"],
        ),
        ToolId::RotateApiKey => object_schema(
            &[("key_id", "string", "Key whose secret to rotate")],
            &["key_id"],
        ),
    }
}
