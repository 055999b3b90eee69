// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! # API Data Models
//!
//! Request and response structures for the REST API. All types derive
//! `Serialize`/`Deserialize` and `ToSchema` for JSON handling and OpenAPI
//! documentation. Wire field names are camelCase.
//!
//! 64-bit values (sequence numbers, fees, timestamps) are rendered as
//! decimal strings — they do not survive JSON numbers in every client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::stellar::types::{Timebounds, VerificationRecord};
use crate::stellar::{BuiltTransaction, VerificationStatus, VerificationType};

// =============================================================================
// Transaction Building
// =============================================================================

/// Request to build an unsigned `register` transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildRegisterRequest {
    /// Wallet being registered (StrKey `G...`).
    pub wallet: String,
    pub name: String,
    pub surnames: String,
    /// Fee-paying account that will sign the transaction.
    pub source_account: String,
}

/// Request to build an unsigned `upsert_verification` transaction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVerificationRequest {
    pub wallet: String,
    pub verification_type: VerificationType,
    pub points: u32,
    pub source_account: String,
}

/// Request carrying a signed transaction envelope for submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    /// Base64 XDR signed transaction envelope.
    pub xdr: String,
}

/// Request to rebuild a transaction against the current sequence number.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RebuildRequest {
    /// Base64 XDR of the stale (unsigned or signed) envelope.
    pub xdr: String,
    pub source_account: String,
}

/// Transaction validity window in seconds since the Unix epoch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeboundsDto {
    pub min_time: String,
    pub max_time: String,
}

impl From<Timebounds> for TimeboundsDto {
    fn from(tb: Timebounds) -> Self {
        Self {
            min_time: tb.min_time.to_string(),
            max_time: tb.max_time.to_string(),
        }
    }
}

/// An unsigned transaction ready for out-of-band signing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuildTransactionResponse {
    /// Base64 XDR transaction envelope (unsigned).
    pub xdr: String,
    pub source_account: String,
    /// Sequence number the transaction claims, as a decimal string.
    pub sequence: String,
    /// Total fee in stroops, as a decimal string.
    pub fee: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timebounds: Option<TimeboundsDto>,
    /// Base64 XDR authorization entries requiring additional signatures.
    pub authorization_entries: Vec<String>,
}

impl From<BuiltTransaction> for BuildTransactionResponse {
    fn from(built: BuiltTransaction) -> Self {
        Self {
            xdr: built.xdr,
            source_account: built.source_account,
            sequence: built.sequence.to_string(),
            fee: built.fee.to_string(),
            timebounds: built.timebounds.map(Into::into),
            authorization_entries: built.authorization_entries,
        }
    }
}

/// Successful submission result.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    /// Network hash of the submitted transaction.
    pub hash: String,
}

// =============================================================================
// Queries
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub wallet: String,
    pub score: u32,
}

/// A verification record as stored on-chain.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationDto {
    /// Account or contract that issued the verification (StrKey).
    pub issuer: String,
    pub points: u32,
    /// Ledger timestamp, as a decimal string.
    pub timestamp: String,
    pub verification_type: VerificationType,
}

impl From<VerificationRecord> for VerificationDto {
    fn from(record: VerificationRecord) -> Self {
        Self {
            issuer: record.issuer,
            points: record.points,
            timestamp: record.timestamp.to_string(),
            verification_type: record.vtype,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationsResponse {
    pub wallet: String,
    pub verifications: Vec<VerificationDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IsHumanResponse {
    pub wallet: String,
    pub is_human: bool,
    pub score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub wallet: String,
    pub status: VerificationStatus,
}

// =============================================================================
// Users
// =============================================================================

/// A user record keyed by wallet address.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for this record.
    pub id: String,
    /// Wallet address the record belongs to (StrKey `G...`).
    pub wallet: String,
    pub name: String,
    pub surnames: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Latest identity-verification decision for this user.
    pub status: VerificationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a user record.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub wallet: String,
    pub name: String,
    pub surnames: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Request to update a user record. Absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub surnames: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

// =============================================================================
// Webhooks
// =============================================================================

/// Payload delivered by the identity-verification provider.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VerificationWebhookPayload {
    /// Wallet the decision applies to.
    pub wallet: String,
    /// Provider decision code (`approved`, `declined`, `review`, ...).
    pub decision: String,
    /// Provider-side reference for the verification session.
    #[serde(default)]
    pub reference: Option<String>,
}

impl VerificationWebhookPayload {
    /// Map the provider's decision code onto the status taxonomy. Decision
    /// codes outside the known set are treated as still-pending.
    pub fn status(&self) -> VerificationStatus {
        match self.decision.as_str() {
            "approved" => VerificationStatus::Approved,
            "declined" | "rejected" => VerificationStatus::Rejected,
            _ => VerificationStatus::Pending,
        }
    }
}
