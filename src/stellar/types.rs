// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Value objects shared across the passport transaction lifecycle.
//!
//! Everything here is a transient request-scoped value: built transactions
//! are never mutated (a rebuild produces a new value) and sequence snapshots
//! are fetched fresh for every build — staleness is the failure mode the
//! reconciler exists to recover from, so nothing is cached.

use stellar_xdr::curr::{
    Limits, MuxedAccount, OperationBody, Preconditions, Transaction, TransactionEnvelope,
    TransactionV1Envelope, WriteXdr,
};

use super::errors::PassportError;
use super::strkey;
use super::verification::VerificationType;

/// Validity window embedded in a transaction, in ledger time (seconds since
/// the Unix epoch). A transaction outside its window is rejected even if
/// otherwise valid; callers rebuild rather than resubmit an expired payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timebounds {
    pub min_time: u64,
    pub max_time: u64,
}

/// An unsigned transaction ready for out-of-band signing, plus the
/// diagnostic metadata callers need before signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltTransaction {
    /// Base64 XDR transaction envelope (unsigned).
    pub xdr: String,
    /// Fee-paying source account (StrKey `G...`).
    pub source_account: String,
    /// Sequence number the transaction claims (current + 1 at build time).
    pub sequence: i64,
    /// Total fee in stroops, inclusive of the simulated resource fee.
    pub fee: u32,
    /// Validity window, when one was set.
    pub timebounds: Option<Timebounds>,
    /// Authorization entries requiring signatures beyond the envelope's own
    /// (base64 XDR `SorobanAuthorizationEntry` values).
    pub authorization_entries: Vec<String>,
}

impl BuiltTransaction {
    /// Serialize `tx` as an unsigned envelope and extract its metadata.
    pub fn from_transaction(
        tx: Transaction,
        authorization_entries: Vec<String>,
    ) -> Result<Self, PassportError> {
        let source_account = source_account_strkey(&tx.source_account);
        let sequence = tx.seq_num.0;
        let fee = tx.fee;
        let timebounds = match &tx.cond {
            Preconditions::Time(tb) => Some(Timebounds {
                min_time: tb.min_time.0,
                max_time: tb.max_time.0,
            }),
            _ => None,
        };

        let xdr = unsigned_envelope_xdr(&tx)?;

        Ok(Self {
            xdr,
            source_account,
            sequence,
            fee,
            timebounds,
            authorization_entries,
        })
    }
}

/// Serialize a transaction as an unsigned base64 envelope.
pub fn unsigned_envelope_xdr(tx: &Transaction) -> Result<String, PassportError> {
    TransactionEnvelope::Tx(TransactionV1Envelope {
        tx: tx.clone(),
        signatures: Default::default(),
    })
    .to_xdr_base64(Limits::none())
    .map_err(|e| PassportError::Serialization(e.to_string()))
}

/// Render the StrKey form of a transaction source account.
pub fn source_account_strkey(account: &MuxedAccount) -> String {
    match account {
        MuxedAccount::Ed25519(key) => strkey::encode_account_id(&key.0),
        MuxedAccount::MuxedEd25519(muxed) => strkey::encode_account_id(&muxed.ed25519.0),
    }
}

/// Returns true iff the transaction's single operation invokes a host
/// function (the only operation shape this service builds).
pub fn is_invoke_host_function(tx: &Transaction) -> bool {
    tx.operations
        .as_slice()
        .iter()
        .all(|op| matches!(op.body, OperationBody::InvokeHostFunction(_)))
}

/// An account's sequence number as observed at a single point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceSnapshot {
    pub account_id: String,
    pub sequence: i64,
}

/// An account record as loaded from Horizon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub account_id: String,
    pub sequence: i64,
}

/// A verification record mirroring on-chain contract state at query time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRecord {
    /// Account or contract that issued the verification (StrKey).
    pub issuer: String,
    /// Points granted by this verification.
    pub points: u32,
    /// Ledger timestamp at which the record was written.
    pub timestamp: u64,
    /// Classification of the verification.
    pub vtype: VerificationType,
}

/// Three-valued approval status derived from status-convention records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Approved,
    Pending,
    Rejected,
    /// No status-convention record exists, or the label is unrecognized.
    Unknown,
}
