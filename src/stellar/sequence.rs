// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Sequence number reconciliation.
//!
//! A Stellar account carries a single monotonically increasing sequence
//! counter and every submitted transaction must claim exactly current + 1.
//! Two builds racing for the same source account will both observe the same
//! current value, so only one submission can win; the loser fails with
//! `txBAD_SEQ` at submission time. The reconciler does not serialize builders
//! against each other — staleness is treated as an expected, recoverable
//! condition, and [`SequenceReconciler::rebuild_with_current_sequence`] is
//! the recovery path: same operations and fee, fresh sequence.

use stellar_xdr::curr::{Limits, ReadXdr, SequenceNumber, TransactionEnvelope};

use super::errors::PassportError;
use super::gateway::LedgerGateway;
use super::strkey;
use super::types::{
    is_invoke_host_function, source_account_strkey, BuiltTransaction, SequenceSnapshot,
};

/// Per-call sequence reconciliation over a ledger gateway. Holds no state.
pub struct SequenceReconciler<'a, G> {
    gateway: &'a G,
}

impl<'a, G: LedgerGateway> SequenceReconciler<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// Fetch the account's current sequence number from the ledger.
    ///
    /// Always a fresh network round-trip; snapshots are never cached because
    /// staleness is exactly the failure mode being guarded against.
    pub async fn current_sequence(
        &self,
        account_id: &str,
    ) -> Result<SequenceSnapshot, PassportError> {
        let account = self.gateway.load_account(account_id).await?;
        Ok(SequenceSnapshot {
            account_id: account.account_id,
            sequence: account.sequence,
        })
    }

    /// Check that a freshly built transaction claims exactly current + 1.
    ///
    /// Diagnostic only: a mismatch is logged, not failed, because another
    /// transaction may legitimately have advanced the account between the
    /// build-time fetch and this check.
    pub async fn verify_expected_sequence(
        &self,
        built_sequence: i64,
        account_id: &str,
    ) -> Result<bool, PassportError> {
        let snapshot = self.current_sequence(account_id).await?;
        let expected = snapshot.sequence + 1;
        if built_sequence == expected {
            Ok(true)
        } else {
            tracing::warn!(
                account_id,
                built_sequence,
                expected,
                "built transaction sequence does not match current + 1"
            );
            Ok(false)
        }
    }

    /// Rebuild a transaction against the account's current sequence.
    ///
    /// Parses the original envelope, keeps its operations, fee, memo and
    /// preconditions, swaps in a freshly fetched current + 1, and
    /// re-serializes. Used exclusively to recover from a `SequenceStale`
    /// submission failure; the result is a new unsigned value that must be
    /// signed again.
    pub async fn rebuild_with_current_sequence(
        &self,
        original_xdr: &str,
        source_account: &str,
    ) -> Result<BuiltTransaction, PassportError> {
        if !strkey::is_valid_address(source_account) {
            return Err(PassportError::InvalidAddressFormat {
                field: "sourceAccount",
            });
        }

        let envelope = TransactionEnvelope::from_xdr_base64(original_xdr, Limits::none())
            .map_err(|e| PassportError::Serialization(e.to_string()))?;
        let TransactionEnvelope::Tx(v1) = envelope else {
            return Err(PassportError::Serialization(
                "expected a v1 transaction envelope".to_string(),
            ));
        };
        let mut tx = v1.tx;

        if !is_invoke_host_function(&tx) {
            return Err(PassportError::Serialization(
                "envelope carries operations this service did not build".to_string(),
            ));
        }

        let envelope_source = source_account_strkey(&tx.source_account);
        if envelope_source != source_account {
            return Err(PassportError::Serialization(format!(
                "envelope source {envelope_source} does not match the supplied source account"
            )));
        }

        let snapshot = self.current_sequence(source_account).await?;
        tx.seq_num = SequenceNumber(snapshot.sequence + 1);

        tracing::info!(
            source_account,
            sequence = snapshot.sequence + 1,
            "rebuilt transaction against current sequence"
        );

        BuiltTransaction::from_transaction(tx, Vec::new())
    }
}
