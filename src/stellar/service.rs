// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Passport transaction lifecycle: build, submit, and read-only queries.
//!
//! The builder validates inputs, fetches a fresh sequence snapshot,
//! assembles the contract invocation with a bounded validity window,
//! simulates it to obtain the fee, the soroban transaction data and any
//! authorization entries, and returns an unsigned envelope plus metadata.
//! The caller signs out-of-band and hands the signed payload to `submit`.
//! Sequence staleness at submission is reported as `SequenceStale` and
//! recovered through the [`SequenceReconciler`] — never by blind resubmit,
//! since a prior attempt may have already reached the network.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use stellar_xdr::curr::{
    HostFunction, InvokeHostFunctionOp, Limits, Memo, MuxedAccount, Operation, OperationBody,
    Preconditions, ReadXdr, ScVal, SequenceNumber, SorobanAuthorizationEntry,
    SorobanTransactionData, TimeBounds, TimePoint, Transaction, TransactionEnvelope,
    TransactionExt, Uint256,
};

use crate::config::ClientMode;

use super::contract::{self, PassportContract};
use super::errors::{translate_result_xdr, translate_simulation, ContractError, PassportError};
use super::gateway::LedgerGateway;
use super::rpc::SimulateTransactionResponse;
use super::sequence::SequenceReconciler;
use super::strkey;
use super::types::{unsigned_envelope_xdr, BuiltTransaction, VerificationRecord, VerificationStatus};
use super::verification::{VerificationType, STATUS_LABEL_PREFIX};

/// Minimum score at which a wallet counts as human. Inclusive.
pub const HUMAN_SCORE_THRESHOLD: u32 = 35;

/// Base per-operation transaction fee in stroops; the simulated resource
/// fee is added on top.
pub const BASE_FEE_STROOPS: u32 = 100;

/// Brokers passport contract interactions over a [`LedgerGateway`].
pub struct PassportService<G> {
    gateway: G,
    contract: PassportContract,
    mode: ClientMode,
    tx_timeout: Duration,
}

impl<G: LedgerGateway> PassportService<G> {
    pub fn new(
        gateway: G,
        contract: PassportContract,
        mode: ClientMode,
        tx_timeout: Duration,
    ) -> Self {
        Self {
            gateway,
            contract,
            mode,
            tx_timeout,
        }
    }

    /// Whether build/submit operations are enabled for this process.
    pub fn is_live(&self) -> bool {
        self.mode == ClientMode::Live
    }

    /// Per-call sequence reconciliation over this service's gateway.
    pub fn reconciler(&self) -> SequenceReconciler<'_, G> {
        SequenceReconciler::new(&self.gateway)
    }

    /// Build an unsigned `register(wallet, name, surnames)` transaction.
    ///
    /// Performs a best-effort pre-flight score query: an already-registered
    /// wallet fails here before any sequence fetch or build work. The
    /// contract remains authoritative — a wallet registered between the
    /// pre-flight and submission still fails on-chain.
    pub async fn build_register(
        &self,
        wallet: &str,
        name: &str,
        surnames: &str,
        source_account: &str,
    ) -> Result<BuiltTransaction, PassportError> {
        validate_address(wallet, "wallet")?;
        validate_address(source_account, "sourceAccount")?;

        match self.query_score(wallet).await {
            Ok(score) => {
                tracing::info!(wallet, score, "refusing to build register for a registered wallet");
                return Err(PassportError::Contract(ContractError::AlreadyRegistered));
            }
            Err(PassportError::Contract(ContractError::NotRegistered)) => {}
            Err(e) => {
                // Best-effort check only; the build itself will surface
                // anything real.
                tracing::debug!(wallet, error = %e, "pre-flight score query failed");
            }
        }

        let host_function = self.contract.register(wallet, name, surnames)?;
        self.build_invocation(host_function, source_account).await
    }

    /// Build an unsigned `upsert_verification(wallet, vtype, points)`
    /// transaction.
    pub async fn build_upsert_verification(
        &self,
        wallet: &str,
        vtype: &VerificationType,
        points: u32,
        source_account: &str,
    ) -> Result<BuiltTransaction, PassportError> {
        validate_address(wallet, "wallet")?;
        validate_address(source_account, "sourceAccount")?;

        tracing::info!(
            wallet,
            verification = vtype.label(),
            points,
            "building verification upsert"
        );
        let host_function = self.contract.upsert_verification(wallet, vtype, points)?;
        self.build_invocation(host_function, source_account).await
    }

    /// Submit a signed transaction envelope to the network.
    ///
    /// Does not retry on staleness: the caller is expected to rebuild via
    /// the reconciler and sign again.
    pub async fn submit(&self, signed_xdr: &str) -> Result<String, PassportError> {
        let payload = signed_xdr.trim();
        if payload.is_empty() {
            return Err(PassportError::Serialization(
                "empty transaction payload".to_string(),
            ));
        }
        TransactionEnvelope::from_xdr_base64(payload, Limits::none())
            .map_err(|e| PassportError::Serialization(e.to_string()))?;

        let response = self.gateway.send(payload).await?;
        match response.status.as_str() {
            "PENDING" => {
                tracing::info!(hash = %response.hash, "transaction accepted for inclusion");
                Ok(response.hash)
            }
            "DUPLICATE" => Err(PassportError::Submission(
                "transaction was already submitted".to_string(),
            )),
            "TRY_AGAIN_LATER" => Err(PassportError::Submission(
                "network is congested, retry later".to_string(),
            )),
            "ERROR" => Err(match response.error_result_xdr.as_deref() {
                Some(result_xdr) => translate_result_xdr(result_xdr, ""),
                None => PassportError::Submission(
                    "transaction rejected without a result envelope".to_string(),
                ),
            }),
            other => Err(PassportError::Submission(format!(
                "unexpected submission status {other}"
            ))),
        }
    }

    /// Current on-chain score for a wallet.
    pub async fn get_score(&self, wallet: &str) -> Result<u32, PassportError> {
        validate_address(wallet, "wallet")?;
        self.query_score(wallet).await
    }

    /// All verification records for a wallet. Empty list when none exist.
    pub async fn get_verifications(
        &self,
        wallet: &str,
    ) -> Result<Vec<VerificationRecord>, PassportError> {
        validate_address(wallet, "wallet")?;
        let value = self.simulate_read(self.contract.get_verifications(wallet)?).await?;
        contract::decode_verifications(&value)
    }

    /// Human-threshold decision: score compared inclusively against
    /// [`HUMAN_SCORE_THRESHOLD`].
    pub async fn is_human(&self, wallet: &str) -> Result<(bool, u32), PassportError> {
        let score = self.get_score(wallet).await?;
        Ok((score >= HUMAN_SCORE_THRESHOLD, score))
    }

    /// Approval status derived from the status-convention records.
    ///
    /// Scans for `Custom("status_*")` verifications and takes the one with
    /// the highest timestamp. Two status records sharing a timestamp have no
    /// defined winner; whichever the scan encounters later is kept.
    pub async fn verification_status(
        &self,
        wallet: &str,
    ) -> Result<VerificationStatus, PassportError> {
        let records = self.get_verifications(wallet).await?;

        let mut latest: Option<(u64, String)> = None;
        for record in &records {
            let VerificationType::Custom(label) = &record.vtype else {
                continue;
            };
            let Some(value) = label.strip_prefix(STATUS_LABEL_PREFIX) else {
                continue;
            };
            if latest.as_ref().is_none_or(|(ts, _)| record.timestamp >= *ts) {
                latest = Some((record.timestamp, value.to_string()));
            }
        }

        Ok(match latest.as_ref().map(|(_, v)| v.as_str()) {
            Some("approved") => VerificationStatus::Approved,
            Some("pending") => VerificationStatus::Pending,
            Some("rejected") => VerificationStatus::Rejected,
            _ => VerificationStatus::Unknown,
        })
    }

    async fn query_score(&self, wallet: &str) -> Result<u32, PassportError> {
        let value = self.simulate_read(self.contract.get_score(wallet)?).await?;
        contract::decode_score(&value)
    }

    /// Build + simulate path shared by both write operations.
    async fn build_invocation(
        &self,
        host_function: HostFunction,
        source_account: &str,
    ) -> Result<BuiltTransaction, PassportError> {
        let snapshot = self.reconciler().current_sequence(source_account).await?;
        let sequence = snapshot.sequence + 1;

        let timebounds = self.validity_window();
        let probe = assemble(
            source_account,
            sequence,
            Preconditions::Time(timebounds.clone()),
            host_function.clone(),
            Vec::new(),
            BASE_FEE_STROOPS,
            TransactionExt::V0,
        )?;
        let probe_xdr = unsigned_envelope_xdr(&probe)?;

        let sim = self.gateway.simulate(&probe_xdr).await?;
        if let Some(error) = &sim.error {
            return Err(translate_simulation(error));
        }

        let (fee, ext, auth_entries, auth_b64) = apply_simulation(&sim)?;
        let tx = assemble(
            source_account,
            sequence,
            Preconditions::Time(timebounds),
            host_function,
            auth_entries,
            fee,
            ext,
        )?;

        // Diagnostic only: a mismatch here means another transaction claimed
        // the sequence while we were simulating.
        if let Err(e) = self
            .reconciler()
            .verify_expected_sequence(sequence, source_account)
            .await
        {
            tracing::debug!(source_account, error = %e, "sequence sanity check skipped");
        }

        BuiltTransaction::from_transaction(tx, auth_b64)
    }

    /// Simulation-only invocation for the read queries. Uses a neutral
    /// source account and claims no sequence, so it works in both client
    /// modes and never touches Horizon.
    async fn simulate_read(&self, host_function: HostFunction) -> Result<ScVal, PassportError> {
        let source = strkey::encode_account_id(&[0u8; 32]);
        let tx = assemble(
            &source,
            0,
            Preconditions::None,
            host_function,
            Vec::new(),
            BASE_FEE_STROOPS,
            TransactionExt::V0,
        )?;
        let xdr = unsigned_envelope_xdr(&tx)?;

        let sim = self.gateway.simulate(&xdr).await?;
        if let Some(error) = &sim.error {
            return Err(translate_simulation(error));
        }

        let result = sim
            .results
            .first()
            .and_then(|r| r.xdr.as_deref())
            .ok_or_else(|| {
                PassportError::Simulation("simulation returned no result value".to_string())
            })?;
        ScVal::from_xdr_base64(result, Limits::none())
            .map_err(|e| PassportError::Serialization(e.to_string()))
    }

    fn validity_window(&self) -> TimeBounds {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        TimeBounds {
            min_time: TimePoint(0),
            max_time: TimePoint(now + self.tx_timeout.as_secs()),
        }
    }
}

fn validate_address(address: &str, field: &'static str) -> Result<(), PassportError> {
    if strkey::is_valid_address(address) {
        Ok(())
    } else {
        Err(PassportError::InvalidAddressFormat { field })
    }
}

fn assemble(
    source_account: &str,
    sequence: i64,
    cond: Preconditions,
    host_function: HostFunction,
    auth: Vec<SorobanAuthorizationEntry>,
    fee: u32,
    ext: TransactionExt,
) -> Result<Transaction, PassportError> {
    let key = strkey::decode_account_id(source_account)?;
    let operation = Operation {
        source_account: None,
        body: OperationBody::InvokeHostFunction(InvokeHostFunctionOp {
            host_function,
            auth: auth
                .try_into()
                .map_err(|_| PassportError::Serialization("too many authorization entries".to_string()))?,
        }),
    };

    Ok(Transaction {
        source_account: MuxedAccount::Ed25519(Uint256(key)),
        fee,
        seq_num: SequenceNumber(sequence),
        cond,
        memo: Memo::None,
        operations: vec![operation]
            .try_into()
            .map_err(|_| PassportError::Serialization("operation count exceeds limits".to_string()))?,
        ext,
    })
}

/// Extract fee, transaction data and authorization entries from a
/// successful simulation.
fn apply_simulation(
    sim: &SimulateTransactionResponse,
) -> Result<(u32, TransactionExt, Vec<SorobanAuthorizationEntry>, Vec<String>), PassportError> {
    let resource_fee = match &sim.min_resource_fee {
        Some(raw) => raw.parse::<i64>().map_err(|e| {
            PassportError::Simulation(format!("simulation returned a non-numeric fee: {e}"))
        })?,
        None => 0,
    };
    let fee = i64::from(BASE_FEE_STROOPS)
        .saturating_add(resource_fee)
        .clamp(0, i64::from(u32::MAX)) as u32;

    let ext = match &sim.transaction_data {
        Some(data) => TransactionExt::V1(
            SorobanTransactionData::from_xdr_base64(data, Limits::none())
                .map_err(|e| PassportError::Serialization(e.to_string()))?,
        ),
        None => TransactionExt::V0,
    };

    let mut auth_entries = Vec::new();
    let mut auth_b64 = Vec::new();
    if let Some(result) = sim.results.first() {
        for entry in &result.auth {
            auth_entries.push(
                SorobanAuthorizationEntry::from_xdr_base64(entry, Limits::none())
                    .map_err(|e| PassportError::Serialization(e.to_string()))?,
            );
            auth_b64.push(entry.clone());
        }
    }

    Ok((fee, ext, auth_entries, auth_b64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stellar::gateway::testing::MockGateway;
    use crate::stellar::rpc::{SendTransactionResponse, SimulateHostFunctionResult};
    use crate::stellar::types::AccountRecord;
    use stellar_xdr::curr::{
        ExtensionPoint, LedgerFootprint, ScVec, SorobanResources, TransactionResult,
        TransactionResultExt, TransactionResultResult, WriteXdr,
    };

    fn wallet() -> String {
        strkey::encode_account_id(&[5u8; 32])
    }

    fn source() -> String {
        strkey::encode_account_id(&[7u8; 32])
    }

    fn contract() -> PassportContract {
        PassportContract::new(&strkey::encode_contract_id(&[1u8; 32])).unwrap()
    }

    fn service(gateway: MockGateway) -> PassportService<MockGateway> {
        PassportService::new(
            gateway,
            contract(),
            ClientMode::Live,
            Duration::from_secs(300),
        )
    }

    fn gateway_with_sequence(sequence: i64) -> MockGateway {
        MockGateway::new(AccountRecord {
            account_id: source(),
            sequence,
        })
    }

    fn scval_b64(value: &ScVal) -> String {
        value.to_xdr_base64(Limits::none()).unwrap()
    }

    fn score_simulation(score: u32) -> SimulateTransactionResponse {
        SimulateTransactionResponse {
            results: vec![SimulateHostFunctionResult {
                auth: vec![],
                xdr: Some(scval_b64(&ScVal::U32(score))),
            }],
            ..Default::default()
        }
    }

    fn not_registered_simulation() -> SimulateTransactionResponse {
        SimulateTransactionResponse {
            error: Some("HostError: Error(Contract, #2)".to_string()),
            ..Default::default()
        }
    }

    fn soroban_data_b64(resource_fee: i64) -> String {
        SorobanTransactionData {
            ext: ExtensionPoint::V0,
            resources: SorobanResources {
                footprint: LedgerFootprint {
                    read_only: Default::default(),
                    read_write: Default::default(),
                },
                instructions: 0,
                read_bytes: 0,
                write_bytes: 0,
            },
            resource_fee,
        }
        .to_xdr_base64(Limits::none())
        .unwrap()
    }

    fn build_simulation(resource_fee: i64) -> SimulateTransactionResponse {
        SimulateTransactionResponse {
            transaction_data: Some(soroban_data_b64(resource_fee)),
            min_resource_fee: Some(resource_fee.to_string()),
            results: vec![SimulateHostFunctionResult {
                auth: vec![],
                xdr: Some(scval_b64(&ScVal::Void)),
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn build_register_claims_current_plus_one() {
        let gateway = gateway_with_sequence(100)
            .push_simulation(not_registered_simulation())
            .push_simulation(build_simulation(400));
        let service = service(gateway);

        let built = service
            .build_register(&wallet(), "John", "Doe", &source())
            .await
            .unwrap();

        assert_eq!(built.sequence, 101);
        assert_eq!(built.fee, BASE_FEE_STROOPS + 400);
        assert_eq!(built.source_account, source());
        assert!(built.timebounds.is_some());
        assert!(built.authorization_entries.is_empty());

        // The returned envelope really carries the claimed sequence.
        let envelope =
            TransactionEnvelope::from_xdr_base64(built.xdr.as_str(), Limits::none()).unwrap();
        let TransactionEnvelope::Tx(v1) = envelope else {
            panic!("expected v1 envelope")
        };
        assert_eq!(v1.tx.seq_num.0, 101);
        assert!(matches!(v1.tx.ext, TransactionExt::V1(_)));
    }

    #[tokio::test]
    async fn build_register_short_circuits_on_registered_wallet() {
        let gateway = gateway_with_sequence(100).push_simulation(score_simulation(10));
        let service = service(gateway);

        let err = service
            .build_register(&wallet(), "John", "Doe", &source())
            .await
            .unwrap_err();

        assert_eq!(err, PassportError::Contract(ContractError::AlreadyRegistered));
        // The register build itself never ran: one simulation (the
        // pre-flight) and no sequence fetch.
        assert_eq!(service.gateway.simulate_call_count(), 1);
        assert_eq!(service.gateway.load_call_count(), 0);
    }

    #[tokio::test]
    async fn build_register_rejects_malformed_addresses() {
        let service = service(gateway_with_sequence(1));

        let err = service
            .build_register("nope", "a", "b", &source())
            .await
            .unwrap_err();
        assert_eq!(err, PassportError::InvalidAddressFormat { field: "wallet" });

        let err = service
            .build_register(&wallet(), "a", "b", "nope")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            PassportError::InvalidAddressFormat {
                field: "sourceAccount"
            }
        );
        assert_eq!(service.gateway.simulate_call_count(), 0);
    }

    #[tokio::test]
    async fn build_upsert_passes_authorization_entries_through() {
        let auth_entry_b64 = sample_auth_entry_b64();
        let sim = SimulateTransactionResponse {
            transaction_data: Some(soroban_data_b64(50)),
            min_resource_fee: Some("50".to_string()),
            results: vec![SimulateHostFunctionResult {
                auth: vec![auth_entry_b64.clone()],
                xdr: Some(scval_b64(&ScVal::Void)),
            }],
            ..Default::default()
        };
        let gateway = gateway_with_sequence(9).push_simulation(sim);
        let service = service(gateway);

        let built = service
            .build_upsert_verification(&wallet(), &VerificationType::Twitter, 5, &source())
            .await
            .unwrap();

        assert_eq!(built.sequence, 10);
        assert_eq!(built.authorization_entries, vec![auth_entry_b64]);
    }

    fn sample_auth_entry_b64() -> String {
        use stellar_xdr::curr::{
            InvokeContractArgs, ScAddress, ScSymbol, SorobanAuthorizedFunction,
            SorobanAuthorizedInvocation, SorobanCredentials,
        };
        SorobanAuthorizationEntry {
            credentials: SorobanCredentials::SourceAccount,
            root_invocation: SorobanAuthorizedInvocation {
                function: SorobanAuthorizedFunction::ContractFn(InvokeContractArgs {
                    contract_address: ScAddress::Contract(stellar_xdr::curr::Hash([1u8; 32])),
                    function_name: ScSymbol("register".try_into().unwrap()),
                    args: Default::default(),
                }),
                sub_invocations: Default::default(),
            },
        }
        .to_xdr_base64(Limits::none())
        .unwrap()
    }

    #[tokio::test]
    async fn simulation_contract_errors_are_translated() {
        let sim = SimulateTransactionResponse {
            error: Some("HostError: Error(Contract, #4)".to_string()),
            ..Default::default()
        };
        let gateway = gateway_with_sequence(3).push_simulation(sim);
        let service = service(gateway);

        let err = service
            .build_upsert_verification(&wallet(), &VerificationType::Over18, 1, &source())
            .await
            .unwrap_err();
        assert_eq!(err, PassportError::Contract(ContractError::InvalidPoints));
    }

    #[tokio::test]
    async fn submit_returns_hash_on_pending() {
        let gateway = gateway_with_sequence(3).with_send_response(SendTransactionResponse {
            status: "PENDING".to_string(),
            hash: "ab".repeat(32),
            ..Default::default()
        });
        let service = service(gateway);

        let hash = service.submit(&unsigned_probe_xdr()).await.unwrap();
        assert_eq!(hash, "ab".repeat(32));
    }

    #[tokio::test]
    async fn submit_rejects_empty_and_malformed_payloads() {
        let service = service(gateway_with_sequence(3));

        for bad in ["", "   ", "not-xdr-at-all"] {
            let err = service.submit(bad).await.unwrap_err();
            assert!(matches!(err, PassportError::Serialization(_)));
        }
        assert!(service.gateway.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn stale_sequence_is_detected_and_recovered_by_rebuild() {
        let bad_seq = TransactionResult {
            fee_charged: 0,
            result: TransactionResultResult::TxBadSeq,
            ext: TransactionResultExt::V0,
        }
        .to_xdr_base64(Limits::none())
        .unwrap();

        let gateway = gateway_with_sequence(205).with_send_response(SendTransactionResponse {
            status: "ERROR".to_string(),
            hash: String::new(),
            error_result_xdr: Some(bad_seq),
            ..Default::default()
        });
        let service = service(gateway);

        let original = unsigned_probe_xdr();
        let err = service.submit(&original).await.unwrap_err();
        assert!(matches!(err, PassportError::SequenceStale(_)));

        // Recovery: rebuild the same payload against the fresh sequence.
        let rebuilt = service
            .reconciler()
            .rebuild_with_current_sequence(&original, &source())
            .await
            .unwrap();
        assert_eq!(rebuilt.sequence, 206);
    }

    fn unsigned_probe_xdr() -> String {
        let tx = assemble(
            &source(),
            42,
            Preconditions::None,
            contract().get_score(&wallet()).unwrap(),
            Vec::new(),
            BASE_FEE_STROOPS,
            TransactionExt::V0,
        )
        .unwrap();
        unsigned_envelope_xdr(&tx).unwrap()
    }

    #[tokio::test]
    async fn is_human_threshold_is_inclusive() {
        let gateway = gateway_with_sequence(1).push_simulation(score_simulation(35));
        let service = service(gateway);
        assert_eq!(service.is_human(&wallet()).await.unwrap(), (true, 35));

        let gateway = gateway_with_sequence(1).push_simulation(score_simulation(34));
        let service = self::service(gateway);
        assert_eq!(service.is_human(&wallet()).await.unwrap(), (false, 34));
    }

    #[tokio::test]
    async fn gateway_failures_propagate_from_queries() {
        let gateway = gateway_with_sequence(1).push_simulation_error(PassportError::Simulation(
            "soroban rpc unreachable: timeout".to_string(),
        ));
        let service = service(gateway);

        let err = service.get_score(&wallet()).await.unwrap_err();
        assert!(matches!(err, PassportError::Simulation(_)));
    }

    #[tokio::test]
    async fn get_verifications_with_no_records_is_ok_and_empty() {
        let sim = SimulateTransactionResponse {
            results: vec![SimulateHostFunctionResult {
                auth: vec![],
                xdr: Some(scval_b64(&ScVal::Vec(Some(ScVec(Default::default()))))),
            }],
            ..Default::default()
        };
        let gateway = gateway_with_sequence(1).push_simulation(sim);
        let service = service(gateway);

        let records = service.get_verifications(&wallet()).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn verification_status_takes_the_latest_status_record() {
        use crate::stellar::contract::tests_support::verification_list_b64;

        let records = vec![
            (1_000, VerificationType::Custom("status_pending".to_string())),
            (2_000, VerificationType::Custom("status_approved".to_string())),
            (1_500, VerificationType::Twitter),
        ];
        let sim = SimulateTransactionResponse {
            results: vec![SimulateHostFunctionResult {
                auth: vec![],
                xdr: Some(verification_list_b64(&records)),
            }],
            ..Default::default()
        };
        let gateway = gateway_with_sequence(1).push_simulation(sim);
        let service = service(gateway);

        let status = service.verification_status(&wallet()).await.unwrap();
        assert_eq!(status, VerificationStatus::Approved);
    }

    #[tokio::test]
    async fn verification_status_without_status_records_is_unknown() {
        use crate::stellar::contract::tests_support::verification_list_b64;

        let records = vec![(1_000, VerificationType::GitHub)];
        let sim = SimulateTransactionResponse {
            results: vec![SimulateHostFunctionResult {
                auth: vec![],
                xdr: Some(verification_list_b64(&records)),
            }],
            ..Default::default()
        };
        let gateway = gateway_with_sequence(1).push_simulation(sim);
        let service = service(gateway);

        let status = service.verification_status(&wallet()).await.unwrap();
        assert_eq!(status, VerificationStatus::Unknown);
    }

    #[tokio::test]
    async fn read_only_mode_disables_build_and_submit() {
        let service = PassportService::new(
            gateway_with_sequence(1),
            contract(),
            ClientMode::ReadOnly,
            Duration::from_secs(300),
        );
        assert!(!service.is_live());
    }
}
