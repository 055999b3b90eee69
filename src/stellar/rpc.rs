// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Soroban RPC client (JSON-RPC 2.0 over HTTP).
//!
//! Two methods are used: `simulateTransaction` for the dry run that yields
//! fees, transaction data and authorization requirements, and
//! `sendTransaction` for submission. Submission is not blindly retried — a
//! prior attempt may have reached the network even when the response was
//! lost, so staleness recovery is left to the sequence reconciler.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::errors::PassportError;

/// Result of a `simulateTransaction` call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulateTransactionResponse {
    /// Base64 XDR `SorobanTransactionData` to attach before signing.
    pub transaction_data: Option<String>,
    /// Resource fee in stroops, as a decimal string.
    pub min_resource_fee: Option<String>,
    /// Per-host-function results (one entry for the single invocation).
    #[serde(default)]
    pub results: Vec<SimulateHostFunctionResult>,
    pub latest_ledger: Option<u32>,
    /// Present iff simulation rejected the transaction.
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulateHostFunctionResult {
    /// Base64 XDR `SorobanAuthorizationEntry` values requiring signatures.
    #[serde(default)]
    pub auth: Vec<String>,
    /// Base64 XDR `ScVal` return value of the invocation.
    pub xdr: Option<String>,
}

/// Result of a `sendTransaction` call.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTransactionResponse {
    /// `PENDING`, `DUPLICATE`, `TRY_AGAIN_LATER` or `ERROR`.
    pub status: String,
    /// Network hash of the submitted transaction.
    #[serde(default)]
    pub hash: String,
    /// Base64 XDR `TransactionResult`, present on `ERROR`.
    pub error_result_xdr: Option<String>,
    pub latest_ledger: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcEnvelope<T> {
    result: Option<T>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

/// Soroban RPC client.
#[derive(Debug, Clone)]
pub struct SorobanRpcClient {
    url: String,
    http: Client,
}

impl SorobanRpcClient {
    pub fn new(url: &str, http: Client) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Dry-run a transaction envelope against current ledger state.
    pub async fn simulate_transaction(
        &self,
        envelope_xdr: &str,
    ) -> Result<SimulateTransactionResponse, PassportError> {
        self.call("simulateTransaction", json!({ "transaction": envelope_xdr }))
            .await
            .map_err(|e| match e {
                RpcFailure::Transport(message) => PassportError::Simulation(message),
                RpcFailure::Rpc(message) => PassportError::Simulation(message),
            })
    }

    /// Submit a signed transaction envelope to the network.
    pub async fn send_transaction(
        &self,
        envelope_xdr: &str,
    ) -> Result<SendTransactionResponse, PassportError> {
        self.call("sendTransaction", json!({ "transaction": envelope_xdr }))
            .await
            .map_err(|e| match e {
                RpcFailure::Transport(message) => PassportError::Submission(message),
                RpcFailure::Rpc(message) => PassportError::Submission(message),
            })
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: serde_json::Value,
    ) -> Result<T, RpcFailure> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| RpcFailure::Transport(format!("soroban rpc unreachable: {e}")))?;

        if !response.status().is_success() {
            return Err(RpcFailure::Transport(format!(
                "soroban rpc returned {}",
                response.status()
            )));
        }

        let envelope: JsonRpcEnvelope<T> = response
            .json()
            .await
            .map_err(|e| RpcFailure::Transport(format!("invalid soroban rpc response: {e}")))?;

        if let Some(error) = envelope.error {
            return Err(RpcFailure::Rpc(format!(
                "{} (rpc code {})",
                error.message, error.code
            )));
        }
        envelope
            .result
            .ok_or_else(|| RpcFailure::Rpc("soroban rpc response had no result".to_string()))
    }
}

enum RpcFailure {
    Transport(String),
    Rpc(String),
}
