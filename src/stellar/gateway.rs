// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Ledger access seam.
//!
//! The passport service talks to the network exclusively through
//! [`LedgerGateway`], so the build/submit/reconcile logic can be exercised
//! against a mock in tests. The production implementation combines Horizon
//! (account/sequence queries) with Soroban RPC (simulate/send).

use reqwest::Client;

use crate::config::Config;

use super::errors::PassportError;
use super::horizon::HorizonClient;
use super::rpc::{SendTransactionResponse, SimulateTransactionResponse, SorobanRpcClient};
use super::types::AccountRecord;

/// Network operations the passport transaction lifecycle depends on.
pub trait LedgerGateway: Send + Sync {
    /// Load an account and its current sequence number.
    fn load_account(
        &self,
        account_id: &str,
    ) -> impl std::future::Future<Output = Result<AccountRecord, PassportError>> + Send;

    /// Dry-run a transaction envelope.
    fn simulate(
        &self,
        envelope_xdr: &str,
    ) -> impl std::future::Future<Output = Result<SimulateTransactionResponse, PassportError>> + Send;

    /// Submit a signed transaction envelope.
    fn send(
        &self,
        envelope_xdr: &str,
    ) -> impl std::future::Future<Output = Result<SendTransactionResponse, PassportError>> + Send;
}

/// Production gateway: Horizon for accounts, Soroban RPC for contract calls.
#[derive(Debug, Clone)]
pub struct StellarGateway {
    horizon: HorizonClient,
    rpc: SorobanRpcClient,
}

impl StellarGateway {
    pub fn new(config: &Config) -> Self {
        let http = Client::new();
        Self {
            horizon: HorizonClient::new(&config.horizon_url, http.clone()),
            rpc: SorobanRpcClient::new(&config.soroban_rpc_url, http),
        }
    }
}

impl LedgerGateway for StellarGateway {
    async fn load_account(&self, account_id: &str) -> Result<AccountRecord, PassportError> {
        self.horizon.load_account(account_id).await
    }

    async fn simulate(
        &self,
        envelope_xdr: &str,
    ) -> Result<SimulateTransactionResponse, PassportError> {
        self.rpc.simulate_transaction(envelope_xdr).await
    }

    async fn send(&self, envelope_xdr: &str) -> Result<SendTransactionResponse, PassportError> {
        self.rpc.send_transaction(envelope_xdr).await
    }
}

#[cfg(test)]
pub mod testing {
    //! Scripted gateway for exercising the transaction lifecycle offline.

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    pub struct MockGateway {
        account: Option<AccountRecord>,
        simulations: Mutex<VecDeque<Result<SimulateTransactionResponse, PassportError>>>,
        send_response: Mutex<Option<Result<SendTransactionResponse, PassportError>>>,
        pub load_calls: AtomicUsize,
        pub simulate_calls: AtomicUsize,
        pub sent: Mutex<Vec<String>>,
    }

    impl MockGateway {
        pub fn new(account: AccountRecord) -> Self {
            Self {
                account: Some(account),
                simulations: Mutex::new(VecDeque::new()),
                send_response: Mutex::new(None),
                load_calls: AtomicUsize::new(0),
                simulate_calls: AtomicUsize::new(0),
                sent: Mutex::new(Vec::new()),
            }
        }

        /// A gateway whose account lookups always fail.
        pub fn missing_account() -> Self {
            Self {
                account: None,
                simulations: Mutex::new(VecDeque::new()),
                send_response: Mutex::new(None),
                load_calls: AtomicUsize::new(0),
                simulate_calls: AtomicUsize::new(0),
                sent: Mutex::new(Vec::new()),
            }
        }

        /// Queue the response for the next `simulate` call (FIFO).
        pub fn push_simulation(self, response: SimulateTransactionResponse) -> Self {
            self.simulations.lock().unwrap().push_back(Ok(response));
            self
        }

        pub fn push_simulation_error(self, error: PassportError) -> Self {
            self.simulations.lock().unwrap().push_back(Err(error));
            self
        }

        pub fn with_send_response(self, response: SendTransactionResponse) -> Self {
            *self.send_response.lock().unwrap() = Some(Ok(response));
            self
        }

        pub fn load_call_count(&self) -> usize {
            self.load_calls.load(Ordering::SeqCst)
        }

        pub fn simulate_call_count(&self) -> usize {
            self.simulate_calls.load(Ordering::SeqCst)
        }
    }

    impl LedgerGateway for MockGateway {
        async fn load_account(&self, account_id: &str) -> Result<AccountRecord, PassportError> {
            self.load_calls.fetch_add(1, Ordering::SeqCst);
            match &self.account {
                Some(account) => Ok(account.clone()),
                None => Err(PassportError::AccountLoad(format!(
                    "account {account_id} does not exist on the ledger"
                ))),
            }
        }

        async fn simulate(
            &self,
            _envelope_xdr: &str,
        ) -> Result<SimulateTransactionResponse, PassportError> {
            self.simulate_calls.fetch_add(1, Ordering::SeqCst);
            self.simulations
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(SimulateTransactionResponse::default()))
        }

        async fn send(&self, envelope_xdr: &str) -> Result<SendTransactionResponse, PassportError> {
            self.sent.lock().unwrap().push(envelope_xdr.to_string());
            self.send_response
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| {
                    Ok(SendTransactionResponse {
                        status: "PENDING".to_string(),
                        hash: "0".repeat(64),
                        ..Default::default()
                    })
                })
        }
    }
}
