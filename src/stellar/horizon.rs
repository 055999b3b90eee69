// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Horizon client for account queries.
//!
//! The sequence reconciler only needs one Horizon endpoint: the account by
//! id, which carries the current sequence number as a decimal string (64-bit
//! values do not survive JSON numbers).

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::errors::PassportError;
use super::types::AccountRecord;

/// Horizon REST client.
#[derive(Debug, Clone)]
pub struct HorizonClient {
    base_url: String,
    http: Client,
}

#[derive(Debug, Deserialize)]
struct HorizonAccount {
    id: String,
    sequence: String,
}

impl HorizonClient {
    pub fn new(base_url: &str, http: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Load an account record, including its current sequence number.
    pub async fn load_account(&self, account_id: &str) -> Result<AccountRecord, PassportError> {
        let url = format!("{}/accounts/{}", self.base_url, account_id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| PassportError::AccountLoad(format!("horizon unreachable: {e}")))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(PassportError::AccountLoad(format!(
                "account {account_id} does not exist on the ledger"
            )));
        }
        if !response.status().is_success() {
            return Err(PassportError::AccountLoad(format!(
                "horizon returned {} for {account_id}",
                response.status()
            )));
        }

        let account: HorizonAccount = response
            .json()
            .await
            .map_err(|e| PassportError::AccountLoad(format!("invalid horizon response: {e}")))?;

        let sequence = account.sequence.parse::<i64>().map_err(|e| {
            PassportError::AccountLoad(format!("horizon returned a non-numeric sequence: {e}"))
        })?;

        Ok(AccountRecord {
            account_id: account.id,
            sequence,
        })
    }
}
