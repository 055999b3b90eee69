// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! # Runtime Configuration
//!
//! This module defines environment variable names and default values used
//! throughout the application. Configuration is loaded from the environment
//! once at startup and never reloaded mid-request.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `HORIZON_URL` | Horizon endpoint for account/sequence queries | testnet Horizon |
//! | `SOROBAN_RPC_URL` | Soroban RPC endpoint for simulate/send | testnet RPC |
//! | `PASSPORT_CONTRACT_ID` | StrKey contract id (`C...`) of the passport contract | Required |
//! | `PASSPORT_MODE` | `live` (build/submit + queries) or `read-only` (queries only) | `live` |
//! | `TX_TIMEOUT_SECS` | Validity window applied as transaction timebounds | `300` |
//! | `WEBHOOK_SECRET` | Shared secret for the verification webhook HMAC | Optional (webhook disabled) |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use crate::stellar::strkey;

/// Environment variable name for the server bind address.
pub const HOST_ENV: &str = "HOST";

/// Environment variable name for the server bind port.
pub const PORT_ENV: &str = "PORT";

/// Environment variable name for the Horizon base URL.
///
/// Horizon serves the account-by-id endpoint the sequence reconciler
/// depends on. Sequence numbers are fetched fresh for every build and
/// never cached.
pub const HORIZON_URL_ENV: &str = "HORIZON_URL";

/// Environment variable name for the Soroban RPC base URL.
pub const SOROBAN_RPC_URL_ENV: &str = "SOROBAN_RPC_URL";

/// Environment variable name for the passport contract id (StrKey `C...`).
pub const PASSPORT_CONTRACT_ID_ENV: &str = "PASSPORT_CONTRACT_ID";

/// Environment variable name for the client mode (`live` or `read-only`).
pub const PASSPORT_MODE_ENV: &str = "PASSPORT_MODE";

/// Environment variable name for the transaction validity window in seconds.
pub const TX_TIMEOUT_SECS_ENV: &str = "TX_TIMEOUT_SECS";

/// Environment variable name for the verification webhook shared secret.
pub const WEBHOOK_SECRET_ENV: &str = "WEBHOOK_SECRET";

/// Environment variable name for the log output format.
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

const DEFAULT_HORIZON_URL: &str = "https://horizon-testnet.stellar.org";
const DEFAULT_SOROBAN_RPC_URL: &str = "https://soroban-testnet.stellar.org";
const DEFAULT_TX_TIMEOUT_SECS: u64 = 300;

/// Client mode selected once at process start.
///
/// `ReadOnly` supports only the simulation-based query surface; the
/// build/submit endpoints refuse to operate. There is no fallback between
/// the two modes mid-request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientMode {
    Live,
    ReadOnly,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub horizon_url: String,
    pub soroban_rpc_url: String,
    pub contract_id: String,
    pub mode: ClientMode,
    pub tx_timeout_secs: u64,
    pub webhook_secret: Option<String>,
}

/// Errors raised while resolving configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("invalid value for {variable}: {message}")]
    Invalid {
        variable: &'static str,
        message: String,
    },
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = std::env::var(HOST_ENV).unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var(PORT_ENV) {
            Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                variable: PORT_ENV,
                message: e.to_string(),
            })?,
            Err(_) => 8080,
        };

        let horizon_url = env_url(HORIZON_URL_ENV, DEFAULT_HORIZON_URL)?;
        let soroban_rpc_url = env_url(SOROBAN_RPC_URL_ENV, DEFAULT_SOROBAN_RPC_URL)?;

        let contract_id = std::env::var(PASSPORT_CONTRACT_ID_ENV)
            .map_err(|_| ConfigError::Missing(PASSPORT_CONTRACT_ID_ENV))?;
        strkey::decode_contract_id(&contract_id).map_err(|e| ConfigError::Invalid {
            variable: PASSPORT_CONTRACT_ID_ENV,
            message: e.to_string(),
        })?;

        let mode = match std::env::var(PASSPORT_MODE_ENV).ok().as_deref() {
            Some("read-only") => ClientMode::ReadOnly,
            Some("live") | None => ClientMode::Live,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    variable: PASSPORT_MODE_ENV,
                    message: format!("expected `live` or `read-only`, got `{other}`"),
                })
            }
        };

        let tx_timeout_secs = match std::env::var(TX_TIMEOUT_SECS_ENV) {
            Ok(raw) => raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                variable: TX_TIMEOUT_SECS_ENV,
                message: e.to_string(),
            })?,
            Err(_) => DEFAULT_TX_TIMEOUT_SECS,
        };

        let webhook_secret = std::env::var(WEBHOOK_SECRET_ENV)
            .ok()
            .filter(|s| !s.is_empty());

        Ok(Self {
            host,
            port,
            horizon_url,
            soroban_rpc_url,
            contract_id,
            mode,
            tx_timeout_secs,
            webhook_secret,
        })
    }
}

fn env_url(variable: &'static str, default: &str) -> Result<String, ConfigError> {
    let raw = std::env::var(variable).unwrap_or_else(|_| default.to_string());
    let parsed: url::Url = raw
        .parse()
        .map_err(|e: url::ParseError| ConfigError::Invalid {
            variable,
            message: e.to_string(),
        })?;
    // Trailing slashes make path joins ambiguous downstream.
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_url_strips_trailing_slash() {
        let url = env_url(
            "PASSPORT_TEST_URL_UNSET",
            "https://horizon-testnet.stellar.org/",
        )
        .expect("default url parses");
        assert_eq!(url, "https://horizon-testnet.stellar.org");
    }

    #[test]
    fn env_url_rejects_garbage_default() {
        let err = env_url("PASSPORT_TEST_URL_UNSET", "not a url").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }
}
