// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Error taxonomy for passport operations and the contract error translator.
//!
//! Every public operation of the passport service resolves to a
//! [`PassportError`] on failure; raw ledger/contract failures are never
//! surfaced to callers. The translator handles two input shapes: free-text
//! messages embedding a `#<code>` marker (the Soroban SDK renders contract
//! errors as `Error(Contract, #N)`) and base64 XDR `TransactionResult`
//! envelopes returned by the submission endpoint.

use stellar_xdr::curr::{
    InvokeHostFunctionResult, Limits, OperationResult, OperationResultTr, ReadXdr,
    TransactionResult, TransactionResultResult,
};

/// Closed taxonomy of reasons the passport contract rejects an invocation.
///
/// Codes 1 through 6 mirror the contract's error enum; everything else is
/// carried through as [`ContractError::Unknown`] with the original message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("wallet is already registered")]
    AlreadyRegistered,

    #[error("wallet is not registered")]
    NotRegistered,

    #[error("caller is not authorized for this operation")]
    Unauthorized,

    #[error("points value is out of range")]
    InvalidPoints,

    #[error("score arithmetic overflowed")]
    Overflow,

    #[error("verification limit reached for this wallet")]
    TooManyVerifications,

    #[error("{0}")]
    Unknown(String),
}

impl ContractError {
    /// Map a numeric contract error code to its variant.
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(Self::AlreadyRegistered),
            2 => Some(Self::NotRegistered),
            3 => Some(Self::Unauthorized),
            4 => Some(Self::InvalidPoints),
            5 => Some(Self::Overflow),
            6 => Some(Self::TooManyVerifications),
            _ => None,
        }
    }
}

/// Failure result of any public passport operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PassportError {
    #[error("invalid {field} address format")]
    InvalidAddressFormat { field: &'static str },

    #[error("failed to load account: {0}")]
    AccountLoad(String),

    #[error("simulation rejected the transaction: {0}")]
    Simulation(String),

    #[error(transparent)]
    Contract(#[from] ContractError),

    #[error("transaction sequence is stale: {0}")]
    SequenceStale(String),

    #[error("submission failed: {0}")]
    Submission(String),

    #[error("malformed transaction payload: {0}")]
    Serialization(String),
}

impl PassportError {
    /// Stable machine-readable discriminant rendered in API error bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidAddressFormat { .. } => "invalid_address_format",
            Self::AccountLoad(_) => "account_load_error",
            Self::Simulation(_) => "simulation_error",
            Self::Contract(_) => "contract_error",
            Self::SequenceStale(_) => "sequence_stale",
            Self::Submission(_) => "submission_error",
            Self::Serialization(_) => "serialization_error",
        }
    }
}

/// Translate a free-text contract/ledger error message.
///
/// Scans for a `#<digits>` marker and maps the code through the fixed
/// table; when no code is present or the code is outside the table, the
/// original message is preserved in [`ContractError::Unknown`]. Total:
/// every input produces some `ContractError`.
pub fn translate_message(message: &str) -> ContractError {
    match extract_error_code(message) {
        Some(code) => {
            ContractError::from_code(code).unwrap_or_else(|| ContractError::Unknown(message.to_string()))
        }
        None => ContractError::Unknown(message.to_string()),
    }
}

/// Translate a simulation failure message into the taxonomy.
///
/// A recognizable contract code becomes a [`PassportError::Contract`];
/// anything else is a pre-submission rejection.
pub fn translate_simulation(message: &str) -> PassportError {
    match extract_error_code(message) {
        Some(code) => match ContractError::from_code(code) {
            Some(err) => PassportError::Contract(err),
            None => PassportError::Contract(ContractError::Unknown(message.to_string())),
        },
        None => PassportError::Simulation(message.to_string()),
    }
}

/// Translate a base64 XDR `TransactionResult` returned on submission failure.
///
/// `txBAD_SEQ` maps to the recoverable [`PassportError::SequenceStale`];
/// invoke-host-function failures map into the contract taxonomy; all other
/// result codes are terminal submission errors. When the envelope cannot be
/// decoded the fallback message is preserved — this function never panics.
pub fn translate_result_xdr(result_xdr: &str, fallback: &str) -> PassportError {
    let result = match TransactionResult::from_xdr_base64(result_xdr, Limits::none()) {
        Ok(result) => result,
        Err(_) => {
            return PassportError::Submission(if fallback.is_empty() {
                "transaction rejected with an undecodable result".to_string()
            } else {
                fallback.to_string()
            })
        }
    };

    match result.result {
        TransactionResultResult::TxBadSeq => PassportError::SequenceStale(
            "transaction sequence number does not match the source account".to_string(),
        ),
        TransactionResultResult::TxFailed(ops) => translate_failed_operations(ops.as_slice(), fallback),
        other => PassportError::Submission(format!(
            "transaction rejected by the network: {}",
            other.name()
        )),
    }
}

fn translate_failed_operations(ops: &[OperationResult], fallback: &str) -> PassportError {
    for op in ops {
        if let OperationResult::OpInner(OperationResultTr::InvokeHostFunction(inner)) = op {
            let detail = match inner {
                InvokeHostFunctionResult::Malformed => "host function invocation malformed",
                InvokeHostFunctionResult::Trapped => "contract invocation trapped",
                InvokeHostFunctionResult::ResourceLimitExceeded => {
                    "contract invocation exceeded resource limits"
                }
                InvokeHostFunctionResult::EntryArchived => "a required ledger entry is archived",
                InvokeHostFunctionResult::InsufficientRefundableFee => {
                    "insufficient refundable fee"
                }
                InvokeHostFunctionResult::Success(_) => continue,
            };
            // The numeric contract code is not carried in TransactionResult;
            // fall back to the message when one was provided.
            let message = if fallback.is_empty() {
                detail.to_string()
            } else {
                format!("{detail}: {fallback}")
            };
            return PassportError::Contract(translate_message(&message));
        }
    }
    PassportError::Submission(format!(
        "transaction failed: {}",
        if fallback.is_empty() { "operation error" } else { fallback }
    ))
}

/// Extract the first `#<digits>` marker from an error message.
fn extract_error_code(message: &str) -> Option<u32> {
    let (_, rest) = message.split_once('#')?;
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
