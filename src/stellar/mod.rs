// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Stellar/Soroban integration: the passport contract client.
//!
//! The HTTP layer talks to [`service::PassportService`] only; everything
//! else here is plumbing it composes — StrKey codecs, the contract
//! invocation builder, Horizon and Soroban RPC clients behind the
//! [`gateway::LedgerGateway`] seam, the error translator and the sequence
//! reconciler.

pub mod contract;
pub mod errors;
pub mod gateway;
pub mod horizon;
pub mod rpc;
pub mod sequence;
pub mod service;
pub mod strkey;
pub mod types;
pub mod verification;

pub use errors::PassportError;
pub use gateway::StellarGateway;
pub use service::PassportService;
pub use types::{BuiltTransaction, VerificationStatus};
pub use verification::VerificationType;
