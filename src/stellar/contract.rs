// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Passport contract invocation assembly and simulation result decoding.
//!
//! The passport contract exposes four entry points this service drives:
//! `register`, `upsert_verification`, `get_score` and `get_verifications`.
//! This module builds the `InvokeHostFunction` host function for each and
//! decodes the `ScVal` payloads simulation returns for the read-only calls.

use stellar_xdr::curr::{
    AccountId, Hash, HostFunction, InvokeContractArgs, PublicKey, ScAddress, ScMapEntry, ScString,
    ScSymbol, ScVal, Uint256,
};

use super::errors::PassportError;
use super::strkey;
use super::types::VerificationRecord;
use super::verification::VerificationType;

/// Handle to the deployed passport contract.
#[derive(Debug, Clone)]
pub struct PassportContract {
    contract: [u8; 32],
}

impl PassportContract {
    /// Create a handle from a StrKey contract id (`C...`).
    pub fn new(contract_id: &str) -> Result<Self, PassportError> {
        let contract = strkey::decode_contract_id(contract_id)?;
        Ok(Self { contract })
    }

    /// `register(wallet, name, surnames)` invocation.
    pub fn register(
        &self,
        wallet: &str,
        name: &str,
        surnames: &str,
    ) -> Result<HostFunction, PassportError> {
        self.call(
            "register",
            vec![address_val(wallet)?, string_val(name)?, string_val(surnames)?],
        )
    }

    /// `upsert_verification(wallet, verification_type, points)` invocation.
    pub fn upsert_verification(
        &self,
        wallet: &str,
        vtype: &VerificationType,
        points: u32,
    ) -> Result<HostFunction, PassportError> {
        self.call(
            "upsert_verification",
            vec![address_val(wallet)?, vtype.to_scval()?, ScVal::U32(points)],
        )
    }

    /// Read-only `get_score(wallet)` invocation.
    pub fn get_score(&self, wallet: &str) -> Result<HostFunction, PassportError> {
        self.call("get_score", vec![address_val(wallet)?])
    }

    /// Read-only `get_verifications(wallet)` invocation.
    pub fn get_verifications(&self, wallet: &str) -> Result<HostFunction, PassportError> {
        self.call("get_verifications", vec![address_val(wallet)?])
    }

    fn call(&self, function: &str, args: Vec<ScVal>) -> Result<HostFunction, PassportError> {
        Ok(HostFunction::InvokeContract(InvokeContractArgs {
            contract_address: ScAddress::Contract(Hash(self.contract)),
            function_name: symbol(function)?,
            args: args
                .try_into()
                .map_err(|_| serialization("contract arguments exceed wire limits"))?,
        }))
    }
}

/// Decode a `get_score` simulation result.
pub fn decode_score(value: &ScVal) -> Result<u32, PassportError> {
    match value {
        ScVal::U32(score) => Ok(*score),
        other => Err(PassportError::Simulation(format!(
            "get_score returned an unexpected value: {}",
            other.name()
        ))),
    }
}

/// Decode a `get_verifications` simulation result.
///
/// A missing or void value means the wallet has no records and yields an
/// empty list, not an error. Individual entries the contract schema has
/// outgrown are skipped with a warning rather than failing the whole query.
pub fn decode_verifications(value: &ScVal) -> Result<Vec<VerificationRecord>, PassportError> {
    let entries = match value {
        ScVal::Void => return Ok(Vec::new()),
        ScVal::Vec(None) => return Ok(Vec::new()),
        ScVal::Vec(Some(vec)) => vec.0.as_slice(),
        other => {
            return Err(PassportError::Simulation(format!(
                "get_verifications returned an unexpected value: {}",
                other.name()
            )))
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        match decode_record(entry) {
            Some(record) => records.push(record),
            None => {
                tracing::warn!("skipping undecodable verification record: {}", entry.name());
            }
        }
    }
    Ok(records)
}

fn decode_record(entry: &ScVal) -> Option<VerificationRecord> {
    let ScVal::Map(Some(map)) = entry else {
        return None;
    };

    let mut issuer = None;
    let mut points = None;
    let mut timestamp = None;
    let mut vtype = None;

    for ScMapEntry { key, val } in map.0.as_slice() {
        let ScVal::Symbol(sym) = key else { continue };
        match sym.0.to_utf8_string_lossy().as_str() {
            "issuer" => {
                if let ScVal::Address(addr) = val {
                    issuer = Some(address_strkey(addr));
                }
            }
            "points" => {
                if let ScVal::U32(p) = val {
                    points = Some(*p);
                }
            }
            "timestamp" => {
                if let ScVal::U64(t) = val {
                    timestamp = Some(*t);
                }
            }
            "verification_type" => vtype = Some(VerificationType::from_scval(val)),
            _ => {}
        }
    }

    Some(VerificationRecord {
        issuer: issuer?,
        points: points?,
        timestamp: timestamp?,
        vtype: vtype?,
    })
}

/// Render an `ScAddress` in StrKey form.
pub fn address_strkey(address: &ScAddress) -> String {
    match address {
        ScAddress::Account(AccountId(PublicKey::PublicKeyTypeEd25519(key))) => {
            strkey::encode_account_id(&key.0)
        }
        ScAddress::Contract(hash) => strkey::encode_contract_id(&hash.0),
    }
}

fn address_val(wallet: &str) -> Result<ScVal, PassportError> {
    let key = strkey::decode_account_id(wallet)?;
    Ok(ScVal::Address(ScAddress::Account(AccountId(
        PublicKey::PublicKeyTypeEd25519(Uint256(key)),
    ))))
}

fn string_val(value: &str) -> Result<ScVal, PassportError> {
    Ok(ScVal::String(ScString(value.try_into().map_err(|_| {
        serialization("string argument exceeds wire limits")
    })?)))
}

fn symbol(name: &str) -> Result<ScSymbol, PassportError> {
    Ok(ScSymbol(name.try_into().map_err(|_| {
        serialization("function name is not a valid symbol")
    })?))
}

fn serialization(message: &str) -> PassportError {
    PassportError::Serialization(message.to_string())
}
