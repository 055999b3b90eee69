// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Stellar key encoding (StrKey format).
//!
//! StrKey is a base32 encoding with a version byte and a CRC16-XModem
//! checksum. Account ids carry a `G` prefix, contract ids a `C` prefix.

use super::errors::PassportError;

// Version bytes for the key types this service handles
const VERSION_ACCOUNT_ID: u8 = 6 << 3; // 'G' prefix
const VERSION_CONTRACT: u8 = 2 << 3; // 'C' prefix

/// Expected length of an encoded ed25519 account id or contract id.
pub const STRKEY_LEN: usize = 56;

/// Returns true iff `s` is a structurally valid account id (`G...`).
///
/// Rejects wrong lengths, characters outside the RFC 4648 base32 alphabet
/// (including whitespace and lowercase), and checksum mismatches. Pure,
/// no I/O.
pub fn is_valid_address(s: &str) -> bool {
    if s.len() != STRKEY_LEN {
        return false;
    }
    // base32 decoders are often lenient about case; StrKey is not.
    if !s.bytes().all(|b| b.is_ascii_uppercase() || (b'2'..=b'7').contains(&b)) {
        return false;
    }
    decode_account_id(s).is_ok()
}

/// Encode an ed25519 public key as an account id (`G...`).
pub fn encode_account_id(key: &[u8; 32]) -> String {
    encode_check(VERSION_ACCOUNT_ID, key)
}

/// Decode an account id (`G...`) to its 32-byte ed25519 public key.
pub fn decode_account_id(s: &str) -> Result<[u8; 32], PassportError> {
    decode_check(VERSION_ACCOUNT_ID, s)
}

/// Encode a 32-byte contract hash as a contract id (`C...`).
pub fn encode_contract_id(hash: &[u8; 32]) -> String {
    encode_check(VERSION_CONTRACT, hash)
}

/// Decode a contract id (`C...`) to its 32-byte hash.
pub fn decode_contract_id(s: &str) -> Result<[u8; 32], PassportError> {
    decode_check(VERSION_CONTRACT, s)
}

fn encode_check(version: u8, data: &[u8; 32]) -> String {
    let mut payload = vec![version];
    payload.extend_from_slice(data);

    let checksum = crc16_xmodem(&payload);
    payload.extend_from_slice(&checksum.to_le_bytes());

    base32::encode(base32::Alphabet::Rfc4648 { padding: false }, &payload)
}

fn decode_check(expected_version: u8, s: &str) -> Result<[u8; 32], PassportError> {
    let decoded = base32::decode(base32::Alphabet::Rfc4648 { padding: false }, s)
        .ok_or_else(|| PassportError::Serialization("invalid base32 in strkey".to_string()))?;

    // 1 version byte + 32 data bytes + 2 checksum bytes
    if decoded.len() != 35 {
        return Err(PassportError::Serialization(format!(
            "strkey payload length {} != 35",
            decoded.len()
        )));
    }

    let version = decoded[0];
    if version != expected_version {
        return Err(PassportError::Serialization(format!(
            "strkey version byte {version:#04x} != {expected_version:#04x}"
        )));
    }

    let checksum = u16::from_le_bytes([decoded[33], decoded[34]]);
    let computed = crc16_xmodem(&decoded[..33]);
    if checksum != computed {
        return Err(PassportError::Serialization(
            "strkey checksum mismatch".to_string(),
        ));
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(&decoded[1..33]);
    Ok(key)
}

/// CRC16-XModem checksum.
fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for byte in data {
        crc ^= (*byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ 0x1021;
            } else {
                crc <<= 1;
            }
        }
    }
    crc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_roundtrip() {
        let key = [42u8; 32];
        let encoded = encode_account_id(&key);
        assert!(encoded.starts_with('G'));
        assert_eq!(encoded.len(), STRKEY_LEN);
        let decoded = decode_account_id(&encoded).unwrap();
        assert_eq!(key, decoded);
    }

    #[test]
    fn contract_id_roundtrip() {
        let hash = [7u8; 32];
        let encoded = encode_contract_id(&hash);
        assert!(encoded.starts_with('C'));
        let decoded = decode_contract_id(&encoded).unwrap();
        assert_eq!(hash, decoded);
    }

    #[test]
    fn valid_address_accepts_well_formed_keys() {
        for key in [[0u8; 32], [42u8; 32], [255u8; 32]] {
            assert!(is_valid_address(&encode_account_id(&key)));
        }
    }

    #[test]
    fn valid_address_rejects_wrong_length() {
        let encoded = encode_account_id(&[1u8; 32]);
        assert!(!is_valid_address(&encoded[..55]));
        assert!(!is_valid_address(&format!("{encoded}A")));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn valid_address_rejects_invalid_characters() {
        let encoded = encode_account_id(&[1u8; 32]);
        assert!(!is_valid_address(&encoded.to_lowercase()));
        assert!(!is_valid_address(&format!(" {}", &encoded[1..])));
        assert!(!is_valid_address(&format!("{}\n", &encoded[..55])));
        // '1' is outside the RFC 4648 base32 alphabet
        assert!(!is_valid_address(&format!("{}1", &encoded[..55])));
    }

    #[test]
    fn valid_address_rejects_corrupted_checksum() {
        let encoded = encode_account_id(&[9u8; 32]);
        let mut chars: Vec<char> = encoded.chars().collect();
        let last = chars.len() - 1;
        chars[last] = if chars[last] == 'A' { 'B' } else { 'A' };
        let corrupted: String = chars.into_iter().collect();
        assert!(!is_valid_address(&corrupted));
    }

    #[test]
    fn valid_address_rejects_contract_ids() {
        let contract = encode_contract_id(&[3u8; 32]);
        assert_eq!(contract.len(), STRKEY_LEN);
        assert!(!is_valid_address(&contract));
    }
}
