// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Stellar Passport

//! Verification type codec.
//!
//! Converts between the closed [`VerificationType`] union, the contract's
//! `ScVal` wire representation (a vec of a tag symbol plus an optional
//! payload, matching the Soroban SDK enum encoding), and the flat labels the
//! HTTP API uses (`over18`, `twitter`, ...).
//!
//! Decoding is total: wire values with tags this service does not recognize
//! collapse to the [`UNKNOWN_LABEL`] sentinel instead of failing, so the
//! codec keeps working across forward-compatible additions to the contract's
//! schema.

use serde::{Deserialize, Serialize};
use stellar_xdr::curr::{ScString, ScSymbol, ScVal, ScVec};
use utoipa::ToSchema;

use super::errors::PassportError;

/// Display label used for wire tags this service does not recognize.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Prefix of the `Custom` labels that encode approval status records.
///
/// Status (approved/pending/rejected) is a convention layered on top of the
/// contract's generic verification mechanism, not a first-class contract
/// feature: a status change is written as a `Custom("status_<value>")`
/// verification and the latest timestamp wins on read.
pub const STATUS_LABEL_PREFIX: &str = "status_";

/// Classification of a verification record.
///
/// Exactly one tag is active; `Custom` carries a single non-empty label used
/// for ad-hoc values such as `status_approved`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", content = "label", rename_all = "snake_case")]
pub enum VerificationType {
    Over18,
    Twitter,
    GitHub,
    BrightId,
    WorldId,
    Custom(String),
}

impl VerificationType {
    /// Parse a flat API label. Labels outside the closed set become `Custom`.
    pub fn from_label(label: &str) -> Self {
        match label {
            "over18" => Self::Over18,
            "twitter" => Self::Twitter,
            "github" => Self::GitHub,
            "brightid" => Self::BrightId,
            "worldid" => Self::WorldId,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Backward-compatible flat representation of this type.
    pub fn label(&self) -> &str {
        match self {
            Self::Over18 => "over18",
            Self::Twitter => "twitter",
            Self::GitHub => "github",
            Self::BrightId => "brightid",
            Self::WorldId => "worldid",
            Self::Custom(label) => label,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Self::Over18 => "Over18",
            Self::Twitter => "Twitter",
            Self::GitHub => "GitHub",
            Self::BrightId => "BrightId",
            Self::WorldId => "WorldId",
            Self::Custom(_) => "Custom",
        }
    }

    /// Encode to the contract's `ScVal` wire representation.
    pub fn to_scval(&self) -> Result<ScVal, PassportError> {
        let tag = ScVal::Symbol(symbol(self.tag())?);
        let elements = match self {
            Self::Custom(label) => {
                let payload = ScString(
                    label
                        .as_str()
                        .try_into()
                        .map_err(|_| serialization("custom label is not a valid string"))?,
                );
                vec![tag, ScVal::String(payload)]
            }
            _ => vec![tag],
        };
        let vec = elements
            .try_into()
            .map_err(|_| serialization("verification type exceeds wire limits"))?;
        Ok(ScVal::Vec(Some(ScVec(vec))))
    }

    /// Decode from the contract's `ScVal` wire representation. Total.
    pub fn from_scval(value: &ScVal) -> Self {
        let unknown = || Self::Custom(UNKNOWN_LABEL.to_string());

        let elements: &[ScVal] = match value {
            ScVal::Vec(Some(vec)) => vec.0.as_slice(),
            // Payload-free variants are sometimes flattened to a bare symbol.
            ScVal::Symbol(sym) => {
                return Self::from_tag(&sym.0.to_utf8_string_lossy(), None).unwrap_or_else(unknown)
            }
            _ => return unknown(),
        };

        let tag = match elements.first() {
            Some(ScVal::Symbol(sym)) => sym.0.to_utf8_string_lossy(),
            _ => return unknown(),
        };
        let payload = match elements.get(1) {
            Some(ScVal::String(s)) => Some(s.0.to_utf8_string_lossy()),
            Some(_) => return unknown(),
            None => None,
        };

        Self::from_tag(&tag, payload).unwrap_or_else(unknown)
    }

    fn from_tag(tag: &str, payload: Option<String>) -> Option<Self> {
        match (tag, payload) {
            ("Over18", None) => Some(Self::Over18),
            ("Twitter", None) => Some(Self::Twitter),
            ("GitHub", None) => Some(Self::GitHub),
            ("BrightId", None) => Some(Self::BrightId),
            ("WorldId", None) => Some(Self::WorldId),
            ("Custom", Some(label)) if !label.is_empty() => Some(Self::Custom(label)),
            _ => None,
        }
    }
}

fn symbol(tag: &str) -> Result<ScSymbol, PassportError> {
    Ok(ScSymbol(tag.try_into().map_err(|_| {
        serialization("verification tag is not a valid symbol")
    })?))
}

fn serialization(message: &str) -> PassportError {
    PassportError::Serialization(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<VerificationType> {
        vec![
            VerificationType::Over18,
            VerificationType::Twitter,
            VerificationType::GitHub,
            VerificationType::BrightId,
            VerificationType::WorldId,
            VerificationType::Custom("status_approved".to_string()),
        ]
    }

    #[test]
    fn wire_roundtrip_preserves_every_variant() {
        for vtype in all_variants() {
            let wire = vtype.to_scval().expect("encodes");
            assert_eq!(VerificationType::from_scval(&wire), vtype);
        }
    }

    #[test]
    fn label_roundtrip_for_closed_variants() {
        for vtype in all_variants() {
            assert_eq!(VerificationType::from_label(vtype.label()), vtype);
        }
    }

    #[test]
    fn unknown_labels_become_custom() {
        assert_eq!(
            VerificationType::from_label("status_approved"),
            VerificationType::Custom("status_approved".to_string())
        );
    }

    #[test]
    fn unrecognized_wire_tags_map_to_the_sentinel() {
        let wire = ScVal::Vec(Some(ScVec(
            vec![ScVal::Symbol(ScSymbol("Passkey".try_into().unwrap()))]
                .try_into()
                .unwrap(),
        )));
        let decoded = VerificationType::from_scval(&wire);
        assert_eq!(decoded.label(), UNKNOWN_LABEL);
    }

    #[test]
    fn structurally_foreign_wire_values_map_to_the_sentinel() {
        for wire in [ScVal::U32(7), ScVal::Void, ScVal::Vec(None)] {
            assert_eq!(VerificationType::from_scval(&wire).label(), UNKNOWN_LABEL);
        }
    }

    #[test]
    fn bare_symbol_encoding_is_accepted() {
        let wire = ScVal::Symbol(ScSymbol("Twitter".try_into().unwrap()));
        assert_eq!(VerificationType::from_scval(&wire), VerificationType::Twitter);
    }
}
