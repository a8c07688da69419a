//! Content fingerprints for deduplicating imports.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use thiserror::Error;

/// Number of hex characters in a rendered fingerprint.
pub const FINGERPRINT_HEX_LEN: usize = 64;

/// SHA-256 fingerprint of the raw bytes of an import.
///
/// Computed over the exact byte sequence handed to the importer, never over
/// parsed content, so two byte-identical files always fingerprint the same and
/// a single differing byte yields a different fingerprint. Stored as a
/// 64-character lowercase hex string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    hex: String,
}

/// Errors when parsing a fingerprint from a hex string.
#[derive(Debug, Error)]
pub enum FingerprintError {
    #[error("invalid fingerprint: expected 64 hex characters, got {0} characters")]
    InvalidLength(usize),

    #[error("invalid hex character at position {position}: '{character}'")]
    InvalidCharacter { position: usize, character: char },
}

impl Fingerprint {
    /// Computes the fingerprint of the given bytes.
    pub fn compute(bytes: &[u8]) -> Self {
        let digest = Sha256::digest(bytes);
        Self {
            hex: format!("{:x}", digest),
        }
    }

    /// Parses a fingerprint from its hex form, normalizing to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `FingerprintError::InvalidLength` if the string is not 64 characters.
    /// Returns `FingerprintError::InvalidCharacter` if the string contains non-hex characters.
    pub fn from_hex(hex: &str) -> Result<Self, FingerprintError> {
        let len = hex.chars().count();
        if len != FINGERPRINT_HEX_LEN {
            return Err(FingerprintError::InvalidLength(len));
        }

        if let Some((position, character)) =
            hex.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit())
        {
            return Err(FingerprintError::InvalidCharacter {
                position,
                character,
            });
        }

        Ok(Self {
            hex: hex.to_ascii_lowercase(),
        })
    }

    /// Returns the fingerprint as a 64-character lowercase hex string.
    pub fn as_str(&self) -> &str {
        &self.hex
    }

    /// Returns the first 12 hex characters, for display.
    pub fn short(&self) -> &str {
        &self.hex[..12]
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

impl Serialize for Fingerprint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.hex)
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Fingerprint::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
