//! Snapshot blob container: a self-describing byte encoding of every store row.
//!
//! Layout, integers big-endian:
//!
//! | offset | size | field                          |
//! |--------|------|--------------------------------|
//! | 0      | 8    | magic `HOARDSNP`               |
//! | 8      | 2    | format version                 |
//! | 10     | 8    | payload length                 |
//! | 18     | 32   | SHA-256 of the payload         |
//! | 50     | n    | payload: JSON document of rows |

use crate::domain::Timestamp;
use crate::store::{IngestedFile, StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Signature at the start of every snapshot.
pub const MAGIC: &[u8; 8] = b"HOARDSNP";

/// Container format version written by this build.
pub const FORMAT_VERSION: u16 = 1;

const DIGEST_LEN: usize = 32;
const HEADER_LEN: usize = MAGIC.len() + 2 + 8 + DIGEST_LEN;

// ===========================================
// Payload Rows
// ===========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct NoteRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TagRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct NoteTagRow {
    pub note_id: i64,
    pub tag_id: i64,
    pub position: i64,
}

/// Every row of every table, plus the schema version they were written under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SnapshotPayload {
    pub schema_version: u32,
    pub notes: Vec<NoteRow>,
    pub tags: Vec<TagRow>,
    pub note_tags: Vec<NoteTagRow>,
    pub ingested_files: Vec<IngestedFile>,
}

// ===========================================
// Encoding
// ===========================================

pub(crate) fn encode(payload: &SnapshotPayload) -> StoreResult<Vec<u8>> {
    let body = serde_json::to_vec(payload)?;
    let digest = Sha256::digest(&body);

    let mut blob = Vec::with_capacity(HEADER_LEN + body.len());
    blob.extend_from_slice(MAGIC);
    blob.extend_from_slice(&FORMAT_VERSION.to_be_bytes());
    blob.extend_from_slice(&(body.len() as u64).to_be_bytes());
    blob.extend_from_slice(&digest);
    blob.extend_from_slice(&body);
    Ok(blob)
}

/// Decodes and verifies a blob. Every failure is `StoreError::CorruptStore`.
pub(crate) fn decode(blob: &[u8]) -> StoreResult<SnapshotPayload> {
    if blob.len() < HEADER_LEN {
        return Err(StoreError::corrupt(format!(
            "truncated header: {} bytes, expected at least {HEADER_LEN}",
            blob.len()
        )));
    }

    let (magic, rest) = blob.split_at(MAGIC.len());
    if magic != MAGIC {
        return Err(StoreError::corrupt("missing snapshot signature"));
    }

    let (version, rest) = rest.split_at(2);
    let version = u16::from_be_bytes([version[0], version[1]]);
    if version != FORMAT_VERSION {
        return Err(StoreError::corrupt(format!(
            "unsupported snapshot format version {version}"
        )));
    }

    let (length, rest) = rest.split_at(8);
    let mut length_bytes = [0u8; 8];
    length_bytes.copy_from_slice(length);
    let declared = u64::from_be_bytes(length_bytes);

    let (digest, body) = rest.split_at(DIGEST_LEN);
    if body.len() as u64 != declared {
        return Err(StoreError::corrupt(format!(
            "payload length mismatch: header declares {declared} bytes, found {}",
            body.len()
        )));
    }

    if Sha256::digest(body).as_slice() != digest {
        return Err(StoreError::corrupt("payload checksum mismatch"));
    }

    let payload: SnapshotPayload = serde_json::from_slice(body)
        .map_err(|e| StoreError::corrupt(format!("undecodable payload: {e}")))?;

    if payload.schema_version != crate::store::SCHEMA_VERSION {
        return Err(StoreError::corrupt(format!(
            "snapshot schema version {} does not match store schema version {}",
            payload.schema_version,
            crate::store::SCHEMA_VERSION
        )));
    }

    Ok(payload)
}
