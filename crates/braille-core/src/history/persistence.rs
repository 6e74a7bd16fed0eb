use serde::{Deserialize, Serialize};

use super::{HistoryError, TranslationRecord};

const MAGIC: &[u8; 4] = b"BRLH";
const VERSION: u8 = 1;
const HEADER_LEN: usize = 9;

/// Flat serialization format for bincode.
#[derive(Serialize, Deserialize)]
struct LedgerData {
    records: Vec<TranslationRecord>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("too short")]
    TooShort,
    #[error("bad magic")]
    BadMagic,
    #[error("unsupported version {0}")]
    UnsupportedVersion(u8),
    #[error("checksum mismatch")]
    Checksum,
    #[error("corrupt body: {0}")]
    Body(String),
}

/// Serialize to bytes: magic, version, CRC-32 of the body, bincode body.
pub fn to_bytes(records: &[TranslationRecord]) -> Result<Vec<u8>, HistoryError> {
    let data = LedgerData {
        records: records.to_vec(),
    };
    let body = bincode::serialize(&data).map_err(|e| HistoryError::Encode(e.to_string()))?;
    let crc = crc32fast::hash(&body);

    let mut buf = Vec::with_capacity(HEADER_LEN + body.len());
    buf.extend_from_slice(MAGIC);
    buf.push(VERSION);
    buf.extend_from_slice(&crc.to_le_bytes());
    buf.extend_from_slice(&body);
    Ok(buf)
}

pub fn from_bytes(bytes: &[u8]) -> Result<Vec<TranslationRecord>, DecodeError> {
    if bytes.len() < HEADER_LEN {
        return Err(DecodeError::TooShort);
    }
    if &bytes[0..4] != MAGIC {
        return Err(DecodeError::BadMagic);
    }
    if bytes[4] != VERSION {
        return Err(DecodeError::UnsupportedVersion(bytes[4]));
    }
    let mut crc = [0u8; 4];
    crc.copy_from_slice(&bytes[5..HEADER_LEN]);
    let body = &bytes[HEADER_LEN..];
    if crc32fast::hash(body) != u32::from_le_bytes(crc) {
        return Err(DecodeError::Checksum);
    }
    let data: LedgerData =
        bincode::deserialize(body).map_err(|e| DecodeError::Body(e.to_string()))?;
    Ok(data.records)
}
