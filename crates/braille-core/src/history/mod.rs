//! Bounded translation history, newest first, persisted after every change.
//!
//! A mutation builds the next ledger, writes it to the slot store, and only
//! then replaces the in-memory copy. A failed write leaves both untouched.

mod persistence;
mod store;


use std::fmt;
use std::io;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, debug_span, info, warn};

use crate::direction::Direction;
use crate::settings::settings;

pub use persistence::{from_bytes, to_bytes, DecodeError};
pub use store::{FileSlotStore, MemorySlotStore, SlotStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    pub input_text: String,
    pub output_text: String,
    pub timestamp: String,
    pub direction: Direction,
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("storage error: {0}")]
    Io(#[from] io::Error),
    #[error("encode error: {0}")]
    Encode(String),
}

/// Local wall-clock time as `DD/MM/YYYY HH:MM:SS`, UTC when the local
/// offset cannot be determined.
pub fn now_timestamp() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format!(
        "{:02}/{:02}/{:04} {:02}:{:02}:{:02}",
        now.day(),
        now.month() as u8,
        now.year(),
        now.hour(),
        now.minute(),
        now.second()
    )
}

/// Read a persisted ledger. Absent or malformed data yields an empty list.
pub fn load_records(store: &dyn SlotStore, slot: &str, capacity: usize) -> Vec<TranslationRecord> {
    let bytes = match store.read(slot) {
        Ok(Some(bytes)) => bytes,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!(slot, "could not read history, starting empty: {e}");
            return Vec::new();
        }
    };
    match from_bytes(&bytes) {
        Ok(mut records) => {
            records.truncate(capacity);
            records
        }
        Err(e) => {
            warn!(slot, len = bytes.len(), "malformed history, starting empty: {e}");
            Vec::new()
        }
    }
}

pub struct HistoryLedger {
    records: Vec<TranslationRecord>,
    capacity: usize,
    slot: String,
    store: Box<dyn SlotStore>,
}

impl fmt::Debug for HistoryLedger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryLedger")
            .field("slot", &self.slot)
            .field("capacity", &self.capacity)
            .field("records", &self.records)
            .finish()
    }
}

impl HistoryLedger {
    /// Load the ledger using the slot name and capacity from settings.
    pub fn load(store: impl SlotStore + 'static) -> Self {
        let s = settings();
        Self::load_with(Box::new(store), &s.history.slot, s.history.capacity)
    }

    pub fn load_with(store: Box<dyn SlotStore>, slot: &str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let records = load_records(store.as_ref(), slot, capacity);
        debug!(slot, count = records.len(), "history loaded");
        Self {
            records,
            capacity,
            slot: slot.to_string(),
            store,
        }
    }

    /// Newest first.
    pub fn records(&self) -> &[TranslationRecord] {
        &self.records
    }

    pub fn latest(&self) -> Option<&TranslationRecord> {
        self.records.first()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Record a translation stamped with the current time.
    pub fn record(
        &mut self,
        input_text: &str,
        output_text: &str,
        direction: Direction,
    ) -> Result<TranslationRecord, HistoryError> {
        self.record_at(input_text, output_text, direction, now_timestamp())
    }

    /// Record a translation with an explicit timestamp.
    pub fn record_at(
        &mut self,
        input_text: &str,
        output_text: &str,
        direction: Direction,
        timestamp: String,
    ) -> Result<TranslationRecord, HistoryError> {
        let _span = debug_span!("history_record", slot = self.slot.as_str()).entered();
        let record = TranslationRecord {
            input_text: input_text.to_string(),
            output_text: output_text.to_string(),
            timestamp,
            direction,
        };

        let mut next = Vec::with_capacity(self.capacity);
        next.push(record.clone());
        next.extend(self.records.iter().take(self.capacity - 1).cloned());

        self.store.write(&self.slot, &to_bytes(&next)?)?;
        let evicted = (self.records.len() + 1).saturating_sub(next.len());
        self.records = next;
        debug!(count = self.records.len(), evicted);
        Ok(record)
    }

    /// Empty the ledger and remove the persisted copy.
    pub fn clear(&mut self) -> Result<(), HistoryError> {
        self.store.remove(&self.slot)?;
        let dropped = self.records.len();
        self.records.clear();
        info!(slot = self.slot.as_str(), dropped, "history cleared");
        Ok(())
    }
}
