//! Named-slot key-value storage backing the history ledger.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Durable storage addressed by slot name. Each slot holds one opaque blob.
pub trait SlotStore {
    /// Returns `Ok(None)` when the slot has never been written or was removed.
    fn read(&self, slot: &str) -> io::Result<Option<Vec<u8>>>;
    fn write(&self, slot: &str, bytes: &[u8]) -> io::Result<()>;
    /// Removing an absent slot is not an error.
    fn remove(&self, slot: &str) -> io::Result<()>;
}

/// One file per slot inside a directory.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.brlh"))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, slot: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.slot_path(slot)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Atomic write: write to .tmp then rename.
    fn write(&self, slot: &str, bytes: &[u8]) -> io::Result<()> {
        let path = self.slot_path(slot);
        let tmp = path.with_extension("tmp");
        fs::create_dir_all(&self.dir)?;
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, slot: &str) -> io::Result<()> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-process store. Clones share the same slots, so a second ledger opened
/// on a clone sees what the first one persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    slots: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> io::Error {
    io::Error::other("slot store lock poisoned")
}

impl SlotStore for MemorySlotStore {
    fn read(&self, slot: &str) -> io::Result<Option<Vec<u8>>> {
        let slots = self.slots.read().map_err(poisoned)?;
        Ok(slots.get(slot).cloned())
    }

    fn write(&self, slot: &str, bytes: &[u8]) -> io::Result<()> {
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.insert(slot.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&self, slot: &str) -> io::Result<()> {
        let mut slots = self.slots.write().map_err(poisoned)?;
        slots.remove(slot);
        Ok(())
    }
}
