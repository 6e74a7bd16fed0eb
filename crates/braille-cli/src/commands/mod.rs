use std::path::{Path, PathBuf};

use tracing::debug;

use braille_core::history::{FileSlotStore, HistoryLedger};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod history_ops;
pub mod image_ops;
pub mod shell_ops;
pub mod translate_ops;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "BRAILLE_EASE_HOME";

pub fn default_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
    PathBuf::from(home).join(".local/share/braille-ease")
}

/// Open the persisted history stored under `data_dir`.
pub fn open_ledger(data_dir: &Path) -> HistoryLedger {
    debug!(dir = %data_dir.display(), "opening history");
    HistoryLedger::load(FileSlotStore::new(data_dir))
}
