use std::path::Path;

use unicode_width::UnicodeWidthStr;

use braille_core::TranslationRecord;

use super::open_ledger;

/// One line per record, newest first, with the input column aligned.
pub fn format_history(records: &[TranslationRecord]) -> String {
    let width = records
        .iter()
        .map(|r| r.input_text.width())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for (i, r) in records.iter().enumerate() {
        let pad = " ".repeat(width - r.input_text.width());
        out.push_str(&format!(
            "{:>2}. [{}] {}  {}{pad}  →  {}\n",
            i + 1,
            r.timestamp,
            r.direction.as_str(),
            r.input_text,
            r.output_text
        ));
    }
    out
}

pub fn history_list(data_dir: &Path, json: bool) {
    let ledger = open_ledger(data_dir);
    if json {
        let body = die!(
            serde_json::to_string_pretty(ledger.records()),
            "Error encoding history: {}"
        );
        println!("{body}");
    } else if ledger.is_empty() {
        println!("(empty)");
    } else {
        print!("{}", format_history(ledger.records()));
        println!("---");
        println!("{} of {} entries", ledger.len(), ledger.capacity());
    }
}

pub fn history_clear(data_dir: &Path) {
    let mut ledger = open_ledger(data_dir);
    let count = ledger.len();
    die!(ledger.clear(), "Error clearing history: {}");
    println!("Cleared {count} entries");
}
