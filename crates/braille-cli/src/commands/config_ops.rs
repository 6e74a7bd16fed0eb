use std::fs;

use braille_core::alphabet::{self, Alphabet};
use braille_core::settings;

pub fn alphabet_export() {
    print!("{}", alphabet::default_toml());
}

pub fn alphabet_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let table = die!(Alphabet::from_toml(&content), "Error: {}");
    println!("OK: {} mappings", table.len());
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: history.capacity={}, history.slot={}, keypad.columns={}",
        s.history.capacity, s.history.slot, s.keypad.columns
    );
}

/// Install custom settings and alphabet before anything reads them.
pub fn load_custom(settings_file: Option<&str>, alphabet_file: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = alphabet_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(Alphabet::init_custom(content), "Error in {file}: {}");
    }
}
