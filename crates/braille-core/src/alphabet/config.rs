use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct AlphabetConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AlphabetError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("key must be a single character: {0:?}")]
    InvalidKey(String),
    #[error("key must be lower-case: {0:?}")]
    UppercaseKey(char),
    #[error("value for {key:?} must be a single character: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("cell {cell:?} is assigned to both {first:?} and {second:?}")]
    DuplicateCell {
        cell: char,
        first: char,
        second: char,
    },
    #[error("alphabet already initialized")]
    AlreadyInitialized,
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Parse TOML text into a sorted `BTreeMap<letter, cell>`.
///
/// Rejects tables whose cells are not unique, since the reverse lookup is
/// derived from this map and must be an exact inverse.
pub fn parse_alphabet_toml(toml_str: &str) -> Result<BTreeMap<char, char>, AlphabetError> {
    let config: AlphabetConfig =
        toml::from_str(toml_str).map_err(|e| AlphabetError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(AlphabetError::Empty);
    }

    let mut map = BTreeMap::new();
    let mut seen: BTreeMap<char, char> = BTreeMap::new();
    for (key, value) in &config.mappings {
        let letter = single_char(key).ok_or_else(|| AlphabetError::InvalidKey(key.clone()))?;
        // Spanish input is lower-cased before lookup.
        if !letter.to_lowercase().eq(std::iter::once(letter)) {
            return Err(AlphabetError::UppercaseKey(letter));
        }
        let cell = single_char(value).ok_or_else(|| AlphabetError::InvalidValue {
            key: key.clone(),
            value: value.clone(),
        })?;
        if let Some(&first) = seen.get(&cell) {
            return Err(AlphabetError::DuplicateCell {
                cell,
                first,
                second: letter,
            });
        }
        seen.insert(cell, letter);
        map.insert(letter, cell);
    }

    Ok(map)
}
