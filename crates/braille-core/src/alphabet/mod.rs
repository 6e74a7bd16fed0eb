//! Spanish letter ↔ Braille cell table.
//!
//! The letter → cell direction is loaded from TOML and is the only
//! hand-authored side; the cell → letter direction is derived from it once,
//! when the table is built.

mod config;
mod table;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

pub use config::{parse_alphabet_toml, AlphabetError};
use table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default alphabet TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}

#[derive(Debug, Clone)]
pub struct Alphabet {
    letter_to_cell: HashMap<char, char>,
    cell_to_letter: HashMap<char, char>,
}

impl Alphabet {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), AlphabetError> {
        // Validate eagerly
        parse_alphabet_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| AlphabetError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Alphabet {
        static INSTANCE: OnceLock<Alphabet> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            let map = parse_alphabet_toml(toml_str).expect("alphabet TOML must be valid");
            Alphabet::from_map(&map)
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, AlphabetError> {
        parse_alphabet_toml(toml_str).map(|map| Self::from_map(&map))
    }

    /// Build the table from a letter → cell map, deriving the inverse.
    /// `parse_alphabet_toml` guarantees the cells are unique.
    fn from_map(map: &BTreeMap<char, char>) -> Self {
        let letter_to_cell: HashMap<char, char> = map.iter().map(|(&l, &c)| (l, c)).collect();
        let cell_to_letter = letter_to_cell.iter().map(|(&l, &c)| (c, l)).collect();
        Self {
            letter_to_cell,
            cell_to_letter,
        }
    }

    pub fn cell(&self, letter: char) -> Option<char> {
        self.letter_to_cell.get(&letter).copied()
    }

    pub fn letter(&self, cell: char) -> Option<char> {
        self.cell_to_letter.get(&cell).copied()
    }

    pub fn len(&self) -> usize {
        self.letter_to_cell.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letter_to_cell.is_empty()
    }

    /// Check that both directions are exact inverses of each other.
    pub fn verify_inverse(&self) -> bool {
        self.letter_to_cell.len() == self.cell_to_letter.len()
            && self
                .letter_to_cell
                .iter()
                .all(|(l, c)| self.cell_to_letter.get(c) == Some(l))
    }

    /// Every non-whitespace letter, in Spanish alphabetical order (ñ after n).
    pub fn letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .letter_to_cell
            .keys()
            .copied()
            .filter(|c| !c.is_whitespace())
            .collect();
        letters.sort_by_key(|&c| spanish_sort_key(c));
        letters
    }

    /// Cell assigned to the space character, if the table has one.
    pub fn space_cell(&self) -> Option<char> {
        self.cell(' ')
    }

    /// All (letter, cell) pairs, in Spanish alphabetical order.
    pub fn pairs(&self) -> Vec<(char, char)> {
        let mut pairs: Vec<(char, char)> =
            self.letter_to_cell.iter().map(|(&l, &c)| (l, c)).collect();
        pairs.sort_by_key(|&(l, _)| spanish_sort_key(l));
        pairs
    }
}

fn spanish_sort_key(c: char) -> (char, u8) {
    match c {
        'ñ' => ('n', 1),
        _ => (c, 0),
    }
}
