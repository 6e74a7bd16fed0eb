//! Spanish ↔ Braille transliteration: the letter/cell table, the
//! character-level translator, and the bounded translation history.

pub mod alphabet;
pub mod direction;
pub mod history;
pub mod keypad;
pub mod print;
pub mod settings;
pub mod translit;
pub mod unicode;

pub use alphabet::Alphabet;
pub use direction::{toggle_direction, Direction, DirectionToggle};
pub use history::{HistoryError, HistoryLedger, TranslationRecord};
pub use translit::{translate, translate_with};
