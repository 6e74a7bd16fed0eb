//! On-screen keypad layout. Pressing a key only appends its symbol to the
//! input; there is no conversion logic here.

use crate::alphabet::Alphabet;
use crate::direction::Direction;

/// Keys for typing in the source script of `direction`, in Spanish
/// alphabetical order, with the space (or blank cell) last.
pub fn keypad_keys(alphabet: &Alphabet, direction: Direction) -> Vec<char> {
    let letters = alphabet.letters();
    let mut keys: Vec<char> = match direction {
        Direction::SpanishToBraille => letters,
        Direction::BrailleToSpanish => letters
            .into_iter()
            .filter_map(|l| alphabet.cell(l))
            .collect(),
    };
    if let Some(blank) = alphabet.space_cell() {
        keys.push(match direction {
            Direction::SpanishToBraille => ' ',
            Direction::BrailleToSpanish => blank,
        });
    }
    keys
}

/// Split keys into rows of at most `columns` keys.
pub fn keypad_rows<T: Clone>(keys: &[T], columns: usize) -> Vec<Vec<T>> {
    keys.chunks(columns.max(1)).map(<[T]>::to_vec).collect()
}
