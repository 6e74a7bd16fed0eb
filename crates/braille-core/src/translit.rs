//! Character-by-character transliteration between Spanish text and Braille.
//!
//! Characters missing from the alphabet (digits, punctuation, accented
//! vowels, line breaks) are copied to the output unchanged.

use tracing::{debug, debug_span};

use crate::alphabet::Alphabet;
use crate::direction::Direction;

/// Transliterate `text` with the global alphabet.
pub fn translate(text: &str, direction: Direction) -> String {
    translate_with(Alphabet::global(), text, direction)
}

pub fn translate_with(alphabet: &Alphabet, text: &str, direction: Direction) -> String {
    let _span = debug_span!("translate", direction = direction.as_str()).entered();
    let mut out = String::with_capacity(text.len() * 3);
    let mut unmapped = 0usize;

    for c in text.chars() {
        let mapped = match direction {
            Direction::SpanishToBraille => lowercase_single(c).and_then(|l| alphabet.cell(l)),
            Direction::BrailleToSpanish => alphabet.letter(c),
        };
        match mapped {
            Some(m) => out.push(m),
            None => {
                unmapped += 1;
                out.push(c);
            }
        }
    }

    debug!(chars = text.chars().count(), unmapped);
    out
}

/// Lower-case form of `c` when it is a single character. Characters whose
/// lower-case form expands (e.g. 'İ') have no table entry and pass through.
fn lowercase_single(c: char) -> Option<char> {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => Some(l),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Direction::{BrailleToSpanish, SpanishToBraille};

    #[test]
    fn casa_to_braille() {
        assert_eq!(translate("casa", SpanishToBraille), "⠉⠁⠎⠁");
    }

    #[test]
    fn casa_from_braille() {
        assert_eq!(translate("⠉⠁⠎⠁", BrailleToSpanish), "casa");
    }

    #[test]
    fn hola_mundo_folds_case_and_maps_space() {
        assert_eq!(
            translate("Hola Mundo", SpanishToBraille),
            "⠓⠕⠇⠁⠀⠍⠥⠝⠙⠕"
        );
    }

    #[test]
    fn punctuation_passes_through() {
        assert_eq!(translate("hi!", SpanishToBraille), "⠓⠊!");
    }

    #[test]
    fn enye_maps_and_accents_pass_through() {
        assert_eq!(translate("ñandú", SpanishToBraille), "⠻⠁⠝⠙ú");
        assert_eq!(translate("Ñ", SpanishToBraille), "⠻");
        assert_eq!(translate("⠻⠁⠝⠙ú", BrailleToSpanish), "ñandú");
    }

    #[test]
    fn round_trip_every_letter() {
        for (letter, _) in Alphabet::global().pairs() {
            let upper: String = letter.to_uppercase().collect();
            for input in [letter.to_string(), upper] {
                let braille = translate(&input, SpanishToBraille);
                assert_eq!(
                    translate(&braille, BrailleToSpanish),
                    input.to_lowercase(),
                    "round trip of {input:?}"
                );
            }
        }
    }

    #[test]
    fn unmapped_passthrough_both_directions() {
        for c in ["3", "!", "é", "\n", "¿"] {
            assert_eq!(translate(c, SpanishToBraille), c);
            assert_eq!(translate(c, BrailleToSpanish), c);
        }
    }

    #[test]
    fn case_insensitive_forward() {
        assert_eq!(
            translate("A", SpanishToBraille),
            translate("a", SpanishToBraille)
        );
    }

    #[test]
    fn braille_direction_does_not_fold_case() {
        // Latin letters are not cells, so they pass through as typed.
        assert_eq!(translate("ABC", BrailleToSpanish), "ABC");
    }

    #[test]
    fn unassigned_cells_pass_through() {
        assert_eq!(translate("⠿⠁", BrailleToSpanish), "⠿a");
    }

    #[test]
    fn expanding_lowercase_passes_through() {
        assert_eq!(translate("İ", SpanishToBraille), "İ");
    }

    #[test]
    fn empty_input() {
        assert_eq!(translate("", SpanishToBraille), "");
        assert_eq!(translate("", BrailleToSpanish), "");
    }

    #[test]
    fn explicit_table() {
        let a = Alphabet::from_toml("[mappings]\na = \"⠁\"\n").unwrap();
        assert_eq!(translate_with(&a, "ab", SpanishToBraille), "⠁b");
    }
}
