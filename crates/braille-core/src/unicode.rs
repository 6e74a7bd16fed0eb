//! Character-level classification for the Braille Patterns block.

/// Check the Braille Patterns block (U+2800..U+28FF), including the blank
/// cell U+2800.
pub fn is_braille_cell(c: char) -> bool {
    ('\u{2800}'..='\u{28FF}').contains(&c)
}

pub fn contains_braille(s: &str) -> bool {
    s.chars().any(is_braille_cell)
}

/// Raised dots of a cell as a bit set (bit 0 = dot 1 ... bit 7 = dot 8).
pub fn braille_dots(c: char) -> Option<u8> {
    if is_braille_cell(c) {
        u8::try_from(c as u32 - 0x2800).ok()
    } else {
        None
    }
}

/// Dot numbers of a cell, e.g. `⠉` → `"14"`. The blank cell yields `"-"`.
pub fn dot_numbers(c: char) -> Option<String> {
    let bits = braille_dots(c)?;
    if bits == 0 {
        return Some("-".to_string());
    }
    Some(
        (0..8)
            .filter(|i| bits & (1 << i) != 0)
            .map(|i| char::from(b'1' + i))
            .collect(),
    )
}
