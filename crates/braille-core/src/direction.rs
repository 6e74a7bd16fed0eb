use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::unicode::contains_braille;

/// Which way text is being transliterated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    SpanishToBraille,
    BrailleToSpanish,
}

/// Result of flipping the direction. The caller must discard any in-progress
/// input and output; both are handed back already emptied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionToggle {
    pub direction: Direction,
    pub cleared_input: String,
    pub cleared_output: String,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Self::SpanishToBraille => Self::BrailleToSpanish,
            Self::BrailleToSpanish => Self::SpanishToBraille,
        }
    }

    /// Guess the direction from the text itself: anything containing a
    /// Braille cell is read as Braille.
    pub fn detect(text: &str) -> Self {
        if contains_braille(text) {
            Self::BrailleToSpanish
        } else {
            Self::SpanishToBraille
        }
    }

    /// Short form used on the command line and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SpanishToBraille => "s2b",
            Self::BrailleToSpanish => "b2s",
        }
    }

    pub fn source_label(self) -> &'static str {
        match self {
            Self::SpanishToBraille => "Español",
            Self::BrailleToSpanish => "Braille",
        }
    }

    pub fn target_label(self) -> &'static str {
        self.flipped().source_label()
    }
}

pub fn toggle_direction(current: Direction) -> DirectionToggle {
    DirectionToggle {
        direction: current.flipped(),
        cleared_input: String::new(),
        cleared_output: String::new(),
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.source_label(), self.target_label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown direction: {0} (expected s2b or b2s)")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "s2b" | "spanish-to-braille" => Ok(Self::SpanishToBraille),
            "b2s" | "braille-to-spanish" => Ok(Self::BrailleToSpanish),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_and_clears() {
        let t = toggle_direction(Direction::SpanishToBraille);
        assert_eq!(t.direction, Direction::BrailleToSpanish);
        assert!(t.cleared_input.is_empty());
        assert!(t.cleared_output.is_empty());
        assert_eq!(
            toggle_direction(t.direction).direction,
            Direction::SpanishToBraille
        );
    }

    #[test]
    fn detect_direction() {
        assert_eq!(Direction::detect("casa"), Direction::SpanishToBraille);
        assert_eq!(Direction::detect("⠉⠁⠎⠁"), Direction::BrailleToSpanish);
        assert_eq!(Direction::detect(""), Direction::SpanishToBraille);
    }

    #[test]
    fn parse_round_trips_short_form() {
        for d in [Direction::SpanishToBraille, Direction::BrailleToSpanish] {
            assert_eq!(d.as_str().parse::<Direction>().unwrap(), d);
        }
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn display_labels() {
        assert_eq!(Direction::SpanishToBraille.to_string(), "Español → Braille");
        assert_eq!(Direction::BrailleToSpanish.target_label(), "Español");
    }
}
