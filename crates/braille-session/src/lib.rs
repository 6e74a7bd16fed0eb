//! Stateful translator session: current direction, input and output text, an
//! optional image for printing, and the translation history.
//!
//! `TranslatorSession` is the only owner of this state; a front end drives it
//! exclusively through the methods below. Only `translate` and
//! `clear_history` touch durable storage.

mod key_handlers;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use braille_core::keypad::keypad_keys;
use braille_core::print::{render_print_document, PrintSheet};
use braille_core::settings::settings;
use braille_core::{
    toggle_direction, translate, Alphabet, Direction, DirectionToggle, HistoryError,
    HistoryLedger, TranslationRecord,
};

#[derive(Debug)]
pub struct TranslatorSession {
    direction: Direction,
    input: String,
    output: String,
    image: Option<String>,
    ledger: HistoryLedger,
}

impl TranslatorSession {
    pub fn new(ledger: HistoryLedger) -> Self {
        Self {
            direction: Direction::default(),
            input: String::new(),
            output: String::new(),
            image: None,
            ledger,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Newest first.
    pub fn history(&self) -> &[TranslationRecord] {
        self.ledger.records()
    }

    pub fn ledger(&self) -> &HistoryLedger {
        &self.ledger
    }

    /// Translate the current input, show the result as output, and record it.
    ///
    /// The output is updated even when persisting the record fails; the
    /// history is then left as it was and the error is returned.
    pub fn translate(&mut self) -> Result<TranslationRecord, HistoryError> {
        let _span = debug_span!("session_translate", direction = self.direction.as_str()).entered();
        self.output = translate(&self.input, self.direction);
        self.ledger
            .record(&self.input, &self.output, self.direction)
    }

    /// Flip the direction, discarding the current input and output.
    pub fn toggle_direction(&mut self) -> DirectionToggle {
        let toggle = toggle_direction(self.direction);
        self.direction = toggle.direction;
        self.input.clone_from(&toggle.cleared_input);
        self.output.clone_from(&toggle.cleared_output);
        debug!(direction = self.direction.as_str(), "direction toggled");
        toggle
    }

    pub fn clear_history(&mut self) -> Result<(), HistoryError> {
        self.ledger.clear()
    }

    /// Keys offered for the current direction's source script.
    pub fn keypad(&self) -> Vec<char> {
        keypad_keys(Alphabet::global(), self.direction)
    }

    /// Attach (or detach with `None`) an image reference for the print sheet.
    pub fn attach_image(&mut self, image: Option<String>) {
        self.image = image;
    }

    /// HTML print sheet for the current input and output.
    pub fn print_document(&self) -> String {
        render_print_document(&PrintSheet {
            title: &settings().print.title,
            direction: self.direction,
            input: &self.input,
            output: &self.output,
            image: self.image.as_deref(),
        })
    }
}
