//! Input editing: keypad presses, backspace, and whole-text replacement.
//! None of these translate or touch the history.

use super::TranslatorSession;

impl TranslatorSession {
    /// Append a keypad symbol to the input.
    pub fn press_key(&mut self, key: char) {
        self.input.push(key);
    }

    /// Remove the last character of the input, if any.
    pub fn backspace(&mut self) -> Option<char> {
        self.input.pop()
    }

    /// Replace the input with typed or pasted text.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }
}
