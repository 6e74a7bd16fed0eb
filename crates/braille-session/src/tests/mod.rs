mod proptest_fsm;

use braille_core::history::{HistoryLedger, MemorySlotStore};

use super::TranslatorSession;

pub(super) const SLOT: &str = "translations";

pub(super) fn make_session(store: &MemorySlotStore) -> TranslatorSession {
    TranslatorSession::new(HistoryLedger::load_with(Box::new(store.clone()), SLOT, 10))
}

pub(super) fn type_string(session: &mut TranslatorSession, s: &str) {
    for c in s.chars() {
        session.press_key(c);
    }
}
