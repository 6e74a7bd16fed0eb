//! Property-based tests for the TranslatorSession state machine.
//!
//! Generates random action sequences via proptest and verifies that
//! structural invariants hold after every action.

use proptest::prelude::*;

use braille_core::history::{HistoryLedger, MemorySlotStore};
use braille_core::{translate, Direction};

use super::SLOT;
use crate::TranslatorSession;

const CAPACITY: usize = 4;

#[derive(Debug, Clone)]
enum Action {
    PressKey(char),
    Backspace,
    SetInput(String),
    Translate,
    Toggle,
    ClearHistory,
}

fn arb_key() -> impl Strategy<Value = char> {
    prop_oneof![
        6 => prop::sample::select(vec!['a', 'e', 'o', 's', 'n', 'ñ', ' ', 'M']),
        4 => prop::sample::select(vec!['⠁', '⠑', '⠕', '⠎', '⠻', '⠀']),
        1 => prop::sample::select(vec!['1', '!', 'é', '\n', '⠿']),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        40 => arb_key().prop_map(Action::PressKey),
        8 => Just(Action::Backspace),
        5 => "[a-zA-Zñ ,.!]{0,12}".prop_map(Action::SetInput),
        20 => Just(Action::Translate),
        8 => Just(Action::Toggle),
        3 => Just(Action::ClearHistory),
    ]
}

fn apply(session: &mut TranslatorSession, action: &Action) {
    match action {
        Action::PressKey(c) => {
            session.press_key(*c);
        }
        Action::Backspace => {
            session.backspace();
        }
        Action::SetInput(s) => session.set_input(s),
        Action::Translate => {
            session.translate().unwrap();
        }
        Action::Toggle => {
            session.toggle_direction();
        }
        Action::ClearHistory => session.clear_history().unwrap(),
    }
}

proptest! {
    #[test]
    fn session_invariants(actions in prop::collection::vec(arb_action(), 1..60)) {
        let store = MemorySlotStore::new();
        let mut session =
            TranslatorSession::new(HistoryLedger::load_with(Box::new(store.clone()), SLOT, CAPACITY));
        let mut expected_direction = Direction::SpanishToBraille;
        let mut recorded = 0usize;

        for action in &actions {
            let history_before = session.history().to_vec();
            apply(&mut session, action);

            prop_assert!(session.history().len() <= CAPACITY);

            match action {
                Action::Translate => {
                    recorded += 1;
                    let expected = translate(session.input(), session.direction());
                    prop_assert_eq!(session.output(), expected.as_str());
                    let newest = &session.history()[0];
                    prop_assert_eq!(&newest.input_text, session.input());
                    prop_assert_eq!(&newest.output_text, session.output());
                    prop_assert_eq!(&session.history()[1..], &history_before[..session.history().len() - 1]);
                }
                Action::Toggle => {
                    expected_direction = expected_direction.flipped();
                    prop_assert!(session.input().is_empty());
                    prop_assert!(session.output().is_empty());
                    prop_assert_eq!(session.history(), history_before.as_slice());
                }
                Action::ClearHistory => {
                    recorded = 0;
                    prop_assert!(session.history().is_empty());
                }
                _ => {
                    prop_assert_eq!(session.history(), history_before.as_slice());
                }
            }

            prop_assert_eq!(session.direction(), expected_direction);
            prop_assert_eq!(session.history().len(), recorded.min(CAPACITY));

            // What is persisted always matches what is in memory.
            let reloaded = HistoryLedger::load_with(Box::new(store.clone()), SLOT, CAPACITY);
            prop_assert_eq!(reloaded.records(), session.history());
        }
    }
}
