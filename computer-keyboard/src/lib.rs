//! Maps a US computer keyboard onto two piano rows. The QWERTY row plays
//! white notes of the octave starting at middle C with the number row as
//! its black notes; the ZXCV row plays the octave below with the home row
//! as its black notes.

use whorl_keyboard::{KeyEvent, KeyEvents, Note};

/// A physical key on a US-layout keyboard, independent of any windowing
/// library's scancode type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    N0,
    N1,
    N2,
    N3,
    N4,
    N5,
    N6,
    N7,
    N8,
    N9,
    LeftBracket,
    RightBracket,
    Semicolon,
    Apostrophe,
    Comma,
    Period,
    Minus,
    Equals,
    Slash,
}

/// The layout of the original toy: a chromatic run along each row, mixing
/// letter and number keys so the rows read like two piano octaves.
pub fn two_row_note_by_key() -> Vec<(Key, Note)> {
    use Key::*;
    let upper = vec![
        Q,
        N2,
        W,
        N3,
        E,
        R,
        N5,
        T,
        N6,
        Y,
        N7,
        U,
        I,
        N9,
        O,
        N0,
        P,
        LeftBracket,
        Equals,
        RightBracket,
    ];
    let lower = vec![
        Z, S, X, D, C, V, G, B, H, N, J, M, Comma, L, Period, Semicolon,
        Slash,
    ];
    upper
        .into_iter()
        .enumerate()
        .map(|(i, key)| (key, Note::C4.add_semitones(i as i16)))
        .chain(
            lower
                .into_iter()
                .enumerate()
                .map(|(i, key)| (key, Note::C3.add_semitones(i as i16))),
        )
        .collect()
}

struct KeyState {
    key: Key,
    note: Note,
    pressed: bool,
}

/// Tracks which mapped keys are currently held and converts raw key
/// transitions into note events. Holding a key produces a single start
/// event no matter how many repeated downs the windowing layer delivers.
pub struct KeyTracker {
    state: Vec<KeyState>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            state: two_row_note_by_key()
                .into_iter()
                .map(|(key, note)| KeyState {
                    key,
                    note,
                    pressed: false,
                })
                .collect(),
        }
    }

    /// Feed a raw key transition. Returns the note event it maps to, or
    /// `None` for unmapped keys and repeated transitions in the same
    /// direction.
    pub fn transition(&mut self, key: Key, pressed: bool) -> Option<KeyEvent> {
        let state = self.state.iter_mut().find(|state| state.key == key)?;
        if state.pressed == pressed {
            return None;
        }
        state.pressed = pressed;
        Some(KeyEvent {
            note: state.note,
            pressed,
            velocity_01: 1.0,
        })
    }

    /// Drain a set of raw transitions into a key event batch.
    pub fn batch(
        &mut self,
        transitions: impl IntoIterator<Item = (Key, bool)>,
    ) -> KeyEvents {
        transitions
            .into_iter()
            .filter_map(|(key, pressed)| self.transition(key, pressed))
            .collect()
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rows_start_an_octave_apart() {
        let mapping = two_row_note_by_key();
        let note_for = |key| {
            mapping
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, note)| *note)
                .unwrap()
        };
        assert_eq!(note_for(Key::Q), Note::C4);
        assert_eq!(note_for(Key::Z), Note::C3);
        // Chromatic runs: last key of each row.
        assert_eq!(note_for(Key::RightBracket), Note::C4.add_semitones(19));
        assert_eq!(note_for(Key::Slash), Note::C3.add_semitones(16));
    }

    #[test]
    fn repeated_downs_produce_a_single_event() {
        let mut tracker = KeyTracker::new();
        assert!(tracker.transition(Key::Q, true).is_some());
        assert!(tracker.transition(Key::Q, true).is_none());
        assert!(tracker.transition(Key::Q, false).is_some());
        assert!(tracker.transition(Key::Q, false).is_none());
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let mut tracker = KeyTracker::new();
        assert!(tracker.transition(Key::N1, true).is_none());
        assert!(tracker.transition(Key::A, true).is_none());
    }

    #[test]
    fn batch_collects_mapped_transitions_in_order() {
        let mut tracker = KeyTracker::new();
        let events = tracker.batch([
            (Key::Q, true),
            (Key::A, true),
            (Key::Z, true),
            (Key::Q, true),
        ]);
        let notes = events
            .iter()
            .map(|event| event.note)
            .collect::<Vec<_>>();
        assert_eq!(notes, vec![Note::C4, Note::C3]);
        assert!(events.iter().all(|event| event.pressed));
    }
}
