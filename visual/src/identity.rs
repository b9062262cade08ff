use std::collections::HashMap;
use whorl_keyboard::Note;

/// Identifies one visual instance of a played note. Repeated presses of
/// the same note get distinct generations, so a stale deferred cleanup can
/// be told apart from the visual that replaced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualId {
    pub note: Note,
    pub generation: u64,
}

/// Owned per-note press counters, replacing the original toy's global
/// counter table. Monotonic: no two visuals of the same note are ever
/// assigned the same generation.
#[derive(Debug, Default)]
pub struct IdentityCounters {
    next_by_note: HashMap<Note, u64>,
}

impl IdentityCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, note: Note) -> VisualId {
        let next = self.next_by_note.entry(note).or_insert(0);
        let id = VisualId {
            note,
            generation: *next,
        };
        *next += 1;
        id
    }

    /// The most recently issued generation for `note`, if any.
    pub fn current(&self, note: Note) -> Option<u64> {
        self.next_by_note.get(&note).map(|next| next - 1)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn generations_are_monotonic_per_note() {
        let mut counters = IdentityCounters::new();
        let a0 = counters.begin(Note::A4);
        let c0 = counters.begin(Note::C4);
        let a1 = counters.begin(Note::A4);
        assert_eq!(a0.generation, 0);
        assert_eq!(c0.generation, 0);
        assert_eq!(a1.generation, 1);
        assert_ne!(a0, a1);
        assert_eq!(counters.current(Note::A4), Some(1));
        assert_eq!(counters.current(Note::C3), None);
    }
}
