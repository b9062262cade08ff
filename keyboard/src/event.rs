use crate::Note;
use smallvec::{SmallVec, smallvec};

/// A key being pressed or released.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeyEvent {
    /// Which note corresponds to the key.
    pub note: Note,
    /// Whether the key was pressed or released.
    pub pressed: bool,
    /// How hard the key was pressed/released, 0..1.
    pub velocity_01: f32,
}

/// A batch of key events gathered within one frame. Multiple events may
/// land between two frames, so handlers always consume them as a batch.
/// Only uses the heap when more than four events arrive in the same frame,
/// which is very unlikely.
#[derive(Clone, Debug, Default)]
pub struct KeyEvents(SmallVec<[KeyEvent; 4]>);

impl KeyEvents {
    pub fn empty() -> Self {
        Self(smallvec![])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, key_event: KeyEvent) {
        self.0.push(key_event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyEvent> {
        self.0.iter()
    }

    pub fn extend(&mut self, i: impl IntoIterator<Item = KeyEvent>) {
        self.0.extend(i);
    }
}

impl IntoIterator for KeyEvents {
    type Item = KeyEvent;

    type IntoIter = smallvec::IntoIter<[KeyEvent; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<KeyEvent> for KeyEvents {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = KeyEvent>,
    {
        let mut events = Self::empty();
        for event in iter {
            events.push(event);
        }
        events
    }
}
