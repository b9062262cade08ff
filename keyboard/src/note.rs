//! Notes are identified by their MIDI index (0..=127), following the usual
//! convention that middle C is C4 at index 60.

use std::fmt::Display;

const NOTES_PER_OCTAVE: u8 = 12;
const MAX_MIDI_INDEX: u8 = 127;

const PITCH_CLASS_NAMES: [&str; NOTES_PER_OCTAVE as usize] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Note {
    midi_index: u8,
}

impl Note {
    pub const fn from_midi_index(midi_index: u8) -> Self {
        assert!(midi_index <= MAX_MIDI_INDEX);
        Self { midi_index }
    }

    pub const fn to_midi_index(self) -> u8 {
        self.midi_index
    }

    /// Position of this note within its octave, where 0 is C.
    pub const fn pitch_class(self) -> u8 {
        self.midi_index % NOTES_PER_OCTAVE
    }

    /// MIDI octave number. C4 is middle C, so the lowest octave is -1.
    pub const fn octave(self) -> i8 {
        (self.midi_index / NOTES_PER_OCTAVE) as i8 - 1
    }

    /// The note `semitones` above (or below, when negative) this one.
    /// Panics when the result leaves the MIDI range.
    pub const fn add_semitones(self, semitones: i16) -> Self {
        Self::from_midi_index((self.midi_index as i16 + semitones) as u8)
    }

    /// The C an octave below middle C.
    pub const C3: Self = Self::from_midi_index(48);
    /// Middle C.
    pub const C4: Self = Self::from_midi_index(60);
    pub const A4: Self = Self::from_midi_index(69);
}

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            PITCH_CLASS_NAMES[self.pitch_class() as usize],
            self.octave()
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn middle_c() {
        assert_eq!(Note::C4.to_midi_index(), 60);
        assert_eq!(Note::C4.pitch_class(), 0);
        assert_eq!(Note::C4.octave(), 4);
    }

    #[test]
    fn add_semitones_crosses_octaves() {
        assert_eq!(Note::C3.add_semitones(12), Note::C4);
        assert_eq!(Note::C4.add_semitones(9), Note::A4);
        assert_eq!(Note::C4.add_semitones(-12), Note::C3);
    }

    #[test]
    fn display_names() {
        assert_eq!(Note::A4.to_string(), "A4");
        assert_eq!(Note::from_midi_index(61).to_string(), "C#4");
        assert_eq!(Note::from_midi_index(0).to_string(), "C-1");
    }
}
