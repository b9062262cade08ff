use rand::Rng;
use rgb_int::Rgb24;
use whorl_keyboard::Note;

const NUM_NOTES: usize = 128;
/// Hue units per revolution of the colour wheel, kept at the original
/// toy's 8-bit convention.
const HUE_WHEEL: f64 = 256.0;

/// Hue sweep configuration for the startup palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteConfig {
    /// How many hue units the sweep covers across the full note range.
    /// More than one full wheel is allowed; the sweep wraps.
    pub hue_span: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        // The original swept 400 hue units over its key range, wrapping
        // the wheel roughly one and a half times.
        Self {
            hue_span: 400.0,
            saturation: 0.85,
            value: 0.95,
        }
    }
}

/// A colour per MIDI note: hue swept linearly across the note range from a
/// random starting hue. Built once at startup and read-only after.
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb24>,
}

impl Palette {
    pub fn generate<R: Rng>(rng: &mut R, config: PaletteConfig) -> Self {
        let start_hue = rng.random_range(0.0..HUE_WHEEL);
        let colors = (0..NUM_NOTES)
            .map(|i| {
                let swept =
                    i as f64 * config.hue_span / (NUM_NOTES - 1) as f64;
                let hue_01 =
                    ((start_hue + swept) % HUE_WHEEL) / HUE_WHEEL;
                hsv_to_rgb24(hue_01, config.saturation, config.value)
            })
            .collect();
        Self { colors }
    }

    pub fn color(&self, note: Note) -> Rgb24 {
        self.colors[note.to_midi_index() as usize]
    }
}

/// Standard HSV to RGB conversion; all inputs in 0..1.
fn hsv_to_rgb24(h_01: f64, s: f64, v: f64) -> Rgb24 {
    let h = h_01 * 6.0;
    let f = h - h.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match (h as u32) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb24::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn every_note_has_a_color() {
        let palette = Palette::generate(
            &mut StdRng::seed_from_u64(7),
            PaletteConfig::default(),
        );
        // Would panic on a missing entry.
        for midi_index in 0..=127 {
            palette.color(Note::from_midi_index(midi_index));
        }
    }

    #[test]
    fn adjacent_notes_differ_in_hue() {
        let palette = Palette::generate(
            &mut StdRng::seed_from_u64(7),
            PaletteConfig::default(),
        );
        assert_ne!(palette.color(Note::C4), palette.color(Note::A4));
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(hsv_to_rgb24(0.0, 1.0, 1.0), Rgb24::new(255, 0, 0));
        assert_eq!(
            hsv_to_rgb24(1.0 / 3.0, 1.0, 1.0),
            Rgb24::new(0, 255, 0)
        );
        assert_eq!(
            hsv_to_rgb24(2.0 / 3.0, 1.0, 1.0),
            Rgb24::new(0, 0, 255)
        );
    }
}
