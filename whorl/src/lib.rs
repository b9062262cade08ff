pub use whorl_computer_keyboard::{Key, KeyTracker, two_row_note_by_key};
pub use whorl_core::{
    DashAnimation, Error, FlightPath, Growth, JitterConfig, PathDescription,
    PathSegment, Point, ScaleMode,
};
#[cfg(feature = "interactive")]
pub use whorl_interactive::{CanvasRenderer, Window};
pub use whorl_keyboard::{KeyEvent, KeyEvents, Note};
#[cfg(feature = "midi_live")]
pub use whorl_midi_live::{MidiLive, MidiLiveConnection};
pub use whorl_visual::{
    IdentityCounters, Palette, PaletteConfig, Renderer, Stage, StageConfig,
    StrokeStyle, VisualId,
};

pub mod prelude {
    #[cfg(feature = "interactive")]
    pub use whorl_interactive::Window;
    pub use whorl_core::{FlightPath, JitterConfig, ScaleMode};
    pub use whorl_keyboard::{KeyEvent, KeyEvents, Note};
    #[cfg(feature = "midi_live")]
    pub use whorl_midi_live::MidiLive;
    pub use whorl_visual::{Palette, PaletteConfig, Stage, StageConfig};
}
