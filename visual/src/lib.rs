//! The visual half of whorl above the geometry core: a colour per note, an
//! identity per press, a flat stroke style record, and the stage that owns
//! every live note visual from note-start to its deferred removal.

pub mod identity;
pub mod palette;
pub mod stage;
pub mod style;

pub use identity::{IdentityCounters, VisualId};
pub use palette::{Palette, PaletteConfig};
pub use stage::{Renderer, Stage, StageConfig};
pub use style::StrokeStyle;
