mod event;
mod note;

pub use event::{KeyEvent, KeyEvents};
pub use note::Note;
