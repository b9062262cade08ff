//! Runs whorl in an sdl2 window: translates keyboard and mouse input into
//! stage events, and renders each note's curve as an animated dashed
//! stroke on the canvas.

pub mod input;
pub mod renderer;
pub mod window;

pub use renderer::CanvasRenderer;
pub use window::Window;
