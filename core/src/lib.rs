//! The algorithmic core of the whorl visual instrument: generate a jittered
//! flight path for a played note, smooth it into a cubic bezier path, and
//! compute the dash parameters that make the stroke draw itself on screen
//! and slide away again when the note is released.
//!
//! Everything here is pure apart from the injected random source. Rendering,
//! audio and input plumbing live in sibling crates.

pub mod dash;
pub mod flight;
pub mod point;
pub mod smooth;

pub use dash::DashAnimation;
pub use flight::{FlightPath, Growth, JitterConfig, ScaleMode};
pub use point::Point;
pub use smooth::{PathDescription, PathSegment};

use thiserror::Error;

/// Errors produced by the whorl pipeline. All of these are local and
/// recoverable: callers are expected to skip the failed operation and log,
/// never to tear down the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// Animation parameters were requested for a path that has not been
    /// attached to a renderer and measured yet.
    #[error("path has not been attached and measured yet")]
    NotReady,
}
