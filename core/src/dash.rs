//! Stroke animation parameters. A rendered curve is animated with the
//! dash-offset trick: the stroke's dash state determines which window of
//! the path is visibly drawn, and transitioning that state makes the
//! stroke appear to draw itself on and later slide away.

/// The numeric parameter set handed to the stroke animation collaborator.
/// All values are in path arc-length units. Computed twice per note: once
/// at note-start and once at note-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashAnimation {
    pub offset: f64,
    pub start: f64,
    pub end: f64,
    pub initial: f64,
    pub segment_length: f64,
    /// Midpoint of the detach animation. Only present for note-end
    /// parameter sets.
    pub start_midway: Option<f64>,
}

impl DashAnimation {
    /// Note-start parameters: the stroke begins fully hidden and its
    /// visible segment grows from nothing to the full path length.
    /// `total_length` is the path's measured arc length.
    pub fn draw_on(total_length: f64) -> Self {
        Self {
            offset: total_length,
            start: total_length,
            end: 2.0 * total_length,
            initial: total_length,
            segment_length: total_length,
            start_midway: None,
        }
    }

    /// Note-end parameters: the drawn segment keeps travelling forward so
    /// the trail slides off the far end of the path instead of vanishing
    /// in place. `dash_value` is the live animated dash scalar read back
    /// from the renderer at the moment of release; it runs from 0 to twice
    /// the path length across the reveal, so `segment_length` comes out
    /// negative when the note is released before its reveal finished.
    /// That is a valid, expected degenerate output.
    pub fn draw_off(total_length: f64, dash_value: f64) -> Self {
        let start = total_length;
        let segment_length = dash_value - total_length;
        let end = start + segment_length;
        Self {
            offset: 2.0 * total_length,
            start,
            end,
            initial: total_length,
            segment_length,
            start_midway: Some((start + end) / 2.0),
        }
    }
}
