use rgb_int::Rgb24;
use whorl_core::DashAnimation;

/// The flat parameter record handed to a renderer: stroke colour and
/// width, plus the dash animation numbers. This record is the entire
/// styling contract between the stage and a renderer; neither side sees
/// the other's internals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub stroke: Rgb24,
    pub stroke_width: f64,
    pub dash: DashAnimation,
}

impl StrokeStyle {
    /// Project the numeric fields as name/value pairs for string-keyed
    /// style sinks (CSS custom properties, debug overlays).
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, f64)> {
        let dash = self.dash;
        [
            ("strokeWidth", self.stroke_width),
            ("offset", dash.offset),
            ("start", dash.start),
            ("end", dash.end),
            ("initial", dash.initial),
            ("segmentLength", dash.segment_length),
        ]
        .into_iter()
        .chain(dash.start_midway.map(|midway| ("startMidway", midway)))
    }
}
