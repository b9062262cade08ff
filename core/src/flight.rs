//! Generates the jittered point sequence a note's curve is built from. Each
//! note climbs from the bottom of its span towards the top of the viewport,
//! wandering sideways by an independently random amount per point, with the
//! wander widening as the path ascends.

use crate::{Error, Point};
use rand::Rng;

/// How far the horizontal wander grows as the flight path ascends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Growth {
    /// Wander grows in direct proportion to the point index.
    Linear,
    /// Wander grows with the square of the point index, scaled by a
    /// curvature coefficient. Produces the widening flick of the original
    /// toy.
    Quadratic { curvature: f64 },
}

impl Growth {
    fn amount(self, i: usize) -> f64 {
        match self {
            Self::Linear => i as f64,
            Self::Quadratic { curvature } => curvature * (i * i) as f64,
        }
    }
}

/// Scales the per-point wander magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleMode {
    Fixed(f64),
    /// Wander follows the live pointer position, both coordinates
    /// normalised to 0..1. Moving the pointer right widens the wander,
    /// moving it towards the top of the screen widens it further.
    PointerDriven { x_01: f64, y_01: f64 },
}

impl ScaleMode {
    fn scale(self) -> f64 {
        match self {
            Self::Fixed(scale) => scale,
            Self::PointerDriven { x_01, y_01 } => (0.5 + x_01) * (2.0 - y_01),
        }
    }
}

/// Controls the random horizontal wander of a generated flight path. The
/// constants differ between profiles on purpose; they are presets, not
/// behavior to unify.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterConfig {
    pub growth: Growth,
    pub scale_mode: ScaleMode,
    /// Bounds of the per-point random wander magnitude.
    pub min_magnitude: f64,
    pub max_magnitude: f64,
    /// Vertical coordinate of the appended terminal point. Kept negative so
    /// the curve always exits the top of the viewport.
    pub terminal_y: f64,
}

impl JitterConfig {
    /// The widening quadratic flick of the original toy.
    pub const ORIGINAL: Self = Self {
        growth: Growth::Quadratic { curvature: 0.04 },
        scale_mode: ScaleMode::Fixed(1.0),
        min_magnitude: 60.0,
        max_magnitude: 200.0,
        terminal_y: -40.0,
    };

    /// A tamer profile whose wander grows linearly.
    pub const GENTLE: Self = Self {
        growth: Growth::Linear,
        scale_mode: ScaleMode::Fixed(1.0),
        min_magnitude: 10.0,
        max_magnitude: 40.0,
        terminal_y: -40.0,
    };

    pub fn scale_mode(self, scale_mode: ScaleMode) -> Self {
        Self { scale_mode, ..self }
    }
}

impl Default for JitterConfig {
    fn default() -> Self {
        Self::ORIGINAL
    }
}

/// An ordered sequence of points tracing a note's flight from its origin
/// towards the top of the screen. Never empty. The first point is the
/// curve's anchor; the last point is a terminal pinned to the launch column
/// so the curve always leaves the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPath {
    points: Vec<Point>,
}

impl FlightPath {
    /// Wrap an explicit point sequence, which must be non-empty.
    pub fn from_points(points: Vec<Point>) -> Result<Self, Error> {
        if points.is_empty() {
            return Err(Error::InvalidArgument(
                "flight path needs at least one point",
            ));
        }
        Ok(Self { points })
    }

    /// Generate a jittered flight path of `count + 1` points rising from
    /// `vertical_span` down to the configured terminal height. Each point
    /// draws an independent wander magnitude from the configured range and
    /// an independent sign.
    pub fn generate<R: Rng>(
        rng: &mut R,
        count: usize,
        horizontal_offset: f64,
        vertical_span: f64,
        jitter: JitterConfig,
    ) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidArgument(
                "point count must be at least 1",
            ));
        }
        let step = vertical_span / count as f64;
        let scale = jitter.scale_mode.scale();
        let mut points = Vec::with_capacity(count + 1);
        for i in 0..count {
            let magnitude = rng
                .random_range(jitter.min_magnitude..=jitter.max_magnitude);
            let sign = if rng.random::<bool>() { 1.0 } else { -1.0 };
            let x = horizontal_offset
                + sign * jitter.growth.amount(i) * magnitude * scale;
            points.push(Point::new(x, vertical_span - i as f64 * step));
        }
        points.push(Point::new(horizontal_offset, jitter.terminal_y));
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn generates_count_plus_one_points() {
        for count in 1..20 {
            let flight = FlightPath::generate(
                &mut rng(),
                count,
                320.0,
                480.0,
                JitterConfig::ORIGINAL,
            )
            .unwrap();
            assert_eq!(flight.len(), count + 1);
        }
    }

    #[test]
    fn terminal_point_returns_to_launch_column() {
        let flight = FlightPath::generate(
            &mut rng(),
            10,
            123.5,
            480.0,
            JitterConfig::ORIGINAL,
        )
        .unwrap();
        let last = *flight.points().last().unwrap();
        assert_eq!(last.x, 123.5);
        assert_eq!(last.y, JitterConfig::ORIGINAL.terminal_y);
    }

    #[test]
    fn vertical_positions_descend_linearly() {
        let flight = FlightPath::generate(
            &mut rng(),
            4,
            0.0,
            400.0,
            JitterConfig::ORIGINAL,
        )
        .unwrap();
        let ys = flight.points().iter().map(|p| p.y).collect::<Vec<_>>();
        assert_eq!(&ys[..4], &[400.0, 300.0, 200.0, 100.0]);
    }

    #[test]
    fn zero_count_is_rejected() {
        assert_eq!(
            FlightPath::generate(
                &mut rng(),
                0,
                0.0,
                480.0,
                JitterConfig::ORIGINAL
            ),
            Err(Error::InvalidArgument("point count must be at least 1"))
        );
    }

    #[test]
    fn first_point_never_wanders() {
        // Growth is zero at index 0 for both profiles, so the first point
        // sits exactly on the launch column.
        for jitter in [JitterConfig::ORIGINAL, JitterConfig::GENTLE] {
            let flight =
                FlightPath::generate(&mut rng(), 5, 50.0, 480.0, jitter)
                    .unwrap();
            assert_eq!(flight.points()[0].x, 50.0);
        }
    }

    #[test]
    fn empty_point_sequence_is_rejected() {
        assert_eq!(
            FlightPath::from_points(Vec::new()),
            Err(Error::InvalidArgument("flight path needs at least one point"))
        );
    }
}
