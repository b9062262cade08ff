//! Smooths an ordered point sequence into a single cubic bezier path using
//! local tangent interpolation. This is an approximation in the Catmull-Rom
//! family, not an exact spline fit: each anchor's tangent is estimated from
//! the straight line between its two neighbours.

use crate::{FlightPath, Point};
use std::f64::consts::PI;
use std::fmt;

/// A single command in a bezier path. The first command of any path is the
/// lone `MoveTo`; every input point after the first contributes one
/// `CubicTo`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    CubicTo {
        control_start: Point,
        control_end: Point,
        end: Point,
    },
}

/// An ordered list of path commands describing one smoothed curve.
///
/// The structured command list is the primary contract. The `Display`
/// implementation is a pure, lossless projection into the SVG path
/// mini-language (`M x,y C c1x,c1y c2x,c2y x,y ...`) for renderers that
/// consume path strings directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PathDescription {
    segments: Vec<PathSegment>,
}

/// Position of one bezier control point relative to its anchor. A missing
/// neighbour at either sequence boundary is substituted with the anchor
/// itself, collapsing the tangent to the chord direction instead of
/// erroring. End control points reverse the tangent since theirs is an
/// incoming tangent.
fn control_point(
    anchor: Point,
    previous: Option<Point>,
    next: Option<Point>,
    smoothing: f64,
    reverse: bool,
) -> Point {
    let previous = previous.unwrap_or(anchor);
    let next = next.unwrap_or(anchor);
    let angle = previous.angle_to(next) + if reverse { PI } else { 0.0 };
    let length = previous.distance_to(next) * smoothing;
    anchor.displaced(angle, length)
}

impl FlightPath {
    /// Smooth this point sequence into a cubic bezier path.
    ///
    /// `smoothing` scales how far control points are displaced along the
    /// local tangent: 0 degenerates to a polyline-equivalent bezier, values
    /// around 0.25 give a gentle curve, larger values overshoot more
    /// dramatically. Deterministic: the same input and factor always
    /// produce the same path.
    pub fn smooth(&self, smoothing: f64) -> PathDescription {
        let points = self.points();
        let mut segments = Vec::with_capacity(points.len());
        segments.push(PathSegment::MoveTo(points[0]));
        for i in 1..points.len() {
            let control_start = control_point(
                points[i - 1],
                i.checked_sub(2).map(|p| points[p]),
                Some(points[i]),
                smoothing,
                false,
            );
            let control_end = control_point(
                points[i],
                Some(points[i - 1]),
                points.get(i + 1).copied(),
                smoothing,
                true,
            );
            segments.push(PathSegment::CubicTo {
                control_start,
                control_end,
                end: points[i],
            });
        }
        PathDescription { segments }
    }
}

impl PathDescription {
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Approximate the path with a polyline by sampling each cubic segment
    /// at `steps_per_segment` evenly spaced parameter values.
    pub fn flatten(&self, steps_per_segment: usize) -> Vec<Point> {
        let steps = steps_per_segment.max(1);
        let mut out = Vec::new();
        let mut cursor = Point::default();
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) => {
                    cursor = p;
                    out.push(p);
                }
                PathSegment::CubicTo {
                    control_start,
                    control_end,
                    end,
                } => {
                    for step in 1..=steps {
                        let t = step as f64 / steps as f64;
                        out.push(cubic_at(
                            cursor,
                            control_start,
                            control_end,
                            end,
                            t,
                        ));
                    }
                    cursor = end;
                }
            }
        }
        out
    }

    /// Total arc length of the flattened path.
    pub fn arc_length(&self, steps_per_segment: usize) -> f64 {
        self.flatten(steps_per_segment)
            .windows(2)
            .map(|pair| pair[0].distance_to(pair[1]))
            .sum()
    }
}

fn cubic_at(start: Point, c1: Point, c2: Point, end: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let (a, b, c, d) =
        (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Point::new(
        a * start.x + b * c1.x + c * c2.x + d * end.x,
        a * start.y + b * c1.y + c * c2.y + d * end.y,
    )
}

impl fmt::Display for PathDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match *segment {
                PathSegment::MoveTo(p) => write!(f, "M {},{}", p.x, p.y)?,
                PathSegment::CubicTo {
                    control_start,
                    control_end,
                    end,
                } => write!(
                    f,
                    "C {},{} {},{} {},{}",
                    control_start.x,
                    control_start.y,
                    control_end.x,
                    control_end.y,
                    end.x,
                    end.y
                )?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::FlightPath;

    fn flight(points: &[(f64, f64)]) -> FlightPath {
        FlightPath::from_points(
            points.iter().map(|&(x, y)| Point::new(x, y)).collect(),
        )
        .unwrap()
    }

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn one_move_to_then_one_cubic_per_point() {
        let path = flight(&[(0.0, 0.0), (10.0, 5.0), (20.0, 0.0), (30.0, 5.0)])
            .smooth(0.25);
        let segments = path.segments();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[0], PathSegment::MoveTo(Point::new(0.0, 0.0)));
        assert!(segments[1..]
            .iter()
            .all(|s| matches!(s, PathSegment::CubicTo { .. })));
    }

    #[test]
    fn single_point_gives_move_to_only() {
        let path = flight(&[(3.0, 4.0)]).smooth(0.25);
        assert_eq!(
            path.segments(),
            &[PathSegment::MoveTo(Point::new(3.0, 4.0))]
        );
    }

    #[test]
    fn two_points_collapse_control_points_onto_the_chord() {
        // With neighbours missing on both sides, both tangents degrade to
        // the chord direction, so the control points sit on the line
        // between the two input points.
        let path = flight(&[(0.0, 0.0), (10.0, 10.0)]).smooth(0.3);
        match path.segments()[1] {
            PathSegment::CubicTo {
                control_start,
                control_end,
                end,
            } => {
                assert_close(control_start.x, control_start.y);
                assert_close(control_end.x, control_end.y);
                assert_eq!(end, Point::new(10.0, 10.0));
            }
            _ => panic!("expected a cubic segment"),
        }
    }

    #[test]
    fn zero_smoothing_pins_control_points_to_their_anchors() {
        let points = [(0.0, 0.0), (10.0, 40.0), (40.0, 30.0), (60.0, 5.0)];
        let path = flight(&points).smooth(0.0);
        for (i, segment) in path.segments().iter().enumerate().skip(1) {
            match *segment {
                PathSegment::CubicTo {
                    control_start,
                    control_end,
                    end,
                } => {
                    let (px, py) = points[i - 1];
                    assert_close(control_start.x, px);
                    assert_close(control_start.y, py);
                    assert_close(control_end.x, end.x);
                    assert_close(control_end.y, end.y);
                }
                _ => panic!("expected a cubic segment"),
            }
        }
    }

    #[test]
    fn smoothing_is_deterministic() {
        let f = flight(&[(5.0, 10.0), (10.0, 40.0), (40.0, 30.0), (90.0, 45.0)]);
        assert_eq!(f.smooth(1.7), f.smooth(1.7));
    }

    #[test]
    fn serializes_to_the_svg_mini_language() {
        let path = flight(&[(0.0, 0.0), (10.0, 0.0)]).smooth(0.0);
        assert_eq!(path.to_string(), "M 0,0 C 0,0 10,0 10,0");
    }

    #[test]
    fn arc_length_of_a_straight_path_is_the_chord_length() {
        let path = flight(&[(0.0, 0.0), (30.0, 40.0)]).smooth(0.0);
        assert_close(path.arc_length(32), 50.0);
    }

    #[test]
    fn flatten_ends_at_the_final_point() {
        let path = flight(&[(0.0, 100.0), (25.0, 50.0), (0.0, 0.0)]).smooth(0.25);
        let polyline = path.flatten(16);
        assert_eq!(*polyline.last().unwrap(), Point::new(0.0, 0.0));
        assert_eq!(polyline.len(), 1 + 2 * 16);
    }
}
