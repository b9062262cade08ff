//! Canvas-backed implementation of the stage's `Renderer` seam. Attached
//! paths are flattened to polylines once; each frame the renderer draws
//! only the dash window the path's transitions currently make visible,
//! standing in for the CSS transition engine of the original toy.

use line_2d::Coord;
use rgb_int::Rgb24;
use sdl2::{pixels::Color, rect::Rect, render::Canvas, video::Window};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use whorl_core::{Error, PathDescription, Point};
use whorl_visual::{Renderer, StrokeStyle, VisualId};

const FLATTEN_STEPS_PER_SEGMENT: usize = 24;

/// A scalar animating linearly between two values.
#[derive(Debug, Clone, Copy)]
struct Transition {
    from: f64,
    to: f64,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    fn fixed(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            started_at: Instant::now(),
            duration: Duration::ZERO,
        }
    }

    fn value_at(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return self.to;
        }
        let t = (now
            .saturating_duration_since(self.started_at)
            .as_secs_f64()
            / self.duration.as_secs_f64())
        .min(1.0);
        self.from + (self.to - self.from) * t
    }
}

struct AttachedPath {
    polyline: Vec<Point>,
    /// Cumulative arc length at each polyline vertex.
    cumulative: Vec<f64>,
    total_length: f64,
    color: Color,
    stroke_width: u32,
    /// Live dash scalar. Runs from 0 to twice the path length across the
    /// reveal; the drawn head of the stroke is this value clamped to the
    /// path length.
    dash: Transition,
    /// Arc position behind which the stroke has been erased. Driven from 0
    /// to the path length by the detach animation.
    erased: Transition,
}

pub struct CanvasRenderer {
    paths: HashMap<VisualId, AttachedPath>,
    reveal: Duration,
    vanish: Duration,
}

impl CanvasRenderer {
    /// `reveal` is how long the dash scalar takes to run its full range
    /// after note-start; `vanish` how long the detach animation takes
    /// after note-end.
    pub fn new(reveal: Duration, vanish: Duration) -> Self {
        Self {
            paths: HashMap::new(),
            reveal,
            vanish,
        }
    }

    /// Draw the visible dash window of every attached path.
    pub fn draw(&self, canvas: &mut Canvas<Window>, now: Instant) {
        for attached in self.paths.values() {
            let head =
                attached.dash.value_at(now).min(attached.total_length);
            let tail = attached.erased.value_at(now);
            if head <= tail {
                continue;
            }
            canvas.set_draw_color(attached.color);
            let width = attached.stroke_width;
            for (i, pair) in attached.polyline.windows(2).enumerate() {
                // Skip polyline edges entirely outside the visible window.
                if attached.cumulative[i + 1] < tail
                    || attached.cumulative[i] > head
                {
                    continue;
                }
                let a = Coord {
                    x: pair[0].x as i32,
                    y: pair[0].y as i32,
                };
                let b = Coord {
                    x: pair[1].x as i32,
                    y: pair[1].y as i32,
                };
                for Coord { x, y } in line_2d::coords_between(a, b) {
                    let _ = canvas.fill_rect(Rect::new(x, y, width, width));
                }
            }
        }
    }

    /// Number of paths currently attached.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

fn rgb24_to_sdl(rgb: Rgb24) -> Color {
    Color::RGB(rgb.r, rgb.g, rgb.b)
}

impl Renderer for CanvasRenderer {
    fn attach(
        &mut self,
        id: VisualId,
        path: &PathDescription,
    ) -> Result<f64, Error> {
        let polyline = path.flatten(FLATTEN_STEPS_PER_SEGMENT);
        let mut cumulative = Vec::with_capacity(polyline.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for pair in polyline.windows(2) {
            total += pair[0].distance_to(pair[1]);
            cumulative.push(total);
        }
        self.paths.insert(
            id,
            AttachedPath {
                polyline,
                cumulative,
                total_length: total,
                color: Color::RGB(255, 255, 255),
                stroke_width: 2,
                dash: Transition::fixed(0.0),
                erased: Transition::fixed(0.0),
            },
        );
        Ok(total)
    }

    fn restyle(
        &mut self,
        id: VisualId,
        style: &StrokeStyle,
    ) -> Result<(), Error> {
        let attached = self.paths.get_mut(&id).ok_or(Error::NotReady)?;
        attached.color = rgb24_to_sdl(style.stroke);
        attached.stroke_width = style.stroke_width.max(1.0) as u32;
        let now = Instant::now();
        match style.dash.start_midway {
            // Draw-on: run the dash scalar across its full range so the
            // stroke reveals itself from the start of the path.
            None => {
                attached.dash = Transition {
                    from: 0.0,
                    to: style.dash.end,
                    started_at: now,
                    duration: self.reveal,
                };
                attached.erased = Transition::fixed(0.0);
            }
            // Draw-off: erase from the near end while the reveal keeps
            // running, so the trail detaches and slides away.
            Some(_) => {
                attached.erased = Transition {
                    from: 0.0,
                    to: style.dash.start,
                    started_at: now,
                    duration: self.vanish,
                };
            }
        }
        Ok(())
    }

    fn total_length(&self, id: VisualId) -> Result<f64, Error> {
        self.paths
            .get(&id)
            .map(|attached| attached.total_length)
            .ok_or(Error::NotReady)
    }

    fn dash_value(&self, id: VisualId) -> Result<f64, Error> {
        self.paths
            .get(&id)
            .map(|attached| attached.dash.value_at(Instant::now()))
            .ok_or(Error::NotReady)
    }

    fn remove(&mut self, id: VisualId) {
        self.paths.remove(&id);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn transition_interpolates_and_clamps() {
        let start = Instant::now();
        let transition = Transition {
            from: 0.0,
            to: 200.0,
            started_at: start,
            duration: Duration::from_secs(2),
        };
        assert_eq!(transition.value_at(start), 0.0);
        assert_eq!(
            transition.value_at(start + Duration::from_secs(1)),
            100.0
        );
        // Clamped at the target once the duration has elapsed.
        assert_eq!(
            transition.value_at(start + Duration::from_secs(5)),
            200.0
        );
    }

    #[test]
    fn fixed_transition_holds_its_value() {
        let transition = Transition::fixed(42.0);
        assert_eq!(
            transition.value_at(Instant::now() + Duration::from_secs(60)),
            42.0
        );
    }
}
