//! Owns every live note visual and drives its lifecycle. A note-start
//! event builds a flight path, smooths it, attaches it to the renderer and
//! starts the draw-on animation; the matching note-end switches the visual
//! to the detach animation and schedules its removal; `tick` runs removals
//! whose linger has elapsed. Everything runs synchronously inside the
//! caller's frame loop.

use crate::{IdentityCounters, Palette, StrokeStyle, VisualId};
use rand::{SeedableRng, rngs::StdRng};
use std::collections::HashMap;
use std::time::{Duration, Instant};
use whorl_core::{
    DashAnimation, Error, FlightPath, JitterConfig, PathDescription,
    ScaleMode,
};
use whorl_keyboard::{KeyEvent, KeyEvents, Note};

/// The seam between the stage and whatever draws the curves. Paths are
/// keyed by their unique `VisualId`, so removing a stale visual can never
/// touch the one that replaced it.
pub trait Renderer {
    /// Attach a path to the scene and return its measured arc length.
    fn attach(
        &mut self,
        id: VisualId,
        path: &PathDescription,
    ) -> Result<f64, Error>;

    /// Replace the style of an attached path, (re)starting its dash
    /// animation. `Error::NotReady` when `id` is not attached.
    fn restyle(
        &mut self,
        id: VisualId,
        style: &StrokeStyle,
    ) -> Result<(), Error>;

    /// Re-measure an attached path. The length is expected to be stable
    /// after `attach`, but note-end re-queries it defensively.
    fn total_length(&self, id: VisualId) -> Result<f64, Error>;

    /// The live animated dash scalar of an attached path.
    fn dash_value(&self, id: VisualId) -> Result<f64, Error>;

    /// Remove an attached path. Unknown ids are a no-op.
    fn remove(&mut self, id: VisualId);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageConfig {
    /// Number of generated flight points per note; the terminal point is
    /// added on top of this.
    pub point_count: usize,
    /// How far bezier control points are displaced along the local
    /// tangent.
    pub smoothing: f64,
    pub jitter: JitterConfig,
    pub stroke_width: f64,
    /// Extra stroke width at full velocity.
    pub stroke_width_velocity_boost: f64,
    /// How long a released visual keeps animating before it is removed.
    pub linger: Duration,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            point_count: 10,
            smoothing: 0.25,
            jitter: JitterConfig::ORIGINAL,
            stroke_width: 3.0,
            stroke_width_velocity_boost: 5.0,
            linger: Duration::from_secs(3),
        }
    }
}

struct LiveNote {
    id: VisualId,
    stroke_width: f64,
}

pub struct Stage {
    config: StageConfig,
    width: f64,
    height: f64,
    palette: Palette,
    identities: IdentityCounters,
    live_by_note: HashMap<Note, LiveNote>,
    pending_removals: Vec<(Instant, VisualId)>,
    rng: StdRng,
}

impl Stage {
    pub fn new(
        width: f64,
        height: f64,
        config: StageConfig,
        palette: Palette,
    ) -> Self {
        Self {
            config,
            width,
            height,
            palette,
            identities: IdentityCounters::new(),
            live_by_note: HashMap::new(),
            pending_removals: Vec::new(),
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Feed the live pointer position, both coordinates 0..1. Only affects
    /// profiles whose jitter scale is pointer driven.
    pub fn set_pointer(&mut self, x_01: f64, y_01: f64) {
        if let ScaleMode::PointerDriven { .. } = self.config.jitter.scale_mode
        {
            self.config.jitter.scale_mode =
                ScaleMode::PointerDriven { x_01, y_01 };
        }
    }

    /// Horizontal launch column for a note: pitch classes fan out across
    /// the middle of the viewport, as in the original toy.
    fn note_column(&self, note: Note) -> f64 {
        (13.0 + note.pitch_class() as f64) * self.width / 38.0
    }

    /// Handle a note-start event: build, smooth and attach a fresh curve
    /// for the note and start its draw-on animation. Returns the new
    /// visual's id. If the same note is already live its old visual keeps
    /// animating under its own id until removal.
    pub fn note_start<R: Renderer>(
        &mut self,
        renderer: &mut R,
        event: KeyEvent,
    ) -> Result<VisualId, Error> {
        let note = event.note;
        if let Some(replaced) = self.live_by_note.remove(&note) {
            // The previous press of this note never got a note-end (lost
            // release, or a device restarting the note while held). Treat
            // this as an implicit release so its visual still goes away.
            self.pending_removals
                .push((Instant::now() + self.config.linger, replaced.id));
        }
        let id = self.identities.begin(note);
        let column = self.note_column(note);
        let flight = FlightPath::generate(
            &mut self.rng,
            self.config.point_count,
            column,
            self.height,
            self.config.jitter,
        )?;
        let path = flight.smooth(self.config.smoothing);
        let total_length = renderer.attach(id, &path)?;
        let stroke_width = self.config.stroke_width
            + self.config.stroke_width_velocity_boost
                * f64::from(event.velocity_01);
        let style = StrokeStyle {
            stroke: self.palette.color(note),
            stroke_width,
            dash: DashAnimation::draw_on(total_length),
        };
        renderer.restyle(id, &style)?;
        self.live_by_note
            .insert(note, LiveNote { id, stroke_width });
        log::debug!("note {} started, generation {}", note, id.generation);
        Ok(id)
    }

    /// Handle a note-end event: read the live dash state back from the
    /// renderer, switch the visual to the detach animation, and schedule
    /// its removal after the configured linger. `Error::NotReady` when the
    /// note has no live visual.
    pub fn note_end<R: Renderer>(
        &mut self,
        renderer: &mut R,
        note: Note,
    ) -> Result<(), Error> {
        let live = self.live_by_note.get(&note).ok_or(Error::NotReady)?;
        let total_length = renderer.total_length(live.id)?;
        let dash_value = renderer.dash_value(live.id)?;
        let style = StrokeStyle {
            stroke: self.palette.color(note),
            stroke_width: live.stroke_width,
            dash: DashAnimation::draw_off(total_length, dash_value),
        };
        renderer.restyle(live.id, &style)?;
        self.pending_removals
            .push((Instant::now() + self.config.linger, live.id));
        log::debug!("note {} released, generation {}", note, live.id.generation);
        Ok(())
    }

    /// Apply a batch of key events. Failures are isolated per note: a
    /// failed visual logs a warning and never affects other notes or the
    /// caller's loop.
    pub fn handle_events<R: Renderer>(
        &mut self,
        renderer: &mut R,
        events: &KeyEvents,
    ) {
        for event in events.iter() {
            let result = if event.pressed {
                self.note_start(renderer, *event).map(|_| ())
            } else {
                self.note_end(renderer, event.note)
            };
            if let Err(e) = result {
                log::warn!("skipping visual for note {}: {}", event.note, e);
            }
        }
    }

    /// Run deferred removals that have come due. Removal is keyed by
    /// `VisualId`, and the live map entry is only cleared when it still
    /// points at the removed generation: a cleanup firing after the same
    /// note restarted must not disturb the visual that replaced it.
    pub fn tick<R: Renderer>(&mut self, renderer: &mut R, now: Instant) {
        let mut i = 0;
        while i < self.pending_removals.len() {
            let (due, id) = self.pending_removals[i];
            if due <= now {
                self.pending_removals.swap_remove(i);
                renderer.remove(id);
                if self
                    .live_by_note
                    .get(&id.note)
                    .is_some_and(|live| live.id == id)
                {
                    self.live_by_note.remove(&id.note);
                }
            } else {
                i += 1;
            }
        }
    }

    /// Number of visuals currently attached (live or lingering removals).
    pub fn pending_removal_count(&self) -> usize {
        self.pending_removals.len()
    }
}
