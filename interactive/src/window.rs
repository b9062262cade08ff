use crate::{input::key_for_scancode, renderer::CanvasRenderer};
use anyhow::anyhow;
use sdl2::{event::Event, pixels::Color};
use std::{
    thread,
    time::{Duration, Instant},
};
use whorl_computer_keyboard::KeyTracker;
use whorl_keyboard::KeyEvents;
use whorl_visual::Stage;

const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / 60);

pub struct Window {
    pub title: String,
    pub width_px: u32,
    pub height_px: u32,
    /// How long a stroke's reveal animation runs after note-start.
    pub reveal: Duration,
    /// How long the detach animation runs after note-end.
    pub vanish: Duration,
}

impl Default for Window {
    fn default() -> Self {
        Self {
            title: "whorl".to_string(),
            width_px: 960,
            height_px: 720,
            reveal: Duration::from_millis(1500),
            vanish: Duration::from_millis(1200),
        }
    }
}

impl Window {
    /// Run the event loop until quit. Computer keyboard and mouse input is
    /// handled here; `poll_extra_events` lets callers feed note events
    /// from other sources (live midi) into the same frame.
    pub fn run<F>(
        &self,
        mut stage: Stage,
        mut poll_extra_events: F,
    ) -> anyhow::Result<()>
    where
        F: FnMut() -> KeyEvents,
    {
        let sdl_context = sdl2::init().map_err(|e| anyhow!(e))?;
        let video_subsystem = sdl_context.video().map_err(|e| anyhow!(e))?;
        let window = video_subsystem
            .window(self.title.as_str(), self.width_px, self.height_px)
            .position_centered()
            .build()?;
        let mut canvas = window
            .into_canvas()
            .target_texture()
            .present_vsync()
            .build()?;
        let mut event_pump =
            sdl_context.event_pump().map_err(|e| anyhow!(e))?;
        log::info!(
            "opened {}x{} whorl window",
            self.width_px,
            self.height_px
        );
        let mut renderer = CanvasRenderer::new(self.reveal, self.vanish);
        let mut tracker = KeyTracker::new();
        'running: loop {
            let frame_start = Instant::now();
            let mut events = poll_extra_events();
            for event in event_pump.poll_iter() {
                match event {
                    Event::Quit { .. } => break 'running,
                    Event::KeyDown {
                        scancode: Some(scancode),
                        repeat: false,
                        ..
                    } => {
                        if let Some(key) = key_for_scancode(scancode) {
                            events.extend(tracker.transition(key, true));
                        }
                    }
                    Event::KeyUp {
                        scancode: Some(scancode),
                        ..
                    } => {
                        if let Some(key) = key_for_scancode(scancode) {
                            events.extend(tracker.transition(key, false));
                        }
                    }
                    Event::MouseMotion { x, y, .. } => {
                        stage.set_pointer(
                            f64::from(x) / f64::from(self.width_px),
                            f64::from(y) / f64::from(self.height_px),
                        );
                    }
                    _ => (),
                }
            }
            stage.handle_events(&mut renderer, &events);
            let now = Instant::now();
            stage.tick(&mut renderer, now);
            canvas.set_draw_color(Color::RGB(0, 0, 0));
            canvas.clear();
            renderer.draw(&mut canvas, now);
            canvas.present();
            if let Some(until_next_frame) =
                FRAME_DURATION.checked_sub(frame_start.elapsed())
            {
                thread::sleep(until_next_frame);
            }
        }
        Ok(())
    }
}
