use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use std::thread;
use std::time::{Duration, Instant};

use crate::config::{SimConfig, FRAME_RATE};
use crate::render::{Canvas, Rgb};
use crate::scene::Scene;
use crate::star::{self, Star};

const BACKGROUND: Rgb = Rgb::BLACK;

/// Where finished frames go. Implemented by the piston window in `display`.
pub trait Display {
    /// Drains every pending event. True if any of them asked to quit.
    fn poll_quit(&mut self) -> bool;
    fn draw_frame(&mut self, draw: &mut dyn FnMut(&mut dyn Canvas) -> Result<()>) -> Result<()>;
    fn present(&mut self) -> Result<()>;
}

/// Everything the main loop owns: the bodies, the sky and the frame count.
pub struct Simulation {
    config: SimConfig,
    scene: Scene,
    stars: Vec<Star>,
    frame: u64,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Simulation {
        let scene = Scene::solar_system(config.center());
        Self::with_scene(config, scene)
    }

    pub fn with_scene(config: SimConfig, scene: Scene) -> Simulation {
        let mut rng = match config.star_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let stars = star::generate_starfield(config.star_count, config.screen_dims, &mut rng);
        log::debug!("Generated {} stars (seed: {:?})", stars.len(), config.star_seed);

        Simulation {
            config,
            scene,
            stars,
            frame: 0,
        }
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[inline]
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn update(&mut self) {
        self.scene.update(self.config.frame_rate);
        self.frame += 1;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> Result<()> {
        canvas.clear(BACKGROUND);
        for star in self.stars.iter() {
            star.draw(canvas);
        }
        self.scene.draw(canvas)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Holds iterations to a fixed rate by sleeping off whatever is left of the
/// frame interval since the previous tick.
pub struct FramePacer {
    interval: Duration,
    last_tick: Option<Instant>,
}

impl FramePacer {
    // Non-positive or non-finite rates fall back to FRAME_RATE
    pub fn new(frame_rate: f64) -> FramePacer {
        let frame_rate = if frame_rate.is_finite() && frame_rate > 0.0 {
            frame_rate
        } else {
            log::warn!("Invalid frame rate {}, pacing at {} fps", frame_rate, FRAME_RATE);
            FRAME_RATE
        };

        FramePacer {
            interval: Duration::from_secs_f64(1.0 / frame_rate),
            last_tick: None,
        }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // Time since the previous tick, sleep included. None on the first tick.
    pub fn tick(&mut self) -> Option<Duration> {
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                thread::sleep(self.interval - elapsed);
            }
        }

        let now = Instant::now();
        let dt = self.last_tick.map(|last| now.duration_since(last));
        self.last_tick = Some(now);
        dt
    }
}

#[derive(Debug, Default)]
struct FrameTimes {
    sum: Duration,
    samples: u32,
}

impl FrameTimes {
    fn record(&mut self, dt: Duration) {
        self.sum += dt;
        self.samples += 1;
    }

    fn mean(&self) -> Option<Duration> {
        if self.samples == 0 {
            None
        } else {
            Some(self.sum / self.samples)
        }
    }

    fn reset(&mut self) {
        *self = FrameTimes::default();
    }
}

pub struct FrameLoop<D: Display> {
    display: D,
    pacer: FramePacer,
    state: LoopState,
    report_every: u64,
    frame_times: FrameTimes,
}

impl<D: Display> FrameLoop<D> {
    pub fn new(display: D, frame_rate: f64) -> FrameLoop<D> {
        FrameLoop {
            display,
            pacer: FramePacer::new(frame_rate),
            state: LoopState::Running,
            report_every: frame_rate.round().max(1.0) as u64,
            frame_times: FrameTimes::default(),
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[cfg(test)]
    pub fn into_display(self) -> D {
        self.display
    }

    pub fn run(&mut self, sim: &mut Simulation) -> Result<()> {
        while self.step(sim)? == LoopState::Running {}
        log::info!("Stopped after {} frames", sim.frame());
        Ok(())
    }

    /// One iteration: events, update, draw, present, pace.
    pub fn step(&mut self, sim: &mut Simulation) -> Result<LoopState> {
        if self.state == LoopState::Stopped {
            return Ok(self.state);
        }

        if self.display.poll_quit() {
            log::info!("Quit requested");
            self.state = LoopState::Stopped;
            return Ok(self.state);
        }

        sim.update();

        {
            let sim = &*sim;
            self.display.draw_frame(&mut |canvas: &mut dyn Canvas| sim.draw(canvas))?;
        }
        self.display.present()?;

        let dt = self.pacer.tick();
        self.report_timing(sim.frame(), dt);

        Ok(self.state)
    }

    fn report_timing(&mut self, frame: u64, dt: Option<Duration>) {
        if let Some(dt) = dt {
            self.frame_times.record(dt);
        }

        if frame % self.report_every == 0 {
            if let Some(mean) = self.frame_times.mean() {
                log::trace!(
                    "Frame {}: mean frame time {:.2} ms over {} frames (target {:.2} ms)",
                    frame,
                    mean.as_secs_f64() * 1000.0,
                    self.frame_times.samples,
                    self.pacer.interval().as_secs_f64() * 1000.0,
                );
            }
            self.frame_times.reset();
        }
    }
}
