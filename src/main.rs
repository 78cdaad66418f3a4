#[macro_use]
extern crate derive_new;

#[macro_use]
mod body;
mod config;
mod display;
mod frame_loop;
mod logger;
mod moon;
mod planet;
mod render;
mod scene;
mod star;
mod tools;

use anyhow::{Context, Result};

use std::f64::consts::PI;

use config::SimConfig;
use display::PistonDisplay;
use frame_loop::{FrameLoop, Simulation};
use logger::Logger;

pub type Float = f64;
pub const TWO_PI: Float = PI * 2.0;

fn main() -> Result<()> {
    Logger::init(config::LOG_LEVEL)?;

    let config = SimConfig::default();
    let mut sim = Simulation::new(config.clone());
    log::info!(
        "Solar system with {} bodies around ({}, {}), {} stars, {} fps",
        sim.scene().body_count(),
        sim.scene().center().x,
        sim.scene().center().y,
        sim.stars().len(),
        config.frame_rate,
    );
    sim.scene().log_bodies();

    let display = PistonDisplay::open(&config).context("couldn't set up the display")?;
    let mut frame_loop = FrameLoop::new(display, config.frame_rate);
    frame_loop.run(&mut sim)?;

    // Window and GL context are released here
    drop(frame_loop);
    log::info!("Bye");
    Ok(())
}
