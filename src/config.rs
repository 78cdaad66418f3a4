use nalgebra::Point2;

use std::path::{Path, PathBuf};

use crate::Float;

pub const SCREEN_DIMS: (u32, u32) = (1600, 1200);
pub const FRAME_RATE: Float = 60.0;
pub const STAR_COUNT: usize = 200;
pub const WINDOW_TITLE: &str = "Solar System Simulation";
pub const LABEL_FONT_SIZE: u32 = 15;
pub const LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// First one that exists is used for planet labels
pub const FONT_SEARCH_PATHS: &[&str] = &[
    "assets/FiraSans-Regular.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub screen_dims: (u32, u32),
    pub frame_rate: Float,
    pub star_count: usize,
    pub star_seed: Option<u64>,     // None = seeded from entropy
    pub title: String,
    pub font_path: Option<PathBuf>,
}

impl SimConfig {
    /// The fixed point top-level bodies revolve around.
    pub fn center(&self) -> Point2<Float> {
        Point2::new(
            (self.screen_dims.0 / 2) as Float,
            (self.screen_dims.1 / 2) as Float,
        )
    }
}

impl Default for SimConfig {
    fn default() -> SimConfig {
        SimConfig {
            screen_dims: SCREEN_DIMS,
            frame_rate: FRAME_RATE,
            star_count: STAR_COUNT,
            star_seed: None,
            title: WINDOW_TITLE.to_owned(),
            font_path: find_font(FONT_SEARCH_PATHS),
        }
    }
}

pub fn find_font(candidates: &[&str]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(Path::new)
        .find(|path| path.is_file())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_uses_integer_halves() {
        let config = SimConfig {
            screen_dims: (1601, 1199),
            ..SimConfig::default()
        };
        assert_eq!(config.center(), Point2::new(800.0, 599.0));
        assert_eq!(SimConfig::default().center(), Point2::new(800.0, 600.0));
    }

    #[test]
    fn missing_fonts_are_skipped() {
        assert_eq!(find_font(&["/definitely/not/here.ttf"]), None);
        assert_eq!(find_font(&[]), None);
    }
}
