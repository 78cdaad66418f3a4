use nalgebra::Point2;

use crate::Float;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

impl From<Rgb> for [f32; 4] {
    fn from(c: Rgb) -> [f32; 4] {
        [c.0 as f32 / 255.0, c.1 as f32 / 255.0, c.2 as f32 / 255.0, 1.0]
    }
}

/// Surface everything in the scene paints onto. Later calls paint over
/// earlier ones.
pub trait Canvas {
    fn clear(&mut self, color: Rgb);
    fn circle(&mut self, color: Rgb, center: Point2<Float>, radius: Float);
    fn line(&mut self, color: Rgb, from: Point2<Float>, to: Point2<Float>);
    /// Draws `text` centred horizontally on `at`, one font size above it.
    fn text(&mut self, text: &str, color: Rgb, size: u32, at: Point2<Float>) -> anyhow::Result<()>;
}
