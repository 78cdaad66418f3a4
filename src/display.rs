use anyhow::{anyhow, Result};
use glutin_window::GlutinWindow;
use graphics::character::CharacterCache;
use graphics::{Context, Transformed, Viewport};
use nalgebra::Point2;
use opengl_graphics::{GlGraphics, GlyphCache, OpenGL, TextureSettings};
use piston::input::{Event, Input};
use piston::window::{Window, WindowSettings};

use crate::config::SimConfig;
use crate::frame_loop::Display;
use crate::render::{Canvas, Rgb};
use crate::Float;

const OPENGL: OpenGL = OpenGL::V3_2;
const LINE_RADIUS: f64 = 0.5;   // 1px wide

pub struct PistonDisplay {
    window: GlutinWindow,
    gl: GlGraphics,
    glyphs: Option<GlyphCache<'static>>,
}

impl PistonDisplay {
    pub fn open(config: &SimConfig) -> Result<PistonDisplay> {
        let (w, h) = config.screen_dims;
        let window: GlutinWindow = WindowSettings::new(config.title.as_str(), [w as f64, h as f64])
            .graphics_api(OPENGL)
            .resizable(false)
            .exit_on_esc(true)
            .build()
            .map_err(|err| anyhow!("failed to open {}x{} window: {}", w, h, err))?;

        let glyphs = match &config.font_path {
            Some(path) => match GlyphCache::new(path, (), TextureSettings::new()) {
                Ok(cache) => Some(cache),
                Err(err) => {
                    log::warn!("Couldn't load font {}: {}. Labels disabled.", path.display(), err);
                    None
                }
            },
            None => {
                log::warn!("No label font found. Labels disabled.");
                None
            }
        };

        log::info!("Opened {}x{} window \"{}\"", w, h, config.title);

        Ok(PistonDisplay {
            window,
            gl: GlGraphics::new(OPENGL),
            glyphs,
        })
    }

    fn viewport(&self) -> Viewport {
        let size = self.window.size();
        let draw_size = self.window.draw_size();
        Viewport {
            rect: [0, 0, draw_size.width as i32, draw_size.height as i32],
            draw_size: [draw_size.width as u32, draw_size.height as u32],
            window_size: [size.width, size.height],
        }
    }
}

impl Display for PistonDisplay {
    fn poll_quit(&mut self) -> bool {
        let mut quit = false;
        while let Some(event) = self.window.poll_event() {
            if let Event::Input(Input::Close(_), _) = event {
                quit = true;
            }
        }
        quit || self.window.should_close()
    }

    fn draw_frame(&mut self, draw: &mut dyn FnMut(&mut dyn Canvas) -> Result<()>) -> Result<()> {
        let viewport = self.viewport();
        let glyphs = self.glyphs.as_mut();

        self.gl.draw(viewport, |context, gl| {
            let mut canvas = PistonCanvas { context, gl, glyphs };
            draw(&mut canvas)
        })
    }

    fn present(&mut self) -> Result<()> {
        self.window.swap_buffers();
        Ok(())
    }
}

// Whole-pixel centers, like the integer surface API this mirrors
#[inline]
fn pixel_center(p: Point2<Float>) -> [f64; 2] {
    [p.x.trunc(), p.y.trunc()]
}

// Box centred on `at.x`, one font size above `at`. Piston draws text from
// the baseline, which sits a third of the font size below the box center.
#[inline]
fn label_origin(at: Point2<Float>, width: f64, size: u32) -> (f64, f64) {
    let size = size as f64;
    (at.x - width / 2.0, at.y - size + size / 3.0)
}

struct PistonCanvas<'a> {
    context: Context,
    gl: &'a mut GlGraphics,
    glyphs: Option<&'a mut GlyphCache<'static>>,
}

impl<'a> Canvas for PistonCanvas<'a> {
    fn clear(&mut self, color: Rgb) {
        graphics::clear(color.into(), self.gl);
    }

    fn circle(&mut self, color: Rgb, center: Point2<Float>, radius: Float) {
        let [x, y] = pixel_center(center);
        graphics::ellipse(
            color.into(),
            graphics::ellipse::circle(x, y, radius),
            self.context.transform,
            self.gl,
        );
    }

    fn line(&mut self, color: Rgb, from: Point2<Float>, to: Point2<Float>) {
        graphics::line(
            color.into(),
            LINE_RADIUS,
            [from.x, from.y, to.x, to.y],
            self.context.transform,
            self.gl,
        );
    }

    fn text(&mut self, text: &str, color: Rgb, size: u32, at: Point2<Float>) -> Result<()> {
        let glyphs: &mut GlyphCache<'static> = match self.glyphs {
            Some(ref mut glyphs) => glyphs,
            None => return Ok(()),
        };

        let width = glyphs
            .width(size, text)
            .map_err(|err| anyhow!("failed to measure label {:?}: {}", text, err))?;
        let (left, baseline) = label_origin(at, width, size);

        graphics::Text::new_color(color.into(), size)
            .draw(
                text,
                glyphs,
                &self.context.draw_state,
                self.context.transform.trans(left, baseline),
                self.gl,
            )
            .map_err(|err| anyhow!("failed to draw label {:?}: {}", text, err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_centers_truncate_toward_zero() {
        assert_eq!(pixel_center(Point2::new(1020.9, 600.7)), [1020.0, 600.0]);
        assert_eq!(pixel_center(Point2::new(800.0, 600.0)), [800.0, 600.0]);

        let [x, y] = pixel_center(Point2::new(-0.5, -3.7));
        assert_eq!(x, 0.0);
        assert!(x.is_sign_negative());
        assert_eq!(y, -3.0);
    }

    #[test]
    fn label_is_centred_on_the_body() {
        let at = Point2::new(1020.0, 600.0);
        let (left, _) = label_origin(at, 40.0, 15);
        assert_eq!(left, 1000.0);
        assert_eq!(left + 40.0 / 2.0, at.x);

        let (left, _) = label_origin(at, 0.0, 15);
        assert_eq!(left, at.x);
    }

    #[test]
    fn label_baseline_sits_one_font_size_up() {
        let (_, baseline) = label_origin(Point2::new(800.0, 600.0), 30.0, 15);
        assert_eq!(baseline, 600.0 - 15.0 + 5.0);

        let (_, baseline) = label_origin(Point2::new(0.0, 0.0), 30.0, 30);
        assert_eq!(baseline, -20.0);
    }
}
