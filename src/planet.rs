use nalgebra::Point2;

use crate::body::Body;
use crate::config::LABEL_FONT_SIZE;
use crate::moon::Moon;
use crate::render::{Canvas, Rgb};
use crate::Float;

const ORBIT_LINE_COLOR: Rgb = Rgb::WHITE;
const LABEL_COLOR: Rgb = Rgb::WHITE;

#[derive(Debug, Clone)]
pub struct Planet {
    pub name: String,
    pub mass: Float,    // Display only, motion ignores it
    pub radius: Float,
    pub color: Rgb,
    orbital_radius: Float,
    orbital_speed: Float,
    angle: Float,
    position: Point2<Float>,
    moons: Vec<Moon>,
}

impl Planet {
    pub fn new(
        name: &str,
        mass: Float,
        radius: Float,
        color: Rgb,
        orbital_radius: Float,
        orbital_speed: Float,
        center: &Point2<Float>,
    ) -> Planet {
        let mut n = Planet {
            name: name.to_owned(),
            mass,
            radius,
            color,
            orbital_radius,
            orbital_speed,
            angle: 0.0,
            position: *center,
            moons: Vec::new(),
        };
        n.place(center);

        n
    }

    pub fn with_moons(mut self, moons: Vec<Moon>) -> Planet {
        for moon in moons {
            self.add_moon(moon);
        }
        self
    }

    pub fn add_moon(&mut self, mut moon: Moon) {
        moon.place(&self.position);
        self.moons.push(moon);
    }

    #[inline]
    pub fn moons(&self) -> &[Moon] {
        &self.moons
    }

    // Planet first, then moons around the planet's new position
    pub fn update(&mut self, center: &Point2<Float>, frame_rate: Float) {
        self.orbit(center, frame_rate);

        let parent = self.position;
        for moon in self.moons.iter_mut() {
            moon.update(&parent, frame_rate);
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, center: &Point2<Float>) -> anyhow::Result<()> {
        canvas.circle(self.color, self.position, self.radius);
        canvas.line(ORBIT_LINE_COLOR, *center, self.position);
        canvas.text(&self.name, LABEL_COLOR, LABEL_FONT_SIZE, self.position)?;

        for moon in self.moons.iter() {
            moon.draw(canvas);
        }

        Ok(())
    }
}

impl Body for Planet {
    default_body_gets!(position, angle, orbital_radius, orbital_speed);
}
