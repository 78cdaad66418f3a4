use nalgebra::Point2;

use crate::body::Body;
use crate::render::{Canvas, Rgb};
use crate::Float;

#[derive(Debug, Clone)]
pub struct Moon {
    pub name: String,
    pub radius: Float,
    pub color: Rgb,
    orbital_radius: Float,
    orbital_speed: Float,
    angle: Float,
    position: Point2<Float>,
}

impl Moon {
    // Placed around the origin until a planet adopts it
    pub fn new(name: &str, radius: Float, color: Rgb, orbital_radius: Float, orbital_speed: Float) -> Moon {
        let mut moon = Moon {
            name: name.to_owned(),
            radius,
            color,
            orbital_radius,
            orbital_speed,
            angle: 0.0,
            position: Point2::origin(),
        };
        moon.place(&Point2::origin());
        moon
    }

    #[inline]
    pub fn update(&mut self, parent_position: &Point2<Float>, frame_rate: Float) {
        self.orbit(parent_position, frame_rate);
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.circle(self.color, self.position, self.radius);
    }
}

impl Body for Moon {
    default_body_gets!(position, angle, orbital_radius, orbital_speed);
}
