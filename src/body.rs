use nalgebra::Point2;

use crate::{tools, Float};

/// Anything that moves on a fixed circular orbit around some center.
///
/// Only the angle is state; the position is derived from it every frame and
/// cached so drawing never has to know what the body orbits.
pub trait Body {
    fn position(&self) -> &Point2<Float>;
    fn position_mut(&mut self) -> &mut Point2<Float>;
    fn angle(&self) -> Float;
    fn angle_mut(&mut self) -> &mut Float;
    fn orbital_radius(&self) -> Float;
    fn orbital_speed(&self) -> Float;

    // Unbounded, no wrap-around. Sub-frame periods jump more than a full turn.
    fn advance(&mut self, frame_rate: Float) {
        *self.angle_mut() += tools::angular_step(self.orbital_speed(), frame_rate);
    }

    fn place(&mut self, center: &Point2<Float>) {
        let position = tools::orbit_position(center, self.orbital_radius(), self.angle());
        *self.position_mut() = position;
    }

    fn orbit(&mut self, center: &Point2<Float>, frame_rate: Float) {
        self.advance(frame_rate);
        self.place(center);
    }
}

// Macro for implementing simple functions for Body trait
macro_rules! default_body_gets {
    ($position:ident, $angle:ident, $orbital_radius:ident, $orbital_speed:ident) => {
        fn position(&self) -> &Point2<Float> { &self.$position }
        fn position_mut(&mut self) -> &mut Point2<Float> { &mut self.$position }
        fn angle(&self) -> Float { self.$angle }
        fn angle_mut(&mut self) -> &mut Float { &mut self.$angle }
        fn orbital_radius(&self) -> Float { self.$orbital_radius }
        fn orbital_speed(&self) -> Float { self.$orbital_speed }
    };
}
