use nalgebra::{Point2, Vector2};

use crate::Float;

#[inline]
pub fn get_components(magnitude: Float, angle: Float) -> Vector2<Float> {
    Vector2::new(magnitude * angle.cos(), magnitude * angle.sin())
}

// Point on the circle of `radius` around `center` at `angle` (radians)
#[inline]
pub fn orbit_position(center: &Point2<Float>, radius: Float, angle: Float) -> Point2<Float> {
    center + get_components(radius, angle)
}

#[inline]
pub fn angular_step(orbital_speed: Float, frame_rate: Float) -> Float {
    orbital_speed / frame_rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn orbit_position_matches_parametrisation() {
        let center = Point2::new(800.0, 600.0);
        for &angle in &[0.0, 0.3, PI / 2.0, 2.5, PI, 1.0e6] {
            let p = orbit_position(&center, 150.0, angle);
            assert_eq!(p.x, 800.0 + 150.0 * angle.cos());
            assert_eq!(p.y, 600.0 + 150.0 * angle.sin());
        }
    }

    #[test]
    fn moon_offset_from_parent() {
        let p = orbit_position(&Point2::new(100.0, 100.0), 10.0, 0.0);
        assert_eq!(p, Point2::new(110.0, 100.0));
    }

    #[test]
    fn zero_radius_is_the_center() {
        let center = Point2::new(800.0, 600.0);
        assert_eq!(orbit_position(&center, 0.0, 12.34), center);
    }

    #[test]
    fn angular_step_divides_by_frame_rate() {
        assert_relative_eq!(angular_step(2.0 * PI / 90.0, 60.0), 2.0 * PI / 5400.0, epsilon = 1e-15);
    }
}
