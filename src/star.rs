use nalgebra::Point2;
use rand::Rng;

use crate::render::{Canvas, Rgb};
use crate::Float;

const STAR_RADIUS: Float = 1.0;

#[derive(new, Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Point2<Float>,
}

impl Star {
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.circle(Rgb::WHITE, self.position, STAR_RADIUS);
    }
}

// Whole-pixel coordinates in [0, width) x [0, height)
pub fn generate_starfield<R: Rng>(count: usize, screen_dims: (u32, u32), rng: &mut R) -> Vec<Star> {
    (0..count)
        .map(|_| {
            let x = rng.gen_range(0..screen_dims.0.max(1));
            let y = rng.gen_range(0..screen_dims.1.max(1));
            Star::new(Point2::new(x as Float, y as Float))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn generates_requested_count_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = generate_starfield(200, (1600, 1200), &mut rng);

        assert_eq!(stars.len(), 200);
        for star in stars.iter() {
            assert!(star.position.x >= 0.0 && star.position.x < 1600.0);
            assert!(star.position.y >= 0.0 && star.position.y < 1200.0);
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let a = generate_starfield(50, (640, 480), &mut StdRng::seed_from_u64(42));
        let b = generate_starfield(50, (640, 480), &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn tiny_screen_keeps_stars_on_pixel_zero() {
        let stars = generate_starfield(10, (1, 1), &mut StdRng::seed_from_u64(1));
        assert!(stars.iter().all(|s| s.position == Point2::new(0.0, 0.0)));
    }

    #[test]
    fn empty_starfield() {
        assert!(generate_starfield(0, (1600, 1200), &mut StdRng::seed_from_u64(3)).is_empty());
    }
}
