use nalgebra::Point2;

use crate::body::Body;
use crate::moon::Moon;
use crate::planet::Planet;
use crate::render::{Canvas, Rgb};
use crate::{Float, TWO_PI};

const MOON_GREY: Rgb = Rgb(200, 200, 200);
const DAYS_PER_YEAR: Float = 365.0;

// Angular speed for one revolution every `days` time units
#[inline]
fn period(days: Float) -> Float {
    TWO_PI / days
}

/// The bodies being animated, in paint order.
#[derive(Debug, Clone)]
pub struct Scene {
    center: Point2<Float>,
    planets: Vec<Planet>,
}

impl Scene {
    pub fn new(center: Point2<Float>, planets: Vec<Planet>) -> Scene {
        Scene { center, planets }
    }

    pub fn solar_system(center: Point2<Float>) -> Scene {
        let c = &center;

        let sun = Planet::new("Sun", 1989000.0, 50.0, Rgb(255, 255, 0), 0.0, 0.0, c);
        let mercury = Planet::new("Mercury", 0.330, 5.0, Rgb(169, 169, 169), 70.0, period(90.0), c);
        let venus = Planet::new("Venus", 4.87, 10.0, Rgb(255, 165, 0), 110.0, period(225.0), c);
        let earth = Planet::new("Earth", 5.97, 20.0, Rgb(0, 0, 255), 150.0, period(DAYS_PER_YEAR), c)
            .with_moons(vec![Moon::new("Moon", 8.0, MOON_GREY, 50.0, period(30.0))]);
        let mars = Planet::new("Mars", 0.641, 8.0, Rgb(255, 0, 0), 220.0, period(687.0), c)
            .with_moons(vec![
                Moon::new("Phobos", 4.0, MOON_GREY, 30.0, period(0.32)),
                Moon::new("Deimos", 3.0, MOON_GREY, 40.0, period(1.2)),
            ]);
        let jupiter = Planet::new("Jupiter", 1898.0, 30.0, Rgb(255, 165, 0), 350.0, period(12.0 * DAYS_PER_YEAR), c)
            .with_moons(vec![
                Moon::new("Io", 10.0, MOON_GREY, 80.0, period(1.7)),
                Moon::new("Europa", 8.0, MOON_GREY, 100.0, period(3.0)),
                Moon::new("Ganymede", 12.0, MOON_GREY, 130.0, period(5.0)),
                Moon::new("Callisto", 11.0, MOON_GREY, 160.0, period(7.0)),
            ]);
        let saturn = Planet::new("Saturn", 568.0, 25.0, Rgb(255, 255, 0), 480.0, period(29.5 * DAYS_PER_YEAR), c);
        let uranus = Planet::new("Uranus", 86.8, 20.0, Rgb(0, 255, 0), 600.0, period(84.0 * DAYS_PER_YEAR), c);
        let neptune = Planet::new("Neptune", 102.0, 18.0, Rgb(0, 0, 255), 730.0, period(165.0 * DAYS_PER_YEAR), c);

        Scene::new(center, vec![sun, mercury, venus, earth, mars, jupiter, saturn, uranus, neptune])
    }

    #[inline]
    pub fn center(&self) -> &Point2<Float> {
        &self.center
    }

    #[inline]
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn body_count(&self) -> usize {
        self.planets.iter().map(|p| 1 + p.moons().len()).sum()
    }

    pub fn log_bodies(&self) {
        for planet in self.planets.iter() {
            log::debug!(
                "{}: mass {}, radius {}, orbit {} px, period {:.2}",
                planet.name,
                planet.mass,
                planet.radius,
                planet.orbital_radius(),
                revolution_period(planet.orbital_speed()),
            );
            for moon in planet.moons() {
                log::debug!(
                    "  {} around {}: radius {}, orbit {} px, period {:.2}",
                    moon.name,
                    planet.name,
                    moon.radius,
                    moon.orbital_radius(),
                    revolution_period(moon.orbital_speed()),
                );
            }
        }
    }

    // Top-level bodies don't depend on each other, order is irrelevant
    pub fn update(&mut self, frame_rate: Float) {
        let center = self.center;
        for planet in self.planets.iter_mut() {
            planet.update(&center, frame_rate);
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) -> anyhow::Result<()> {
        for planet in self.planets.iter() {
            planet.draw(canvas, &self.center)?;
        }
        Ok(())
    }
}

// Infinite for the sun
fn revolution_period(orbital_speed: Float) -> Float {
    TWO_PI / orbital_speed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::{DrawCall, RecordingCanvas};

    fn center() -> Point2<Float> {
        Point2::new(800.0, 600.0)
    }

    #[test]
    fn solar_system_layout() {
        let scene = Scene::solar_system(center());
        let names: Vec<&str> = scene.planets().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Sun", "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );

        let moons: Vec<usize> = scene.planets().iter().map(|p| p.moons().len()).collect();
        assert_eq!(moons, vec![0, 0, 0, 1, 2, 4, 0, 0, 0]);
        assert_eq!(scene.body_count(), 16);
    }

    #[test]
    fn exactly_one_body_sits_at_the_center() {
        let scene = Scene::solar_system(center());
        let centered: Vec<&Planet> = scene
            .planets()
            .iter()
            .filter(|p| p.orbital_radius() == 0.0 && p.orbital_speed() == 0.0)
            .collect();
        assert_eq!(centered.len(), 1);
        assert_eq!(centered[0].name, "Sun");
    }

    #[test]
    fn sun_stays_put() {
        let mut scene = Scene::solar_system(center());
        for _ in 0..1000 {
            scene.update(60.0);
            assert_eq!(*scene.planets()[0].position(), center());
        }
    }

    #[test]
    fn update_order_does_not_matter() {
        let mut forward = Scene::solar_system(center());
        let mut backward = forward.clone();

        for _ in 0..300 {
            forward.update(60.0);

            let c = backward.center;
            for planet in backward.planets.iter_mut().rev() {
                planet.update(&c, 60.0);
            }
        }

        for (a, b) in forward.planets().iter().zip(backward.planets()) {
            assert_eq!(a.position(), b.position());
            for (ma, mb) in a.moons().iter().zip(b.moons()) {
                assert_eq!(ma.position(), mb.position());
            }
        }
    }

    #[test]
    fn planets_paint_in_sequence() {
        let scene = Scene::solar_system(center());
        let mut canvas = RecordingCanvas::default();
        scene.draw(&mut canvas).unwrap();

        let labels: Vec<String> = canvas
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(labels.len(), 9);
        assert_eq!(labels[0], "Sun");
        assert_eq!(labels[8], "Neptune");

        // 9 planet circles + 7 moon circles, 9 lines, 9 labels
        assert_eq!(canvas.calls.len(), 16 + 9 + 9);
        assert!(canvas.calls.iter().all(|c| !matches!(c, DrawCall::Clear(_))));
    }
}
