//! Cosmetic drifting circles for the win screen.

use glam::Vec2;

use crate::{config::Config, random::random, rgba, shape::Shape};

/// Slowest drift speed of a circle in pixels per second.
const DRIFT_MIN: f32 = 30.0;
/// Fastest drift speed of a circle in pixels per second.
const DRIFT_MAX: f32 = 90.0;

/// One drifting circle.
#[derive(Debug, Clone)]
struct Drifter {
    /// Visual, always the circle variant.
    shape: Shape,
    /// Movement in pixels per second.
    velocity: Vec2,
}

/// Decorative layer of bouncing circles shown once the puzzle is solved.
///
/// Purely cosmetic, nothing here feeds back into the game state.
#[derive(Debug, Default)]
pub(crate) struct Decor {
    /// All drifting circles.
    drifters: Vec<Drifter>,
}

impl Decor {
    /// Spawn the circles at random positions inside the window.
    pub(crate) fn spawn(&mut self, config: &Config) {
        self.drifters.clear();
        self.drifters.reserve(config.decor_circles);

        for _ in 0..config.decor_circles {
            let radius = random(config.decor_radius_min, config.decor_radius_max);
            let position = Vec2::new(
                random(radius, config.width - radius),
                random(radius, config.height - radius),
            );
            let velocity = Vec2::new(random(-1.0, 1.0), random(-1.0, 1.0)).normalize_or_zero()
                * random(DRIFT_MIN, DRIFT_MAX);
            let color = rgba([
                random(0.4, 1.0),
                random(0.4, 1.0),
                random(0.4, 1.0),
                0.9,
            ]);

            let shape = Shape::circle(position, radius, color);

            self.drifters.push(Drifter { shape, velocity });
        }
    }

    /// Advance the circles, bouncing them off the window bounds and swapping
    /// velocities when two of them touch.
    pub(crate) fn update(&mut self, delta_time: f32, config: &Config) {
        for drifter in &mut self.drifters {
            let position = drifter.shape.position() + drifter.velocity * delta_time;
            drifter.shape.set_position(position);

            // Reflect the velocity on the window bounds
            let aabb = drifter.shape.bounding_box();
            if (aabb.min.x < 0.0 && drifter.velocity.x < 0.0)
                || (aabb.max.x > config.width && drifter.velocity.x > 0.0)
            {
                drifter.velocity.x = -drifter.velocity.x;
            }
            if (aabb.min.y < 0.0 && drifter.velocity.y < 0.0)
                || (aabb.max.y > config.height && drifter.velocity.y > 0.0)
            {
                drifter.velocity.y = -drifter.velocity.y;
            }
        }

        // Exchange velocities between touching pairs
        for first in 1..self.drifters.len() {
            let (head, tail) = self.drifters.split_at_mut(first);
            let lhs = &mut head[first - 1];

            for rhs in tail {
                if lhs.shape.overlaps(&rhs.shape) {
                    std::mem::swap(&mut lhs.velocity, &mut rhs.velocity);
                }
            }
        }
    }

    /// Shapes to draw, in spawn order.
    pub(crate) fn shapes(&self) -> impl Iterator<Item = &Shape> {
        self.drifters.iter().map(|drifter| &drifter.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::Decor;
    use crate::config::Config;

    #[test]
    fn spawns_configured_amount() {
        let config = Config::default();
        let mut decor = Decor::default();
        decor.spawn(&config);

        assert_eq!(decor.shapes().count(), config.decor_circles);
    }

    #[test]
    fn circles_stay_near_the_window() {
        let config = Config::default();
        let mut decor = Decor::default();
        decor.spawn(&config);

        // A couple of simulated seconds of drifting
        for _ in 0..120 {
            decor.update(1.0 / 60.0, &config);
        }

        for shape in decor.shapes() {
            let aabb = shape.bounding_box();
            // Bouncing keeps every circle within a step of the bounds
            assert!(aabb.max.x > 0.0 && aabb.min.x < config.width);
            assert!(aabb.max.y > 0.0 && aabb.min.y < config.height);
        }
    }
}
