//! Particle Kinematics
//!
//! Position integration, toroidal wraparound with a margin band, and the
//! damped random-walk velocity update that keeps the drift bounded.

use crate::math2d::Vec2;
use crate::util::Rng;

/// Per-axis amplitude of the random acceleration
const ACCEL_JITTER: f64 = 0.05;
/// Linear velocity damping applied each step
const DAMPING: f64 = 0.001;

/// A drifting particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Particle {
    /// Particle at rest at `pos`
    pub const fn at(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::zero(),
        }
    }

    /// One simulation step: integrate position, wrap both axes inside the
    /// canvas-plus-margin band, then nudge the velocity.
    pub fn step(&mut self, width: f64, height: f64, margin: f64, rng: &mut Rng) {
        self.pos = self.pos + self.vel;
        self.pos.x = wrap_coord(self.pos.x, width, margin);
        self.pos.y = wrap_coord(self.pos.y, height, margin);

        // Damped random walk, x axis first so seeded runs reproduce exactly
        self.vel.x += ACCEL_JITTER * (rng.next_f64() - 0.5) - DAMPING * self.vel.x;
        self.vel.y += ACCEL_JITTER * (rng.next_f64() - 0.5) - DAMPING * self.vel.y;
    }
}

/// Wrap a coordinate that left `[-margin, extent + margin]` to the opposite
/// edge, offset by the full band width so motion stays continuous
pub fn wrap_coord(v: f64, extent: f64, margin: f64) -> f64 {
    if v < -margin {
        v + extent + margin * 2.0
    } else if v > extent + margin {
        v - extent - margin * 2.0
    } else {
        v
    }
}
