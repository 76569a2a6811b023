//! Scene Composer
//!
//! Owns the particle field and draws one frame: background clear, an
//! anti-aliased disc per particle, then translucent links between every
//! pair inside the distance band, fading with separation.

use crate::display::PixelBuffer;
use crate::math2d::Vec2;
use crate::particles::Particle;
use crate::raster;
use crate::util::Rng;

pub const NUM_PARTICLES: usize = 100;
pub const PARTICLE_RADIUS: f64 = 3.0;
pub const LINK_RADIUS: f64 = 1.0;
/// Pairs closer than this are linked at full opacity
pub const MIN_DIST: f64 = 40.0;
/// Link range; doubles as the wraparound margin so particles slide off one
/// edge and back in on the other without links popping
pub const MAX_DIST: f64 = 80.0;

const MIN_DIST2: f64 = MIN_DIST * MIN_DIST;
const MAX_DIST2: f64 = MAX_DIST * MAX_DIST;

const BACKGROUND: (u8, u8, u8) = (54, 47, 41);
const FOREGROUND: (u8, u8, u8) = (255, 255, 255);

/// The particle constellation
pub struct Constellation {
    particles: Vec<Particle>,
    rng: Rng,
    width: f64,
    height: f64,
}

impl Constellation {
    /// Scatter NUM_PARTICLES at rest, uniformly across the canvas
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let (w, h) = (width as f64, height as f64);
        let particles = (0..NUM_PARTICLES)
            .map(|_| {
                let x = rng.range_f64(0.0, w);
                let y = rng.range_f64(0.0, h);
                Particle::at(Vec2::new(x, y))
            })
            .collect();
        Self {
            particles,
            rng,
            width: w,
            height: h,
        }
    }

    /// Build a scene from explicit particles (stationary setups, tests)
    pub fn with_particles(width: u32, height: u32, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            rng: Rng::new(1),
            width: width as f64,
            height: height as f64,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance the simulation by one frame
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.step(self.width, self.height, MAX_DIST, &mut self.rng);
        }
    }

    /// Draw the current state into the buffer
    pub fn render(&self, buffer: &mut PixelBuffer) {
        let (br, bg, bb) = BACKGROUND;
        buffer.clear(br, bg, bb);

        let (r, g, b) = FOREGROUND;
        for p in &self.particles {
            raster::fill_circle_aa(buffer, p.pos, PARTICLE_RADIUS, r, g, b);
        }

        for (i, a) in self.particles.iter().enumerate() {
            for other in &self.particles[i + 1..] {
                let d = a.pos - other.pos;
                let d2 = d.dot(&d);
                if let Some(opacity) = link_opacity(d2) {
                    raster::line_aa(buffer, a.pos, other.pos, LINK_RADIUS, opacity, r, g, b);
                }
            }
        }
    }
}

/// Link opacity for a squared pair distance: None at or beyond MAX_DIST
/// (strict draw condition), 1.0 at or under MIN_DIST, linear falloff between
pub fn link_opacity(d2: f64) -> Option<f64> {
    if d2 >= MAX_DIST2 {
        return None;
    }
    if d2 <= MIN_DIST2 {
        Some(1.0)
    } else {
        Some((MAX_DIST2 - d2) / (MAX_DIST2 - MIN_DIST2))
    }
}
