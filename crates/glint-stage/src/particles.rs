//! Ambient connected-particle background field.
//!
//! A fixed pool of drifting points with pairwise proximity lines, advanced
//! once per frame and redrawn from scratch through a [`Painter`]. The pool
//! is recreated wholesale whenever the surface is resized; individual
//! particles are never destroyed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::painter::Painter;

/// Size of the particle pool.
pub const PARTICLE_COUNT: usize = 50;

/// Maximum distance (in canvas units) at which two particles are joined by
/// a line.
pub const CONNECT_DISTANCE: f64 = 120.0;

/// Global paint transparency used for the whole field.
const FIELD_ALPHA: f32 = 0.3;

/// Velocity component range per axis.
const VELOCITY_RANGE: std::ops::Range<f64> = -0.25..0.25;

/// Radius range; upper bound exclusive.
const RADIUS_RANGE: std::ops::Range<f64> = 0.0..2.0;

/// A single drifting point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

/// The particle pool and the bounds it drifts within.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
    rng: StdRng,
}

impl ParticleField {
    /// Create a field with an OS-seeded pool.
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    /// Create a field with a fixed seed, for deterministic runs and tests.
    pub fn with_seed(width: f64, height: f64, seed: u64) -> Self {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    fn with_rng(width: f64, height: f64, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::with_capacity(PARTICLE_COUNT),
            width,
            height,
            rng,
        };
        field.respawn();
        field
    }

    /// Recreate the entire pool inside the current bounds.
    ///
    /// Degenerate bounds (zero or negative, e.g. a minimized viewport)
    /// leave the pool empty until the next resize to a real size; sampling
    /// an empty coordinate range would otherwise panic.
    fn respawn(&mut self) {
        self.particles.clear();
        if self.width <= 0.0 || self.height <= 0.0 {
            log::debug!(
                "particle field bounds {}x{} are degenerate, pool left empty",
                self.width,
                self.height
            );
            return;
        }
        for _ in 0..PARTICLE_COUNT {
            let particle = Particle {
                x: self.rng.random_range(0.0..self.width),
                y: self.rng.random_range(0.0..self.height),
                vx: self.rng.random_range(VELOCITY_RANGE),
                vy: self.rng.random_range(VELOCITY_RANGE),
                radius: self.rng.random_range(RADIUS_RANGE),
            };
            self.particles.push(particle);
        }
    }

    /// Resize the bounds and recreate the whole pool at the new size.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.respawn();
        log::debug!("particle field resized to {width}x{height}, pool respawned");
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Advance every particle one step, wrapping toroidally at the bounds:
    /// a particle leaving one edge reappears at the opposite edge.
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            if p.x < 0.0 {
                p.x = self.width;
            } else if p.x > self.width {
                p.x = 0.0;
            }
            if p.y < 0.0 {
                p.y = self.height;
            } else if p.y > self.height {
                p.y = 0.0;
            }
        }
    }

    /// Redraw the field: clear, set the global alpha, one circle per
    /// particle, then a line per close pair.
    ///
    /// The pair pass is O(n²) over the fixed 50-particle pool; that is the
    /// intended shape, not an oversight.
    pub fn paint(&self, painter: &mut dyn Painter) {
        painter.clear();
        painter.set_alpha(FIELD_ALPHA);

        for p in &self.particles {
            painter.fill_circle(p.x, p.y, p.radius);
        }

        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
                if dist < CONNECT_DISTANCE {
                    painter.stroke_line(a.x, a.y, b.x, b.y);
                }
            }
        }
    }

    /// Test/back-door constructor: a field with an explicit particle list.
    #[cfg(test)]
    fn with_particles(width: f64, height: f64, particles: Vec<Particle>) -> Self {
        Self {
            particles,
            width,
            height,
            rng: StdRng::seed_from_u64(0),
        }
    }
}
