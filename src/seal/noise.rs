//! Worn-ink speckle texture.
//!
//! Particles are punched out of the finished plate (destination-out), so they
//! read as gaps in the ink rather than dots on top of it. Placement is random
//! by nature; callers inject the generator so tests can seed it.

#[cfg(test)]
#[path = "noise_test.rs"]
mod noise_test;

use rand::Rng;

use crate::consts::{MAX_NOISE_PARTICLES, NOISE_DENSITY, NOISE_MAX_RADIUS, NOISE_MIN_RADIUS};
use crate::geom::{Point, Size};

/// One circular hole in the plate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub center: Point,
    pub radius: f64,
}

/// Number of particles for `intensity` (0–100) over `size`, capped at
/// [`MAX_NOISE_PARTICLES`].
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn particle_count(size: Size, intensity: f64) -> usize {
    if intensity.is_nan() || intensity <= 0.0 || !size.is_positive() {
        return 0;
    }
    let amount = (intensity.min(100.0) / 100.0) * size.area() * NOISE_DENSITY;
    (amount.ceil() as usize).min(MAX_NOISE_PARTICLES)
}

/// Scatter particles uniformly over `size`.
pub fn scatter<R: Rng + ?Sized>(size: Size, intensity: f64, rng: &mut R) -> Vec<Particle> {
    let count = particle_count(size, intensity);
    let spread = NOISE_MAX_RADIUS - NOISE_MIN_RADIUS;
    (0..count)
        .map(|_| Particle {
            center: Point::new(rng.random::<f64>() * size.width, rng.random::<f64>() * size.height),
            radius: NOISE_MIN_RADIUS + rng.random::<f64>() * spread,
        })
        .collect()
}
