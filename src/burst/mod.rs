//! Particle burst played when the button is released
//!
//! A burst is a flash overlay plus a batch of particles. It lives for a fixed
//! window regardless of whether the individual tweens have finished.

mod particle;
pub mod timeline;

pub use particle::{Particle, ParticleVisual};

use crate::constants::{BURST_DURATION, PARTICLE_COUNT};
use rand::Rng;
use std::time::{Duration, Instant};
use tracing::debug;

/// A single time-bounded burst
#[derive(Debug, Clone)]
pub struct Burst {
    started_at: Instant,
    particles: Vec<Particle>,
}

impl Burst {
    /// Generate a full batch of particles for a display `area_height` points tall
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, area_height: f32, started_at: Instant) -> Self {
        let particles: Vec<Particle> = (0..PARTICLE_COUNT)
            .map(|i| Particle::spawn(i, rng, area_height))
            .collect();

        debug!(
            "[BURST] Generated {} particles for area height {:.0}",
            particles.len(),
            area_height
        );

        Self {
            started_at,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Time since the burst started (zero if `now` is earlier)
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    /// Whether the burst window has run out
    pub fn is_finished(&self, now: Instant) -> bool {
        self.elapsed(now) >= BURST_DURATION
    }

    pub fn flash_opacity(&self, now: Instant) -> f32 {
        timeline::flash_opacity(self.elapsed(now))
    }

    pub fn visuals(&self, now: Instant) -> Vec<ParticleVisual> {
        let elapsed = self.elapsed(now);
        self.particles.iter().map(|p| p.visual_at(elapsed)).collect()
    }
}
