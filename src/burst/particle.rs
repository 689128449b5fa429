//! Burst particles

use super::timeline;
use crate::constants::{
    PARTICLE_DURATION, PARTICLE_MAX_DISTANCE, PARTICLE_MIN_DISTANCE, PARTICLE_OPACITY_VALUES,
    PARTICLE_PALETTE, PARTICLE_SCALE_VALUES, PARTICLE_STAGGER, PARTICLE_STOPS,
};
use egui::{Color32, Vec2};
use rand::Rng;
use std::f32::consts::TAU;
use std::time::Duration;

/// One colored puff flying out from the button.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in the batch; also sets the launch delay
    pub index: usize,
    /// Fill color, drawn from the palette
    pub color: Color32,
    /// Launch angle in radians, in [0, TAU)
    pub angle: f32,
    /// Travel distance in points
    pub distance: f32,
    /// Final displacement from the origin
    pub target: Vec2,
}

impl Particle {
    /// Sample a particle for a display area of `area_height` points.
    pub fn spawn<R: Rng + ?Sized>(index: usize, rng: &mut R, area_height: f32) -> Self {
        let height = area_height.max(0.0);
        let angle = rng.random_range(0.0..TAU);
        let distance =
            rng.random_range(height * PARTICLE_MIN_DISTANCE..=height * PARTICLE_MAX_DISTANCE);
        let color = PARTICLE_PALETTE[rng.random_range(0..PARTICLE_PALETTE.len())];

        Self {
            index,
            color,
            angle,
            distance,
            target: Vec2::new(distance * angle.cos(), distance * angle.sin()),
        }
    }

    /// Launch delay of this particle relative to the burst start
    pub fn delay(&self) -> Duration {
        PARTICLE_STAGGER * self.index as u32
    }

    /// Eased progress in [0, 1] at `elapsed` since the burst started
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        timeline::progress(elapsed, self.delay(), PARTICLE_DURATION)
    }

    /// Sample the particle's transform at `elapsed`
    pub fn visual_at(&self, elapsed: Duration) -> ParticleVisual {
        let progress = self.progress_at(elapsed);
        ParticleVisual {
            index: self.index,
            color: self.color,
            progress,
            offset: self.target * progress,
            scale: timeline::interpolate(&PARTICLE_STOPS, &PARTICLE_SCALE_VALUES, progress),
            opacity: timeline::interpolate(&PARTICLE_STOPS, &PARTICLE_OPACITY_VALUES, progress),
        }
    }
}

/// Render-ready state of a particle at one instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleVisual {
    pub index: usize,
    pub color: Color32,
    pub progress: f32,
    /// Displacement from the burst origin
    pub offset: Vec2,
    pub scale: f32,
    pub opacity: f32,
}
