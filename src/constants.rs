//! Timing, geometry and palette constants for the press/burst/reveal sequence.

use egui::Color32;
use std::time::Duration;

/// Number of particles in one burst
pub const PARTICLE_COUNT: usize = 12;

/// Particle palette (gold through amber)
pub const PARTICLE_PALETTE: [Color32; 5] = [
    Color32::from_rgb(0xFF, 0xD7, 0x00),
    Color32::from_rgb(0xFF, 0xA5, 0x00),
    Color32::from_rgb(0xFF, 0xB3, 0x00),
    Color32::from_rgb(0xFF, 0x98, 0x00),
    Color32::from_rgb(0xFF, 0xC1, 0x07),
];

/// Minimum particle travel as a fraction of the display height
pub const PARTICLE_MIN_DISTANCE: f32 = 0.3;
/// Maximum particle travel as a fraction of the display height
pub const PARTICLE_MAX_DISTANCE: f32 = 0.6;

/// Particle diameter in points
pub const PARTICLE_SIZE: f32 = 80.0;

/// Time for one particle to go from progress 0 to 1
pub const PARTICLE_DURATION: Duration = Duration::from_millis(700);
/// Launch delay added per particle index
pub const PARTICLE_STAGGER: Duration = Duration::from_millis(15);

/// Flash overlay fade-out time
pub const FLASH_DURATION: Duration = Duration::from_millis(350);

/// Burst lifetime; the modal is revealed when it elapses
pub const BURST_DURATION: Duration = Duration::from_millis(1000);

/// Keyframe stops shared by the particle scale and opacity curves
pub const PARTICLE_STOPS: [f32; 3] = [0.0, 0.7, 1.0];
pub const PARTICLE_SCALE_VALUES: [f32; 3] = [0.2, 1.2, 0.7];
pub const PARTICLE_OPACITY_VALUES: [f32; 3] = [0.0, 1.0, 0.0];

/// Button scale while held down
pub const BUTTON_PRESSED_SCALE: f32 = 0.92;
/// Button scale at rest
pub const BUTTON_REST_SCALE: f32 = 1.0;

/// Spring stiffness (natural frequency squared); ~30 rad/s settles in about 200ms
pub const SPRING_STIFFNESS: f32 = 900.0;
/// Distance/velocity below which the spring snaps to its target
pub const SPRING_THRESHOLD: f32 = 0.0005;

/// Text shown when the modal opens with no joke state at all
pub const PLACEHOLDER_TEXT: &str = "Boom! It's a joke 🎉";
