//! Critically damped spring used for the button press scale.

use crate::constants::{SPRING_STIFFNESS, SPRING_THRESHOLD};

/// A spring-driven value with no overshoot.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
}

impl Spring {
    /// Creates a spring resting at `value`.
    pub fn at_rest(value: f32) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
            stiffness: SPRING_STIFFNESS,
        }
    }

    /// Sets the value the spring animates towards.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Advances the spring by `dt` seconds. Returns true if still animating.
    pub fn step(&mut self, dt: f32) -> bool {
        if !self.is_animating() {
            return false;
        }

        // Closed-form critically damped response: x(t) = (c1 + c2 t) e^(-wt)
        let omega = self.stiffness.sqrt();
        let t = dt.max(0.0);
        let c1 = self.position - self.target;
        let c2 = self.velocity + omega * c1;
        let decay = (-omega * t).exp();
        self.position = self.target + (c1 + c2 * t) * decay;
        self.velocity = (c2 - omega * (c1 + c2 * t)) * decay;

        let distance = (self.target - self.position).abs();
        if distance < SPRING_THRESHOLD && self.velocity.abs() < SPRING_THRESHOLD {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }

    /// Returns true while the spring has not settled on its target.
    pub fn is_animating(&self) -> bool {
        self.position != self.target || self.velocity != 0.0
    }
}
