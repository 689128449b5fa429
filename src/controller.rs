//! Interaction controller
//!
//! Single owner of all UI state for the press → burst → reveal cycle:
//! - **Press**: compresses the button and pulses haptics
//! - **Release**: starts a burst and hands back a cycle id to fetch a joke for
//! - **Tick**: advances the button spring and fires the reveal timer
//! - **Settle**: records the fetch outcome for the current cycle
//!
//! The renderer never reads fields directly; it asks for a
//! [`ControllerSnapshot`] once per frame.

use crate::burst::{Burst, ParticleVisual};
use crate::constants::{BUTTON_PRESSED_SCALE, BUTTON_REST_SCALE, PLACEHOLDER_TEXT};
use crate::haptics::{HapticFeedback, NoHaptics};
use crate::joke::JokeEvent;
use crate::spring::Spring;
use crate::JokeError;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Where the current press cycle is
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a press
    #[default]
    Idle,
    /// Button held down
    Pressed,
    /// Released; burst playing, joke on its way
    Bursting,
    /// Burst finished, modal on screen
    ModalShown,
}

impl Phase {
    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, Phase::Pressed)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "Idle"),
            Phase::Pressed => write!(f, "Pressed"),
            Phase::Bursting => write!(f, "Bursting"),
            Phase::ModalShown => write!(f, "ModalShown"),
        }
    }
}

/// Outcome of the joke fetch for a cycle
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JokeResult {
    Pending,
    Success(String),
    Failure(String),
}

impl JokeResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, JokeResult::Pending)
    }
}

impl From<Result<String, JokeError>> for JokeResult {
    fn from(outcome: Result<String, JokeError>) -> Self {
        match outcome {
            Ok(text) => JokeResult::Success(text),
            Err(e) => JokeResult::Failure(e.to_string()),
        }
    }
}

/// What the modal body shows
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalContent {
    Loading,
    Joke(String),
    Error(String),
    /// No fetch state at all
    Placeholder,
}

impl ModalContent {
    fn from_result(result: Option<&JokeResult>) -> Self {
        match result {
            None => ModalContent::Placeholder,
            Some(JokeResult::Pending) => ModalContent::Loading,
            Some(JokeResult::Success(text)) => ModalContent::Joke(text.clone()),
            Some(JokeResult::Failure(message)) => ModalContent::Error(message.clone()),
        }
    }

    /// Text to render in the modal
    pub fn text(&self) -> String {
        match self {
            ModalContent::Loading => "Loading...".to_string(),
            ModalContent::Joke(text) => text.clone(),
            ModalContent::Error(message) => format!("Error: {}", message),
            ModalContent::Placeholder => PLACEHOLDER_TEXT.to_string(),
        }
    }
}

/// Immutable view of the controller at one instant
#[derive(Clone, Debug, PartialEq)]
pub struct ControllerSnapshot {
    pub phase: Phase,
    pub button_scale: f32,
    /// Flash overlay opacity; `None` when no burst is active
    pub flash_opacity: Option<f32>,
    pub particles: Vec<ParticleVisual>,
    pub modal_visible: bool,
    /// Live modal body, derived from the current joke result
    pub modal: ModalContent,
    pub cycle: Option<Uuid>,
}

/// Owns and sequences the press/burst/fetch/reveal state
pub struct InteractionController {
    phase: Phase,
    scale: Spring,
    burst: Option<Burst>,
    joke: Option<JokeResult>,
    modal_visible: bool,
    cycle: Option<Uuid>,
    haptics: Box<dyn HapticFeedback>,
    bursts_started: u64,
    modal_reveals: u64,
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionController {
    /// Create a controller without haptics
    pub fn new() -> Self {
        Self::with_haptics(Box::new(NoHaptics))
    }

    pub fn with_haptics(haptics: Box<dyn HapticFeedback>) -> Self {
        Self {
            phase: Phase::Idle,
            scale: Spring::at_rest(BUTTON_REST_SCALE),
            burst: None,
            joke: None,
            modal_visible: false,
            cycle: None,
            haptics,
            bursts_started: 0,
            modal_reveals: 0,
        }
    }

    // === Gestures ===

    /// Button pressed down. Returns false if the press was ignored.
    pub fn on_press_start(&mut self) -> bool {
        if !self.phase.is_idle() {
            debug!("[UI] Press ignored in phase {}", self.phase);
            return false;
        }

        self.phase = Phase::Pressed;
        self.scale.set_target(BUTTON_PRESSED_SCALE);
        self.haptics.impact();
        debug!("[UI] Button pressed");
        true
    }

    /// Button released
    ///
    /// Starts the burst and marks the joke as pending. Returns the new cycle
    /// id; the caller starts a fetch for it and reports back through
    /// [`on_joke_settled`](Self::on_joke_settled).
    pub fn on_press_end<R: Rng + ?Sized>(
        &mut self,
        now: Instant,
        area_height: f32,
        rng: &mut R,
    ) -> Option<Uuid> {
        if !self.phase.is_pressed() {
            debug!("[UI] Release ignored in phase {}", self.phase);
            return None;
        }

        self.scale.set_target(BUTTON_REST_SCALE);

        self.burst = Some(Burst::generate(rng, area_height, now));
        self.bursts_started += 1;

        let cycle = Uuid::new_v4();
        self.cycle = Some(cycle);
        self.joke = Some(JokeResult::Pending);
        self.phase = Phase::Bursting;

        info!("[BURST] Burst started for cycle {}", cycle);
        Some(cycle)
    }

    /// Record a fetch outcome. Outcomes for any cycle but the current one are dropped.
    pub fn on_joke_settled(&mut self, cycle: Uuid, outcome: Result<String, JokeError>) -> bool {
        if self.cycle != Some(cycle) {
            debug!("[JOKE] Dropping stale outcome for cycle {}", cycle);
            return false;
        }

        self.joke = Some(JokeResult::from(outcome));
        true
    }

    /// Apply an event from the joke worker
    pub fn handle_event(&mut self, event: JokeEvent) -> bool {
        match event {
            JokeEvent::Settled { cycle, outcome } => self.on_joke_settled(cycle, outcome),
        }
    }

    /// Close the modal and return to idle
    pub fn dismiss(&mut self) {
        if !self.modal_visible {
            return;
        }
        self.modal_visible = false;
        self.phase = Phase::Idle;
        debug!("[UI] Modal dismissed");
    }

    // === Time ===

    /// Advance by one frame. Returns true while anything is still animating.
    pub fn tick(&mut self, now: Instant, dt: f32) -> bool {
        self.scale.step(dt);

        let burst_done = self.burst.as_ref().is_some_and(|b| b.is_finished(now));
        if burst_done {
            self.burst = None;
            self.modal_visible = true;
            self.modal_reveals += 1;
            self.phase = Phase::ModalShown;
            info!(
                "[BURST] Burst finished, revealing modal (joke pending: {})",
                self.joke.as_ref().is_some_and(JokeResult::is_pending)
            );
        }

        self.is_animating()
    }

    /// Whether the next frame will look different without new input
    pub fn is_animating(&self) -> bool {
        self.burst.is_some()
            || self.scale.is_animating()
            || (self.modal_visible && self.joke.as_ref().is_some_and(JokeResult::is_pending))
    }

    // === Reads ===

    pub fn snapshot(&self, now: Instant) -> ControllerSnapshot {
        ControllerSnapshot {
            phase: self.phase,
            button_scale: self.scale.position,
            flash_opacity: self.burst.as_ref().map(|b| b.flash_opacity(now)),
            particles: self
                .burst
                .as_ref()
                .map(|b| b.visuals(now))
                .unwrap_or_default(),
            modal_visible: self.modal_visible,
            modal: ModalContent::from_result(self.joke.as_ref()),
            cycle: self.cycle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn joke(&self) -> Option<&JokeResult> {
        self.joke.as_ref()
    }

    pub fn burst(&self) -> Option<&Burst> {
        self.burst.as_ref()
    }

    pub fn is_modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn current_cycle(&self) -> Option<Uuid> {
        self.cycle
    }

    pub fn button_scale(&self) -> f32 {
        self.scale.position
    }

    /// Total bursts started since creation
    pub fn bursts_started(&self) -> u64 {
        self.bursts_started
    }

    /// Total times the modal has been revealed since creation
    pub fn modal_reveals(&self) -> u64 {
        self.modal_reveals
    }
}
