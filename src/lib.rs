//! Itsajoke - a big red button that tells harsh jokes
//!
//! Releasing the button plays a particle burst and, at the same time, asks a
//! hosted chat-completion model for a short joke. When the burst ends the joke
//! (or the reason there isn't one) shows up in a modal.

pub mod burst;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod haptics;
pub mod joke;
pub mod spring;
pub mod ui;

// Re-export error types
pub use error::{JokeError, Result};

pub use config::JokeConfig;
pub use controller::{ControllerSnapshot, InteractionController, JokeResult, ModalContent, Phase};
pub use joke::{JokeEvent, JokeFetcher, JokeWorker};
