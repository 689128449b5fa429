//! UI components module
//!
//! The three pieces on screen: the button, the burst overlay and the modal.

pub mod burst_overlay;
pub mod joke_button;
pub mod joke_modal;

pub use burst_overlay::BurstOverlay;
pub use joke_button::{ButtonGesture, JokeButton, BUTTON_LABEL};
pub use joke_modal::{JokeModal, CLOSE_LABEL};
