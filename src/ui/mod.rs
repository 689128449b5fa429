//! UI components and application module
//!
//! This module provides the egui/eframe-based user interface.

mod app;
pub mod components;
mod theme;

pub use app::JokeApp;
pub use components::{BurstOverlay, ButtonGesture, JokeButton, JokeModal};
pub use theme::Theme;
