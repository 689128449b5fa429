//! Theme and styling for the joke button UI
//!
//! Colors and sizes for the button, burst overlay and modal.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Vec2, Visuals};

/// Application theme configuration
#[derive(Clone, Debug)]
pub struct Theme {
    /// Screen background
    pub background: Color32,

    /// Outer ring around the button
    pub ring_fill: Color32,
    pub ring_stroke: Color32,
    pub ring_radius: f32,

    /// Button face, idle and held
    pub button: Color32,
    pub button_pressed: Color32,
    /// Rim highlights (top edge light, bottom edge dark)
    pub button_rim_light: Color32,
    pub button_rim_dark: Color32,
    pub button_rim_light_pressed: Color32,
    pub button_rim_dark_pressed: Color32,
    pub button_radius: f32,
    pub button_text: Color32,
    pub button_text_size: f32,

    /// Flash overlay color (alpha comes from the burst)
    pub flash: Color32,

    /// Dimming behind the modal
    pub modal_scrim: Color32,
    pub modal_fill: Color32,
    pub modal_text: Color32,
    pub modal_text_size: f32,
    pub modal_rounding: Rounding,
    pub modal_padding: f32,

    /// Close button
    pub close_fill: Color32,
    pub close_text: Color32,
    pub close_rounding: Rounding,

    /// Large spacing
    pub spacing_lg: f32,
    /// Small spacing
    pub spacing_sm: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// The one theme the app ships with
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x22, 0x22, 0x22),

            ring_fill: Color32::from_rgb(0x88, 0x88, 0x88),
            ring_stroke: Color32::from_rgb(0x44, 0x44, 0x44),
            ring_radius: 120.0,

            button: Color32::from_rgb(0xFF, 0x00, 0x00),
            button_pressed: Color32::from_rgb(0xA3, 0x00, 0x00),
            button_rim_light: Color32::from_rgb(0xFF, 0x66, 0x66),
            button_rim_dark: Color32::from_rgb(0x80, 0x00, 0x00),
            button_rim_light_pressed: Color32::from_rgb(0xCC, 0x33, 0x33),
            button_rim_dark_pressed: Color32::from_rgb(0x66, 0x00, 0x00),
            button_radius: 100.0,
            button_text: Color32::WHITE,
            button_text_size: 28.0,

            flash: Color32::WHITE,

            modal_scrim: Color32::from_black_alpha(128),
            modal_fill: Color32::WHITE,
            modal_text: Color32::from_rgb(0x22, 0x22, 0x22),
            modal_text_size: 24.0,
            modal_rounding: Rounding::same(16.0),
            modal_padding: 32.0,

            close_fill: Color32::from_rgb(0xFF, 0xA5, 0x00),
            close_text: Color32::WHITE,
            close_rounding: Rounding::same(8.0),

            spacing_lg: 24.0,
            spacing_sm: 8.0,
        }
    }

    /// Apply this theme to egui
    pub fn apply(&self, ctx: &egui::Context) {
        let mut visuals = Visuals::dark();

        visuals.panel_fill = self.background;
        visuals.window_fill = self.modal_fill;
        visuals.window_rounding = self.modal_rounding;
        visuals.window_stroke = Stroke::NONE;

        visuals.widgets.inactive.weak_bg_fill = self.close_fill;
        visuals.widgets.inactive.bg_fill = self.close_fill;
        visuals.widgets.hovered.weak_bg_fill = self.close_fill.gamma_multiply(0.9);
        visuals.widgets.hovered.bg_fill = self.close_fill.gamma_multiply(0.9);
        visuals.widgets.active.weak_bg_fill = self.close_fill.gamma_multiply(0.8);
        visuals.widgets.active.bg_fill = self.close_fill.gamma_multiply(0.8);

        ctx.set_visuals(visuals);

        // Use default fonts (egui's built-in fonts)
        ctx.set_fonts(egui::FontDefinitions::default());

        let mut style = (*ctx.style()).clone();
        style.spacing.item_spacing = Vec2::splat(self.spacing_sm);
        style.spacing.button_padding = Vec2::new(self.spacing_lg, 10.0);

        style.text_styles.insert(
            egui::TextStyle::Body,
            FontId::new(self.modal_text_size, FontFamily::Proportional),
        );
        style.text_styles.insert(
            egui::TextStyle::Button,
            FontId::new(18.0, FontFamily::Proportional),
        );

        ctx.set_style(style);
    }
}
