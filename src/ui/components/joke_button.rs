//! The big red button
//!
//! Paints the ring and the spring-scaled button face and turns pointer,
//! Space-bar and accessibility input into press/release gestures. The
//! button itself never changes controller state; the caller does.

use crate::controller::ControllerSnapshot;
use crate::ui::theme::Theme;
use egui::{Align2, FontId, Key, Pos2, Rect, Sense, Stroke, Vec2};

/// Accessible label and visible caption
pub const BUTTON_LABEL: &str = "it's a joke";

/// Gesture detected on this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonGesture {
    None,
    /// Pointer or Space went down
    Pressed,
    /// Pointer or Space came back up
    Released,
    /// Press and release in one frame (accessibility click)
    Tapped,
}

/// Big red button component
pub struct JokeButton<'a> {
    snapshot: &'a ControllerSnapshot,
    theme: &'a Theme,
}

impl<'a> JokeButton<'a> {
    pub fn new(snapshot: &'a ControllerSnapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }

    /// Show the button and report what the user did with it
    pub fn show(self, ui: &mut egui::Ui) -> (egui::Response, ButtonGesture) {
        let size = Vec2::splat(self.theme.ring_radius * 2.0 + 12.0);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        let interactive = self.snapshot.phase.is_idle() || self.snapshot.phase.is_pressed();
        let gesture = self.detect_gesture(ui, &response, interactive);

        let held = self.snapshot.phase.is_pressed() || response.is_pointer_button_down_on();
        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, held);
        }

        response.widget_info(|| {
            egui::WidgetInfo::labeled(egui::WidgetType::Button, interactive, BUTTON_LABEL)
        });

        (response, gesture)
    }

    fn detect_gesture(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        interactive: bool,
    ) -> ButtonGesture {
        let id = response.id.with("held");
        let was_down = ui.data(|d| d.get_temp::<bool>(id).unwrap_or(false));

        // Space only counts when nothing else has keyboard focus
        let space_down = ui.input(|i| i.key_down(Key::Space))
            && ui.memory(|m| m.focused().is_none());
        let down = interactive && (response.is_pointer_button_down_on() || space_down);

        ui.data_mut(|d| d.insert_temp(id, down));

        match (was_down, down) {
            (false, true) => ButtonGesture::Pressed,
            (true, false) => ButtonGesture::Released,
            (false, false) if interactive && response.clicked() => ButtonGesture::Tapped,
            _ => ButtonGesture::None,
        }
    }

    fn paint(&self, ui: &egui::Ui, rect: Rect, held: bool) {
        let painter = ui.painter();
        let center = rect.center();
        let theme = self.theme;

        // Fixed outer ring
        painter.circle(
            center,
            theme.ring_radius,
            theme.ring_fill,
            Stroke::new(6.0, theme.ring_stroke),
        );

        let (face, rim_light, rim_dark) = if held {
            (
                theme.button_pressed,
                theme.button_rim_light_pressed,
                theme.button_rim_dark_pressed,
            )
        } else {
            (theme.button, theme.button_rim_light, theme.button_rim_dark)
        };

        let scale = self.snapshot.button_scale;
        let radius = theme.button_radius * scale;

        // Rim: dark lip below, light lip above, face on top
        painter.circle_filled(center + Vec2::new(0.0, 4.0 * scale), radius, rim_dark);
        painter.circle_filled(center - Vec2::new(0.0, 3.0 * scale), radius - 2.0, rim_light);
        painter.circle_filled(center, radius - 5.0 * scale, face);

        painter.text(
            Pos2::new(center.x, center.y),
            Align2::CENTER_CENTER,
            BUTTON_LABEL,
            FontId::proportional(theme.button_text_size * scale),
            theme.button_text,
        );
    }
}
