//! Modal dialog showing the joke (or why there isn't one)

use crate::controller::ControllerSnapshot;
use crate::ui::theme::Theme;
use egui::{Align2, Frame, Id, Key, Label, Order, RichText, Sense, Vec2};

/// Accessible label of the dismiss button
pub const CLOSE_LABEL: &str = "Close";

pub struct JokeModal<'a> {
    snapshot: &'a ControllerSnapshot,
    theme: &'a Theme,
}

impl<'a> JokeModal<'a> {
    pub fn new(snapshot: &'a ControllerSnapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }

    /// Show the modal if it is visible. Returns true when the user asked to dismiss it.
    pub fn show(self, ctx: &egui::Context) -> bool {
        if !self.snapshot.modal_visible {
            return false;
        }

        let theme = self.theme;
        let screen = ctx.screen_rect();

        // Scrim swallows clicks aimed at the button underneath
        egui::Area::new(Id::new("joke_modal_scrim"))
            .order(Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter().rect_filled(screen, 0.0, theme.modal_scrim);
                ui.allocate_rect(screen, Sense::click());
            });

        let mut dismissed = false;

        egui::Window::new("joke")
            .id(Id::new("joke_modal"))
            .title_bar(false)
            .collapsible(false)
            .resizable(false)
            .order(Order::Foreground)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .default_width(320.0)
            .frame(
                Frame::window(&ctx.style())
                    .fill(theme.modal_fill)
                    .rounding(theme.modal_rounding)
                    .inner_margin(theme.modal_padding),
            )
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    let text = self.snapshot.modal.text();
                    ui.add(
                        Label::new(
                            RichText::new(text)
                                .size(theme.modal_text_size)
                                .strong()
                                .color(theme.modal_text),
                        )
                        .wrap(),
                    );

                    ui.add_space(theme.spacing_lg);

                    let close = egui::Button::new(
                        RichText::new(CLOSE_LABEL)
                            .size(18.0)
                            .strong()
                            .color(theme.close_text),
                    )
                    .fill(theme.close_fill)
                    .rounding(theme.close_rounding);

                    if ui.add(close).clicked() {
                        dismissed = true;
                    }
                });
            });

        // Escape behaves like the platform back gesture
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            dismissed = true;
        }

        dismissed
    }
}
