//! Flash and particle overlay painted above everything else during a burst.

use crate::constants::PARTICLE_SIZE;
use crate::controller::ControllerSnapshot;
use crate::ui::theme::Theme;
use egui::{Id, LayerId, Order};

pub struct BurstOverlay<'a> {
    snapshot: &'a ControllerSnapshot,
    theme: &'a Theme,
}

impl<'a> BurstOverlay<'a> {
    pub fn new(snapshot: &'a ControllerSnapshot, theme: &'a Theme) -> Self {
        Self { snapshot, theme }
    }

    /// Paint the overlay. Does nothing when no burst is active.
    pub fn paint(self, ctx: &egui::Context) {
        let Some(flash) = self.snapshot.flash_opacity else {
            return;
        };

        let screen = ctx.screen_rect();
        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("burst_overlay")));

        if flash > 0.0 {
            painter.rect_filled(screen, 0.0, self.theme.flash.gamma_multiply(flash));
        }

        let origin = screen.center();
        for particle in &self.snapshot.particles {
            if particle.opacity <= 0.0 {
                continue;
            }
            painter.circle_filled(
                origin + particle.offset,
                PARTICLE_SIZE / 2.0 * particle.scale,
                particle.color.gamma_multiply(particle.opacity),
            );
        }
    }
}
