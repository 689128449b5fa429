//! Main application struct and eframe integration
//!
//! This module contains the JokeApp that implements eframe::App.

use crate::controller::InteractionController;
use crate::joke::{HttpTransport, JokeWorker, Transport};
use crate::ui::components::{BurstOverlay, ButtonGesture, JokeButton, JokeModal};
use crate::ui::theme::Theme;
use egui::CentralPanel;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Main application
pub struct JokeApp<T: Transport = HttpTransport> {
    /// Press/burst/reveal state
    controller: InteractionController,
    /// Runs joke fetches in the background
    worker: JokeWorker<T>,
    /// UI theme
    theme: Theme,
    /// Last frame time for spring integration
    last_frame_time: Instant,
}

impl<T: Transport> JokeApp<T> {
    /// Create a new application
    pub fn new(cc: &eframe::CreationContext<'_>, worker: JokeWorker<T>) -> Self {
        Self::with_context(&cc.egui_ctx, worker)
    }

    /// Create the application against an existing egui context
    pub fn with_context(ctx: &egui::Context, mut worker: JokeWorker<T>) -> Self {
        let theme = Theme::dark();
        theme.apply(ctx);

        // Wake the UI as soon as a joke settles
        let repaint_ctx = ctx.clone();
        worker.set_repaint(Arc::new(move || repaint_ctx.request_repaint()));

        info!("[UI] Joke button ready");

        Self {
            controller: InteractionController::new(),
            worker,
            theme,
            last_frame_time: Instant::now(),
        }
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    /// Drain settled fetches into the controller
    fn poll_events(&mut self) {
        while let Some(event) = self.worker.try_recv() {
            self.controller.handle_event(event);
        }
    }

    fn handle_gesture(&mut self, gesture: ButtonGesture, now: Instant, area_height: f32) {
        let press = matches!(gesture, ButtonGesture::Pressed | ButtonGesture::Tapped);
        let release = matches!(gesture, ButtonGesture::Released | ButtonGesture::Tapped);

        if press {
            self.controller.on_press_start();
        }
        if release {
            if let Some(cycle) = self
                .controller
                .on_press_end(now, area_height, &mut rand::rng())
            {
                self.worker.request(cycle);
            }
        }
    }

    /// Run one frame: poll, advance, render
    pub fn frame(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame_time).as_secs_f32();
        self.last_frame_time = now;

        self.poll_events();
        let animating = self.controller.tick(now, dt);

        let snapshot = self.controller.snapshot(now);
        let area_height = ctx.screen_rect().height();

        let gesture = CentralPanel::default()
            .frame(egui::Frame::none().fill(self.theme.background))
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    JokeButton::new(&snapshot, &self.theme).show(ui).1
                })
                .inner
            })
            .inner;

        BurstOverlay::new(&snapshot, &self.theme).paint(ctx);

        if JokeModal::new(&snapshot, &self.theme).show(ctx) {
            self.controller.dismiss();
        }

        self.handle_gesture(gesture, now, area_height);

        // Request repaint for animations
        if animating || gesture != ButtonGesture::None {
            ctx.request_repaint();
        }
    }
}

impl<T: Transport> eframe::App for JokeApp<T> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx);
    }
}
