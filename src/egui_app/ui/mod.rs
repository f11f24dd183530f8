//! egui renderer for the application UI.
//!
//! The renderer reads view state the controller prepared and forwards every
//! user action back to it. Detail fields and buttons sit on the left, the
//! titled sample list on the right, a status line along the bottom, and a
//! modal window handles adding samples.

mod add_sample_prompt;
mod detail_panel;
mod samples_panel;
mod status_bar;
pub mod style;

use crate::egui_app::controller::SampleController;
use eframe::egui;

/// Smallest window that still fits the form comfortably.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::Vec2::new(720.0, 440.0);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: SampleController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app over an empty sample store.
    pub fn new() -> Self {
        Self {
            controller: SampleController::new(),
            visuals_set: false,
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Text fields own the arrow keys while focused.
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowDown)) {
            self.controller.nudge_selection(1);
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowUp)) {
            self.controller.nudge_selection(-1);
        }
    }
}

impl Default for EguiApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        if !self.controller.ui.add_prompt.open {
            self.handle_keyboard(ctx);
        }
        self.render_status_bar(ctx);
        egui::SidePanel::right("samples_list")
            .resizable(false)
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| self.render_samples_panel(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.render_detail_panel(ui));
        self.render_add_sample_prompt(ctx);
    }
}
