use super::EguiApp;
use super::style;
use eframe::egui::{self, Align2, Color32, RichText};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AddPromptAction {
    None,
    Confirm,
    Cancel,
}

impl EguiApp {
    /// Render the modal add-sample prompt.
    pub(super) fn render_add_sample_prompt(&mut self, ctx: &egui::Context) {
        if !self.controller.ui.add_prompt.open {
            return;
        }

        self.render_add_prompt_backdrop(ctx);

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.controller.cancel_add_prompt();
            return;
        }

        let mut open = true;
        let mut action = AddPromptAction::None;
        egui::Window::new("Add Sample")
            .anchor(Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .default_width(300.0)
            .open(&mut open)
            .show(ctx, |ui| {
                action = self.render_add_prompt_body(ui);
            });

        match action {
            AddPromptAction::Confirm => self.controller.confirm_add_prompt(),
            AddPromptAction::Cancel => self.controller.cancel_add_prompt(),
            AddPromptAction::None => {
                if !open {
                    self.controller.cancel_add_prompt();
                }
            }
        }
    }

    fn render_add_prompt_backdrop(&mut self, ctx: &egui::Context) {
        let rect = ctx.viewport_rect();
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Middle,
            egui::Id::new("add_sample_backdrop_paint"),
        ));
        painter.rect_filled(rect, 0.0, Color32::from_rgba_premultiplied(0, 0, 0, 140));

        // Swallow pointer input so the form behind stays inert while open.
        egui::Area::new(egui::Id::new("add_sample_backdrop_blocker"))
            .order(egui::Order::Middle)
            .fixed_pos(rect.min)
            .show(ctx, |ui| {
                ui.allocate_rect(rect, egui::Sense::click_and_drag());
            });
    }

    fn render_add_prompt_body(&mut self, ui: &mut egui::Ui) -> AddPromptAction {
        ui.set_min_width(300.0);
        let draft = &mut self.controller.ui.add_prompt;

        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.add(
                egui::TextEdit::singleline(&mut draft.name)
                    .hint_text("required")
                    .desired_width(220.0),
            );
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Chem:");
            ui.add(egui::TextEdit::singleline(&mut draft.chemical_symbol).desired_width(120.0));
        });
        ui.add_space(4.0);
        ui.label("Notes:");
        ui.add(
            egui::TextEdit::multiline(&mut draft.notes)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );

        if let Some(error) = draft.error.as_ref() {
            ui.add_space(6.0);
            ui.label(RichText::new(error).color(style::error_text()));
        }

        ui.add_space(10.0);
        let mut action = AddPromptAction::None;
        ui.horizontal(|ui| {
            if ui.button("Confirm").clicked() {
                action = AddPromptAction::Confirm;
            }
            if ui.button("Cancel").clicked() {
                action = AddPromptAction::Cancel;
            }
        });
        action
    }
}
