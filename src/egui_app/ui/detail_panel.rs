use super::EguiApp;
use super::style;
use eframe::egui::{self, RichText, Ui};

impl EguiApp {
    pub(super) fn render_detail_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let editable = self.controller.has_selection();

        ui.add_space(6.0);
        ui.label(
            RichText::new("Sample Details")
                .color(palette.text_primary)
                .strong(),
        );
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.label("Sample Name:");
            let response = ui.add_enabled(
                editable,
                egui::TextEdit::singleline(&mut self.controller.ui.detail.name)
                    .desired_width(260.0),
            );
            if response.changed() {
                self.controller.apply_name_edit();
            }
        });
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Chemical Symbol:");
            let response = ui.add_enabled(
                editable,
                egui::TextEdit::singleline(&mut self.controller.ui.detail.chemical_symbol)
                    .desired_width(140.0),
            );
            if response.changed() {
                self.controller.apply_symbol_edit();
            }
        });
        ui.add_space(4.0);
        ui.label("Notes:");
        let response = ui.add_enabled(
            editable,
            egui::TextEdit::multiline(&mut self.controller.ui.detail.notes)
                .desired_rows(6)
                .desired_width(f32::INFINITY),
        );
        if response.changed() {
            self.controller.apply_notes_edit();
        }
        if !editable && !self.controller.ui.detail.name.is_empty() {
            ui.add_space(4.0);
            ui.label(
                RichText::new("Removed sample shown for reference; select a row to edit")
                    .color(palette.text_muted),
            );
        }

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            if ui.button("Add Sample").clicked() {
                self.controller.open_add_prompt();
            }
            if ui.button("Remove Sample").clicked() {
                self.controller.remove_selected_sample();
            }
        });
    }
}
