use super::EguiApp;
use super::style;
use crate::egui_app::view_model;
use eframe::egui::{self, Align, RichText, Ui};

impl EguiApp {
    pub(super) fn render_samples_panel(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(
                RichText::new("Samples")
                    .color(palette.text_primary)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(view_model::list_caption(self.controller.len()))
                        .color(palette.text_muted),
                );
            });
        });
        ui.add_space(4.0);
        ui.separator();

        let rows = self.controller.ui.list.rows.clone();
        let selected = self.controller.ui.list.selected;
        let scroll_to = self.controller.ui.list.scroll_to.take();
        egui::ScrollArea::vertical()
            .id_salt("samples_scroll")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                if rows.is_empty() {
                    ui.add_space(8.0);
                    ui.label(RichText::new("No samples yet").color(palette.text_muted));
                    return;
                }
                for (index, row) in rows.iter().enumerate() {
                    let is_selected = Some(index) == selected;
                    ui.push_id(index, |ui| {
                        let response = ui.selectable_label(
                            is_selected,
                            RichText::new(&row.title).color(palette.text_primary),
                        );
                        if Some(index) == scroll_to {
                            response.scroll_to_me(Some(Align::Center));
                        }
                        if response.clicked() {
                            self.controller.select_sample(Some(index));
                        }
                    });
                }
            });
    }
}
