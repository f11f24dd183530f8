//! Form controller for the sample manager.
//!
//! Owns the [`SampleStore`] and the render-facing [`UiState`], and mediates
//! every user action: selection, inline edits, and the add/remove flows. The
//! renderer never touches the store; it calls methods here and reads the
//! refreshed view state on the next frame. Everything is synchronous and
//! headless-testable.

use crate::egui_app::state::*;
use crate::egui_app::ui::style::{self, StatusTone};
use crate::egui_app::view_model;
use crate::samples::{self, Sample, SampleStore};

/// Maintains app state and bridges the sample store to the egui UI.
pub struct SampleController {
    pub ui: UiState,
    store: SampleStore,
    selected: Option<usize>,
}

impl Default for SampleController {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleController {
    /// Create a controller over an empty store.
    pub fn new() -> Self {
        Self {
            ui: UiState::default(),
            store: SampleStore::new(),
            selected: None,
        }
    }

    /// Number of samples in the store.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Whether the store holds no samples.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Borrow the sample at `index`.
    pub fn sample(&self, index: usize) -> Option<&Sample> {
        self.store.get(index)
    }

    /// Index of the row bound to the detail panel, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Whether a row is currently bound to the detail panel.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Change the selection and bind the detail fields to the new row.
    ///
    /// Out-of-range indices clear the selection. Selecting `None` leaves the
    /// detail buffers untouched so removed data stays readable.
    pub fn select_sample(&mut self, index: Option<usize>) {
        let index = index.filter(|i| *i < self.store.len());
        self.selected = index;
        self.ui.list.selected = index;
        self.ui.list.scroll_to = index;
        if let Some(i) = index {
            self.bind_detail_to(i);
        }
    }

    /// Move the selection up or down, clamping at the ends of the list.
    pub fn nudge_selection(&mut self, delta: isize) {
        if self.store.is_empty() {
            return;
        }
        let last = self.store.len() - 1;
        let next = match self.selected {
            Some(current) => (current as isize + delta).clamp(0, last as isize) as usize,
            None if delta < 0 => last,
            None => 0,
        };
        self.select_sample(Some(next));
    }

    /// Write the edited name back to the selected row and refresh its title.
    ///
    /// The list selection is deliberately left untouched: updating the
    /// displayed title must not lose or shift the selection, or the next
    /// keystroke would land on the wrong row.
    pub fn apply_name_edit(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        let name = self.ui.detail.name.clone();
        self.store.set_name(index, name);
        self.refresh_row_title(index);
    }

    /// Symmetric to [`Self::apply_name_edit`] for the chemical symbol.
    pub fn apply_symbol_edit(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        let symbol = self.ui.detail.chemical_symbol.clone();
        self.store.set_chemical_symbol(index, symbol);
        self.refresh_row_title(index);
    }

    /// Write edited notes back to the selected row. The title is unaffected.
    pub fn apply_notes_edit(&mut self) {
        let Some(index) = self.selected else {
            return;
        };
        let notes = self.ui.detail.notes.clone();
        self.store.set_notes(index, notes);
    }

    /// Show the add-sample prompt, keeping any draft from a previous cancel.
    pub fn open_add_prompt(&mut self) {
        self.ui.add_prompt.error = None;
        self.ui.add_prompt.open = true;
    }

    /// Commit the prompt draft as a new row, or surface the validation error.
    ///
    /// An empty name keeps the prompt open with the message shown inside it;
    /// the store is not touched. On success the draft is cleared and the
    /// prompt closes.
    pub fn confirm_add_prompt(&mut self) {
        if let Err(error) = samples::validate_new_name(&self.ui.add_prompt.name) {
            self.ui.add_prompt.error = Some(error.to_string());
            return;
        }
        let name = std::mem::take(&mut self.ui.add_prompt.name);
        let symbol = std::mem::take(&mut self.ui.add_prompt.chemical_symbol);
        let notes = std::mem::take(&mut self.ui.add_prompt.notes);
        self.ui.add_prompt.error = None;
        self.ui.add_prompt.open = false;

        let index = self.store.append(name, symbol, notes);
        self.refresh_list_rows();
        let title = self.row_title(index);
        tracing::info!(index, %title, "sample added");
        self.set_status(format!("Added {title}"), StatusTone::Info);
    }

    /// Close the prompt without touching the store or the draft.
    pub fn cancel_add_prompt(&mut self) {
        self.ui.add_prompt.error = None;
        self.ui.add_prompt.open = false;
    }

    /// Remove the selected row.
    ///
    /// The selection is cleared but the detail buffers keep showing the
    /// removed values until the user selects another row. With no selection
    /// this is a no-op that posts a notice.
    pub fn remove_selected_sample(&mut self) {
        let Some(index) = self.selected else {
            self.set_status("Select a sample to remove", StatusTone::Warning);
            return;
        };
        let title = self.row_title(index);
        if !self.store.remove_at(index) {
            return;
        }
        self.selected = None;
        self.refresh_list_rows();
        tracing::info!(index, %title, "sample removed");
        self.set_status(format!("Removed {title}"), StatusTone::Info);
    }

    /// Update the footer status line.
    pub fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status.text = text.into();
        self.ui.status.badge_label = style::status_tone_label(tone).to_string();
        self.ui.status.badge_color = style::status_badge_color(tone);
    }

    fn bind_detail_to(&mut self, index: usize) {
        let Some(sample) = self.store.get(index) else {
            return;
        };
        self.ui.detail.name = sample.name().to_string();
        self.ui.detail.chemical_symbol = sample.chemical_symbol().to_string();
        self.ui.detail.notes = sample.notes().to_string();
    }

    fn refresh_list_rows(&mut self) {
        self.ui.list.rows = self.store.iter().map(view_model::sample_row).collect();
        self.ui.list.selected = self.selected;
    }

    fn refresh_row_title(&mut self, index: usize) {
        let Some(sample) = self.store.get(index) else {
            return;
        };
        let title = sample.display_title().to_string();
        if let Some(row) = self.ui.list.rows.get_mut(index) {
            row.title = title;
        }
    }

    fn row_title(&self, index: usize) -> String {
        self.store
            .get(index)
            .map(|sample| sample.display_title().to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller_with(samples: &[(&str, &str, &str)]) -> SampleController {
        let mut controller = SampleController::new();
        for (name, symbol, notes) in samples {
            controller.ui.add_prompt.name = (*name).to_string();
            controller.ui.add_prompt.chemical_symbol = (*symbol).to_string();
            controller.ui.add_prompt.notes = (*notes).to_string();
            controller.confirm_add_prompt();
        }
        controller
    }

    #[test]
    fn confirming_the_prompt_appends_a_row_and_clears_the_draft() {
        let mut controller = SampleController::new();
        controller.open_add_prompt();
        controller.ui.add_prompt.name = "Sodium Chloride".into();
        controller.ui.add_prompt.chemical_symbol = "NaCl".into();
        controller.ui.add_prompt.notes = "table salt".into();

        controller.confirm_add_prompt();

        assert_eq!(controller.len(), 1);
        assert!(!controller.ui.add_prompt.open);
        assert!(controller.ui.add_prompt.name.is_empty());
        assert!(controller.ui.add_prompt.chemical_symbol.is_empty());
        assert!(controller.ui.add_prompt.notes.is_empty());
        assert_eq!(controller.ui.list.rows[0].title, "Sodium Chloride - NaCl");
    }

    #[test]
    fn confirming_with_an_empty_name_keeps_the_prompt_open() {
        let mut controller = SampleController::new();
        controller.open_add_prompt();
        controller.ui.add_prompt.chemical_symbol = "NaCl".into();

        controller.confirm_add_prompt();

        assert_eq!(controller.len(), 0);
        assert!(controller.ui.add_prompt.open);
        assert_eq!(
            controller.ui.add_prompt.error.as_deref(),
            Some("Please add sample name.")
        );
        // The rejected draft stays put for correction.
        assert_eq!(controller.ui.add_prompt.chemical_symbol, "NaCl");
    }

    #[test]
    fn cancel_keeps_the_draft_for_the_next_open() {
        let mut controller = SampleController::new();
        controller.open_add_prompt();
        controller.ui.add_prompt.name = "Quartz".into();
        controller.cancel_add_prompt();
        assert!(!controller.ui.add_prompt.open);

        controller.open_add_prompt();
        assert_eq!(controller.ui.add_prompt.name, "Quartz");
        assert!(controller.ui.add_prompt.error.is_none());
    }

    #[test]
    fn selecting_a_row_binds_the_detail_fields() {
        let mut controller = controller_with(&[("Water", "H2O", "distilled"), ("Agar", "", "")]);

        controller.select_sample(Some(0));

        assert_eq!(controller.selected_index(), Some(0));
        assert_eq!(controller.ui.detail.name, "Water");
        assert_eq!(controller.ui.detail.chemical_symbol, "H2O");
        assert_eq!(controller.ui.detail.notes, "distilled");
        assert_eq!(controller.ui.list.scroll_to, Some(0));
    }

    #[test]
    fn out_of_range_selection_clears_instead_of_panicking() {
        let mut controller = controller_with(&[("Water", "H2O", "")]);
        controller.select_sample(Some(9));
        assert_eq!(controller.selected_index(), None);
    }

    #[test]
    fn name_edit_updates_the_title_and_keeps_the_selection() {
        let mut controller = controller_with(&[("Sodium Chloride", "NaCl", "")]);
        controller.select_sample(Some(0));

        controller.ui.detail.name = "Table Salt".into();
        controller.apply_name_edit();

        assert_eq!(controller.selected_index(), Some(0));
        assert_eq!(controller.ui.list.selected, Some(0));
        assert_eq!(controller.ui.list.rows[0].title, "Table Salt - NaCl");
        let row = controller.sample(0).unwrap();
        assert_eq!(row.chemical_symbol(), "NaCl");
    }

    #[test]
    fn symbol_edit_updates_the_title_and_keeps_the_name() {
        let mut controller = controller_with(&[("Water", "H2O", "")]);
        controller.select_sample(Some(0));

        controller.ui.detail.chemical_symbol = "D2O".into();
        controller.apply_symbol_edit();

        assert_eq!(controller.ui.list.rows[0].title, "Water - D2O");
        assert_eq!(controller.sample(0).unwrap().name(), "Water");
        assert_eq!(controller.selected_index(), Some(0));
    }

    #[test]
    fn notes_edit_leaves_the_list_row_alone() {
        let mut controller = controller_with(&[("Water", "H2O", "")]);
        controller.select_sample(Some(0));

        controller.ui.detail.notes = "tap water".into();
        controller.apply_notes_edit();

        assert_eq!(controller.sample(0).unwrap().notes(), "tap water");
        assert_eq!(controller.ui.list.rows[0].title, "Water - H2O");
    }

    #[test]
    fn edits_without_a_selection_are_noops() {
        let mut controller = controller_with(&[("Water", "H2O", "")]);
        controller.ui.detail.name = "Ghost".into();
        controller.apply_name_edit();
        assert_eq!(controller.sample(0).unwrap().name(), "Water");
    }

    #[test]
    fn removing_clears_the_selection_but_not_the_detail_fields() {
        let mut controller = controller_with(&[("Water", "H2O", "wet"), ("Agar", "", "")]);
        controller.select_sample(Some(0));

        controller.remove_selected_sample();

        assert_eq!(controller.len(), 1);
        assert_eq!(controller.selected_index(), None);
        assert_eq!(controller.ui.list.selected, None);
        // The safety net: removed data stays readable in the detail panel.
        assert_eq!(controller.ui.detail.name, "Water");
        assert_eq!(controller.ui.detail.notes, "wet");
        // The survivor shifted down to index 0.
        assert_eq!(controller.ui.list.rows[0].title, "Agar - ");
    }

    #[test]
    fn removing_without_a_selection_posts_a_notice() {
        let mut controller = controller_with(&[("Water", "H2O", "")]);
        controller.remove_selected_sample();
        assert_eq!(controller.len(), 1);
        assert_eq!(controller.ui.status.text, "Select a sample to remove");
    }

    #[test]
    fn nudging_moves_and_clamps_the_selection() {
        let mut controller = controller_with(&[("A", "", ""), ("B", "", ""), ("C", "", "")]);

        controller.nudge_selection(1);
        assert_eq!(controller.selected_index(), Some(0));
        controller.nudge_selection(1);
        assert_eq!(controller.selected_index(), Some(1));
        controller.nudge_selection(5);
        assert_eq!(controller.selected_index(), Some(2));
        controller.nudge_selection(-10);
        assert_eq!(controller.selected_index(), Some(0));
    }

    #[test]
    fn nudging_up_with_no_selection_starts_at_the_bottom() {
        let mut controller = controller_with(&[("A", "", ""), ("B", "", "")]);
        controller.nudge_selection(-1);
        assert_eq!(controller.selected_index(), Some(1));
    }
}
