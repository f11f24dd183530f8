use crate::egui_app::ui::style;
use egui::Color32;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
}

impl StatusBarState {
    /// Default status shown before the user has done anything.
    pub fn idle() -> Self {
        Self {
            text: "Add a sample to get started".into(),
            badge_label: style::status_tone_label(style::StatusTone::Idle).into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
        }
    }
}
