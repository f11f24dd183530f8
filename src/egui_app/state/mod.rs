//! Shared state types for the egui UI.
//!
//! These are plain data structs: the controller fills them in and the
//! renderer reads them. Nothing here talks to the sample store directly.

mod add_prompt;
mod detail;
mod list;
mod status;

pub use add_prompt::*;
pub use detail::*;
pub use list::*;
pub use status::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug)]
pub struct UiState {
    pub status: StatusBarState,
    pub list: SampleListState,
    pub detail: DetailPanelState,
    /// Draft state for the modal add-sample window.
    pub add_prompt: AddSamplePromptState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            list: SampleListState::default(),
            detail: DetailPanelState::default(),
            add_prompt: AddSamplePromptState::default(),
        }
    }
}
