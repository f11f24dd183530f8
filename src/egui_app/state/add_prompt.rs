/// Draft state for the modal add-sample window.
///
/// The prompt is a construct-once component: the draft lives here for the
/// whole session. Cancel closes without clearing; only a successful commit
/// resets the fields.
#[derive(Clone, Debug, Default)]
pub struct AddSamplePromptState {
    pub open: bool,
    pub name: String,
    pub chemical_symbol: String,
    pub notes: String,
    /// Validation message shown inside the window, if any.
    pub error: Option<String>,
}
