/// Titled list of samples shown beside the detail panel.
#[derive(Clone, Debug, Default)]
pub struct SampleListState {
    pub rows: Vec<SampleRowView>,
    /// Index of the row bound to the detail panel, if any.
    pub selected: Option<usize>,
    /// One-shot request to scroll a row into view.
    pub scroll_to: Option<usize>,
}

/// Display data for a single list row.
///
/// Only the derived title is shown in the list; the other fields stay in the
/// detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleRowView {
    pub title: String,
}
