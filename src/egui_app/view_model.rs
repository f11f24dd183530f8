//! Helpers to convert domain data into egui-facing view structs.

use crate::egui_app::state::SampleRowView;
use crate::samples::Sample;

/// Convert a sample into a list row. The list shows the derived title only.
pub fn sample_row(sample: &Sample) -> SampleRowView {
    SampleRowView {
        title: sample.display_title().to_string(),
    }
}

/// Caption for the list header, e.g. `3 samples`.
pub fn list_caption(count: usize) -> String {
    if count == 1 {
        "1 sample".to_string()
    } else {
        format!("{count} samples")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_carries_the_display_title() {
        let sample = Sample::new("Sodium Chloride", "NaCl", "table salt");
        assert_eq!(sample_row(&sample).title, "Sodium Chloride - NaCl");
    }

    #[test]
    fn caption_pluralizes() {
        assert_eq!(list_caption(0), "0 samples");
        assert_eq!(list_caption(1), "1 sample");
        assert_eq!(list_caption(4), "4 samples");
    }
}
