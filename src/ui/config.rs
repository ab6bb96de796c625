/// Textual configuration used when rendering the widget and its dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiLabels {
    /// Heading of the main view.
    pub title: String,
    /// Title rendered on the dialog border.
    pub dialog_title: String,
    /// Placeholder displayed in the empty search field.
    pub search_placeholder: String,
    /// Label to the left of the threshold selector.
    pub filter_label: String,
    /// Button that opens the dialog.
    pub change_button: String,
    pub save_button: String,
    pub cancel_button: String,
    pub loading: String,
    /// Shown in the list when no candidate matches.
    pub no_results: String,
}

impl Default for UiLabels {
    fn default() -> Self {
        Self {
            title: "Select items".to_string(),
            dialog_title: "Select items".to_string(),
            search_placeholder: "Search".to_string(),
            filter_label: "Filter".to_string(),
            change_button: "Change my choice".to_string(),
            save_button: "Save".to_string(),
            cancel_button: "Cancel".to_string(),
            loading: "Loading...".to_string(),
            no_results: "No results".to_string(),
        }
    }
}

impl UiLabels {
    /// Sentence summarising the committed selection size.
    pub fn selected_summary(&self, count: usize) -> String {
        format!("You currently have {count} selected items.")
    }
}
