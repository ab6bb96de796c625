use anyhow::Result;
use elpick::{ElementPicker, PickerOutcome};

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive picker.
pub(crate) struct PickerWorkflow {
    picker: ElementPicker,
}

impl PickerWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
        let picker = PickerFactory::build(config)?;
        Ok(Self { picker })
    }

    pub(crate) fn run(self) -> Result<PickerOutcome> {
        self.picker.run()
    }
}

/// Helper for translating resolved configuration into a configured `ElementPicker`.
struct PickerFactory;

impl PickerFactory {
    fn build(config: ResolvedConfig) -> Result<ElementPicker> {
        let ResolvedConfig {
            source,
            max_selection,
            debounce,
            initial_filter,
            labels,
            theme,
        } = config;

        ElementPicker::new()
            .with_source_options(source)
            .with_max_selection(max_selection)
            .with_debounce(debounce)
            .with_initial_filter(initial_filter)
            .with_labels(labels)
            .with_theme_name(&theme)
    }
}
