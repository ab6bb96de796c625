use std::time::Duration;

use anyhow::{Result, anyhow};
use serde::Serialize;

use super::App;
use super::config::UiLabels;
use super::style::{Theme, by_name};
use crate::filter::{DEFAULT_DEBOUNCE, FilterPipeline, ThresholdFilter};
use crate::selection::SelectionCore;
use crate::source::{Item, ItemSource, SourceOptions};

/// Default cap on the number of selected items.
pub const DEFAULT_MAX_SELECTION: usize = 3;

/// Result of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickerOutcome {
    /// `false` when the user aborted instead of finishing normally.
    pub confirmed: bool,
    /// Committed selection at exit, in selection order.
    pub selection: Vec<Item>,
}

impl PickerOutcome {
    pub fn confirmed(selection: &[Item]) -> Self {
        Self {
            confirmed: true,
            selection: selection.to_vec(),
        }
    }

    pub fn aborted(selection: &[Item]) -> Self {
        Self {
            confirmed: false,
            selection: selection.to_vec(),
        }
    }
}

/// A small builder for configuring the element picker before running it.
pub struct ElementPicker {
    source: SourceOptions,
    max_selection: usize,
    debounce: Duration,
    initial_filter: ThresholdFilter,
    labels: UiLabels,
    theme: Option<Theme>,
    initial_selection: Vec<Item>,
}

impl ElementPicker {
    pub fn new() -> Self {
        Self {
            source: SourceOptions::default(),
            max_selection: DEFAULT_MAX_SELECTION,
            debounce: DEFAULT_DEBOUNCE,
            initial_filter: ThresholdFilter::None,
            labels: UiLabels::default(),
            theme: None,
            initial_selection: Vec::new(),
        }
    }

    pub fn with_source_options(mut self, options: SourceOptions) -> Self {
        self.source = options;
        self
    }

    pub fn with_max_selection(mut self, max_selection: usize) -> Self {
        self.max_selection = max_selection;
        self
    }

    /// Quiet period before a typed search term is applied.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_initial_filter(mut self, filter: ThresholdFilter) -> Self {
        self.initial_filter = filter;
        self
    }

    /// Items committed before the dialog is first opened.
    pub fn with_initial_selection(mut self, items: Vec<Item>) -> Self {
        self.initial_selection = items;
        self
    }

    pub fn with_labels(mut self, labels: UiLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Select a builtin theme by name or alias.
    pub fn with_theme_name(mut self, name: &str) -> Result<Self> {
        let theme = by_name(name).ok_or_else(|| anyhow!("unknown theme '{name}'"))?;
        self.theme = Some(theme);
        Ok(self)
    }

    /// Assemble the [`App`] without touching the terminal.
    pub fn build<'a>(self) -> App<'a> {
        let mut selection = SelectionCore::new(self.max_selection);
        if !self.initial_selection.is_empty() {
            selection.begin_edit();
            for item in &self.initial_selection {
                if !selection.is_selected(item.id) {
                    selection.toggle(item);
                }
            }
            selection.commit();
        }
        let filter = FilterPipeline::new(self.debounce).with_threshold(self.initial_filter);
        let mut app = App::new(ItemSource::spawn(self.source), selection, filter);
        app.set_labels(self.labels);
        if let Some(theme) = self.theme {
            app.set_theme(theme);
        }
        app
    }

    /// Run the interactive picker with the configured options.
    pub fn run(self) -> Result<PickerOutcome> {
        let mut app = self.build();
        app.run()
    }
}

impl Default for ElementPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::generate_items;

    #[test]
    fn initial_selection_respects_the_cap() {
        let app = ElementPicker::new()
            .with_max_selection(2)
            .with_source_options(SourceOptions {
                never_resolve: true,
                ..Default::default()
            })
            .with_initial_selection(generate_items(4))
            .build();
        let ids: Vec<_> = app.selection.committed().iter().map(|item| item.id).collect();
        assert_eq!(ids, [1, 2]);
        assert!(!app.selection.is_editing());
    }

    #[test]
    fn duplicate_initial_items_are_seeded_once() {
        let items = generate_items(2);
        let app = ElementPicker::new()
            .with_source_options(SourceOptions {
                never_resolve: true,
                ..Default::default()
            })
            .with_initial_selection(vec![items[0].clone(), items[0].clone(), items[1].clone()])
            .build();
        let ids: Vec<_> = app.selection.committed().iter().map(|item| item.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn explicit_theme_is_applied() {
        let light = by_name("light").unwrap();
        let app = ElementPicker::new()
            .with_source_options(SourceOptions {
                never_resolve: true,
                ..Default::default()
            })
            .with_theme(light)
            .build();
        assert_eq!(app.theme, light);
    }

    #[test]
    fn unknown_theme_is_an_error() {
        assert!(ElementPicker::new().with_theme_name("light").is_ok());
        let err = ElementPicker::new().with_theme_name("neon").err().unwrap();
        assert_eq!(err.to_string(), "unknown theme 'neon'");
    }
}
