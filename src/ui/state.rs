use std::time::Instant;

use log::LevelFilter;
use ratatui::layout::Rect;
use throbber_widgets_tui::ThrobberState;
use tui_logger::TuiWidgetState;

use super::components::{ButtonAreas, ListViewport};
use super::config::UiLabels;
use super::input::SearchInput;
use super::style::Theme;
use crate::dialog::DialogShell;
use crate::filter::{FilterPipeline, ThresholdFilter};
use crate::selection::SelectionCore;
use crate::source::{Item, ItemSource};

/// Control owning keyboard input while the dialog is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogFocus {
    #[default]
    Search,
    Filter,
    List,
}

impl DialogFocus {
    pub(crate) fn next(self) -> Self {
        match self {
            Self::Search => Self::Filter,
            Self::Filter => Self::List,
            Self::List => Self::Search,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Self::Search => Self::List,
            Self::Filter => Self::Search,
            Self::List => Self::Filter,
        }
    }
}

/// Screen regions captured during the last draw, used for mouse handling.
#[derive(Debug, Clone, Default)]
pub(crate) struct HitAreas {
    pub rows: Vec<(Rect, usize)>,
    pub chips: Vec<(Rect, u64)>,
    pub buttons: ButtonAreas,
    pub close: Option<Rect>,
    pub search: Option<Rect>,
    pub filter: Option<Rect>,
    pub list: Option<Rect>,
}

/// Aggregate state of the picker widget.
///
/// The `App` composes the item source, the selection core, the filter pipeline
/// and the dialog shell, and keeps the UI affordances that tie them together.
pub struct App<'a> {
    pub source: ItemSource,
    pub selection: SelectionCore,
    pub filter: FilterPipeline,
    pub dialog: DialogShell,
    pub search_input: SearchInput<'a>,
    pub theme: Theme,
    pub(crate) labels: UiLabels,
    pub(crate) focus: DialogFocus,
    pub(crate) list: ListViewport,
    pub(crate) chip_focus: Option<usize>,
    pub(crate) throbber_state: ThrobberState,
    pub(crate) show_logs: bool,
    pub(crate) log_state: TuiWidgetState,
    pub(crate) hits: HitAreas,
}

impl<'a> App<'a> {
    pub fn new(source: ItemSource, selection: SelectionCore, filter: FilterPipeline) -> Self {
        let mut app = Self {
            source,
            selection,
            filter,
            dialog: DialogShell::new(),
            search_input: SearchInput::default(),
            theme: Theme::default(),
            labels: UiLabels::default(),
            focus: DialogFocus::default(),
            list: ListViewport::default(),
            chip_focus: None,
            throbber_state: ThrobberState::default(),
            show_logs: false,
            log_state: TuiWidgetState::new().set_default_display_level(LevelFilter::Debug),
            hits: HitAreas::default(),
        };
        app.sync_with_source();
        app
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_labels(&mut self, labels: UiLabels) {
        self.labels = labels;
    }

    pub fn is_dialog_open(&self) -> bool {
        self.dialog.is_open()
    }

    /// Number of rows in the derived view.
    pub fn filtered_len(&self) -> usize {
        self.filter.view().len()
    }

    /// Items of the derived view, in display order.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.filter.view().iter(self.source.items()).collect()
    }

    /// Advance time-driven state: the item load and the search debounce.
    pub fn tick(&mut self, now: Instant) {
        if self.source.poll() {
            self.sync_with_source();
        }
        if self.filter.tick(self.source.items(), now) {
            self.list.reset(self.filtered_len());
        }
    }

    pub(crate) fn sync_with_source(&mut self) {
        let failed = self.source.error().is_some();
        self.filter.set_source_failed(failed, self.source.items());
        self.list.reset(self.filtered_len());
        self.clamp_chip_focus();
    }

    pub(crate) fn can_open_dialog(&self) -> bool {
        !self.source.is_loading() && self.source.error().is_none()
    }

    pub(crate) fn open_dialog(&mut self) -> bool {
        if !self.can_open_dialog() || !self.dialog.open(&mut self.selection) {
            return false;
        }
        self.search_input.clear();
        self.filter.clear_search(self.source.items());
        self.focus = DialogFocus::Search;
        self.list.reset(self.filtered_len());
        true
    }

    pub(crate) fn save_dialog(&mut self) {
        if self.dialog.save(&mut self.selection).is_some() {
            self.after_dialog_closed();
        }
    }

    pub(crate) fn cancel_dialog(&mut self) {
        if self.dialog.cancel(&mut self.selection).is_some() {
            self.after_dialog_closed();
        }
    }

    pub(crate) fn after_dialog_closed(&mut self) {
        self.hits = HitAreas::default();
        self.clamp_chip_focus();
    }

    pub(crate) fn set_threshold(&mut self, threshold: ThresholdFilter) {
        self.filter.set_threshold(threshold, self.source.items());
        self.list.reset(self.filtered_len());
    }

    /// Toggle the row at a view position unless the cap disables it.
    pub(crate) fn toggle_at(&mut self, position: usize) -> bool {
        let Some(item) = self.filter.view().get(self.source.items(), position) else {
            return false;
        };
        let item = item.clone();
        self.selection.toggle(&item)
    }

    pub(crate) fn toggle_cursor(&mut self) -> bool {
        match self.list.selected {
            Some(position) => self.toggle_at(position),
            None => false,
        }
    }

    /// Remove a chip: toggles the draft while editing, otherwise edits the
    /// committed selection directly.
    pub(crate) fn remove_chip(&mut self, id: u64) -> bool {
        let removed = if self.selection.is_editing() {
            let item = self
                .selection
                .current()
                .iter()
                .find(|item| item.id == id)
                .cloned();
            match item {
                Some(item) => self.selection.toggle(&item),
                None => false,
            }
        } else {
            self.selection.remove_committed(id)
        };
        self.clamp_chip_focus();
        removed
    }

    pub(crate) fn clamp_chip_focus(&mut self) {
        let len = self.selection.committed().len();
        self.chip_focus = match self.chip_focus {
            _ if len == 0 => None,
            Some(index) => Some(index.min(len - 1)),
            None => None,
        };
    }
}
