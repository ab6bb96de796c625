//! Core crate exports for building and running the `elpick` terminal picker.
//!
//! The picker is split into a small, UI-agnostic core ([`selection`],
//! [`filter`], [`source`], [`dialog`]) and the [`ui`] module which composes the
//! core into an interactive ratatui application.

pub mod app_dirs;
pub mod dialog;
pub mod error;
pub mod filter;
pub mod logging;
pub mod selection;
pub mod source;
pub mod ui;

pub use dialog::{DialogShell, DialogState, DialogTransition};
pub use error::{FilterTokenError, LoadError};
pub use filter::{Debouncer, FilterPipeline, FilterState, FilteredView, ThresholdFilter};
pub use selection::SelectionCore;
pub use source::{Item, ItemSource, LoadState, SourceOptions};
pub use ui::{App, DEFAULT_MAX_SELECTION, ElementPicker, PickerOutcome, UiLabels};
pub use ui::style::{Theme, builtin_themes, default_theme};
