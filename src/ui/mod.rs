//! Interactive terminal UI for the element picker.
//!
//! The [`builder`] module exposes the public-facing [`ElementPicker`] builder.
//! The remaining submodules implement the event loop, rendering, key and mouse
//! handling, and the reusable widgets and style definitions.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod style;

pub use builder::{DEFAULT_MAX_SELECTION, ElementPicker, PickerOutcome};
pub use config::UiLabels;
pub use state::{App, DialogFocus};
