//! Visual styling for the picker.
//!
//! Themes are plain [`Theme`] constants looked up by name or alias.

mod theme;

pub use theme::{DARK, LIGHT, Theme, ThemeRegistration, builtin_themes, by_name, default_theme, names};
