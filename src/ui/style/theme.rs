use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the picker's UI elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Titles, borders and column headers.
    pub header: Style,
    /// The row under the cursor.
    pub row_highlight: Style,
    /// Search prompt and focused controls.
    pub prompt: Style,
    /// Placeholders, hints and empty states.
    pub empty: Style,
    /// Checked rows.
    pub selected: Style,
    /// Rows that cannot be toggled because the cap is reached.
    pub disabled: Style,
    /// Removable selection chips.
    pub chip: Style,
    /// Buttons.
    pub button: Style,
    /// Load failure message.
    pub error: Style,
}

impl Theme {
    #[must_use]
    pub fn empty_style(&self) -> Style {
        self.empty
    }

    /// Style for a control that currently has keyboard focus.
    #[must_use]
    pub fn focused_style(&self) -> Style {
        self.prompt.add_modifier(Modifier::BOLD)
    }

    /// Style for the accent button (Save / Change my choice).
    #[must_use]
    pub fn primary_button_style(&self) -> Style {
        self.button.add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        default_theme()
    }
}

pub const DARK: Theme = Theme {
    header: Style::new().fg(Color::Rgb(203, 213, 225)),
    row_highlight: Style::new()
        .bg(Color::Rgb(51, 65, 85))
        .fg(Color::Rgb(241, 245, 249)),
    prompt: Style::new().fg(Color::Rgb(110, 117, 235)),
    empty: Style::new().fg(Color::Rgb(97, 97, 97)),
    selected: Style::new()
        .fg(Color::Rgb(33, 150, 243))
        .add_modifier(Modifier::BOLD),
    disabled: Style::new()
        .fg(Color::Rgb(97, 97, 97))
        .add_modifier(Modifier::DIM),
    chip: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(224, 224, 224)),
    button: Style::new()
        .fg(Color::White)
        .bg(Color::Rgb(110, 117, 235)),
    error: Style::new()
        .fg(Color::Rgb(244, 67, 54))
        .add_modifier(Modifier::BOLD),
};

pub const LIGHT: Theme = Theme {
    header: Style::new()
        .fg(Color::Rgb(15, 23, 42))
        .bg(Color::Rgb(226, 232, 240)),
    row_highlight: Style::new()
        .bg(Color::Rgb(200, 200, 200))
        .fg(Color::Rgb(1, 1, 1)),
    prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
    empty: Style::new().fg(Color::Rgb(100, 100, 100)),
    selected: Style::new()
        .fg(Color::Rgb(21, 101, 192))
        .add_modifier(Modifier::BOLD),
    disabled: Style::new().fg(Color::Rgb(150, 150, 150)),
    chip: Style::new()
        .fg(Color::Rgb(1, 1, 1))
        .bg(Color::Rgb(224, 224, 224)),
    button: Style::new()
        .fg(Color::White)
        .bg(Color::Rgb(110, 117, 235)),
    error: Style::new().fg(Color::Rgb(211, 47, 47)),
};

/// Describes a theme instance that can be looked up by name.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
    pub name: &'static str,
    pub theme: Theme,
    pub aliases: &'static [&'static str],
}

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
    vec![
        ThemeRegistration {
            name: "default",
            theme: DARK,
            aliases: &["dark"],
        },
        ThemeRegistration {
            name: "light",
            theme: LIGHT,
            aliases: &[],
        },
    ]
}

#[must_use]
pub fn default_theme() -> Theme {
    DARK
}

/// Canonical names of the builtin themes.
#[must_use]
pub fn names() -> Vec<&'static str> {
    builtin_themes().iter().map(|entry| entry.name).collect()
}

/// Find a theme by name or alias, ignoring case and surrounding whitespace.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
    let wanted = name.trim().to_ascii_lowercase();
    builtin_themes()
        .into_iter()
        .find(|entry| entry.name == wanted || entry.aliases.contains(&wanted.as_str()))
        .map(|entry| entry.theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_accepts_aliases_and_case() {
        assert_eq!(by_name("Light"), Some(LIGHT));
        assert_eq!(by_name(" dark "), Some(DARK));
        assert_eq!(by_name("solarized"), None);
    }

    #[test]
    fn names_lists_canonical_entries() {
        assert_eq!(names(), vec!["default", "light"]);
    }
}
