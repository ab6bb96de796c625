//! Single-line search field backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

pub struct SearchInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
    pub fn new(initial: impl Into<String>) -> Self {
        let mut textarea = TextArea::new(vec![initial.into()]);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Feed a key to the field. Returns `true` if the text changed.
    ///
    /// Keys that would break the single-line invariant are ignored.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab => false,
            KeyCode::Char('m') if key.modifiers.contains(KeyModifiers::CONTROL) => false,
            _ => self.textarea.input(key),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::new(String::new());
    }

    pub fn render_textarea(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let mut textarea = self.textarea.clone();
        let cursor = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        textarea.set_cursor_style(cursor);
        frame.render_widget(&textarea, area);
    }
}

impl Default for SearchInput<'_> {
    fn default() -> Self {
        Self::new(String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_backspace_edit_text() {
        let mut input = SearchInput::default();
        assert!(input.input(key(KeyCode::Char('a'))));
        assert!(input.input(key(KeyCode::Char('b'))));
        assert!(input.input(key(KeyCode::Backspace)));
        assert_eq!(input.text(), "a");
    }

    #[test]
    fn enter_does_not_insert_newline() {
        let mut input = SearchInput::new("abc");
        assert!(!input.input(key(KeyCode::Enter)));
        assert_eq!(input.text(), "abc");
        input.clear();
        assert_eq!(input.text(), "");
    }
}
