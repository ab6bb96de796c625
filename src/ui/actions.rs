use std::time::Instant;

use anyhow::Result;
use log::debug;
use ratatui::crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::builder::PickerOutcome;
use super::components::point_in_rect;
use super::state::DialogFocus;

/// Button order in the dialog's button row.
pub(crate) const CANCEL_BUTTON: usize = 0;
pub(crate) const SAVE_BUTTON: usize = 1;
/// Rows scrolled per mouse wheel notch.
const WHEEL_STEP: isize = 3;

impl<'a> App<'a> {
    /// Process a keyboard event and return an outcome if the user exits.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<PickerOutcome>> {
        self.handle_key_at(key, Instant::now())
    }

    /// Like [`App::handle_key`], with the timestamp used for debouncing.
    pub fn handle_key_at(&mut self, key: KeyEvent, now: Instant) -> Result<Option<PickerOutcome>> {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if control => {
                return Ok(Some(PickerOutcome::aborted(self.selection.committed())));
            }
            KeyCode::F(12) => {
                self.show_logs = !self.show_logs;
                return Ok(None);
            }
            _ => {}
        }

        if self.dialog.is_open() {
            self.handle_dialog_key(key, now);
            return Ok(None);
        }
        Ok(self.handle_main_key(key))
    }

    fn handle_main_key(&mut self, key: KeyEvent) -> Option<PickerOutcome> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                return Some(PickerOutcome::confirmed(self.selection.committed()));
            }
            KeyCode::Enter | KeyCode::Char('c') => {
                self.open_dialog();
            }
            KeyCode::Char('r') => {
                if self.source.reload() {
                    self.sync_with_source();
                }
            }
            KeyCode::Left => self.move_chip_focus(-1),
            KeyCode::Right => self.move_chip_focus(1),
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('x') => {
                let focused = self
                    .chip_focus
                    .and_then(|index| self.selection.committed().get(index))
                    .map(|item| item.id);
                if let Some(id) = focused {
                    self.remove_chip(id);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_dialog_key(&mut self, key: KeyEvent, now: Instant) {
        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return self.cancel_dialog(),
            KeyCode::Enter => return self.save_dialog(),
            KeyCode::Char('s') if control => return self.save_dialog(),
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.previous();
                return;
            }
            _ => {}
        }

        match self.focus {
            DialogFocus::Search => self.handle_search_key(key, now),
            DialogFocus::Filter => self.handle_filter_key(key),
            DialogFocus::List => self.handle_list_key(key, now),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Down {
            self.focus = DialogFocus::List;
            return;
        }
        if self.search_input.input(key) {
            self.filter
                .input_search(self.search_input.text().to_string(), now);
        }
    }

    fn handle_filter_key(&mut self, key: KeyEvent) {
        let current = self.filter.state().threshold;
        match key.code {
            KeyCode::Left | KeyCode::Up => self.set_threshold(current.previous()),
            KeyCode::Right | KeyCode::Char(' ') => self.set_threshold(current.next()),
            KeyCode::Down => self.focus = DialogFocus::List,
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent, now: Instant) {
        let len = self.filtered_len();
        match key.code {
            KeyCode::Up if self.list.selected.unwrap_or(0) == 0 => {
                self.focus = DialogFocus::Search;
            }
            KeyCode::Up => self.list.move_by(-1, len),
            KeyCode::Down => self.list.move_by(1, len),
            KeyCode::PageUp => self.list.move_by(-self.list.page(), len),
            KeyCode::PageDown => self.list.move_by(self.list.page(), len),
            KeyCode::Home => self.list.reset(len),
            KeyCode::End => self.list.move_by(isize::MAX, len),
            KeyCode::Char(' ') => {
                self.toggle_cursor();
            }
            KeyCode::Char(_) | KeyCode::Backspace
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.focus = DialogFocus::Search;
                self.handle_search_key(key, now);
            }
            _ => {}
        }
    }

    fn move_chip_focus(&mut self, delta: isize) {
        let len = self.selection.committed().len();
        if len == 0 {
            self.chip_focus = None;
            return;
        }
        let next = match self.chip_focus {
            Some(index) => (index as isize + delta).clamp(0, len as isize - 1) as usize,
            None if delta < 0 => len - 1,
            None => 0,
        };
        self.chip_focus = Some(next);
    }

    /// Process a mouse event captured by the event loop.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::ScrollUp if self.over_list(column, row) => {
                self.list.move_by(-WHEEL_STEP, self.filtered_len());
            }
            MouseEventKind::ScrollDown if self.over_list(column, row) => {
                self.list.move_by(WHEEL_STEP, self.filtered_len());
            }
            MouseEventKind::Down(MouseButton::Left) if self.dialog.is_open() => {
                self.click_in_dialog(column, row);
            }
            MouseEventKind::Down(MouseButton::Left) => self.click_in_main(column, row),
            _ => {}
        }
    }

    fn over_list(&self, column: u16, row: u16) -> bool {
        self.dialog.is_open()
            && self
                .hits
                .list
                .is_some_and(|area| point_in_rect(column, row, area))
    }

    fn click_in_dialog(&mut self, column: u16, row: u16) {
        if self
            .dialog
            .dismiss_on_outside_click(column, row, &mut self.selection)
            .is_some()
        {
            debug!("dialog dismissed by outside click at ({column}, {row})");
            self.after_dialog_closed();
            return;
        }

        if self
            .hits
            .close
            .is_some_and(|area| point_in_rect(column, row, area))
        {
            return self.cancel_dialog();
        }

        match self.hits.buttons.hit(column, row) {
            Some(CANCEL_BUTTON) => return self.cancel_dialog(),
            Some(SAVE_BUTTON) => return self.save_dialog(),
            _ => {}
        }

        if let Some(id) = hit(&self.hits.chips, column, row) {
            self.remove_chip(id);
            return;
        }

        if let Some(position) = hit(&self.hits.rows, column, row) {
            self.focus = DialogFocus::List;
            self.list.select(position, self.filtered_len());
            self.toggle_at(position);
            return;
        }

        if self
            .hits
            .search
            .is_some_and(|area| point_in_rect(column, row, area))
        {
            self.focus = DialogFocus::Search;
        } else if self
            .hits
            .filter
            .is_some_and(|area| point_in_rect(column, row, area))
        {
            self.focus = DialogFocus::Filter;
            let next = self.filter.state().threshold.next();
            self.set_threshold(next);
        }
    }

    fn click_in_main(&mut self, column: u16, row: u16) {
        if self.hits.buttons.hit(column, row).is_some() {
            self.open_dialog();
            return;
        }
        if let Some(id) = hit(&self.hits.chips, column, row) {
            self.remove_chip(id);
        }
    }
}

fn hit<T: Copy>(targets: &[(ratatui::layout::Rect, T)], column: u16, row: u16) -> Option<T> {
    targets
        .iter()
        .find(|(area, _)| point_in_rect(column, row, *area))
        .map(|(_, value)| *value)
}
