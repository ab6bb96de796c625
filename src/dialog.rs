//! Modal lifecycle mediating between the user and the selection core.

use log::info;
use ratatui::layout::Rect;

use crate::selection::SelectionCore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// How an open dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogTransition {
    Committed,
    Cancelled,
}

/// Closed → Open → {Committed, Cancelled} → Closed.
#[derive(Debug, Clone, Default)]
pub struct DialogShell {
    state: DialogState,
    area: Option<Rect>,
}

impl DialogShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    /// Open the dialog and snapshot the committed selection into a draft.
    ///
    /// Returns `false` if the dialog was already open.
    pub fn open(&mut self, selection: &mut SelectionCore) -> bool {
        if self.is_open() {
            return false;
        }
        selection.begin_edit();
        self.state = DialogState::Open;
        info!("dialog opened with {} committed", selection.committed().len());
        true
    }

    /// Commit the draft and close.
    pub fn save(&mut self, selection: &mut SelectionCore) -> Option<DialogTransition> {
        if !self.is_open() {
            return None;
        }
        selection.commit();
        info!("dialog saved with {} selected", selection.committed().len());
        Some(self.close(DialogTransition::Committed))
    }

    /// Discard the draft and close.
    pub fn cancel(&mut self, selection: &mut SelectionCore) -> Option<DialogTransition> {
        if !self.is_open() {
            return None;
        }
        selection.discard();
        info!("dialog cancelled");
        Some(self.close(DialogTransition::Cancelled))
    }

    /// Cancel if a click at `(column, row)` landed outside the dialog.
    pub fn dismiss_on_outside_click(
        &mut self,
        column: u16,
        row: u16,
        selection: &mut SelectionCore,
    ) -> Option<DialogTransition> {
        let area = self.area?;
        if crate::ui::components::point_in_rect(column, row, area) {
            return None;
        }
        self.cancel(selection)
    }

    /// Remember where the dialog was last drawn for outside-click detection.
    pub fn set_area(&mut self, area: Option<Rect>) {
        self.area = area;
    }

    pub fn area(&self) -> Option<Rect> {
        self.area
    }

    fn close(&mut self, transition: DialogTransition) -> DialogTransition {
        self.state = DialogState::Closed;
        self.area = None;
        transition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::generate_items;

    #[test]
    fn save_commits_draft_and_closes() {
        let items = generate_items(3);
        let mut selection = SelectionCore::new(2);
        let mut dialog = DialogShell::new();

        assert!(dialog.open(&mut selection));
        selection.toggle(&items[1]);
        assert_eq!(dialog.save(&mut selection), Some(DialogTransition::Committed));

        assert_eq!(dialog.state(), DialogState::Closed);
        assert!(!selection.is_editing());
        assert_eq!(selection.committed(), &items[1..2]);
    }

    #[test]
    fn cancel_discards_draft_and_closes() {
        let items = generate_items(3);
        let mut selection = SelectionCore::new(2);
        let mut dialog = DialogShell::new();

        dialog.open(&mut selection);
        selection.toggle(&items[0]);
        assert_eq!(dialog.cancel(&mut selection), Some(DialogTransition::Cancelled));

        assert!(!dialog.is_open());
        assert!(selection.committed().is_empty());
    }

    #[test]
    fn reopening_resnapshots_latest_commit() {
        let items = generate_items(3);
        let mut selection = SelectionCore::new(3);
        let mut dialog = DialogShell::new();

        dialog.open(&mut selection);
        selection.toggle(&items[2]);
        dialog.save(&mut selection);

        dialog.open(&mut selection);
        assert_eq!(selection.draft(), Some(&items[2..3]));
        assert!(!dialog.open(&mut selection), "second open is a no-op");
    }

    #[test]
    fn transitions_while_closed_are_ignored() {
        let mut selection = SelectionCore::new(1);
        let mut dialog = DialogShell::new();
        assert_eq!(dialog.save(&mut selection), None);
        assert_eq!(dialog.cancel(&mut selection), None);
    }

    #[test]
    fn outside_click_cancels_inside_click_does_not() {
        let items = generate_items(1);
        let mut selection = SelectionCore::new(1);
        let mut dialog = DialogShell::new();
        dialog.open(&mut selection);
        dialog.set_area(Some(Rect::new(10, 5, 20, 10)));
        assert_eq!(dialog.area(), Some(Rect::new(10, 5, 20, 10)));
        selection.toggle(&items[0]);

        assert_eq!(dialog.dismiss_on_outside_click(15, 8, &mut selection), None);
        assert!(dialog.is_open());

        assert_eq!(
            dialog.dismiss_on_outside_click(2, 2, &mut selection),
            Some(DialogTransition::Cancelled)
        );
        assert!(selection.committed().is_empty());
        assert_eq!(dialog.area(), None);
    }
}
