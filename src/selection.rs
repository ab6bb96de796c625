//! Draft/commit multi-selection bounded by a cardinality cap.

use log::{debug, trace};

use crate::source::Item;

/// Holds the committed selection and, while an edit session is open, the
/// draft being mutated by toggles.
///
/// Both selections keep insertion order and never contain the same id twice.
/// The draft never grows beyond [`SelectionCore::max_selection`].
#[derive(Debug, Clone)]
pub struct SelectionCore {
    max_selection: usize,
    committed: Vec<Item>,
    draft: Option<Vec<Item>>,
}

impl SelectionCore {
    pub fn new(max_selection: usize) -> Self {
        Self {
            max_selection,
            committed: Vec::new(),
            draft: None,
        }
    }

    pub fn max_selection(&self) -> usize {
        self.max_selection
    }

    pub fn committed(&self) -> &[Item] {
        &self.committed
    }

    /// The draft of the open edit session, if any.
    pub fn draft(&self) -> Option<&[Item]> {
        self.draft.as_deref()
    }

    /// The selection the UI should display right now: the draft while editing,
    /// otherwise the committed selection.
    pub fn current(&self) -> &[Item] {
        self.draft.as_deref().unwrap_or(&self.committed)
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.current().iter().any(|item| item.id == id)
    }

    pub fn is_at_capacity(&self) -> bool {
        self.current().len() >= self.max_selection
    }

    /// Whether toggling `id` would be rejected because the cap is reached.
    pub fn is_disabled(&self, id: u64) -> bool {
        self.is_at_capacity() && !self.is_selected(id)
    }

    /// Snapshot the committed selection into a fresh draft.
    pub fn begin_edit(&mut self) {
        self.draft = Some(self.committed.clone());
    }

    /// Add or remove `item` from the draft and return whether it changed.
    ///
    /// Removal is unconditional. Adding past the cap, or toggling without an
    /// open edit session, is silently ignored.
    pub fn toggle(&mut self, item: &Item) -> bool {
        let max_selection = self.max_selection;
        let Some(draft) = self.draft.as_mut() else {
            trace!("ignoring toggle of {} outside an edit session", item.id);
            return false;
        };

        if let Some(position) = draft.iter().position(|entry| entry.id == item.id) {
            draft.remove(position);
            debug!("deselected {} ({} selected)", item.name, draft.len());
            return true;
        }

        if draft.len() >= max_selection {
            trace!("selection cap {max_selection} reached; ignoring {}", item.name);
            return false;
        }

        draft.push(item.clone());
        debug!("selected {} ({} selected)", item.name, draft.len());
        true
    }

    /// Promote the draft to the committed selection and end the session.
    pub fn commit(&mut self) {
        if let Some(draft) = self.draft.take() {
            self.committed = draft;
        }
    }

    /// Drop the draft; the committed selection is left untouched.
    pub fn discard(&mut self) {
        self.draft = None;
    }

    /// Remove a committed entry outside of an edit session.
    pub fn remove_committed(&mut self, id: u64) -> bool {
        let before = self.committed.len();
        self.committed.retain(|item| item.id != id);
        let removed = self.committed.len() != before;
        if removed {
            debug!("removed {id} from committed selection");
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::generate_items;

    fn ids(items: &[Item]) -> Vec<u64> {
        items.iter().map(|item| item.id).collect()
    }

    #[test]
    fn toggles_respect_cap_and_free_slots() {
        let items = generate_items(3);
        let mut core = SelectionCore::new(2);
        core.begin_edit();

        assert!(core.toggle(&items[0]));
        assert!(core.toggle(&items[1]));
        assert_eq!(ids(core.current()), vec![1, 2]);

        assert!(!core.toggle(&items[2]));
        assert_eq!(ids(core.current()), vec![1, 2]);

        assert!(core.toggle(&items[0]));
        assert_eq!(ids(core.current()), vec![2]);

        assert!(core.toggle(&items[2]));
        assert_eq!(ids(core.current()), vec![2, 3]);
    }

    #[test]
    fn cap_holds_across_long_toggle_sequences() {
        let items = generate_items(7);
        let mut core = SelectionCore::new(3);
        core.begin_edit();

        // Deterministic walk that revisits items so both adds and removals occur.
        let mut index = 0usize;
        for step in 0..200 {
            index = (index * 5 + step + 1) % items.len();
            core.toggle(&items[index]);

            let draft = core.draft().unwrap_or_default();
            assert!(draft.len() <= core.max_selection());
            let mut seen = ids(draft);
            seen.sort_unstable();
            seen.dedup();
            assert_eq!(seen.len(), draft.len(), "duplicate id in draft");
        }
    }

    #[test]
    fn selected_item_is_removed_even_at_capacity() {
        let items = generate_items(2);
        let mut core = SelectionCore::new(1);
        core.begin_edit();
        core.toggle(&items[0]);
        assert!(core.is_at_capacity());
        assert!(core.is_disabled(2));
        assert!(!core.is_disabled(1));

        assert!(core.toggle(&items[0]));
        assert!(core.current().is_empty());
        assert!(!core.is_disabled(2));
    }

    #[test]
    fn discard_restores_snapshot_taken_at_begin() {
        let items = generate_items(5);
        let mut core = SelectionCore::new(3);
        core.begin_edit();
        core.toggle(&items[0]);
        core.toggle(&items[3]);
        core.commit();

        core.begin_edit();
        core.toggle(&items[0]);
        core.toggle(&items[1]);
        core.toggle(&items[2]);
        assert_eq!(ids(core.current()), vec![4, 2, 3]);

        core.discard();
        assert!(!core.is_editing());
        assert_eq!(ids(core.current()), vec![1, 4]);
        assert_eq!(ids(core.committed()), vec![1, 4]);
    }

    #[test]
    fn commit_is_reflected_by_next_edit_session() {
        let items = generate_items(4);
        let mut core = SelectionCore::new(3);
        core.begin_edit();
        core.toggle(&items[2]);
        core.toggle(&items[1]);
        core.commit();

        assert_eq!(ids(core.committed()), vec![3, 2]);
        core.begin_edit();
        assert_eq!(core.draft().map(ids), Some(vec![3, 2]));
    }

    #[test]
    fn toggle_without_session_is_ignored() {
        let items = generate_items(1);
        let mut core = SelectionCore::new(3);
        assert!(!core.toggle(&items[0]));
        assert!(core.committed().is_empty());
    }

    #[test]
    fn remove_committed_drops_matching_chip() {
        let items = generate_items(3);
        let mut core = SelectionCore::new(3);
        core.begin_edit();
        for item in &items {
            core.toggle(item);
        }
        core.commit();

        assert!(core.remove_committed(2));
        assert!(!core.remove_committed(2));
        assert_eq!(ids(core.committed()), vec![1, 3]);
    }
}
