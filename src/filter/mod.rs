//! Client-side filtering of the candidate set.
//!
//! [`FilterState`] is applied by a pure, stable, single-pass predicate filter
//! producing a [`FilteredView`] of indices into the candidate slice. The
//! [`FilterPipeline`] owns the state, debounces text input and keeps the view
//! in sync with the source.

mod debounce;
mod pipeline;
mod threshold;

pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use pipeline::FilterPipeline;
pub use threshold::{THRESHOLD_TOKENS, ThresholdFilter};

use crate::source::Item;

/// Inputs of the filter predicate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub threshold: ThresholdFilter,
}

impl FilterState {
    pub fn new(search_term: impl Into<String>, threshold: ThresholdFilter) -> Self {
        Self {
            search_term: search_term.into(),
            threshold,
        }
    }

    /// Build a reusable predicate with the search term lowercased once.
    pub fn matcher(&self) -> impl Fn(&Item) -> bool + '_ {
        let needle = self.search_term.to_lowercase();
        move |item: &Item| {
            self.threshold.admits(item.id)
                && (needle.is_empty() || item.name.to_lowercase().contains(&needle))
        }
    }
}

/// Filter `items`, keeping candidate order.
#[must_use]
pub fn apply(items: &[Item], state: &FilterState) -> FilteredView {
    let matches = state.matcher();
    let indices = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| matches(item).then_some(index))
        .collect();
    FilteredView { indices }
}

/// The derived, randomly indexable subset of the candidate set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilteredView {
    indices: Vec<usize>,
}

impl FilteredView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Resolve a view position to the candidate it refers to.
    pub fn get<'a>(&self, items: &'a [Item], position: usize) -> Option<&'a Item> {
        let index = *self.indices.get(position)?;
        items.get(index)
    }

    pub fn iter<'a>(&'a self, items: &'a [Item]) -> impl Iterator<Item = &'a Item> + 'a {
        self.indices.iter().filter_map(|index| items.get(*index))
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}
