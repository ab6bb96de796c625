use std::time::{Duration, Instant};

use log::debug;

use super::{Debouncer, FilterState, FilteredView, ThresholdFilter, apply};
use crate::source::Item;

/// Owns the applied filter state, the debounced search input and the derived
/// view.
///
/// Callers feed raw input through [`FilterPipeline::input_search`], call
/// [`FilterPipeline::tick`] from the event loop, and [`FilterPipeline::refresh`]
/// whenever the candidate set changes.
#[derive(Debug, Clone)]
pub struct FilterPipeline {
    state: FilterState,
    search_input: Debouncer<String>,
    view: FilteredView,
    source_failed: bool,
}

impl FilterPipeline {
    pub fn new(debounce: Duration) -> Self {
        Self {
            state: FilterState::default(),
            search_input: Debouncer::new(debounce),
            view: FilteredView::empty(),
            source_failed: false,
        }
    }

    pub fn with_threshold(mut self, threshold: ThresholdFilter) -> Self {
        self.state.threshold = threshold;
        self
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn search_pending(&self) -> bool {
        self.search_input.is_pending()
    }

    /// Record a keystroke's resulting text; it applies after the quiet window.
    pub fn input_search(&mut self, text: impl Into<String>, now: Instant) {
        self.search_input.push(text.into(), now);
    }

    /// Apply a debounced search term if its window has elapsed.
    ///
    /// Returns `true` when the view was recomputed.
    pub fn tick(&mut self, items: &[Item], now: Instant) -> bool {
        let Some(term) = self.search_input.poll(now) else {
            return false;
        };
        if term == self.state.search_term {
            return false;
        }
        debug!("applying search term '{term}'");
        self.state.search_term = term;
        self.refresh(items);
        true
    }

    /// Switch the threshold; applies immediately.
    pub fn set_threshold(&mut self, threshold: ThresholdFilter, items: &[Item]) {
        if self.state.threshold == threshold {
            return;
        }
        debug!("threshold filter set to '{threshold}'");
        self.state.threshold = threshold;
        self.refresh(items);
    }

    /// Mark whether the upstream load failed. A failed source always yields an
    /// empty view.
    pub fn set_source_failed(&mut self, failed: bool, items: &[Item]) {
        self.source_failed = failed;
        self.refresh(items);
    }

    /// Forget any typed search text, applied or pending.
    pub fn clear_search(&mut self, items: &[Item]) {
        self.search_input.cancel();
        if !self.state.search_term.is_empty() {
            self.state.search_term.clear();
            self.refresh(items);
        }
    }

    /// Recompute the view against `items`.
    pub fn refresh(&mut self, items: &[Item]) {
        self.view = if self.source_failed {
            FilteredView::empty()
        } else {
            apply(items, &self.state)
        };
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new(super::DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::generate_items;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn search_applies_only_after_quiet_window() {
        let items = generate_items(30);
        let mut pipeline = FilterPipeline::new(ms(300));
        pipeline.refresh(&items);
        assert_eq!(pipeline.view().len(), 30);

        let start = Instant::now();
        pipeline.input_search("2", start);
        pipeline.input_search("25", start + ms(100));
        assert!(!pipeline.tick(&items, start + ms(350)));
        assert_eq!(pipeline.view().len(), 30);

        assert!(pipeline.tick(&items, start + ms(400)));
        assert_eq!(pipeline.state().search_term, "25");
        assert_eq!(pipeline.view().len(), 1);
        assert!(!pipeline.tick(&items, start + ms(1000)));
    }

    #[test]
    fn threshold_change_is_immediate() {
        let items = generate_items(150);
        let mut pipeline = FilterPipeline::default();
        pipeline.refresh(&items);

        pipeline.set_threshold(ThresholdFilter::GreaterThan(100), &items);
        assert_eq!(pipeline.view().len(), 50);
        assert_eq!(pipeline.view().get(&items, 0).map(|item| item.id), Some(101));
    }

    #[test]
    fn failed_source_yields_empty_view_for_any_filter() {
        let items = generate_items(20);
        let mut pipeline = FilterPipeline::default();
        pipeline.set_source_failed(true, &items);
        assert!(pipeline.view().is_empty());

        pipeline.set_threshold(ThresholdFilter::GreaterThan(10), &items);
        assert!(pipeline.view().is_empty());

        let start = Instant::now();
        pipeline.input_search("Element", start);
        pipeline.tick(&items, start + ms(500));
        assert!(pipeline.view().is_empty());
    }

    #[test]
    fn clear_search_resets_view_and_pending_input() {
        let items = generate_items(12);
        let mut pipeline = FilterPipeline::new(ms(10));
        pipeline.refresh(&items);

        let start = Instant::now();
        pipeline.input_search("11", start);
        pipeline.tick(&items, start + ms(20));
        assert_eq!(pipeline.view().len(), 1);

        pipeline.input_search("1", start + ms(30));
        pipeline.clear_search(&items);
        assert!(!pipeline.search_pending());
        assert_eq!(pipeline.view().len(), 12);
    }
}
