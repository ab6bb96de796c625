use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, ScrollbarState};

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::filter::FilteredView;
use crate::selection::SelectionCore;
use crate::source::Item;
use crate::ui::style::Theme;

const CHECKED: &str = "[x] ";
const UNCHECKED: &str = "[ ] ";

/// Cursor and scroll window over the filtered list.
///
/// Only rows inside `[offset, offset + height)` are ever materialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListViewport {
    pub selected: Option<usize>,
    pub offset: usize,
    pub height: usize,
}

impl ListViewport {
    /// Put the cursor back on the first row.
    pub fn reset(&mut self, len: usize) {
        self.selected = (len > 0).then_some(0);
        self.offset = 0;
    }

    /// Keep the cursor and window valid after the list length changed.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = None;
            self.offset = 0;
            return;
        }
        self.selected = Some(self.selected.unwrap_or(0).min(len - 1));
        self.scroll_into_view(len);
    }

    pub fn move_by(&mut self, delta: isize, len: usize) {
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0) as isize;
        let last = len as isize - 1;
        self.selected = Some((current + delta).clamp(0, last) as usize);
        self.scroll_into_view(len);
    }

    pub fn select(&mut self, position: usize, len: usize) {
        if position < len {
            self.selected = Some(position);
            self.scroll_into_view(len);
        }
    }

    pub fn set_height(&mut self, height: usize, len: usize) {
        self.height = height;
        self.clamp(len);
    }

    /// One page worth of rows for PageUp/PageDown.
    pub fn page(&self) -> isize {
        self.height.max(1) as isize
    }

    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = start.saturating_add(self.height).min(len);
        start..end
    }

    fn scroll_into_view(&mut self, len: usize) {
        if let Some(selected) = self.selected {
            if selected < self.offset {
                self.offset = selected;
            } else if self.height > 0 && selected >= self.offset + self.height {
                self.offset = selected + 1 - self.height;
            }
        }
        let metrics = ScrollMetrics::compute(len, self.height);
        self.offset = self.offset.min(metrics.max_scroll);
    }
}

/// Everything needed to draw one row of the filtered list.
#[derive(Debug, Clone, Copy)]
pub struct RowModel<'a> {
    pub position: usize,
    pub item: &'a Item,
    pub selected: bool,
    pub disabled: bool,
}

impl<'a> RowModel<'a> {
    /// Resolve the row at `position` of the derived view.
    pub fn at(
        view: &FilteredView,
        items: &'a [Item],
        selection: &SelectionCore,
        position: usize,
    ) -> Option<Self> {
        let item = view.get(items, position)?;
        Some(Self {
            position,
            item,
            selected: selection.is_selected(item.id),
            disabled: selection.is_disabled(item.id),
        })
    }

    pub fn line(&self, theme: &Theme, under_cursor: bool) -> Line<'a> {
        let (checkbox, checkbox_style) = if self.selected {
            (CHECKED, theme.selected)
        } else {
            (UNCHECKED, theme.header)
        };
        let label_style = if self.disabled {
            theme.disabled
        } else {
            theme.header
        };
        let mut line = Line::from(vec![
            Span::styled(checkbox, checkbox_style),
            Span::styled(self.item.name.as_str(), label_style),
        ]);
        if self.disabled {
            line = line.style(theme.disabled);
        }
        if under_cursor {
            line = line.patch_style(theme.row_highlight);
        }
        line
    }
}

/// Inputs for [`render_rows`].
pub struct RowsContext<'a> {
    pub view: &'a FilteredView,
    pub items: &'a [Item],
    pub selection: &'a SelectionCore,
    pub theme: &'a Theme,
    /// Whether the list owns keyboard focus; the cursor row is only
    /// highlighted when it does.
    pub focused: bool,
    pub empty_message: &'a str,
}

/// Draw the visible window of the filtered list and return the screen rect of
/// each drawn row alongside its view position.
pub fn render_rows(
    frame: &mut Frame,
    area: Rect,
    viewport: &mut ListViewport,
    ctx: RowsContext<'_>,
) -> Vec<(Rect, usize)> {
    let len = ctx.view.len();
    viewport.set_height(area.height as usize, len);

    if len == 0 {
        if area.height > 0 {
            let empty = Paragraph::new(ctx.empty_message)
                .alignment(Alignment::Center)
                .style(ctx.theme.empty_style());
            frame.render_widget(empty, area);
        }
        return Vec::new();
    }

    let metrics = ScrollMetrics::compute(len, viewport.height);
    let content = if metrics.needs_scrollbar {
        let mut state = ScrollbarState::new(metrics.max_scroll + 1).position(viewport.offset);
        render_scrollbar(frame, area, &mut state, ctx.theme)
    } else {
        area
    };

    let mut hits = Vec::with_capacity(viewport.height);
    for (row, position) in viewport.visible_range(len).enumerate() {
        let Some(model) = RowModel::at(ctx.view, ctx.items, ctx.selection, position) else {
            continue;
        };
        let rect = Rect {
            x: content.x,
            y: content.y + row as u16,
            width: content.width,
            height: 1,
        };
        let under_cursor = ctx.focused && viewport.selected == Some(position);
        frame.render_widget(Paragraph::new(model.line(ctx.theme, under_cursor)), rect);
        hits.push((rect, position));
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{FilterState, apply};
    use crate::source::generate_items;

    #[test]
    fn viewport_scrolls_to_follow_cursor() {
        let mut viewport = ListViewport::default();
        viewport.set_height(5, 100);
        viewport.reset(100);

        viewport.move_by(7, 100);
        assert_eq!(viewport.selected, Some(7));
        assert_eq!(viewport.visible_range(100), 3..8);

        viewport.move_by(-6, 100);
        assert_eq!(viewport.visible_range(100), 1..6);

        viewport.move_by(1_000, 100);
        assert_eq!(viewport.selected, Some(99));
        assert_eq!(viewport.visible_range(100), 95..100);
    }

    #[test]
    fn viewport_clamps_when_list_shrinks() {
        let mut viewport = ListViewport::default();
        viewport.set_height(4, 50);
        viewport.select(40, 50);

        viewport.clamp(3);
        assert_eq!(viewport.selected, Some(2));
        assert_eq!(viewport.offset, 0);

        viewport.clamp(0);
        assert_eq!(viewport.selected, None);
        assert_eq!(viewport.visible_range(0), 0..0);
    }

    #[test]
    fn row_model_reports_selection_and_cap() {
        let items = generate_items(3);
        let view = apply(&items, &FilterState::default());
        let mut selection = SelectionCore::new(1);
        selection.begin_edit();
        selection.toggle(&items[1]);

        let first = RowModel::at(&view, &items, &selection, 0).unwrap();
        assert!(!first.selected);
        assert!(first.disabled);

        let second = RowModel::at(&view, &items, &selection, 1).unwrap();
        assert!(second.selected);
        assert!(!second.disabled);

        assert!(RowModel::at(&view, &items, &selection, 3).is_none());
    }
}
