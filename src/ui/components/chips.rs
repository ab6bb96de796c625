use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::source::Item;
use crate::ui::style::Theme;

const CHIP_GAP: u16 = 1;
const REMOVE_GLYPH: &str = "×";

/// Placement of one chip, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipSlot {
    pub rect: Rect,
    pub index: usize,
}

fn chip_label(item: &Item) -> String {
    format!(" {} {REMOVE_GLYPH} ", item.name)
}

fn chip_width(item: &Item) -> u16 {
    u16::try_from(chip_label(item).width()).unwrap_or(u16::MAX)
}

/// Flow chips left to right, wrapping onto new lines. Chips that do not fit in
/// `area` are left out.
pub fn layout_chips(items: &[Item], area: Rect) -> Vec<ChipSlot> {
    let mut slots = Vec::with_capacity(items.len());
    if area.width == 0 || area.height == 0 {
        return slots;
    }

    let mut x = area.x;
    let mut y = area.y;
    for (index, item) in items.iter().enumerate() {
        let width = chip_width(item).min(area.width);
        if x > area.x && x.saturating_add(width) > area.right() {
            x = area.x;
            y += 1;
        }
        if y >= area.bottom() {
            break;
        }
        slots.push(ChipSlot {
            rect: Rect::new(x, y, width, 1),
            index,
        });
        x = x.saturating_add(width + CHIP_GAP);
    }
    slots
}

/// Number of lines needed to show every chip within `width` columns.
pub fn chip_rows_needed(items: &[Item], width: u16) -> u16 {
    if items.is_empty() || width == 0 {
        return 0;
    }
    let unbounded = Rect::new(0, 0, width, u16::MAX);
    layout_chips(items, unbounded)
        .last()
        .map(|slot| slot.rect.y + 1)
        .unwrap_or(0)
}

/// Render removable chips and return the hit area of each with its item id.
pub fn render_chips(
    frame: &mut Frame,
    area: Rect,
    items: &[Item],
    theme: &Theme,
    focused: Option<usize>,
) -> Vec<(Rect, u64)> {
    let slots = layout_chips(items, area);
    let mut hits = Vec::with_capacity(slots.len());
    for slot in slots {
        let item = &items[slot.index];
        let mut style = theme.chip;
        if focused == Some(slot.index) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let line = Line::from(Span::styled(chip_label(item), style));
        frame.render_widget(Paragraph::new(line), slot.rect);
        hits.push((slot.rect, item.id));
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::generate_items;

    #[test]
    fn chips_wrap_onto_following_lines() {
        // " Element 1 × " is 13 columns wide.
        let items = generate_items(3);
        let slots = layout_chips(&items, Rect::new(0, 0, 30, 3));
        let positions: Vec<_> = slots.iter().map(|slot| (slot.rect.x, slot.rect.y)).collect();
        assert_eq!(positions, vec![(0, 0), (14, 0), (0, 1)]);
        assert_eq!(chip_rows_needed(&items, 30), 2);
    }

    #[test]
    fn chips_beyond_area_are_dropped() {
        let items = generate_items(5);
        let slots = layout_chips(&items, Rect::new(0, 0, 13, 2));
        assert_eq!(slots.len(), 2);
        assert_eq!(chip_rows_needed(&[], 40), 0);
    }
}
