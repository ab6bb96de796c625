use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::ui::style::Theme;

const CLOSE_GLYPH: &str = "×";

/// Rectangle of `width` x `height` centred in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}

/// Clear `area`, draw the dialog border and title, and return the inner area
/// together with the hit area of the close glyph.
pub fn render_modal_frame(frame: &mut Frame, area: Rect, title: &str, theme: &Theme) -> (Rect, Rect) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ratatui::symbols::border::ROUNDED)
        .border_style(theme.header)
        .title(Span::styled(format!(" {title} "), theme.header));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let close = Rect {
        x: area.right().saturating_sub(3),
        y: area.y,
        width: 1,
        height: 1,
    };
    if area.width > 4 {
        frame
            .buffer_mut()
            .set_line(close.x, close.y, &Line::from(Span::styled(CLOSE_GLYPH, theme.header)), 1);
    }
    (inner, close)
}

/// Screen areas of the rendered buttons, for mouse hit-testing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonAreas {
    pub areas: Vec<Rect>,
}

impl ButtonAreas {
    pub fn hit(&self, column: u16, row: u16) -> Option<usize> {
        self.areas
            .iter()
            .position(|area| super::point_in_rect(column, row, *area))
    }
}

/// Right-align `[ label ]` buttons on a single row. The button at `primary`
/// uses the accent style.
pub fn render_buttons(
    frame: &mut Frame,
    area: Rect,
    labels: &[&str],
    primary: Option<usize>,
    theme: &Theme,
) -> ButtonAreas {
    let mut areas = Vec::with_capacity(labels.len());
    if area.width == 0 || area.height == 0 {
        return ButtonAreas { areas };
    }

    let rendered: Vec<String> = labels.iter().map(|label| format!("[ {label} ]")).collect();
    let total: u16 = rendered
        .iter()
        .map(|text| text.width() as u16 + 1)
        .sum::<u16>()
        .saturating_sub(1);
    let mut x = area.right().saturating_sub(total).max(area.x);

    for (index, text) in rendered.iter().enumerate() {
        let width = (text.width() as u16).min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let style: Style = if primary == Some(index) {
            theme.primary_button_style()
        } else {
            theme.button
        };
        let rect = Rect::new(x, area.y, width, 1);
        frame.render_widget(Paragraph::new(Line::from(Span::styled(text.as_str(), style))), rect);
        areas.push(rect);
        x = x.saturating_add(width + 1);
    }
    ButtonAreas { areas }
}
