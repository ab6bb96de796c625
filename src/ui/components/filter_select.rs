use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::filter::ThresholdFilter;
use crate::ui::style::Theme;

/// Render the threshold selector as `label ‹ value ›`.
pub fn render_filter_select(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    current: ThresholdFilter,
    focused: bool,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let value_style = if focused {
        theme.focused_style()
    } else {
        theme.header
    };
    let line = Line::from(vec![
        Span::styled(format!("{label} "), theme.empty_style()),
        Span::styled("‹ ", theme.empty_style()),
        Span::styled(current.label(), value_style),
        Span::styled(" ›", theme.empty_style()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
