use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::ui::input::SearchInput;
use crate::ui::style::Theme;

/// Argument bundle for rendering the search row.
pub struct InputContext<'a> {
    pub search_input: &'a SearchInput<'a>,
    /// Shown dimmed while the input is empty.
    pub placeholder: &'a str,
    pub area: Rect,
    pub theme: &'a Theme,
    pub focused: bool,
    /// A typed query is waiting for its debounce window to elapse.
    pub pending: bool,
    pub throbber_state: &'a ThrobberState,
}

/// Render the search row with its placeholder and pending-query spinner.
pub fn render_input(frame: &mut Frame, input: InputContext<'_>) {
    let InputContext {
        search_input,
        placeholder,
        area,
        theme,
        focused,
        pending,
        throbber_state,
    } = input;
    if area.width == 0 || area.height == 0 {
        return;
    }

    let marker_style = if focused {
        theme.focused_style()
    } else {
        theme.empty_style()
    };
    let buffer = frame.buffer_mut();
    buffer.set_line(area.x, area.y, &Line::from(Span::styled("> ", marker_style)), 2);

    let field = Rect {
        x: area.x.saturating_add(2),
        width: area.width.saturating_sub(2),
        ..area
    };
    search_input.render_textarea(frame, field, focused);

    if search_input.text().is_empty() {
        render_placeholder(frame, field, placeholder, theme);
    }

    if pending {
        render_spinner(frame, field, throbber_state, theme);
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    if area.width == 0 || text.is_empty() {
        return;
    }
    let display_text: String = text.chars().take(area.width as usize).collect();
    // Leave the cursor cell visible.
    let x = area.x.saturating_add(1).min(area.right().saturating_sub(1));
    frame.buffer_mut().set_line(
        x,
        area.y,
        &Line::from(Span::styled(display_text, theme.empty_style())),
        area.right().saturating_sub(x),
    );
}

fn render_spinner(frame: &mut Frame, area: Rect, throbber_state: &ThrobberState, theme: &Theme) {
    if area.width < 2 {
        return;
    }
    let muted = theme.empty_style();
    let spinner = Throbber::default().style(muted).throbber_style(muted);
    let line = Line::from(spinner.to_symbol_span(throbber_state));
    let x = area.right().saturating_sub(2);
    frame.buffer_mut().set_line(x, area.y, &line, 2);
}

/// Full-area loading message with an animated spinner.
pub fn render_loading(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    throbber_state: &ThrobberState,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let muted = theme.empty_style();
    let spinner = Throbber::default().style(muted).throbber_style(muted);
    let mut line = Line::default();
    line.spans.push(spinner.to_symbol_span(throbber_state));
    line.spans.push(Span::styled(label.to_string(), muted));
    let row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), row);
}
