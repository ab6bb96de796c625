use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::App;
use super::actions::{CANCEL_BUTTON, SAVE_BUTTON};
use super::components::{
    InputContext, RowsContext, centered_rect, chip_rows_needed, render_buttons, render_chips,
    render_filter_select, render_input, render_loading, render_modal_frame, render_rows,
};
use super::state::{DialogFocus, HitAreas};

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 22;
const FILTER_SELECT_WIDTH: u16 = 22;
/// Chips inside the dialog never take more than this many lines.
const MAX_DRAFT_CHIP_ROWS: u16 = 3;
const MAIN_HELP: &str = "enter change · ←/→ chip · x remove · r reload · F12 logs · q done";
const DIALOG_HELP: &str = "tab focus · space toggle · enter save · esc cancel";

impl<'a> App<'a> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        self.hits = HitAreas::default();
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let main_area = if self.show_logs {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(6), Constraint::Percentage(40)])
                .split(area);
            self.render_logs(frame, layout[1]);
            layout[0]
        } else {
            area
        };

        self.render_main(frame, main_area);

        if self.dialog.is_open() {
            self.render_dialog(frame, main_area);
        } else {
            self.dialog.set_area(None);
        }
    }

    fn render_main(&mut self, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(Span::styled(self.labels.title.as_str(), self.theme.header)),
            layout[0],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(MAIN_HELP, self.theme.empty_style())),
            layout[3],
        );

        let body = layout[2];
        if self.source.is_loading() {
            render_loading(
                frame,
                body,
                &self.labels.loading,
                &self.throbber_state,
                &self.theme,
            );
            return;
        }
        if let Some(error) = self.source.error() {
            let lines = vec![
                Line::from(Span::styled(format!("Error: {error}"), self.theme.error)),
                Line::from(Span::styled("Press r to retry.", self.theme.empty_style())),
            ];
            frame.render_widget(Paragraph::new(lines), body);
            return;
        }
        self.render_summary(frame, body);
    }

    fn render_summary(&mut self, frame: &mut Frame, area: Rect) {
        let committed = self.selection.committed();
        let chip_rows = chip_rows_needed(committed, area.width);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(chip_rows),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let summary = self.labels.selected_summary(committed.len());
        frame.render_widget(Paragraph::new(summary), layout[0]);

        // The dialog owns the chips while it is open.
        if !self.dialog.is_open() {
            self.hits.chips =
                render_chips(frame, layout[1], committed, &self.theme, self.chip_focus);
        }

        let button_row = Rect {
            width: (self.labels.change_button.chars().count() as u16 + 4).min(layout[3].width),
            ..layout[3]
        };
        let buttons = render_buttons(
            frame,
            button_row,
            &[self.labels.change_button.as_str()],
            Some(0),
            &self.theme,
        );
        if !self.dialog.is_open() {
            self.hits.buttons = buttons;
        }
    }

    fn render_dialog(&mut self, frame: &mut Frame, area: Rect) {
        let dialog_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        self.dialog.set_area(Some(dialog_area));
        let (inner, close) =
            render_modal_frame(frame, dialog_area, &self.labels.dialog_title, &self.theme);
        self.hits.close = Some(close);
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let inner = inner.inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let draft = self.selection.current();
        let chip_rows = chip_rows_needed(draft, inner.width).min(MAX_DRAFT_CHIP_ROWS);
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(chip_rows),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(1),
                Constraint::Length(FILTER_SELECT_WIDTH),
            ])
            .split(layout[0]);
        render_input(
            frame,
            InputContext {
                search_input: &self.search_input,
                placeholder: &self.labels.search_placeholder,
                area: top[0],
                theme: &self.theme,
                focused: self.focus == DialogFocus::Search,
                pending: self.filter.search_pending(),
                throbber_state: &self.throbber_state,
            },
        );
        render_filter_select(
            frame,
            top[2],
            &self.labels.filter_label,
            self.filter.state().threshold,
            self.focus == DialogFocus::Filter,
            &self.theme,
        );
        self.hits.search = Some(top[0]);
        self.hits.filter = Some(top[2]);

        self.hits.chips = render_chips(frame, layout[1], draft, &self.theme, None);

        let divider = "─".repeat(layout[2].width as usize);
        frame.render_widget(
            Paragraph::new(Span::styled(divider, self.theme.empty_style())),
            layout[2],
        );

        let list_area = layout[3];
        self.hits.rows = render_rows(
            frame,
            list_area,
            &mut self.list,
            RowsContext {
                view: self.filter.view(),
                items: self.source.items(),
                selection: &self.selection,
                theme: &self.theme,
                focused: self.focus == DialogFocus::List,
                empty_message: &self.labels.no_results,
            },
        );
        self.hits.list = Some(list_area);

        let count = format!(
            "{}/{} selected",
            self.selection.current().len(),
            self.selection.max_selection()
        );
        frame.render_widget(
            Paragraph::new(Span::styled(count, self.theme.empty_style())),
            layout[4],
        );
        let mut labels = [""; 2];
        labels[CANCEL_BUTTON] = self.labels.cancel_button.as_str();
        labels[SAVE_BUTTON] = self.labels.save_button.as_str();
        self.hits.buttons =
            render_buttons(frame, layout[4], &labels, Some(SAVE_BUTTON), &self.theme);

        frame.render_widget(
            Paragraph::new(Span::styled(DIALOG_HELP, self.theme.empty_style())),
            layout[5],
        );
    }

    fn render_logs(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);
        let widget = TuiLoggerWidget::default()
            .block(
                Block::default()
                    .borders(Borders::TOP)
                    .title(Span::styled(" Log ", self.theme.header)),
            )
            .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
            .output_target(false)
            .output_file(false)
            .output_line(false)
            .style(self.theme.empty_style())
            .state(&self.log_state);
        frame.render_widget(widget, area);
    }
}
