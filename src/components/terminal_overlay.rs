use crate::app::state::AppTextArea;
use crate::domain::terminal::OutputSink;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Full-screen command line drawn over the page.
pub struct TerminalOverlay<'a, 'b> {
    pub output: &'a OutputSink,
    pub input: &'a AppTextArea<'b>,
    pub busy: bool,
    pub theme: &'a Theme,
}

impl TerminalOverlay<'_, '_> {
    /// Every block split into display rows, error blocks styled as errors.
    pub fn log_lines(&self) -> Vec<Line<'_>> {
        self.output
            .lines()
            .iter()
            .flat_map(|entry| {
                let style = if entry.is_error {
                    self.theme.terminal_error
                } else {
                    self.theme.terminal_output
                };
                entry
                    .text
                    .split('\n')
                    .map(move |row| Line::from(Span::styled(row, style)))
            })
            .collect()
    }
}

impl Widget for TerminalOverlay<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        Clear.render(area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" Terminal OS ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .style(self.theme.terminal);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        // Stick to the bottom of the log, counting wrapped rows
        let log = Paragraph::new(self.log_lines()).wrap(Wrap { trim: false });
        let overflow = log
            .line_count(chunks[0].width)
            .saturating_sub(chunks[0].height as usize);
        log.scroll((u16::try_from(overflow).unwrap_or(u16::MAX), 0))
            .render(chunks[0], buf);

        let prompt_width = 2;
        let input_row = chunks[1];
        if input_row.width <= prompt_width {
            return;
        }
        let prompt = if self.busy { "… " } else { "> " };
        Paragraph::new(Span::styled(prompt, self.theme.terminal_prompt))
            .render(Rect { width: prompt_width, ..input_row }, buf);

        if !self.busy {
            let field = Rect {
                x: input_row.x + prompt_width,
                width: input_row.width - prompt_width,
                ..input_row
            };
            self.input.render(field, buf);
        }
    }
}
