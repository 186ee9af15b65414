use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use std::ops::{Deref, DerefMut};
use tui_textarea::{CursorMove, TextArea};

/// Single-line input of the overlay.
#[derive(Default)]
pub struct AppTextArea<'a>(pub TextArea<'a>);

impl AppTextArea<'_> {
    /// Current content; the overlay input never holds more than one line.
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join("")
    }

    /// Replaces the content and puts the cursor at the end.
    pub fn set_text(&mut self, text: &str) {
        let mut area = TextArea::new(vec![text.to_string()]);
        area.set_cursor_line_style(self.0.cursor_line_style());
        area.set_placeholder_text(self.0.placeholder_text().to_string());
        area.move_cursor(CursorMove::End);
        self.0 = area;
    }

    /// Returns the content and leaves the input empty.
    pub fn take_text(&mut self) -> String {
        let text = self.text();
        self.set_text("");
        text
    }
}

impl std::fmt::Debug for AppTextArea<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AppTextArea").field(&self.text()).finish()
    }
}

impl<'a> Deref for AppTextArea<'a> {
    type Target = TextArea<'a>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for AppTextArea<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Widget for &AppTextArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}
