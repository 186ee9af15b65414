use crate::domain::profile::Profile;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a> {
    pub profile: &'a Profile,
    pub theme: &'a Theme,
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let spans = vec![
            Span::styled(format!(" {} ", self.profile.name), self.theme.header_logo),
            Span::styled(format!(" {} ", self.profile.role), self.theme.header_item),
            Span::styled(format!(" {} ", self.profile.location), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
