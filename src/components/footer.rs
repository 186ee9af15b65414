use crate::domain::now_playing::NowPlaying;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub now_playing: &'a NowPlaying,
    pub activation_key: char,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let mut spans = Vec::new();

        if *self.now_playing != NowPlaying::Disabled {
            let indicator = if self.now_playing.is_playing() {
                Span::styled(" ● ", theme.playing)
            } else {
                Span::styled(" ○ ", theme.not_playing)
            };
            spans.push(indicator);
            spans.push(Span::styled(self.now_playing.text(), theme.footer));
            if let NowPlaying::Playing { updated_at, .. } = self.now_playing {
                spans.push(Span::styled(
                    format!(" ({})", updated_at.format("%H:%M")),
                    theme.dimmed,
                ));
            }
            spans.push(Span::raw("  "));
        }

        let hints = [
            (self.activation_key.to_string(), "terminal"),
            ("j/k".to_string(), "scroll"),
            ("q".to_string(), "quit"),
        ];
        for (key, desc) in hints {
            spans.push(Span::styled(format!(" {key} "), theme.footer_segment_key));
            spans.push(Span::styled(format!(" {desc} "), theme.footer_segment_val));
            spans.push(Span::raw(" "));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
