use crate::domain::cv::{CvData, Segment};
use crate::domain::profile::Profile;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// The portfolio itself: about, CV sections and projects.
pub struct PortfolioPage<'a> {
    pub profile: &'a Profile,
    pub cv: Option<&'a CvData>,
    pub scroll: u16,
    pub theme: &'a Theme,
}

impl PortfolioPage<'_> {
    fn section<'l>(&self, lines: &mut Vec<Line<'l>>, title: &'l str) {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(title, self.theme.section_title)));
    }

    pub fn lines(&self) -> Vec<Line<'_>> {
        let theme = self.theme;
        let mut lines = Vec::new();

        self.section(&mut lines, "About");
        lines.push(Line::from(Span::styled(
            self.profile.display_name(),
            theme.item_title,
        )));
        lines.push(Line::from(Span::styled(self.profile.role.as_str(), theme.body)));
        lines.push(Line::from(Span::styled(
            format!("Located in {}", self.profile.location),
            theme.item_meta,
        )));

        let Some(cv) = self.cv else {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "CV data not available",
                theme.terminal_error,
            )));
            return lines;
        };

        // Empty sections stay hidden
        if !cv.education.is_empty() {
            self.section(&mut lines, "Education");
            for edu in &cv.education {
                lines.push(Line::from(Span::styled(edu.degree.as_str(), theme.item_title)));
                lines.push(Line::from(Span::styled(
                    format!("{}, {}", edu.institution, edu.year),
                    theme.item_meta,
                )));
            }
        }

        if !cv.experience.is_empty() {
            self.section(&mut lines, "Experience");
            for exp in &cv.experience {
                lines.push(Line::from(Span::styled(exp.position.as_str(), theme.item_title)));
                lines.push(Line::from(Span::styled(
                    format!("{}, {}", exp.company, exp.period),
                    theme.item_meta,
                )));
                if let Some(description) = &exp.description {
                    lines.push(Line::from(Span::styled(description.as_str(), theme.body)));
                }
            }
        }

        if !cv.skills.is_empty() {
            self.section(&mut lines, "Skills");
            for skill in &cv.skills {
                lines.push(Line::from(vec![
                    Span::styled("  • ", theme.dimmed),
                    Span::styled(skill.as_str(), theme.body),
                ]));
            }
        }

        if !cv.projects.is_empty() {
            self.section(&mut lines, "Projects");
            for project in &cv.projects {
                let mut title = vec![Span::styled(project.title.as_str(), theme.item_title)];
                if let Some(link) = project.link() {
                    title.push(Span::raw("  "));
                    title.push(Span::styled(link, theme.link));
                }
                lines.push(Line::from(title));

                let spans: Vec<Span> = project
                    .description_segments()
                    .into_iter()
                    .map(|segment| match segment {
                        Segment::Text(text) => Span::styled(text, theme.body),
                        Segment::Link { text, .. } => Span::styled(text, theme.link),
                    })
                    .collect();
                lines.push(Line::from(spans));

                lines.push(Line::from(Span::styled(project.tags.join(", "), theme.tag)));
                lines.push(Line::from(""));
            }
        }

        lines
    }
}

impl Widget for PortfolioPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
