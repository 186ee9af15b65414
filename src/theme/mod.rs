use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::{shade, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header_item: Style,
    pub header_active: Style,
    pub header: Style,

    pub section_title: Style,
    pub item_title: Style,
    pub item_meta: Style,
    pub link: Style,
    pub tag: Style,
    pub body: Style,

    pub playing: Style,
    pub not_playing: Style,

    pub terminal: Style,
    pub terminal_output: Style,
    pub terminal_error: Style,
    pub terminal_prompt: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer: Style,

    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.outline),
            border_focus: Style::default().fg(p.ok),

            header_logo: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface).fg(p.text),
            header_active: Style::default()
                .bg(p.ok)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(p.base).fg(p.text),

            section_title: Style::default().fg(p.heading).add_modifier(Modifier::BOLD),
            item_title: Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
            item_meta: Style::default().fg(p.subtext),
            link: Style::default()
                .fg(p.link)
                .add_modifier(Modifier::UNDERLINED),
            tag: Style::default().fg(p.tag),
            body: Style::default().fg(p.text),

            playing: Style::default().fg(p.ok).add_modifier(Modifier::BOLD),
            not_playing: Style::default().fg(p.muted),

            terminal: Style::default().bg(shade(p.crust, 0.6)).fg(p.ok),
            terminal_output: Style::default().fg(p.ok),
            terminal_error: Style::default().fg(p.error).add_modifier(Modifier::BOLD),
            terminal_prompt: Style::default().fg(p.warn).add_modifier(Modifier::BOLD),

            footer_segment_key: Style::default()
                .bg(p.surface)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer: Style::default().bg(p.crust).fg(p.subtext),

            dimmed: Style::default().fg(p.muted).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
