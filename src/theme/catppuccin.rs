use super::palette::Palette;
use ratatui::style::Color;

// Mocha flavour
pub const CATPPUCCIN_MOCHA: Palette = Palette {
    base: Color::Rgb(30, 30, 46),
    crust: Color::Rgb(17, 17, 27),
    surface: Color::Rgb(49, 50, 68),
    outline: Color::Rgb(88, 91, 112),
    muted: Color::Rgb(108, 112, 134),
    text: Color::Rgb(205, 214, 244),
    subtext: Color::Rgb(166, 173, 200),
    accent: Color::Rgb(137, 180, 250),
    link: Color::Rgb(116, 199, 236),
    heading: Color::Rgb(203, 166, 247),
    tag: Color::Rgb(250, 179, 135),
    ok: Color::Rgb(166, 227, 161),
    warn: Color::Rgb(249, 226, 175),
    error: Color::Rgb(243, 139, 168),
};
