use super::palette::Palette;
use ratatui::style::Color;

pub const NORD: Palette = Palette {
    base: Color::Rgb(46, 52, 64),     // nord0
    crust: Color::Rgb(41, 46, 57),    // below nord0
    surface: Color::Rgb(59, 66, 82),  // nord1
    outline: Color::Rgb(76, 86, 106), // nord3
    muted: Color::Rgb(97, 110, 136),
    text: Color::Rgb(236, 239, 244),    // nord6
    subtext: Color::Rgb(216, 222, 233), // nord4
    accent: Color::Rgb(136, 192, 208),  // nord8
    link: Color::Rgb(129, 161, 193),    // nord9
    heading: Color::Rgb(180, 142, 173), // nord15
    tag: Color::Rgb(208, 135, 112),     // nord12
    ok: Color::Rgb(163, 190, 140),      // nord14
    warn: Color::Rgb(235, 203, 139),    // nord13
    error: Color::Rgb(191, 97, 106),    // nord11
};
