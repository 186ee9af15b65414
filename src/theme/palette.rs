use ratatui::style::Color;

/// Colors by role rather than by hue, so a new scheme only has to fill these.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub surface: Color,
    pub outline: Color,
    pub muted: Color,
    pub text: Color,
    pub subtext: Color,
    pub accent: Color,
    pub link: Color,
    pub heading: Color,
    pub tag: Color,
    pub ok: Color,
    pub warn: Color,
    pub error: Color,
}

/// Darkens an `Rgb` color; `factor` 0.0 is black, 1.0 leaves it alone.
/// Named and indexed colors pass through.
pub fn shade(c: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    match c {
        Color::Rgb(r, g, b) => Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        ),
        other => other,
    }
}
