use crate::app::state::{AppMode, AppState};
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::page::PortfolioPage;
use crate::components::terminal_overlay::TerminalOverlay;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let theme = &app_state.theme;
    if app_state.mode() == AppMode::Terminal {
        f.render_widget(
            TerminalOverlay {
                output: app_state.overlay.output(),
                input: &app_state.input,
                busy: app_state.overlay.is_busy(),
                theme,
            },
            f.area(),
        );
        return;
    }

    let layout = get_layout(f.area());

    f.render_widget(
        Header {
            profile: &app_state.profile,
            theme,
        },
        layout.header,
    );

    f.render_widget(
        PortfolioPage {
            profile: &app_state.profile,
            cv: app_state.cv.as_deref(),
            scroll: app_state.page_scroll,
            theme,
        },
        layout.body,
    );

    f.render_widget(
        Footer {
            now_playing: &app_state.now_playing,
            activation_key: app_state.keymap.activation,
            theme,
        },
        layout.footer,
    );
}
