use super::config::AppConfig;
use super::keymap::{KeyConfig, KeyMap};
use crate::domain::cv::CvData;
use crate::domain::now_playing::NowPlaying;
use crate::domain::profile::Profile;
use crate::domain::terminal::Overlay;
use std::sync::Arc;

pub mod input;

// Re-exports
pub use input::AppTextArea;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Page,     // Browsing the portfolio
    Terminal, // Overlay shown, keys go to the input line
}

#[derive(Debug)]
pub struct AppState<'a> {
    pub should_quit: bool,

    // --- Content ---
    pub profile: Profile,
    pub cv: Option<Arc<CvData>>,
    pub now_playing: NowPlaying,

    // --- Overlay ---
    pub overlay: Overlay,
    pub input: AppTextArea<'a>,

    // --- UI State ---
    pub page_scroll: u16,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(config: &AppConfig, cv: Option<CvData>) -> Self {
        let cv = cv.map(Arc::new);
        Self {
            profile: config.profile.clone(),
            overlay: Overlay::new(config.profile.clone(), cv.clone()),
            cv,
            now_playing: if config.now_playing.enabled {
                NowPlaying::Loading
            } else {
                NowPlaying::Disabled
            },
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            theme: crate::theme::Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn mode(&self) -> AppMode {
        if self.overlay.is_active() {
            AppMode::Terminal
        } else {
            AppMode::Page
        }
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        let cv = Some(Arc::new(CvData::builtin()));
        Self {
            should_quit: false,
            profile: Profile::default(),
            overlay: Overlay::new(Profile::default(), cv.clone()),
            cv,
            now_playing: NowPlaying::default(),
            input: AppTextArea::default(),
            page_scroll: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            theme: crate::theme::Theme::default(),
        }
    }
}
