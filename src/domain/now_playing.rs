use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::fmt;

pub const FALLBACK_TEXT: &str = "Unable to fetch song data";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub artist: String,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.name, self.artist)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum NowPlaying {
    #[default]
    Loading,
    Playing {
        track: Track,
        updated_at: DateTime<Local>,
    },
    Unavailable,
    Disabled,
}

impl NowPlaying {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self, NowPlaying::Playing { .. })
    }

    #[must_use]
    pub fn text(&self) -> String {
        match self {
            NowPlaying::Loading => "Loading...".to_string(),
            NowPlaying::Playing { track, .. } => track.to_string(),
            NowPlaying::Unavailable => FALLBACK_TEXT.to_string(),
            NowPlaying::Disabled => String::new(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackSource: Send + Sync {
    /// Most recent track reported by the remote service.
    async fn latest_track(&self) -> Result<Track>;
}
