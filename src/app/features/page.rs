use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::AppState,
};
use crate::domain::now_playing::NowPlaying;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::ScrollDown(amount) => {
            state.page_scroll = state.page_scroll.saturating_add(*amount);
            UpdateResult::Handled(None)
        }
        Action::ScrollUp(amount) => {
            state.page_scroll = state.page_scroll.saturating_sub(*amount);
            UpdateResult::Handled(None)
        }
        Action::ScrollTop => {
            state.page_scroll = 0;
            UpdateResult::Handled(None)
        }
        Action::PollNowPlaying => {
            if state.now_playing == NowPlaying::Disabled {
                UpdateResult::Handled(None)
            } else {
                UpdateResult::Handled(Some(Command::FetchNowPlaying))
            }
        }
        Action::NowPlayingUpdated(result) => {
            if state.now_playing == NowPlaying::Disabled {
                return UpdateResult::Handled(None);
            }
            state.now_playing = match result {
                Ok(track) => NowPlaying::Playing {
                    track: track.clone(),
                    updated_at: chrono::Local::now(),
                },
                Err(err) => {
                    log::warn!("Error fetching song data: {err}");
                    NowPlaying::Unavailable
                }
            };
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}
