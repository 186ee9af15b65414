use crate::domain::terminal::AnimationId;
use std::time::Duration;

/// Side effects requested by the reducer and run by the event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Wake animation run `id` after `delay`.
    ScheduleFrame { id: AnimationId, delay: Duration },
    /// Fetch the latest track.
    FetchNowPlaying,
}
