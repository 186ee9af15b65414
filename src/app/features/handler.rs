use crate::app::{action::Action, command::Command};
use crate::domain::now_playing::TrackSource;
use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn handle_command(
    command: Command,
    source: Option<Arc<dyn TrackSource>>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    match command {
        Command::ScheduleFrame { id, delay } => {
            supervise(
                tx,
                async move {
                    tokio::time::sleep(delay).await;
                    Action::AnimationTick(id)
                },
                move |message| Action::AnimationFailed { id, message },
            );
        }
        Command::FetchNowPlaying => {
            let Some(source) = source else {
                log::debug!("Now playing requested without a track source");
                return Ok(());
            };
            supervise(
                tx,
                async move {
                    let result = source.latest_track().await.map_err(|e| format!("{e:#}"));
                    Action::NowPlayingUpdated(result)
                },
                |message| Action::NowPlayingUpdated(Err(message)),
            );
        }
    }
    Ok(())
}

/// Runs `task` on its own tokio task and forwards its action. If the task
/// dies instead of returning, `on_failure` builds the action sent in its place.
fn supervise<F, E>(tx: mpsc::Sender<Action>, task: F, on_failure: E)
where
    F: Future<Output = Action> + Send + 'static,
    E: FnOnce(String) -> Action + Send + 'static,
{
    let handle = tokio::spawn(task);
    tokio::spawn(async move {
        let action = match handle.await {
            Ok(action) => action,
            Err(e) => {
                log::error!("Effect task failed: {e}");
                on_failure(e.to_string())
            }
        };
        let _ = tx.send(action).await;
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::now_playing::{MockTrackSource, Track};
    use crate::domain::terminal::AnimationId;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_schedule_frame_waits_for_delay() {
        let id = AnimationId::default();
        let (tx, mut rx) = mpsc::channel(1);
        let command = Command::ScheduleFrame {
            id,
            delay: Duration::from_millis(100),
        };
        handle_command(command, None, tx).unwrap();

        tokio::time::advance(Duration::from_millis(50)).await;
        assert!(rx.try_recv().is_err());

        let action = rx.recv().await.unwrap();
        assert_eq!(action, Action::AnimationTick(id));
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mut mock = MockTrackSource::new();
        mock.expect_latest_track().times(1).returning(|| {
            Ok(Track {
                name: "Song".to_string(),
                artist: "Band".to_string(),
            })
        });

        let (tx, mut rx) = mpsc::channel(1);
        handle_command(Command::FetchNowPlaying, Some(Arc::new(mock)), tx).unwrap();

        let action = rx.recv().await.unwrap();
        if let Action::NowPlayingUpdated(Ok(track)) = action {
            assert_eq!(track.to_string(), "Song by Band");
        } else {
            panic!("Expected Action::NowPlayingUpdated(Ok(..)), got {action:?}");
        }
    }

    #[tokio::test]
    async fn test_fetch_error_propagation() {
        let mut mock = MockTrackSource::new();
        mock.expect_latest_track()
            .returning(|| Err(anyhow::anyhow!("HTTP error! status: 503")));

        let (tx, mut rx) = mpsc::channel(1);
        handle_command(Command::FetchNowPlaying, Some(Arc::new(mock)), tx).unwrap();

        let action = rx.recv().await.unwrap();
        assert_eq!(
            action,
            Action::NowPlayingUpdated(Err("HTTP error! status: 503".to_string()))
        );
    }

    #[tokio::test]
    async fn test_fetch_without_source_is_noop() {
        let (tx, mut rx) = mpsc::channel(1);
        handle_command(Command::FetchNowPlaying, None, tx).unwrap();
        // Sender dropped, nothing queued
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_panicking_frame_timer_reports_its_run() {
        let id = AnimationId::default();
        let (tx, mut rx) = mpsc::channel(1);
        let exploded = true;
        supervise(
            tx,
            async move {
                if exploded {
                    panic!("frame timer exploded");
                }
                Action::AnimationTick(id)
            },
            move |message| Action::AnimationFailed { id, message },
        );

        let action = rx.recv().await.unwrap();
        match action {
            Action::AnimationFailed { id: failed, message } => {
                assert_eq!(failed, id);
                assert!(message.contains("panicked"));
            }
            other => panic!("Expected Action::AnimationFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_panicking_fetch_becomes_now_playing_error() {
        let mut mock = MockTrackSource::new();
        mock.expect_latest_track()
            .returning(|| panic!("track source exploded"));

        let (tx, mut rx) = mpsc::channel(1);
        handle_command(Command::FetchNowPlaying, Some(Arc::new(mock)), tx).unwrap();

        match rx.recv().await.unwrap() {
            Action::NowPlayingUpdated(Err(message)) => assert!(message.contains("panicked")),
            other => panic!("Expected Action::NowPlayingUpdated(Err(..)), got {other:?}"),
        }
    }
}
