use crate::app::{action::Action, command::Command, input::map_event_to_action, reducer, state::AppState, ui};
use crate::domain::now_playing::TrackSource;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState<'_>,
    source: Option<Arc<dyn TrackSource>>,
    poll_every: Duration,
) -> Result<()> {
    // User input channel
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        match event::read() {
            Ok(evt) => {
                if event_tx.blocking_send(Ok(evt)).is_err() {
                    break;
                }
            }
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, app_state, source, poll_every, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState<'_>,
    source: Option<Arc<dyn TrackSource>>,
    poll_every: Duration,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut tick = interval(TICK_RATE);
    // First tick fires immediately, which doubles as the initial fetch
    let mut poll = interval(poll_every);
    poll.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        // --- 1. Render ---
        terminal.draw(|f| {
            ui::draw(f, &mut app_state);
        })?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = tick.tick() => Some(Action::Tick),

            _ = poll.tick(), if source.is_some() => Some(Action::PollNowPlaying),

            // User Input
            Some(res) = event_rx.recv() => {
                let event = match res {
                    Ok(e) => e,
                    Err(e) => return Err(e.into()),
                };
                map_event_to_action(event, &app_state)
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            if let Action::Quit = action {
                break;
            }

            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            if let Some(cmd) = command {
                handle_command(cmd, source.clone(), action_tx.clone())?;
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_command(
    command: Command,
    source: Option<Arc<dyn TrackSource>>,
    tx: mpsc::Sender<Action>,
) -> Result<()> {
    crate::app::features::handle_command(command, source, tx)
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
