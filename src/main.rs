use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use folio::app::config::{get_config_dir, load_config};
use folio::app::{logging, r#loop::run_loop, state::AppState};
use folio::domain::now_playing::TrackSource;
use folio::infrastructure::{cv_file::resolve_cv, song_api::HttpTrackSource};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Everything that can fail runs BEFORE terminal setup, so an error
    // never leaves the terminal in raw mode.
    if let Some(dir) = get_config_dir() {
        logging::init(&dir)?;
    }
    let config = load_config();
    let cv = resolve_cv(config.cv_path.as_deref());

    let source: Option<Arc<dyn TrackSource>> = if config.now_playing.enabled {
        Some(Arc::new(HttpTrackSource::new(
            config.now_playing.endpoint.clone(),
        )?))
    } else {
        None
    };
    let app_state = AppState::new(&config, cv);
    log::info!("Starting folio for {}", config.profile.display_name());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(
        &mut terminal,
        app_state,
        source,
        config.now_playing.interval(),
    )
    .await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Exited with error: {err:#}");
        println!("{:?}", err);
    }

    Ok(())
}
