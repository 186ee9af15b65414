use crate::app::command::Command;
use crate::domain::now_playing::Track;
use crate::domain::terminal::AnimationId;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Quit,

    // --- Page ---
    ScrollDown(u16), // j / Down / PageDown
    ScrollUp(u16),   // k / Up / PageUp
    ScrollTop,       // g

    // --- Overlay ---
    ActivateTerminal,                          // Activation key on the page
    DeactivateTerminal,                        // Esc inside the overlay
    TextAreaInput(crossterm::event::KeyEvent), // Typing into the input line
    SubmitInput,                               // Enter
    RecallPrevious,                            // Up
    RecallNext,                                // Down

    // --- Async Results (The "Callback") ---
    AnimationTick(AnimationId),               // Frame delay elapsed
    PollNowPlaying,                           // Poll interval elapsed
    NowPlayingUpdated(Result<Track, String>), // Fetch finished or died

    // The frame timer of a run died before it fired
    AnimationFailed { id: AnimationId, message: String },
}
