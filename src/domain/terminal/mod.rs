//! The "Terminal OS" overlay: a tiny command line drawn over the page.

pub mod commands;
pub mod error;
pub mod history;
pub mod output;
pub mod overlay;
pub mod registry;
pub mod sequencer;

pub use error::TerminalError;
pub use history::HistoryBuffer;
pub use output::{OutputLine, OutputSink};
pub use overlay::{AnimationId, Dispatch, Overlay, OverlayState};
pub use registry::{CommandContext, CommandRegistry, Outcome, TerminalCommand};
pub use sequencer::{Sequencer, Step};
