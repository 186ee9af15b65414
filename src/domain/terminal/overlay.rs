use std::sync::Arc;
use std::time::Duration;

use super::error::TerminalError;
use super::history::HistoryBuffer;
use super::output::OutputSink;
use super::registry::{CommandContext, CommandRegistry, Outcome};
use super::sequencer::{Sequencer, Step};
use crate::domain::cv::CvData;
use crate::domain::profile::Profile;

pub const WELCOME_BANNER: &str = "Welcome to Terminal OS v1.0";
pub const USAGE_HINT: &str = "Type \"help\" for available commands\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Inactive,
    Active,
}

/// Identifies one animation run. Ticks and failures carry the id of the run
/// that scheduled them; anything tagged with an older id is stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AnimationId(u64);

/// Result of submitting one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Blank line, or the overlay is not active.
    Ignored,
    /// An animation is playing; the line was dropped.
    Busy,
    /// Command ran (or failed) synchronously.
    Completed,
    /// `exit` ran; the overlay is now inactive.
    Exited,
    /// A sequence started; schedule the next frame after the delay.
    AnimationStarted { id: AnimationId, delay: Duration },
}

/// The command-line overlay: activation state, dispatch, history and log.
#[derive(Debug)]
pub struct Overlay {
    state: OverlayState,
    registry: Arc<CommandRegistry>,
    history: HistoryBuffer,
    output: OutputSink,
    animation: Option<(AnimationId, Sequencer)>,
    next_animation: u64,
    profile: Profile,
    cv: Option<Arc<CvData>>,
}

impl Overlay {
    #[must_use]
    pub fn new(profile: Profile, cv: Option<Arc<CvData>>) -> Self {
        Self::with_registry(Arc::new(CommandRegistry::builtin()), profile, cv)
    }

    #[must_use]
    pub fn with_registry(
        registry: Arc<CommandRegistry>,
        profile: Profile,
        cv: Option<Arc<CvData>>,
    ) -> Self {
        Self {
            state: OverlayState::Inactive,
            registry,
            history: HistoryBuffer::new(),
            output: OutputSink::new(),
            animation: None,
            next_animation: 0,
            profile,
            cv,
        }
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state == OverlayState::Active
    }

    /// True while an animation owns the log.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn output(&self) -> &OutputSink {
        &self.output
    }

    #[must_use]
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn cv(&self) -> Option<&CvData> {
        self.cv.as_deref()
    }

    /// Shows the overlay and writes the banner. Returns false (and does
    /// nothing) when already active.
    pub fn activate(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = OverlayState::Active;
        self.output.print(WELCOME_BANNER);
        self.output.print(USAGE_HINT);
        log::info!("Terminal overlay activated");
        true
    }

    /// Hides the overlay. The log is kept for the next activation.
    pub fn deactivate(&mut self) {
        if self.is_active() {
            self.state = OverlayState::Inactive;
            log::info!("Terminal overlay deactivated");
        }
    }

    pub fn submit(&mut self, line: &str) -> Dispatch {
        if !self.is_active() {
            return Dispatch::Ignored;
        }
        if self.is_busy() {
            return Dispatch::Busy;
        }

        let line = line.trim();
        if line.is_empty() {
            return Dispatch::Ignored;
        }
        let command = line.to_lowercase();

        self.history.push(&command);
        self.output.print(format!("> {line}"));
        log::debug!("Dispatching terminal command: {command}");

        let registry = Arc::clone(&self.registry);
        let result = match registry.lookup(&command) {
            Ok(cmd) => {
                let mut ctx = CommandContext {
                    output: &mut self.output,
                    profile: &self.profile,
                    cv: self.cv.as_deref(),
                    registry: &registry,
                };
                cmd.execute(&mut ctx)
            }
            Err(err) => Err(err),
        };

        match result {
            Ok(Outcome::Done) => Dispatch::Completed,
            Ok(Outcome::Exit) => {
                self.deactivate();
                Dispatch::Exited
            }
            Ok(Outcome::Animate(sequencer)) => {
                self.next_animation += 1;
                let id = AnimationId(self.next_animation);
                self.animation = Some((id, sequencer));
                match self.advance_animation(id) {
                    Some(delay) => Dispatch::AnimationStarted { id, delay },
                    None => Dispatch::Completed,
                }
            }
            Err(err) => {
                self.output.print_error(err.to_string());
                Dispatch::Completed
            }
        }
    }

    /// Plays the next frame of run `id`. Returns the delay before the
    /// following call, or `None` once the sequence has finished. Ticks for a
    /// run that is no longer playing do nothing.
    pub fn advance_animation(&mut self, id: AnimationId) -> Option<Duration> {
        let (running, sequencer) = self.animation.as_mut()?;
        if *running != id {
            log::debug!("Dropping stale animation tick {id:?}");
            return None;
        }
        match sequencer.advance(&mut self.output) {
            Step::Wait(delay) => Some(delay),
            Step::Finished => {
                self.animation = None;
                None
            }
        }
    }

    /// Reports that the frame timer of run `id` died. That run can no longer
    /// advance, so it is dropped and the overlay accepts input again. Returns
    /// false for a run that already ended.
    pub fn report_failure(&mut self, id: AnimationId, message: &str) -> bool {
        if !matches!(self.animation, Some((running, _)) if running == id) {
            return false;
        }
        self.animation = None;
        self.output
            .print_error(TerminalError::ActionFailed(message.to_string()).to_string());
        true
    }

    pub fn recall_previous(&mut self) -> Option<String> {
        self.history.recall_previous().map(str::to_string)
    }

    pub fn recall_next(&mut self) -> String {
        self.history.recall_next().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::terminal::output::OutputLine;
    use crate::domain::terminal::sequencer::{TRAIN_FRAME_DELAY, TRAIN_TOTAL_FRAMES};

    fn active() -> Overlay {
        let mut overlay = Overlay::new(Profile::default(), Some(Arc::new(CvData::builtin())));
        overlay.activate();
        overlay
    }

    fn errors(overlay: &Overlay) -> Vec<&str> {
        overlay
            .output()
            .lines()
            .iter()
            .filter(|l| l.is_error)
            .map(|l| l.text.as_str())
            .collect()
    }

    #[test]
    fn test_activate_writes_banner_once() {
        let mut overlay = Overlay::new(Profile::default(), None);
        assert_eq!(overlay.state(), OverlayState::Inactive);
        assert!(overlay.activate());
        assert_eq!(
            overlay.output().lines(),
            &[
                OutputLine::normal("Welcome to Terminal OS v1.0"),
                OutputLine::normal("Type \"help\" for available commands\n"),
            ]
        );

        assert!(!overlay.activate());
        assert_eq!(overlay.state(), OverlayState::Active);
        assert_eq!(overlay.output().len(), 2);
    }

    #[test]
    fn test_casing_variants_behave_the_same() {
        let mut reference = active();
        reference.submit("help");
        let expected = reference.output().lines()[3].clone();

        for variant in ["Help", "HELP", "  hElp "] {
            let mut overlay = active();
            assert_eq!(overlay.submit(variant), Dispatch::Completed);
            assert_eq!(overlay.output().lines()[3], expected);
            assert_eq!(overlay.history().entries(), &["help".to_string()]);
        }
    }

    #[test]
    fn test_unknown_command() {
        let mut overlay = active();
        assert_eq!(overlay.submit("foo"), Dispatch::Completed);
        assert_eq!(errors(&overlay), vec!["Command not found: foo"]);
        assert_eq!(overlay.history().entries(), &["foo".to_string()]);
        assert!(overlay.is_active());
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let mut overlay = active();
        let before = overlay.output().clone();
        assert_eq!(overlay.submit(""), Dispatch::Ignored);
        assert_eq!(overlay.submit("   \t "), Dispatch::Ignored);
        assert_eq!(overlay.output(), &before);
        assert!(overlay.history().is_empty());
    }

    #[test]
    fn test_clear_leaves_next_write_alone() {
        let mut overlay = active();
        overlay.submit("whoami");
        overlay.submit("clear");
        assert!(overlay.output().is_empty());

        overlay.submit("contact");
        assert_eq!(overlay.output().lines()[0].text, "> contact");
    }

    #[test]
    fn test_exit_deactivates_and_keeps_log() {
        let mut overlay = active();
        overlay.submit("whoami");
        let rows = overlay.output().len();
        assert_eq!(overlay.submit("exit"), Dispatch::Exited);
        assert_eq!(overlay.state(), OverlayState::Inactive);
        assert_eq!(overlay.output().len(), rows + 1);
    }

    #[test]
    fn test_submit_while_inactive_is_gated() {
        let mut overlay = Overlay::new(Profile::default(), None);
        assert_eq!(overlay.submit("exit"), Dispatch::Ignored);
        assert_eq!(overlay.submit("help"), Dispatch::Ignored);
        assert!(overlay.output().is_empty());
        assert!(overlay.history().is_empty());
        assert_eq!(overlay.state(), OverlayState::Inactive);
    }

    #[test]
    fn test_history_survives_reactivation() {
        let mut overlay = active();
        overlay.submit("cv");
        overlay.submit("exit");
        overlay.activate();
        assert_eq!(overlay.recall_previous().as_deref(), Some("exit"));
        assert_eq!(overlay.recall_previous().as_deref(), Some("cv"));
        assert_eq!(overlay.recall_previous(), None);
    }

    #[test]
    fn test_recall_round_trip() {
        let mut overlay = active();
        let submitted = ["help", "cv", "projects", "contact"];
        for cmd in submitted {
            overlay.submit(cmd);
        }
        let recalled: Vec<String> = (0..submitted.len())
            .filter_map(|_| overlay.recall_previous())
            .collect();
        assert_eq!(recalled, vec!["contact", "projects", "cv", "help"]);
        assert_eq!(overlay.history().cursor(), 0);
        assert_eq!(overlay.recall_next(), "cv");
    }

    #[test]
    fn test_missing_cv_is_reported() {
        let mut overlay = Overlay::new(Profile::default(), None);
        overlay.activate();
        overlay.submit("cv");
        overlay.submit("projects");
        assert_eq!(
            errors(&overlay),
            vec!["CV data not available", "Project data not available"]
        );
        assert!(overlay.is_active());
    }

    #[test]
    fn test_animation_locks_overlay_until_finale() {
        let mut overlay = active();
        let Dispatch::AnimationStarted { id, delay } = overlay.submit("sl") else {
            panic!("sl did not start an animation");
        };
        assert_eq!(delay, TRAIN_FRAME_DELAY);
        assert!(overlay.is_busy());

        assert_eq!(overlay.submit("clear"), Dispatch::Busy);
        assert_eq!(overlay.history().entries(), &["sl".to_string()]);

        let mut waits = 1;
        while overlay.advance_animation(id).is_some() {
            waits += 1;
        }
        assert_eq!(waits, TRAIN_TOTAL_FRAMES);
        assert!(!overlay.is_busy());
        let last = overlay.output().lines().last().unwrap();
        assert_eq!(last.text, "\nChoo choo!");

        assert_eq!(overlay.submit("clear"), Dispatch::Completed);
        assert!(overlay.output().is_empty());
    }

    fn start_train(overlay: &mut Overlay) -> AnimationId {
        match overlay.submit("sl") {
            Dispatch::AnimationStarted { id, .. } => id,
            other => panic!("sl did not start an animation: {other:?}"),
        }
    }

    #[test]
    fn test_failure_unlocks_and_reports() {
        let mut overlay = active();
        let id = start_train(&mut overlay);
        assert!(overlay.report_failure(id, "timer dropped"));
        assert!(!overlay.is_busy());
        assert!(overlay.is_active());
        assert_eq!(errors(&overlay), vec!["Error: timer dropped"]);
        assert_eq!(overlay.advance_animation(id), None);
    }

    #[test]
    fn test_stale_run_cannot_drive_or_fail_a_new_one() {
        let mut overlay = active();
        let first = start_train(&mut overlay);
        assert!(overlay.report_failure(first, "timer dropped"));

        let second = start_train(&mut overlay);
        assert_ne!(first, second);
        let rows = overlay.output().clone();

        // The first run's tick and failure arrive late
        assert_eq!(overlay.advance_animation(first), None);
        assert!(!overlay.report_failure(first, "timer dropped"));
        assert_eq!(overlay.output(), &rows);
        assert!(overlay.is_busy());

        let mut waits = 1;
        while overlay.advance_animation(second).is_some() {
            waits += 1;
        }
        assert_eq!(waits, TRAIN_TOTAL_FRAMES);
    }

    #[test]
    fn test_failure_after_finale_is_ignored() {
        let mut overlay = active();
        let id = start_train(&mut overlay);
        while overlay.advance_animation(id).is_some() {}
        let rows = overlay.output().len();
        assert!(!overlay.report_failure(id, "late"));
        assert_eq!(overlay.output().len(), rows);
        assert!(errors(&overlay).is_empty());
    }
}
