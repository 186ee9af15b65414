//! Command trait and the fixed lookup table behind the overlay.

use std::collections::HashMap;

use super::error::TerminalError;
use super::output::OutputSink;
use super::sequencer::Sequencer;
use crate::domain::cv::CvData;
use crate::domain::profile::Profile;

/// Everything a command may touch while it runs.
pub struct CommandContext<'a> {
    pub output: &'a mut OutputSink,
    pub profile: &'a Profile,
    pub cv: Option<&'a CvData>,
    pub registry: &'a CommandRegistry,
}

/// What the dispatcher must do once a command returns.
#[derive(Debug)]
pub enum Outcome {
    Done,
    Exit,
    Animate(Sequencer),
}

/// A zero-argument overlay command.
pub trait TerminalCommand: Send + Sync {
    /// Lowercase name the user types.
    fn name(&self) -> &'static str;

    /// One-line description for `help`.
    fn description(&self) -> &'static str;

    /// Hidden commands work but are left out of `help`.
    fn hidden(&self) -> bool {
        false
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Outcome, TerminalError>;
}

/// Immutable name -> command table, in registration order.
pub struct CommandRegistry {
    commands: Vec<Box<dyn TerminalCommand>>,
    index: HashMap<String, usize>,
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

impl CommandRegistry {
    /// Builds the table. A repeated name keeps the first registration.
    #[must_use]
    pub fn new(commands: Vec<Box<dyn TerminalCommand>>) -> Self {
        let mut kept: Vec<Box<dyn TerminalCommand>> = Vec::with_capacity(commands.len());
        let mut index = HashMap::new();

        for command in commands {
            let key = command.name().to_lowercase();
            if index.contains_key(&key) {
                log::warn!("Duplicate terminal command ignored: {key}");
                continue;
            }
            index.insert(key, kept.len());
            kept.push(command);
        }

        Self {
            commands: kept,
            index,
        }
    }

    #[must_use]
    pub fn builtin() -> Self {
        Self::new(super::commands::builtin_commands())
    }

    pub fn lookup(&self, name: &str) -> Result<&dyn TerminalCommand, TerminalError> {
        let key = name.to_lowercase();
        self.index
            .get(&key)
            .map(|&i| self.commands[i].as_ref())
            .ok_or(TerminalError::CommandNotFound(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn TerminalCommand> {
        self.commands.iter().map(AsRef::as_ref)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
