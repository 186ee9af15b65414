use super::error::TerminalError;
use super::registry::{CommandContext, Outcome, TerminalCommand};
use super::sequencer::Sequencer;

pub fn builtin_commands() -> Vec<Box<dyn TerminalCommand>> {
    vec![
        Box::new(Help),
        Box::new(Clear),
        Box::new(Cv),
        Box::new(Whoami),
        Box::new(Projects),
        Box::new(Contact),
        Box::new(Exit),
        Box::new(Train),
    ]
}

struct Help;

impl TerminalCommand for Help {
    fn name(&self) -> &'static str {
        "help"
    }

    fn description(&self) -> &'static str {
        "Show this help message"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Outcome, TerminalError> {
        let mut text = String::from("\nAvailable commands:\n");
        for command in ctx.registry.iter().filter(|c| !c.hidden()) {
            text.push_str(&format!(
                "    {:<8} - {}\n",
                command.name(),
                command.description()
            ));
        }
        ctx.output.print(text);
        Ok(Outcome::Done)
    }
}

struct Clear;

impl TerminalCommand for Clear {
    fn name(&self) -> &'static str {
        "clear"
    }

    fn description(&self) -> &'static str {
        "Clear the terminal"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Outcome, TerminalError> {
        ctx.output.clear();
        Ok(Outcome::Done)
    }
}

struct Cv;

impl TerminalCommand for Cv {
    fn name(&self) -> &'static str {
        "cv"
    }

    fn description(&self) -> &'static str {
        "Show my CV"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Outcome, TerminalError> {
        let cv = ctx.cv.ok_or(TerminalError::DataUnavailable("CV"))?;

        if !cv.education.is_empty() {
            ctx.output.print("\n=== Education ===");
            for edu in &cv.education {
                ctx.output
                    .print(format!("{} - {} ({})", edu.degree, edu.institution, edu.year));
            }
        }

        if !cv.experience.is_empty() {
            ctx.output.print("\n=== Experience ===");
            for exp in &cv.experience {
                ctx.output
                    .print(format!("{} at {} ({})", exp.position, exp.company, exp.period));
            }
        }

        if !cv.skills.is_empty() {
            ctx.output.print("\n=== Skills ===");
            for skill in &cv.skills {
                ctx.output.print(format!("- {skill}"));
            }
        }

        if cv.has_no_resume() {
            ctx.output.print("No CV data available");
        }
        Ok(Outcome::Done)
    }
}

struct Whoami;

impl TerminalCommand for Whoami {
    fn name(&self) -> &'static str {
        "whoami"
    }

    fn description(&self) -> &'static str {
        "Show information about me"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Outcome, TerminalError> {
        ctx.output.print(ctx.profile.whoami());
        Ok(Outcome::Done)
    }
}

struct Projects;

impl TerminalCommand for Projects {
    fn name(&self) -> &'static str {
        "projects"
    }

    fn description(&self) -> &'static str {
        "List my projects"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Outcome, TerminalError> {
        let cv = ctx.cv.ok_or(TerminalError::DataUnavailable("Project"))?;

        ctx.output.print("\n=== Projects ===");
        for (i, project) in cv.projects.iter().enumerate() {
            ctx.output.print(format!("\n{}. {}", i + 1, project.title));
            ctx.output
                .print(format!("Description: {}", project.plain_description()));
            ctx.output.print(format!("Tags: {}", project.tags.join(", ")));
            if let Some(link) = project.link() {
                ctx.output.print(format!("Link: {link}"));
            }
        }
        Ok(Outcome::Done)
    }
}

struct Contact;

impl TerminalCommand for Contact {
    fn name(&self) -> &'static str {
        "contact"
    }

    fn description(&self) -> &'static str {
        "Show contact information"
    }

    fn execute(&self, ctx: &mut CommandContext<'_>) -> Result<Outcome, TerminalError> {
        ctx.output.print(ctx.profile.contact_card());
        Ok(Outcome::Done)
    }
}

struct Exit;

impl TerminalCommand for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn description(&self) -> &'static str {
        "Exit terminal mode"
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<Outcome, TerminalError> {
        Ok(Outcome::Exit)
    }
}

/// `sl`, the steam locomotive.
struct Train;

impl TerminalCommand for Train {
    fn name(&self) -> &'static str {
        "sl"
    }

    fn description(&self) -> &'static str {
        "Choo choo"
    }

    fn hidden(&self) -> bool {
        true
    }

    fn execute(&self, _ctx: &mut CommandContext<'_>) -> Result<Outcome, TerminalError> {
        Ok(Outcome::Animate(Sequencer::train()))
    }
}
