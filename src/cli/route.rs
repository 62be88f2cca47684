//! CLI route: turn a parsed command into an engine invocation.

use crate::cli::output::StderrSink;
use crate::cli::parse::{Commands, ReportFormat, TargetArgs};
use crate::cli::presentation::{format_outcome_json, format_outcome_text};
use crate::config::AppConfig;
use crate::engine::{self, OverlayRequest};
use crate::error::ApiError;
use crate::overrides::Workflow;
use crate::prompt::{NonInteractive, Prompter, TerminalPrompter};
use std::io::IsTerminal;
use tracing::debug;

/// Everything a command needs besides its own arguments.
pub struct RunContext {
    interactive: bool,
}

impl RunContext {
    /// Prompts are only offered when settings allow them, `--non-interactive`
    /// was not given, and stdin is a terminal.
    pub fn new(settings: &AppConfig, non_interactive: bool) -> Self {
        Self {
            interactive: settings.prompt.interactive
                && !non_interactive
                && std::io::stdin().is_terminal(),
        }
    }

    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Unset { target, names } => self.apply(Workflow::Unset, target, names),
            Commands::Set {
                target,
                assignments,
            } => self.apply(Workflow::Set, target, assignments),
        }
    }

    fn apply(
        &self,
        workflow: Workflow,
        target: &TargetArgs,
        args: &[String],
    ) -> Result<String, ApiError> {
        let workdir = match &target.workdir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir().map_err(|e| {
                ApiError::ConfigError(format!("Failed to get current directory: {}", e))
            })?,
        };

        let request = OverlayRequest {
            workdir,
            directives: args.to_vec(),
            workflow,
            dry_run: target.dry_run,
        };
        debug!(?request, interactive = self.interactive, "Running overlay");

        let mut prompter: Box<dyn Prompter> = if self.interactive {
            Box::new(TerminalPrompter)
        } else {
            Box::new(NonInteractive)
        };
        let mut sink = StderrSink::new();
        let outcome = engine::run(&request, prompter.as_mut(), &mut sink)?;

        match target.format {
            ReportFormat::Text => Ok(format_outcome_text(&outcome, target.dry_run)),
            ReportFormat::Json => format_outcome_json(&outcome)
                .map_err(|e| ApiError::ConfigError(format!("Failed to render report: {}", e))),
        }
    }
}
