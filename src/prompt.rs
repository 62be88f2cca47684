//! Interactive capability used when the base dotconfig is missing.
//!
//! The engine only ever sees the [`Prompter`] trait; terminals stay in the
//! CLI layer and tests pass scripted answers.

use crate::error::OverlayError;

pub trait Prompter {
    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str) -> Result<bool, OverlayError>;

    /// Ask for a line of text. An empty answer is returned as-is.
    fn text_input(
        &mut self,
        prompt: &str,
        placeholder: &str,
        default: &str,
    ) -> Result<String, OverlayError>;
}

/// Terminal prompts backed by `dialoguer`.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn confirm(&mut self, prompt: &str) -> Result<bool, OverlayError> {
        use dialoguer::Confirm;

        Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| OverlayError::Prompt(e.to_string()))
    }

    fn text_input(
        &mut self,
        prompt: &str,
        placeholder: &str,
        default: &str,
    ) -> Result<String, OverlayError> {
        use dialoguer::Input;

        let prompt = if placeholder.is_empty() {
            prompt.to_string()
        } else {
            format!("{} ({})", prompt.trim_end_matches(':'), placeholder)
        };

        Input::<String>::new()
            .with_prompt(prompt)
            .with_initial_text(default)
            .allow_empty(true)
            .interact_text()
            .map(|answer| answer.trim().to_string())
            .map_err(|e| OverlayError::Prompt(e.to_string()))
    }
}

/// Declines every confirmation; used when no terminal is available or
/// prompting is disabled.
#[derive(Debug, Default)]
pub struct NonInteractive;

impl Prompter for NonInteractive {
    fn confirm(&mut self, _prompt: &str) -> Result<bool, OverlayError> {
        Ok(false)
    }

    fn text_input(
        &mut self,
        _prompt: &str,
        _placeholder: &str,
        default: &str,
    ) -> Result<String, OverlayError> {
        Ok(default.to_string())
    }
}
