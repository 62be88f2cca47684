//! Source resolution: which dotconfig file an invocation reads from.

use crate::error::OverlayError;
use crate::prompt::Prompter;
use std::path::PathBuf;
use tracing::{debug, info};

/// File name of the dotconfig inside a project working directory.
pub const DOTCONFIG_FILE: &str = ".config";

const INTERACTIVE_PROMPT: &str = "Do you want to start in interactive mode:";
const PATH_PROMPT: &str = "Path to dotconfig file:";
const PATH_PLACEHOLDER: &str = "Enter path";

/// Result of probing the working directory, before any prompting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Found(PathBuf),
    Missing(PathBuf),
}

#[derive(Debug, Clone)]
pub struct SourceResolver {
    workdir: PathBuf,
}

impl SourceResolver {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    /// `<workdir>/.config`
    pub fn canonical_path(&self) -> PathBuf {
        self.workdir.join(DOTCONFIG_FILE)
    }

    /// Existence check only; never prompts and never creates anything.
    pub fn probe(&self) -> Source {
        let path = self.canonical_path();
        if path.is_file() {
            Source::Found(path)
        } else {
            Source::Missing(path)
        }
    }

    /// Resolve the base path, asking `prompter` for an alternate file when the
    /// canonical one is missing. A declined prompt or an empty answer ends in
    /// [`OverlayError::ConfigNotFound`]; no default file is ever fabricated.
    pub fn resolve(&self, prompter: &mut dyn Prompter) -> Result<PathBuf, OverlayError> {
        let missing = match self.probe() {
            Source::Found(path) => {
                debug!(path = %path.display(), "Using dotconfig from working directory");
                return Ok(path);
            }
            Source::Missing(path) => path,
        };

        debug!(path = %missing.display(), "Dotconfig missing, asking for interactive mode");
        if !prompter.confirm(INTERACTIVE_PROMPT)? {
            return Err(OverlayError::ConfigNotFound(missing));
        }

        let answer = prompter.text_input(PATH_PROMPT, PATH_PLACEHOLDER, "")?;
        if answer.is_empty() {
            return Err(OverlayError::ConfigNotFound(missing));
        }

        let alternate = PathBuf::from(answer);
        info!(path = %alternate.display(), "Using dotconfig supplied interactively");
        Ok(alternate)
    }
}
