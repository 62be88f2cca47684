//! One overlay invocation: resolve, load, build, merge, commit.
//!
//! Nothing is shared between invocations. Each call owns its snapshot and
//! override set, and the only places it blocks are file I/O and the prompts.

use crate::commit::CommitWriter;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::dotconfig::ConfigSnapshot;
use crate::error::OverlayError;
use crate::overlay::{merge, Change, MergeResult};
use crate::overrides::{OverrideSet, Workflow};
use crate::prompt::Prompter;
use crate::source::SourceResolver;
use std::path::PathBuf;
use tracing::{debug, info};

pub const UNSET_DEPRECATION: &str = "This command is DEPRECATED and should not be used";

#[derive(Debug, Clone)]
pub struct OverlayRequest {
    pub workdir: PathBuf,
    /// Raw `NAME=VALUE` arguments (bare `NAME` in the unset workflow).
    pub directives: Vec<String>,
    pub workflow: Workflow,
    /// Compute and report changes without writing.
    pub dry_run: bool,
}

impl OverlayRequest {
    pub fn unset(workdir: impl Into<PathBuf>, names: Vec<String>) -> Self {
        Self {
            workdir: workdir.into(),
            directives: names,
            workflow: Workflow::Unset,
            dry_run: false,
        }
    }

    pub fn set(workdir: impl Into<PathBuf>, assignments: Vec<String>) -> Self {
        Self {
            workdir: workdir.into(),
            directives: assignments,
            workflow: Workflow::Set,
            dry_run: false,
        }
    }
}

/// Updated configuration state handed back to the caller.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// File that was read and, if anything changed, rewritten.
    pub path: PathBuf,
    pub merge: MergeResult,
    pub committed: bool,
}

pub fn run(
    request: &OverlayRequest,
    prompter: &mut dyn Prompter,
    sink: &mut dyn DiagnosticSink,
) -> Result<Outcome, OverlayError> {
    if request.workflow == Workflow::Unset {
        sink.emit(Diagnostic::warning(UNSET_DEPRECATION));
    }

    // Validate arguments before touching the filesystem.
    let overrides = OverrideSet::build(&request.directives, request.workflow)?;

    let path = SourceResolver::new(&request.workdir).resolve(prompter)?;
    let base = ConfigSnapshot::load(&path)?;
    for dup in base.duplicates() {
        sink.emit(Diagnostic::warning(format!(
            "{}: option {} on line {} is overridden by line {}",
            path.display(),
            dup.key,
            dup.shadowed_line,
            dup.line
        )));
    }

    let result = merge(&base, &overrides);
    if request.workflow == Workflow::Unset {
        // Unsetting an option the file never had still records it.
        for (key, change) in &result.changes {
            if let Change::Added { value } = change {
                sink.emit(Diagnostic::notice(format!(
                    "{}: option {} not present, adding {}={}",
                    path.display(),
                    key,
                    key,
                    value
                )));
            }
        }
    }

    let committed = if result.is_unchanged() {
        debug!(path = %path.display(), "No changes to commit");
        false
    } else if request.dry_run {
        debug!(path = %path.display(), changes = result.changes.len(), "Dry run, skipping commit");
        false
    } else {
        CommitWriter::write(&path, &result.snapshot)?;
        info!(path = %path.display(), changes = result.changes.len(), "Updated dotconfig");
        true
    };

    Ok(Outcome {
        path,
        merge: result,
        committed,
    })
}
