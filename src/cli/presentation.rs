//! Presentation: render an invocation outcome as text or JSON.

use crate::engine::Outcome;
use crate::overlay::{Change, ChangeRecord};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct OutcomeReport {
    path: String,
    committed: bool,
    changes: Vec<ChangeRecord>,
}

pub fn format_outcome_text(outcome: &Outcome, dry_run: bool) -> String {
    if outcome.merge.is_unchanged() {
        return format!("No changes to {}", outcome.path.display());
    }

    let mut out = String::new();
    for (key, change) in &outcome.merge.changes {
        match change {
            Change::Added { value } => out.push_str(&format!("+ {}={}\n", key, value)),
            Change::Changed { old, new } => {
                out.push_str(&format!("~ {}: {} -> {}\n", key, old, new))
            }
        }
    }

    let verb = if dry_run { "Would update" } else { "Updated" };
    out.push_str(&format!(
        "{} {} ({} change{})",
        verb,
        outcome.path.display(),
        outcome.merge.changes.len(),
        if outcome.merge.changes.len() == 1 { "" } else { "s" }
    ));
    out
}

pub fn format_outcome_json(outcome: &Outcome) -> Result<String, serde_json::Error> {
    let report = OutcomeReport {
        path: outcome.path.display().to_string(),
        committed: outcome.committed,
        changes: outcome
            .merge
            .changes
            .iter()
            .map(|(key, change)| ChangeRecord::from_change(key, change))
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}
