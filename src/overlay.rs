//! Overlay Resolver
//!
//! Applies an [`OverrideSet`] onto a base snapshot. Only the lines for keys
//! named by a directive can change; everything else in the base comes through
//! untouched, in its original order.

use crate::dotconfig::{ConfigSnapshot, ConfigValue};
use crate::overrides::OverrideSet;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// What happened to a single key.
///
/// Unsetting an option is a `Changed` to `n`: options are never deleted as
/// lines, and a key that did not exist is `Added` with `n` so the override is
/// recorded in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Added { value: ConfigValue },
    Changed { old: ConfigValue, new: ConfigValue },
}

impl Change {
    /// The value the key holds after the merge.
    pub fn value(&self) -> &ConfigValue {
        match self {
            Change::Added { value } => value,
            Change::Changed { new, .. } => new,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeResult {
    pub snapshot: ConfigSnapshot,
    /// Keys whose value differs from the base. Keys already holding the
    /// requested value are absent.
    pub changes: BTreeMap<String, Change>,
}

impl MergeResult {
    pub fn is_unchanged(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Merge `overrides` onto `base` without modifying `base`.
///
/// New keys are appended after all existing lines in key order, so the
/// result does not depend on the order directives were supplied in.
pub fn merge(base: &ConfigSnapshot, overrides: &OverrideSet) -> MergeResult {
    let mut snapshot = base.clone();
    let mut changes = BTreeMap::new();

    for directive in overrides.iter() {
        let key = directive.key.as_str();
        match base.get(key) {
            Some(existing) if existing.value == directive.value => {
                debug!(key, value = %directive.value, "Option already has requested value");
            }
            Some(existing) => {
                snapshot.replace(key, directive.value.clone());
                changes.insert(
                    key.to_string(),
                    Change::Changed {
                        old: existing.value.clone(),
                        new: directive.value.clone(),
                    },
                );
            }
            None => {
                snapshot.append(key, directive.value.clone());
                changes.insert(
                    key.to_string(),
                    Change::Added {
                        value: directive.value.clone(),
                    },
                );
            }
        }
    }

    debug!(
        directives = overrides.len(),
        changes = changes.len(),
        "Merged overrides onto dotconfig"
    );
    MergeResult { snapshot, changes }
}

/// Flat, serializable view of a change for reports.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChangeRecord {
    pub key: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old: Option<String>,
    pub new: String,
}

impl ChangeRecord {
    pub fn from_change(key: &str, change: &Change) -> Self {
        match change {
            Change::Added { value } => ChangeRecord {
                key: key.to_string(),
                kind: "added",
                old: None,
                new: value.to_string(),
            },
            Change::Changed { old, new } => ChangeRecord {
                key: key.to_string(),
                kind: "changed",
                old: Some(old.to_string()),
                new: new.to_string(),
            },
        }
    }
}
