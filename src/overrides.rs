//! Override directives supplied by the caller.
//!
//! Arguments have the shape `NAME=VALUE`. In the unset workflow a bare `NAME`
//! means `NAME=n`: a missing value is read as "turn this option off" rather
//! than rejected. Downstream tooling relies on this, so it stays even though
//! it is easy to trip over.

use crate::dotconfig::{is_key, ConfigValue};
use crate::error::OverlayError;
use std::collections::btree_map::{self, BTreeMap};

/// Which command is building the set; decides how a bare `NAME` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Workflow {
    /// Bare names default to `n`.
    Unset,
    /// Every argument must carry an explicit value.
    Set,
}

/// Where a directive came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Explicit caller argument at this position (0-based).
    Argument { position: usize, raw: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub key: String,
    pub value: ConfigValue,
    pub origin: Origin,
}

/// Validated directives, at most one per key, iterated in key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideSet {
    directives: BTreeMap<String, Directive>,
}

impl OverrideSet {
    /// Build a set from raw caller arguments.
    ///
    /// Repeating a key with the same value is harmless and collapses to one
    /// directive; repeating it with a different value is ambiguous and fails.
    pub fn build<I, S>(args: I, workflow: Workflow) -> Result<Self, OverlayError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut directives = BTreeMap::new();

        for (position, arg) in args.into_iter().enumerate() {
            let directive = parse_directive(arg.as_ref(), position, workflow)?;
            match directives.entry(directive.key.clone()) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(directive);
                }
                btree_map::Entry::Occupied(existing) => {
                    if existing.get().value != directive.value {
                        return Err(OverlayError::DuplicateKey {
                            key: directive.key,
                            first: existing.get().value.to_string(),
                            second: directive.value.to_string(),
                        });
                    }
                }
            }
        }

        if directives.is_empty() {
            return Err(OverlayError::EmptyInput);
        }
        Ok(Self { directives })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Directive> {
        self.directives.values()
    }

    pub fn get(&self, key: &str) -> Option<&Directive> {
        self.directives.get(key)
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

fn parse_directive(raw: &str, position: usize, workflow: Workflow) -> Result<Directive, OverlayError> {
    let invalid = |reason: &str| OverlayError::InvalidDirective {
        directive: raw.to_string(),
        reason: reason.to_string(),
    };

    let (key, value) = match (raw.split_once('='), workflow) {
        (Some((key, value)), _) => {
            let value = value.parse::<ConfigValue>().map_err(|e| invalid(e.as_str()))?;
            (key, value)
        }
        (None, Workflow::Unset) => (raw, ConfigValue::UNSET),
        (None, Workflow::Set) => return Err(invalid("expected NAME=VALUE")),
    };

    if key.is_empty() {
        return Err(invalid("option name is empty"));
    }
    if !is_key(key) {
        return Err(invalid("option name may only contain letters, digits and '_'"));
    }

    Ok(Directive {
        key: key.to_string(),
        value,
        origin: Origin::Argument {
            position,
            raw: raw.to_string(),
        },
    })
}
