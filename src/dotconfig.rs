//! Dotconfig Store
//!
//! Loads a Kconfig-style `.config` file into an ordered snapshot and writes it
//! back. Every line the overlay does not touch is reproduced byte-for-byte, so
//! `serialize(parse(x)) == x` for any file that parses.

mod line;
mod value;

pub use line::{classify, is_key, ConfigEntry, Line, LineEnding, LineKind};
pub use value::ConfigValue;

use crate::error::OverlayError;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// A key that appeared more than once in a loaded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    pub key: String,
    /// 1-based line number of the earlier occurrence.
    pub shadowed_line: usize,
    /// 1-based line number of the occurrence that wins.
    pub line: usize,
}

/// Parse failure before a path is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub line: usize,
    pub message: String,
}

/// Ordered in-memory form of a dotconfig file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigSnapshot {
    lines: Vec<Line>,
    /// key -> index of the last line holding that key
    index: HashMap<String, usize>,
    duplicates: Vec<DuplicateEntry>,
}

impl ConfigSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a snapshot from disk.
    pub fn load(path: &Path) -> Result<Self, OverlayError> {
        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                OverlayError::NotFound(path.to_path_buf())
            } else {
                OverlayError::Read {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let snapshot = Self::parse(&bytes).map_err(|f| OverlayError::Parse {
            path: path.to_path_buf(),
            line: f.line,
            message: f.message,
        })?;

        for dup in &snapshot.duplicates {
            debug!(
                path = %path.display(),
                key = %dup.key,
                line = dup.line,
                shadowed_line = dup.shadowed_line,
                "Duplicate option in dotconfig; last occurrence wins"
            );
        }
        debug!(
            path = %path.display(),
            lines = snapshot.lines.len(),
            entries = snapshot.index.len(),
            "Loaded dotconfig"
        );
        Ok(snapshot)
    }

    /// Parse dotconfig bytes. Lines that are not entries need not be UTF-8.
    pub fn parse(bytes: impl AsRef<[u8]>) -> Result<Self, ParseFailure> {
        let mut snapshot = ConfigSnapshot::new();
        for (idx, piece) in bytes.as_ref().split_inclusive(|b| *b == b'\n').enumerate() {
            let (raw, ending) = match piece {
                [body @ .., b'\r', b'\n'] => (body, LineEnding::CrLf),
                [body @ .., b'\n'] => (body, LineEnding::Lf),
                body => (body, LineEnding::None),
            };
            let kind = classify(raw).map_err(|message| ParseFailure {
                line: idx + 1,
                message,
            })?;
            snapshot.push(Line {
                kind,
                raw: raw.to_vec(),
                ending,
            });
        }
        Ok(snapshot)
    }

    /// Render the snapshot back to bytes.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for line in &self.lines {
            out.extend_from_slice(&line.raw);
            out.extend_from_slice(line.ending.as_str().as_bytes());
        }
        out
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Managed entries in file order, including shadowed duplicates.
    pub fn entries(&self) -> impl Iterator<Item = &ConfigEntry> {
        self.lines.iter().filter_map(Line::as_entry)
    }

    /// The effective entry for `key` (last occurrence).
    pub fn get(&self, key: &str) -> Option<&ConfigEntry> {
        self.index
            .get(key)
            .and_then(|&idx| self.lines[idx].as_entry())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn duplicates(&self) -> &[DuplicateEntry] {
        &self.duplicates
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Rewrite the effective line for `key`, keeping its terminator.
    /// Returns the previous value, or `None` if the key is absent.
    pub(crate) fn replace(&mut self, key: &str, value: ConfigValue) -> Option<ConfigValue> {
        let idx = *self.index.get(key)?;
        let ending = self.lines[idx].ending;
        let old = self.lines[idx].as_entry().map(|e| e.value.clone());
        self.lines[idx] = Line::entry(key, value, ending);
        old
    }

    /// Append a new entry after every existing line.
    pub(crate) fn append(&mut self, key: &str, value: ConfigValue) {
        let ending = self.preferred_ending();
        if let Some(last) = self.lines.last_mut() {
            if last.ending == LineEnding::None {
                last.ending = ending;
            }
        }
        self.push(Line::entry(key, value, ending));
    }

    fn preferred_ending(&self) -> LineEnding {
        self.lines
            .iter()
            .map(|l| l.ending)
            .find(|e| *e != LineEnding::None)
            .unwrap_or(LineEnding::Lf)
    }

    fn push(&mut self, line: Line) {
        let idx = self.lines.len();
        if let Some(entry) = line.as_entry() {
            if let Some(prev) = self.index.insert(entry.key.clone(), idx) {
                self.duplicates.push(DuplicateEntry {
                    key: entry.key.clone(),
                    shadowed_line: prev + 1,
                    line: idx + 1,
                });
            }
        }
        self.lines.push(line);
    }
}

/// Lossy text view; bytes outside UTF-8 show as U+FFFD. Use `serialize` for
/// anything written to disk.
impl std::fmt::Display for ConfigSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.serialize()))
    }
}
