//! Line classification and the byte-level pieces of a dotconfig line.

use super::value::ConfigValue;

/// Terminator that followed a line in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
    /// Last line of a file without a trailing newline.
    None,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::None => "",
        }
    }
}

/// A managed `KEY=VALUE` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: ConfigValue,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Entry(ConfigEntry),
    Comment,
    Blank,
    /// Syntax this layer does not manage; kept verbatim.
    Opaque,
}

/// One physical line. `raw` excludes the terminator and is what gets written
/// back for every line the overlay did not touch. Only entries must be UTF-8;
/// comments and opaque lines keep whatever bytes the file had.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub raw: Vec<u8>,
    pub ending: LineEnding,
}

impl Line {
    pub(crate) fn entry(key: &str, value: ConfigValue, ending: LineEnding) -> Self {
        Line {
            raw: format!("{}={}", key, value).into_bytes(),
            kind: LineKind::Entry(ConfigEntry {
                key: key.to_string(),
                value,
            }),
            ending,
        }
    }

    pub fn as_entry(&self) -> Option<&ConfigEntry> {
        match &self.kind {
            LineKind::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

/// Keys are plain identifiers; anything else before `=` means the line is not
/// a managed entry.
pub fn is_key(text: &str) -> bool {
    is_key_bytes(text.as_bytes())
}

fn is_key_bytes(bytes: &[u8]) -> bool {
    !bytes.is_empty() && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'_')
}

/// Classify a single line (without terminator).
///
/// Returns `Err` only when the line is shaped like `KEY=...` but the value
/// does not follow the value grammar or is not UTF-8.
pub fn classify(raw: &[u8]) -> Result<LineKind, String> {
    match std::str::from_utf8(raw) {
        Ok(text) => classify_text(text),
        Err(_) => classify_undecodable(raw),
    }
}

/// A line with bytes outside UTF-8 (Latin-1 comments and the like).
fn classify_undecodable(raw: &[u8]) -> Result<LineKind, String> {
    if raw.iter().find(|b| !b.is_ascii_whitespace()) == Some(&b'#') {
        return Ok(LineKind::Comment);
    }
    match raw.iter().position(|b| *b == b'=') {
        Some(eq) if is_key_bytes(&raw[..eq]) => Err(format!(
            "{}: value is not valid UTF-8",
            String::from_utf8_lossy(&raw[..eq])
        )),
        _ => Ok(LineKind::Opaque),
    }
}

fn classify_text(raw: &str) -> Result<LineKind, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(LineKind::Blank);
    }
    if trimmed.starts_with('#') {
        return Ok(LineKind::Comment);
    }
    match raw.split_once('=') {
        Some((key, value)) if is_key(key) => {
            let value = value
                .trim_end()
                .parse::<ConfigValue>()
                .map_err(|e| format!("{}: {}", key, e))?;
            Ok(LineKind::Entry(ConfigEntry {
                key: key.to_string(),
                value,
            }))
        }
        _ => Ok(LineKind::Opaque),
    }
}
