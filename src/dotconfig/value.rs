//! Value grammar for dotconfig entries: `y`, `n`, `"string"`, decimal, `0x` hex.

use std::fmt;
use std::str::FromStr;

/// A typed dotconfig value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Bool(bool),
    /// Unescaped string contents.
    Str(String),
    Int(i64),
    Hex(u64),
}

impl ConfigValue {
    /// The explicit negative value used to turn an option off.
    pub const UNSET: ConfigValue = ConfigValue::Bool(false);
}

impl FromStr for ConfigValue {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "" => Err("missing value".to_string()),
            "y" => Ok(ConfigValue::Bool(true)),
            "n" => Ok(ConfigValue::Bool(false)),
            _ if text.starts_with('"') => parse_quoted(text).map(ConfigValue::Str),
            _ => {
                if let Some(digits) = text
                    .strip_prefix("0x")
                    .or_else(|| text.strip_prefix("0X"))
                {
                    return parse_hex(digits).map(ConfigValue::Hex);
                }
                parse_decimal(text).map(ConfigValue::Int)
            }
        }
    }
}

fn parse_quoted(text: &str) -> Result<String, String> {
    let mut out = String::new();
    let mut chars = text[1..].char_indices();
    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some((_, escaped)) => out.push(escaped),
                None => return Err("unterminated string".to_string()),
            },
            '"' => {
                // idx is relative to the byte after the opening quote
                let rest = &text[1 + idx + 1..];
                if !rest.is_empty() {
                    return Err(format!("unexpected characters after string: '{}'", rest));
                }
                return Ok(out);
            }
            _ => out.push(ch),
        }
    }
    Err("unterminated string".to_string())
}

fn parse_hex(digits: &str) -> Result<u64, String> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!("invalid hexadecimal value '0x{}'", digits));
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| format!("invalid hexadecimal value '0x{}': {}", digits, e))
}

fn parse_decimal(text: &str) -> Result<i64, String> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(format!("invalid value '{}'", text));
    }
    text.parse::<i64>()
        .map_err(|e| format!("invalid integer '{}': {}", text, e))
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(true) => f.write_str("y"),
            ConfigValue::Bool(false) => f.write_str("n"),
            ConfigValue::Int(n) => write!(f, "{}", n),
            ConfigValue::Hex(n) => write!(f, "0x{:x}", n),
            ConfigValue::Str(s) => {
                f.write_str("\"")?;
                for ch in s.chars() {
                    if ch == '"' || ch == '\\' {
                        f.write_str("\\")?;
                    }
                    write!(f, "{}", ch)?;
                }
                f.write_str("\"")
            }
        }
    }
}
