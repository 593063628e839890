//! Front-matter parsing
//!
//! A document may open with a metadata block fenced by `---` lines, holding
//! flat `key: value` pairs. Values are plain text or numbers; nothing else of
//! YAML is understood. A document without a well-formed block is all body.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Marker line that opens and closes the metadata block
const MARKER: &str = "---";

/// Largest integral magnitude that survives a round-trip through `f64`
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A single front-matter value
#[derive(Debug, Clone, PartialEq)]
pub enum FrontMatterValue {
    Text(String),
    Number(f64),
}

impl FrontMatterValue {
    /// Classify a raw value the way the metadata block stores it:
    /// surrounding quotes stripped, complete numeric literals become numbers.
    pub fn from_raw(raw: &str) -> Self {
        let value = strip_quotes(raw.trim());
        match parse_number(value) {
            Some(n) => FrontMatterValue::Number(n),
            None => FrontMatterValue::Text(value.to_string()),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FrontMatterValue::Text(s) => Some(s),
            FrontMatterValue::Number(_) => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FrontMatterValue::Number(n) => Some(*n),
            FrontMatterValue::Text(_) => None,
        }
    }

    /// Text form of the value. Numbers use their canonical rendering, so a
    /// zero-padded `007` comes back as `7`.
    pub fn into_text(self) -> String {
        match self {
            FrontMatterValue::Text(s) => s,
            number => number.to_string(),
        }
    }
}

impl fmt::Display for FrontMatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontMatterValue::Text(s) => f.write_str(s),
            FrontMatterValue::Number(n) if n.is_infinite() => {
                if n.is_sign_positive() {
                    f.write_str("Infinity")
                } else {
                    f.write_str("-Infinity")
                }
            }
            FrontMatterValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for FrontMatterValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FrontMatterValue::Text(s) => serializer.serialize_str(s),
            FrontMatterValue::Number(n) if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER => {
                serializer.serialize_i64(*n as i64)
            }
            FrontMatterValue::Number(n) => serializer.serialize_f64(*n),
        }
    }
}

impl From<&str> for FrontMatterValue {
    fn from(s: &str) -> Self {
        FrontMatterValue::Text(s.to_string())
    }
}

impl From<f64> for FrontMatterValue {
    fn from(n: f64) -> Self {
        FrontMatterValue::Number(n)
    }
}

/// Front-matter data from a document, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrontMatter {
    fields: IndexMap<String, FrontMatterValue>,
}

impl FrontMatter {
    /// Parse front-matter from a document.
    /// Returns (front_matter, trimmed_body). Never fails: a missing or
    /// unterminated block yields empty metadata and the whole text as body.
    pub fn parse(text: &str) -> (Self, &str) {
        match split_block(text) {
            Some((block, body)) => (Self::from_block(block), body.trim()),
            None => {
                if text.starts_with(MARKER) {
                    tracing::debug!("Unterminated front-matter block, treating as body");
                }
                (FrontMatter::default(), text.trim())
            }
        }
    }

    fn from_block(block: &str) -> Self {
        let mut fields = IndexMap::new();

        for line in block.lines() {
            // A colon in the first column means there is no key
            let Some(colon) = line.find(':').filter(|&i| i > 0) else {
                continue;
            };
            let key = line[..colon].trim();
            if key.is_empty() {
                continue;
            }
            fields.insert(
                key.to_string(),
                FrontMatterValue::from_raw(&line[colon + 1..]),
            );
        }

        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&FrontMatterValue> {
        self.fields.get(key)
    }

    /// Remove a field, keeping the order of the rest
    pub fn take(&mut self, key: &str) -> Option<FrontMatterValue> {
        self.fields.shift_remove(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FrontMatterValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FrontMatterValue)> {
        self.fields.iter()
    }

    pub fn into_fields(self) -> IndexMap<String, FrontMatterValue> {
        self.fields
    }
}

/// Split `text` into (metadata_block, rest) when it opens with a marker line
/// and a later marker line closes the block.
fn split_block(text: &str) -> Option<(&str, &str)> {
    let after = text.strip_prefix(MARKER)?;
    let rest = after
        .strip_prefix("\r\n")
        .or_else(|| after.strip_prefix('\n'))?;

    // A marker right after the opening one closes an empty block, so
    // `---\n---\nbody` parses as no metadata plus `body`. The closing line
    // is matched with or without `\r`.
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        let next = offset + line.len();
        // The closing marker must itself be a terminated line
        if let Some(content) = line.strip_suffix('\n') {
            if content.strip_suffix('\r').unwrap_or(content) == MARKER {
                return Some((&rest[..offset], &rest[next..]));
            }
        }
        offset = next;
    }

    None
}

/// Strip one matching pair of wrapping quotes
fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a complete numeric literal. Accepts signed decimals with optional
/// fraction and exponent, `Infinity`, and unsigned hex/octal/binary integers.
fn parse_number(value: &str) -> Option<f64> {
    let s = value.trim();
    if s.is_empty() {
        return None;
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_integer(&s[2..], radix);
    }

    // f64::from_str also takes "inf" and "NaN", which are not numbers here
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }
    s.parse::<f64>().ok()
}

fn parse_radix_integer(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix).map(|d| acc * radix as f64 + d as f64)
    })
}
