//! Attribute bags: generic `key="value"` scanning, key normalization, and
//! numeric value coercion.
//!
//! Attributes are normalized exactly once, at extraction time. Keys go from
//! hyphenated markup names to camelCase (`stroke-width` -> `strokeWidth`),
//! and values that parse fully as a finite number are stored as numbers.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

/// A scalar attribute value: number or text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Numeric value (coordinates, radii, opacities, ...).
    Number(f64),
    /// Everything else (colors, path data, transforms, ...).
    Text(String),
}

/// An ordered attribute bag.
///
/// BTreeMap keeps key order deterministic, so the persisted JSON and any
/// markup emitted from it are stable across runs.
pub type Attributes = BTreeMap<String, AttrValue>;

impl AttrValue {
    /// Get the numeric value, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(_) => None,
        }
    }

    /// Get the text value, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Number(_) => None,
            AttrValue::Text(t) => Some(t),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            AttrValue::Number(n) => write!(f, "{}", n),
            AttrValue::Text(t) => f.write_str(t),
        }
    }
}

impl Serialize for AttrValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Integral values serialize without a fractional part, matching
            // the persisted artifact ("cx": 42, not 42.0).
            AttrValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                serializer.serialize_i64(*n as i64)
            }
            AttrValue::Number(n) => serializer.serialize_f64(*n),
            AttrValue::Text(t) => serializer.serialize_str(t),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<&str> for AttrValue {
    fn from(t: &str) -> Self {
        AttrValue::Text(t.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(t: String) -> Self {
        AttrValue::Text(t)
    }
}

/// Coerce a raw attribute string: a value that parses fully as a finite
/// number becomes a number, anything else stays text.
pub fn coerce_value(raw: &str) -> AttrValue {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => AttrValue::Number(n),
        _ => AttrValue::Text(raw.to_string()),
    }
}

/// Convert a hyphenated markup key to camelCase (`fill-rule` -> `fillRule`).
///
/// Only a hyphen followed by an ASCII lowercase letter collapses; other
/// hyphens pass through unchanged.
pub fn to_camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '-' {
            if let Some(&next) = chars.peek() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }

    out
}

fn is_key_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b':' || b == b'_'
}

/// Scan an attribute list for `key="value"` pairs, in order.
///
/// Keys may contain letters, digits, hyphens, colons, and underscores;
/// values may be single- or double-quoted. Unmatched fragments are skipped,
/// not reported.
pub fn parse_attributes(raw: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    let bytes = raw.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !is_key_byte(bytes[i]) {
            i += 1;
            continue;
        }

        // Key run
        let key_start = i;
        while i < bytes.len() && is_key_byte(bytes[i]) {
            i += 1;
        }
        let key_end = i;

        // key = "value", whitespace allowed around '='
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'=' {
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || (bytes[i] != b'"' && bytes[i] != b'\'') {
            continue;
        }
        let quote = bytes[i];
        i += 1;

        let value_start = i;
        let Some(len) = bytes[i..].iter().position(|&b| b == quote) else {
            break;
        };
        let value_end = value_start + len;
        i = value_end + 1;

        pairs.push((
            raw[key_start..key_end].to_string(),
            raw[value_start..value_end].to_string(),
        ));
    }

    pairs
}

/// Build a normalized attribute bag from raw pairs: keys camelized, values
/// coerced. A key occurring twice keeps the later value.
pub fn normalize_attributes<I>(pairs: I) -> Attributes
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut attributes = Attributes::new();
    for (key, value) in pairs {
        attributes.insert(to_camel_case(&key), coerce_value(&value));
    }
    attributes
}
