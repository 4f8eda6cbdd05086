//! Region identity: the `<RolePrefix><integerCode>` identifier convention.
//!
//! Every interactive element in the source document carries an id like
//! `Path12`, `Text12`, or `Dot12` — a role prefix followed by the region's
//! integer code. Classification is derived on demand and never stored.

/// Integer code identifying one named region. The sole external key for
/// styling and interaction.
pub type RegionCode = u32;

/// Role prefixes used by the fixed map artifact.
pub mod prefix {
    /// Region boundary outline (`<path>`).
    pub const OUTLINE: &str = "Path";
    /// Region label (`<path>`, outlined text).
    pub const LABEL: &str = "Text";
    /// Content-overlay anchor (`<circle>`).
    pub const DOT: &str = "Dot";
}

/// The parts of a classified identifier.
///
/// All fields are `None` for an absent or empty identifier; `prefix` and
/// `code` are `None` for any identifier that does not match the anchored
/// `<letters><digits>` pattern. Neither case is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionIdentity<'a> {
    /// The identifier as written in the markup.
    pub raw: Option<&'a str>,
    /// The leading letters, when the pattern matches.
    pub prefix: Option<&'a str>,
    /// The trailing digits as an integer, when the pattern matches.
    pub code: Option<RegionCode>,
}

impl<'a> RegionIdentity<'a> {
    fn unmatched(raw: &'a str) -> Self {
        Self {
            raw: Some(raw),
            prefix: None,
            code: None,
        }
    }
}

/// Classify an identifier against the `<letters><digits>` pattern.
///
/// The match is anchored: the whole identifier must be one or more ASCII
/// letters followed by one or more ASCII digits. A digit run that overflows
/// `u32` is treated as no match, so classification stays total and
/// deterministic.
pub fn classify(id: Option<&str>) -> RegionIdentity<'_> {
    let Some(raw) = id.filter(|s| !s.is_empty()) else {
        return RegionIdentity::default();
    };

    let letters = raw
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(raw.len());
    if letters == 0 || letters == raw.len() {
        return RegionIdentity::unmatched(raw);
    }

    let (prefix, digits) = raw.split_at(letters);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return RegionIdentity::unmatched(raw);
    }

    match digits.parse::<RegionCode>() {
        Ok(code) => RegionIdentity {
            raw: Some(raw),
            prefix: Some(prefix),
            code: Some(code),
        },
        Err(_) => RegionIdentity::unmatched(raw),
    }
}
