//! Per-region fill resolution.

use std::collections::HashMap;

use mapkit_document::{classify, RegionCode};

/// Resolve the effective fill for a region-bearing element.
///
/// Candidates, first present wins: the caller's per-code mapping, then the
/// caller's default. `None` means "no explicit fill" — the element's own
/// markup attributes stand.
///
/// Invoked once per drawing layer with that layer's mapping (outline fills
/// for the outline group, label fills for the label group), never
/// cross-applied.
pub fn resolve_fill(
    id: Option<&str>,
    fills: &HashMap<RegionCode, String>,
    default_fill: Option<&str>,
) -> Option<String> {
    classify(id)
        .code
        .and_then(|code| fills.get(&code).cloned())
        .or_else(|| default_fill.map(str::to_string))
}
