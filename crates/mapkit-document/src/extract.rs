//! Best-effort extraction of the structured document from raw SVG markup.
//!
//! This is not a validating parser. Top-level `<g id="...">` blocks become
//! groups, self-closing `<path/>` and `<circle/>` blocks inside them become
//! elements, and anything that does not match is simply not captured.
//! Extraction never fails; malformed input yields a partial or empty
//! document.

use tracing::debug;

use crate::attr::{coerce_value, normalize_attributes, parse_attributes};
use crate::{Element, ElementKind, Group, MapDocument};

/// Extract a structured document from raw markup.
pub(crate) fn extract(raw: &str) -> MapDocument {
    let root = root_attributes(raw);
    let root_value = |name: &str| {
        root.iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    };

    let width = root_value("width").and_then(|v| coerce_value(v).as_f64());
    let height = root_value("height").and_then(|v| coerce_value(v).as_f64());
    let view_box = root_value("viewBox").map(str::to_string);

    let groups = extract_groups(raw);
    let elements: usize = groups.iter().map(|g| g.elements.len()).sum();
    debug!(
        groups = groups.len(),
        elements, "extracted structured map document"
    );

    MapDocument {
        width,
        height,
        view_box,
        groups,
    }
}

/// Read the attribute list of the root `<svg ...>` open tag.
fn root_attributes(raw: &str) -> Vec<(String, String)> {
    let Some(start) = raw.find("<svg") else {
        return Vec::new();
    };
    let after = &raw[start + 4..];
    let Some(end) = after.find('>') else {
        return Vec::new();
    };
    parse_attributes(&after[..end])
}

/// Scan for `<g ...>` blocks carrying an `id` attribute.
fn extract_groups(raw: &str) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut pos = 0;

    while let Some(found) = raw[pos..].find("<g") {
        let tag_start = pos + found;
        let attrs_start = tag_start + 2;

        // Only `<g ` opens a group; `<glyph`-style tags pass through.
        match raw.as_bytes().get(attrs_start) {
            Some(b) if b.is_ascii_whitespace() => {}
            _ => {
                pos = attrs_start;
                continue;
            }
        }

        let Some(gt) = raw[attrs_start..].find('>') else {
            break;
        };
        let attrs_end = attrs_start + gt;
        let attrs_raw = &raw[attrs_start..attrs_end];

        let (body, next) = if attrs_raw.trim_end().ends_with('/') {
            // Self-closing group: no body to scan.
            ("", attrs_end + 1)
        } else {
            let body_start = attrs_end + 1;
            let Some(close) = raw[body_start..].find("</g>") else {
                // Unterminated group: not captured.
                break;
            };
            (
                &raw[body_start..body_start + close],
                body_start + close + "</g>".len(),
            )
        };
        pos = next;

        let mut pairs = parse_attributes(attrs_raw);
        let Some(id_index) = pairs.iter().position(|(key, _)| key == "id") else {
            continue;
        };
        let id = pairs.remove(id_index).1;

        groups.push(Group {
            id,
            attributes: normalize_attributes(pairs),
            elements: extract_elements(body),
        });
    }

    groups
}

/// Scan a group body for self-closing `<path/>` and `<circle/>` blocks.
fn extract_elements(body: &str) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut pos = 0;

    while let Some(found) = body[pos..].find('<') {
        let tag_start = pos + found;
        let rest = &body[tag_start + 1..];

        let (kind, name_len) = if rest.starts_with("path") {
            (ElementKind::Path, "path".len())
        } else if rest.starts_with("circle") {
            (ElementKind::Circle, "circle".len())
        } else {
            pos = tag_start + 1;
            continue;
        };

        let after_name = &rest[name_len..];
        match after_name.bytes().next() {
            Some(b) if b.is_ascii_whitespace() || b == b'/' => {}
            _ => {
                // `<pathway ...>` and friends.
                pos = tag_start + 1;
                continue;
            }
        }

        let Some(gt) = after_name.find('>') else {
            break;
        };
        let tag_body = &after_name[..gt];
        pos = tag_start + 1 + name_len + gt + 1;

        // Only self-closing blocks are captured.
        let Some(attrs_raw) = tag_body.trim_end().strip_suffix('/') else {
            continue;
        };

        let mut pairs = parse_attributes(attrs_raw);
        let id = pairs
            .iter()
            .position(|(key, _)| key == "id")
            .map(|index| pairs.remove(index).1);

        elements.push(Element {
            kind,
            id,
            attributes: normalize_attributes(pairs),
        });
    }

    elements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attr::AttrValue;
    use crate::region::classify;

    const MARKUP: &str = r##"<svg width="934" height="571" viewBox="0 0 934 571" xmlns="http://www.w3.org/2000/svg">
  <g id="BackgroundGroup" fill="none">
    <path d="M0 0h934v571H0z" fill="#E8F4F8"/>
  </g>
  <g id="PathGroup" stroke="#FFFFFF" stroke-width="1.5">
    <path id="Path01" d="M10 10h50v40H10z" fill="#CCCCCC"/>
    <path id="Path12" d="M70 10h50v40H70z"/>
    <path d="M130 10h20v20h-20z"/>
  </g>
  <g id="TextGroup">
    <path id="Text01" d="M20 30h10v5H20z" fill="#000000"/>
  </g>
  <g id="DotGroup">
    <circle id="Dot01" cx="35" cy="30" r="3"/>
    <circle id="Dot12" cx="95" cy="30" r="3"/>
  </g>
</svg>"##;

    #[test]
    fn test_extract_root_dimensions() {
        let doc = extract(MARKUP);
        assert_eq!(doc.width, Some(934.0));
        assert_eq!(doc.height, Some(571.0));
        assert_eq!(doc.view_box.as_deref(), Some("0 0 934 571"));
    }

    #[test]
    fn test_extract_groups_in_order() {
        let doc = extract(MARKUP);
        let ids: Vec<&str> = doc.groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["BackgroundGroup", "PathGroup", "TextGroup", "DotGroup"]
        );
    }

    #[test]
    fn test_group_attributes_normalized_and_id_lifted() {
        let doc = extract(MARKUP);
        let path_group = &doc.groups[1];
        assert!(path_group.attributes.get("id").is_none());
        assert_eq!(
            path_group.attributes.get("strokeWidth"),
            Some(&AttrValue::Number(1.5))
        );
        assert_eq!(
            path_group.attributes.get("stroke"),
            Some(&AttrValue::Text("#FFFFFF".into()))
        );
    }

    #[test]
    fn test_element_kinds_and_ids() {
        let doc = extract(MARKUP);
        let path_group = &doc.groups[1];
        assert_eq!(path_group.elements.len(), 3);
        assert_eq!(path_group.elements[0].kind, ElementKind::Path);
        assert_eq!(path_group.elements[0].id.as_deref(), Some("Path01"));
        assert_eq!(path_group.elements[2].id, None);

        let dot_group = &doc.groups[3];
        assert_eq!(dot_group.elements[0].kind, ElementKind::Circle);
        assert_eq!(
            dot_group.elements[0].attributes.get("cx"),
            Some(&AttrValue::Number(35.0))
        );
    }

    #[test]
    fn test_round_trip_identifiers_classify() {
        let doc = extract(MARKUP);
        let codes: Vec<u32> = doc.groups[1]
            .elements
            .iter()
            .filter_map(|e| classify(e.id.as_deref()).code)
            .collect();
        assert_eq!(codes, vec![1, 12]);
    }

    #[test]
    fn test_extract_empty_and_malformed() {
        assert!(extract("").groups.is_empty());
        assert!(extract("not markup at all").groups.is_empty());

        // Unterminated group is not captured.
        let doc = extract(r#"<svg><g id="PathGroup"><path id="Path01" d="M0 0"/>"#);
        assert!(doc.groups.is_empty());
    }

    #[test]
    fn test_group_without_id_is_skipped() {
        let doc = extract(r#"<svg><g fill="none"><path d="M0 0z"/></g></svg>"#);
        assert!(doc.groups.is_empty());
    }

    #[test]
    fn test_non_self_closing_elements_not_captured() {
        let doc = extract(r#"<svg><g id="PathGroup"><path d="M0 0z"></path><circle cx="1" cy="2" r="3"/></g></svg>"#);
        assert_eq!(doc.groups[0].elements.len(), 1);
        assert_eq!(doc.groups[0].elements[0].kind, ElementKind::Circle);
    }
}
