//! # MapKit Document
//!
//! The structured map document: a strongly-typed form of the hand-authored
//! SVG that drives the interactive region map.
//!
//! ## Architecture
//!
//! ```text
//! raw SVG markup
//!    └── extract (best-effort scan, once, offline or at load time)
//!           └── MapDocument
//!                  ├── root dimensions (width, height, viewBox)
//!                  └── Groups (document order = paint order)
//!                         └── Elements (path | circle) + attribute bags
//! ```
//!
//! The document is produced once and treated as read-only static data for
//! the lifetime of the rendering component; the persisted JSON form
//! (`map.json`) is a consumer contract.

use serde::{Deserialize, Serialize};

pub mod attr;
mod extract;
pub mod region;

pub use attr::{AttrValue, Attributes};
pub use region::{classify, RegionCode, RegionIdentity};

use mapkit_common::Result;

/// A structured map document: root dimensions plus ordered groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapDocument {
    /// Document width, when the root carries a numeric one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Document height, when the root carries a numeric one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Root viewBox, verbatim.
    #[serde(rename = "viewBox", skip_serializing_if = "Option::is_none")]
    pub view_box: Option<String>,
    /// Groups in source order. Later groups draw on top.
    pub groups: Vec<Group>,
}

impl MapDocument {
    /// Extract a structured document from raw SVG markup.
    ///
    /// Best-effort and infallible: unmatched fragments are not captured,
    /// and markup with no groups yields an empty document.
    pub fn extract(raw: &str) -> Self {
        extract::extract(raw)
    }

    /// Load a persisted document from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to the persisted JSON form.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serialize to the persisted JSON form, pretty-printed.
    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Find the first group with the given role.
    pub fn group(&self, role: GroupRole) -> Option<&Group> {
        self.groups.iter().find(|g| g.role() == Some(role))
    }

    /// Total element count across all groups.
    pub fn element_count(&self) -> usize {
        self.groups.iter().map(|g| g.elements.len()).sum()
    }
}

/// Semantic role of a group, derived from its markup id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupRole {
    /// Decorative backdrop; the only group ever conditionally excluded.
    Background,
    /// Region boundary outlines.
    Outline,
    /// Region labels (outlined text).
    Label,
    /// Content-overlay anchor dots.
    Dot,
}

/// One named group of elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// The group's markup id (`PathGroup`, `DotGroup`, ...).
    pub id: String,
    /// Group-level presentation attributes, id removed.
    pub attributes: Attributes,
    /// Elements in source order.
    pub elements: Vec<Element>,
}

impl Group {
    /// Map the group id onto its role. Unknown ids have no role and still
    /// render.
    pub fn role(&self) -> Option<GroupRole> {
        match self.id.as_str() {
            "BackgroundGroup" => Some(GroupRole::Background),
            "PathGroup" => Some(GroupRole::Outline),
            "TextGroup" => Some(GroupRole::Label),
            "DotGroup" => Some(GroupRole::Dot),
            _ => None,
        }
    }
}

/// Element shape kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Closed outline shape.
    Path,
    /// Point anchor for a floating content overlay.
    Circle,
}

impl ElementKind {
    /// The markup tag name for this kind.
    pub fn tag_name(self) -> &'static str {
        match self {
            ElementKind::Path => "path",
            ElementKind::Circle => "circle",
        }
    }
}

/// One drawable element.
///
/// Serializes flat — kind tag and identifier alongside the attribute bag —
/// matching the persisted artifact:
/// `{"type": "path", "id": "Path12", "d": "...", "fill": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// Raw markup identifier, never normalized or coerced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub attributes: Attributes,
}

impl Element {
    /// Classify this element's identifier.
    pub fn identity(&self) -> RegionIdentity<'_> {
        classify(self.id.as_deref())
    }

    /// Numeric attribute accessor.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.attributes.get(key).and_then(AttrValue::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> MapDocument {
        MapDocument::extract(
            r##"<svg width="100" height="60" viewBox="0 0 100 60">
  <g id="BackgroundGroup"><path d="M0 0h100v60H0z" fill="#EEE"/></g>
  <g id="PathGroup"><path id="Path07" d="M1 1h8v8H1z"/></g>
  <g id="DotGroup"><circle id="Dot07" cx="5" cy="5" r="2"/></g>
</svg>"##,
        )
    }

    #[test]
    fn test_json_round_trip() {
        let doc = sample_document();
        let json = doc.to_json_string().unwrap();
        let reloaded = MapDocument::from_json_str(&json).unwrap();
        assert_eq!(doc, reloaded);
    }

    #[test]
    fn test_json_contract_shape() {
        let doc = sample_document();
        let json = doc.to_json_string().unwrap();
        assert!(json.contains(r#""viewBox":"0 0 100 60""#));
        assert!(json.contains(r#""type":"path""#));
        assert!(json.contains(r#""id":"Dot07""#));
        // Integral numbers persist without a fractional part.
        assert!(json.contains(r#""cx":5"#));
        assert!(!json.contains("5.0"));
    }

    #[test]
    fn test_group_roles() {
        let doc = sample_document();
        assert_eq!(doc.groups[0].role(), Some(GroupRole::Background));
        assert!(doc.group(GroupRole::Outline).is_some());
        assert!(doc.group(GroupRole::Label).is_none());

        let unknown = Group {
            id: "Legend".to_string(),
            attributes: Attributes::new(),
            elements: Vec::new(),
        };
        assert_eq!(unknown.role(), None);
    }

    #[test]
    fn test_element_identity_and_numbers() {
        let doc = sample_document();
        let dot = &doc.group(GroupRole::Dot).unwrap().elements[0];
        assert_eq!(dot.identity().code, Some(7));
        assert_eq!(dot.identity().prefix, Some(region::prefix::DOT));
        assert_eq!(dot.number("cx"), Some(5.0));
        assert_eq!(dot.number("missing"), None);
    }

    #[test]
    fn test_element_count() {
        assert_eq!(sample_document().element_count(), 3);
    }
}
