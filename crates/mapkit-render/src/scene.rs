//! The composed visual tree.
//!
//! A `Scene` is a plain value: composing twice from the same document and
//! config yields structurally equal scenes. Pointer handlers are carried by
//! hit areas and compared by presence, not identity, so the equality is
//! lawful for the re-entrancy contract.

use std::fmt;

use mapkit_document::{Attributes, ElementKind, RegionCode};

use crate::config::RegionHandler;
use crate::placement::ContentPlacement;

/// A dot element's coordinates, handed to overlay renderers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DotAnchor {
    pub cx: f64,
    pub cy: f64,
    pub r: Option<f64>,
}

/// The composed scene: root dimensions plus ordered layers, bottom to top.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub view_box: Option<String>,
    pub class_name: Option<String>,
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Iterate every hit area in the scene, bottom to top.
    pub fn hit_areas(&self) -> impl Iterator<Item = &HitArea> {
        self.layers.iter().flat_map(|layer| {
            layer.nodes.iter().filter_map(|node| match node {
                SceneNode::HitArea(area) => Some(area),
                _ => None,
            })
        })
    }
}

/// One layer of the scene. Mirrors a document group, except for the
/// synthetic hit-testing layer stacked last.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub id: String,
    pub attributes: Attributes,
    pub nodes: Vec<SceneNode>,
}

/// A node of the visual tree.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneNode {
    /// A visible shape with its effective attributes.
    Shape(Shape),
    /// Floating content anchored at a dot's coordinates.
    Overlay(OverlayNode),
    /// Transparent pointer-capture duplicate of an outline.
    HitArea(HitArea),
}

/// A visible shape. The attribute bag is final: any resolved region fill
/// has already overridden the markup fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ElementKind,
    pub id: Option<String>,
    pub attributes: Attributes,
}

/// Floating content anchored at `(cx, cy)`.
///
/// The content markup stays interactive; the positioning wrapper around it
/// must not intercept pointer events outside the content's own bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayNode {
    pub code: RegionCode,
    pub anchor: DotAnchor,
    pub placement: ContentPlacement,
    /// Caller-supplied content markup, embedded verbatim.
    pub content: String,
}

/// Pointer callbacks bound to a hit area.
///
/// Only configured callbacks are bound; an unbound slot stays `None`
/// rather than holding a no-op.
#[derive(Clone, Default)]
pub struct PointerBindings {
    pub on_hover: Option<RegionHandler>,
    pub on_leave: Option<RegionHandler>,
    pub on_click: Option<RegionHandler>,
}

impl PointerBindings {
    /// True when no callback is bound.
    pub fn is_empty(&self) -> bool {
        self.on_hover.is_none() && self.on_leave.is_none() && self.on_click.is_none()
    }
}

impl fmt::Debug for PointerBindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerBindings")
            .field("on_hover", &self.on_hover.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .field("on_click", &self.on_click.is_some())
            .finish()
    }
}

impl PartialEq for PointerBindings {
    fn eq(&self, other: &Self) -> bool {
        self.on_hover.is_some() == other.on_hover.is_some()
            && self.on_leave.is_some() == other.on_leave.is_some()
            && self.on_click.is_some() == other.on_click.is_some()
    }
}

/// An invisible duplicate of a region outline, topmost, capturing pointer
/// events for its region code.
#[derive(Debug, Clone, PartialEq)]
pub struct HitArea {
    /// The visible element's id plus a `-transparent` suffix.
    pub id: String,
    pub code: RegionCode,
    /// Duplicate attributes with `fill` forced to `transparent`.
    pub attributes: Attributes,
    pub bindings: PointerBindings,
}

impl HitArea {
    /// Pointer entered the region.
    pub fn pointer_enter(&self) {
        if let Some(handler) = &self.bindings.on_hover {
            handler(self.code);
        }
    }

    /// Pointer left the region.
    pub fn pointer_leave(&self) {
        if let Some(handler) = &self.bindings.on_leave {
            handler(self.code);
        }
    }

    /// Pointer pressed on the region.
    pub fn pointer_press(&self) {
        if let Some(handler) = &self.bindings.on_click {
            handler(self.code);
        }
    }
}
