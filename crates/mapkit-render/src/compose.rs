//! Scene composition: structured document + caller config -> visual tree.
//!
//! Composition is a pure function of its inputs. Layer order is paint
//! order: the Background group (when shown), every remaining group in
//! document order, then one synthetic transparent hit-testing layer built
//! from the outline group, stacked last so pointer capture never fights
//! with visible styling.

use tracing::debug;

use mapkit_document::region::prefix;
use mapkit_document::{Element, ElementKind, Group, GroupRole, MapDocument};

use crate::config::MapConfig;
use crate::fill::resolve_fill;
use crate::scene::{
    DotAnchor, HitArea, Layer, OverlayNode, PointerBindings, Scene, SceneNode, Shape,
};

/// Compose the visual tree for one render call.
pub fn compose(document: &MapDocument, config: &MapConfig) -> Scene {
    let mut layers = Vec::with_capacity(document.groups.len() + 1);

    for group in &document.groups {
        if group.role() == Some(GroupRole::Background) && !config.show_background {
            continue;
        }
        layers.push(compose_group(group, config));
    }

    if let Some(outline_group) = document.group(GroupRole::Outline) {
        layers.push(compose_hit_layer(outline_group, config));
    }

    debug!(layers = layers.len(), "composed scene");

    Scene {
        width: document.width,
        height: document.height,
        view_box: document.view_box.clone(),
        class_name: config.class_name.clone(),
        layers,
    }
}

fn compose_group(group: &Group, config: &MapConfig) -> Layer {
    let role = group.role();
    let mut nodes = Vec::with_capacity(group.elements.len());

    for element in &group.elements {
        match element.kind {
            ElementKind::Circle => {
                if let Some(overlay) = compose_overlay(element, config) {
                    nodes.push(SceneNode::Overlay(overlay));
                }
            }
            ElementKind::Path => {
                nodes.push(SceneNode::Shape(compose_shape(element, role, config)));
            }
        }
    }

    Layer {
        id: group.id.clone(),
        attributes: group.attributes.clone(),
        nodes,
    }
}

fn compose_shape(element: &Element, role: Option<GroupRole>, config: &MapConfig) -> Shape {
    let fill = match role {
        Some(GroupRole::Outline) => resolve_fill(
            element.id.as_deref(),
            &config.outline_fills,
            config.default_outline_fill.as_deref(),
        ),
        Some(GroupRole::Label) => resolve_fill(
            element.id.as_deref(),
            &config.label_fills,
            config.default_label_fill.as_deref(),
        ),
        _ => None,
    };

    let mut attributes = element.attributes.clone();
    if let Some(fill) = fill {
        // A resolved fill overrides the markup fill.
        attributes.insert("fill".to_string(), fill.into());
    }

    Shape {
        kind: element.kind,
        id: element.id.clone(),
        attributes,
    }
}

/// A dot emits floating content only when its id classifies as a dot with a
/// region code and a content source yields something. No empty wrappers.
fn compose_overlay(element: &Element, config: &MapConfig) -> Option<OverlayNode> {
    let identity = element.identity();
    let code = identity.code?;
    if identity.prefix != Some(prefix::DOT) {
        return None;
    }

    let anchor = DotAnchor {
        cx: element.number("cx").unwrap_or(0.0),
        cy: element.number("cy").unwrap_or(0.0),
        r: element.number("r"),
    };

    // Candidate sources, first present wins.
    let content = config
        .render_overlay
        .as_ref()
        .and_then(|render| render(code, anchor))
        .or_else(|| config.overlay_contents.get(&code).cloned())?;

    Some(OverlayNode {
        code,
        anchor,
        placement: config.placement,
        content,
    })
}

/// Duplicate every code-bearing outline as a transparent hit area. The
/// layer itself is emitted whenever the outline group exists, handlers
/// configured or not.
fn compose_hit_layer(outline_group: &Group, config: &MapConfig) -> Layer {
    let mut nodes = Vec::new();

    for element in &outline_group.elements {
        if element.kind != ElementKind::Path {
            continue;
        }
        let identity = element.identity();
        let (Some(raw), Some(code)) = (identity.raw, identity.code) else {
            continue;
        };

        let mut attributes = element.attributes.clone();
        attributes.insert("fill".to_string(), "transparent".into());

        nodes.push(SceneNode::HitArea(HitArea {
            id: format!("{raw}-transparent"),
            code,
            attributes,
            bindings: PointerBindings {
                on_hover: config.on_hover.clone(),
                on_leave: config.on_leave.clone(),
                on_click: config.on_click.clone(),
            },
        }));
    }

    Layer {
        id: format!("{}Transparent", outline_group.id),
        attributes: outline_group.attributes.clone(),
        nodes,
    }
}
