//! SVG text serialization for composed scenes.
//!
//! The scene tree is the contract; this module is the convenience for hosts
//! that embed markup directly. Attribute keys go back from camelCase to
//! hyphenated SVG names on the way out, values are escaped, and overlay
//! content is embedded verbatim (it is caller-supplied markup).

use std::fmt::Write as _;

use mapkit_document::{Attributes, ElementKind};

use crate::scene::{HitArea, Layer, OverlayNode, Scene, SceneNode, Shape};

impl Scene {
    /// Serialize the scene to SVG markup. Deterministic for a given scene.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();
        svg.push_str("<svg");
        if let Some(class_name) = &self.class_name {
            push_attribute(&mut svg, "class", class_name);
        }
        if let Some(width) = self.width {
            push_attribute(&mut svg, "width", &format_number(width));
        }
        if let Some(height) = self.height {
            push_attribute(&mut svg, "height", &format_number(height));
        }
        if let Some(view_box) = &self.view_box {
            push_attribute(&mut svg, "viewBox", view_box);
        }
        push_attribute(&mut svg, "xmlns", "http://www.w3.org/2000/svg");
        svg.push_str(">\n");

        for layer in &self.layers {
            push_layer(&mut svg, layer);
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn push_layer(svg: &mut String, layer: &Layer) {
    svg.push_str("<g");
    push_attribute(svg, "id", &layer.id);
    push_attributes(svg, &layer.attributes);
    svg.push_str(">\n");

    for node in &layer.nodes {
        match node {
            SceneNode::Shape(shape) => push_shape(svg, shape),
            SceneNode::Overlay(overlay) => push_overlay(svg, overlay),
            SceneNode::HitArea(area) => push_hit_area(svg, area),
        }
    }

    svg.push_str("</g>\n");
}

fn push_shape(svg: &mut String, shape: &Shape) {
    let _ = write!(svg, "<{}", shape.kind.tag_name());
    if let Some(id) = &shape.id {
        push_attribute(svg, "id", id);
    }
    push_attributes(svg, &shape.attributes);
    svg.push_str("/>\n");
}

/// Floating content rides in a full-viewport foreignObject that never
/// intercepts pointer events; the positioned wrapper re-enables them so
/// the content itself stays interactive.
fn push_overlay(svg: &mut String, overlay: &OverlayNode) {
    svg.push_str(
        "<foreignObject x=\"0\" y=\"0\" width=\"100%\" height=\"100%\" \
         style=\"overflow:visible;pointer-events:none\">\n",
    );
    let _ = write!(
        svg,
        "<div style=\"position:absolute;left:{}px;top:{}px;transform:{};\
         display:inline-block;pointer-events:auto\">",
        format_number(overlay.anchor.cx),
        format_number(overlay.anchor.cy),
        overlay.placement.css_transform(),
    );
    svg.push_str(&overlay.content);
    svg.push_str("</div>\n</foreignObject>\n");
}

fn push_hit_area(svg: &mut String, area: &HitArea) {
    let _ = write!(svg, "<{}", ElementKind::Path.tag_name());
    push_attribute(svg, "id", &area.id);
    push_attributes(svg, &area.attributes);
    let _ = write!(svg, " data-region=\"{}\"", area.code);
    push_attribute(svg, "pointer-events", "all");
    svg.push_str("/>\n");
}

fn push_attributes(svg: &mut String, attributes: &Attributes) {
    for (key, value) in attributes {
        push_attribute(svg, &to_kebab_case(key), &value.to_string());
    }
}

fn push_attribute(svg: &mut String, name: &str, value: &str) {
    let _ = write!(svg, " {}=\"{}\"", name, escape_xml(value));
}

/// Convert a camelCase key back to its hyphenated SVG name
/// (`strokeWidth` -> `stroke-width`).
fn to_kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 2);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
