//! Caller configuration for one composition pass.

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use mapkit_document::RegionCode;

use crate::placement::ContentPlacement;
use crate::scene::DotAnchor;

/// Pointer event callback. Receives the region code, nothing else.
pub type RegionHandler = Rc<dyn Fn(RegionCode)>;

/// Coordinate-aware overlay content generator. Takes priority over the
/// per-code lookup when both are supplied; returning `None` falls through
/// to the lookup.
pub type OverlayRenderer = Rc<dyn Fn(RegionCode, DotAnchor) -> Option<String>>;

/// Configuration for one composition pass.
///
/// Owned entirely by the caller and passed fresh on every call; the
/// composition core holds no interaction state of its own. Live state like
/// the currently hovered or selected code belongs to the host, which bakes
/// it into the fills and contents it passes here.
#[derive(Clone)]
pub struct MapConfig {
    /// Class attribute for the scene root.
    pub class_name: Option<String>,
    /// Render the Background group. On by default.
    pub show_background: bool,
    /// Per-code fills for region outlines.
    pub outline_fills: HashMap<RegionCode, String>,
    /// Fallback fill for outlines with no mapped code.
    pub default_outline_fill: Option<String>,
    /// Per-code fills for region labels.
    pub label_fills: HashMap<RegionCode, String>,
    /// Fallback fill for labels with no mapped code.
    pub default_label_fill: Option<String>,
    /// Pointer entered a region.
    pub on_hover: Option<RegionHandler>,
    /// Pointer left a region.
    pub on_leave: Option<RegionHandler>,
    /// Pointer pressed on a region.
    pub on_click: Option<RegionHandler>,
    /// Overlay content generator; wins over `overlay_contents`.
    pub render_overlay: Option<OverlayRenderer>,
    /// Per-code overlay content lookup.
    pub overlay_contents: HashMap<RegionCode, String>,
    /// Placement anchor for overlay content.
    pub placement: ContentPlacement,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            class_name: None,
            show_background: true,
            outline_fills: HashMap::new(),
            default_outline_fill: None,
            label_fills: HashMap::new(),
            default_label_fill: None,
            on_hover: None,
            on_leave: None,
            on_click: None,
            render_overlay: None,
            overlay_contents: HashMap::new(),
            placement: ContentPlacement::default(),
        }
    }
}

impl fmt::Debug for MapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapConfig")
            .field("class_name", &self.class_name)
            .field("show_background", &self.show_background)
            .field("outline_fills", &self.outline_fills)
            .field("default_outline_fill", &self.default_outline_fill)
            .field("label_fills", &self.label_fills)
            .field("default_label_fill", &self.default_label_fill)
            .field("on_hover", &self.on_hover.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .field("on_click", &self.on_click.is_some())
            .field("render_overlay", &self.render_overlay.is_some())
            .field("overlay_contents", &self.overlay_contents)
            .field("placement", &self.placement)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MapConfig::default();
        assert!(config.show_background);
        assert_eq!(config.placement, ContentPlacement::TopCenter);
        assert!(config.outline_fills.is_empty());
        assert!(config.on_hover.is_none());
    }
}
