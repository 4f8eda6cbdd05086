//! Placement anchors for floating content overlays.

/// Where floating content sits relative to its anchor point.
///
/// Each anchor maps to a per-axis shift of the content by 0%, -50%, or
/// -100% of its own size. `TopCenter` shifts left by half the content's
/// width and up by its full height, so the content's bottom-center point
/// lands exactly on the anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentPlacement {
    TopLeft,
    #[default]
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ContentPlacement {
    /// Per-axis shifts as percentages of the content's own size.
    pub fn offsets(self) -> (i8, i8) {
        match self {
            ContentPlacement::TopLeft => (0, -100),
            ContentPlacement::TopCenter => (-50, -100),
            ContentPlacement::TopRight => (-100, -100),
            ContentPlacement::CenterLeft => (0, -50),
            ContentPlacement::Center => (-50, -50),
            ContentPlacement::CenterRight => (-100, -50),
            ContentPlacement::BottomLeft => (0, 0),
            ContentPlacement::BottomCenter => (-50, 0),
            ContentPlacement::BottomRight => (-100, 0),
        }
    }

    /// The CSS transform realizing this anchor.
    pub fn css_transform(self) -> &'static str {
        match self {
            ContentPlacement::TopLeft => "translate(0, -100%)",
            ContentPlacement::TopCenter => "translate(-50%, -100%)",
            ContentPlacement::TopRight => "translate(-100%, -100%)",
            ContentPlacement::CenterLeft => "translate(0, -50%)",
            ContentPlacement::Center => "translate(-50%, -50%)",
            ContentPlacement::CenterRight => "translate(-100%, -50%)",
            ContentPlacement::BottomLeft => "translate(0, 0)",
            ContentPlacement::BottomCenter => "translate(-50%, 0)",
            ContentPlacement::BottomRight => "translate(-100%, 0)",
        }
    }
}
