//! # MapKit Render
//!
//! Scene composition for the interactive region map: per-region styling,
//! floating content overlays, and a transparent hit-testing layer, all
//! driven by the structured document and one caller-supplied config.
//!
//! ## Architecture
//!
//! ```text
//! MapDocument + MapConfig
//!    └── compose (pure, re-entrant)
//!           └── Scene
//!                  ├── group layers (document order = paint order)
//!                  │      ├── shapes with resolved fills
//!                  │      └── floating content at dot anchors
//!                  └── transparent hit layer (topmost)
//! ```
//!
//! Interaction state — the currently hovered or selected region — lives in
//! the host, never here. Every composition is a pure function of its
//! inputs.

pub mod compose;
pub mod config;
pub mod fill;
pub mod placement;
pub mod scene;
mod svg;

pub use compose::compose;
pub use config::{MapConfig, OverlayRenderer, RegionHandler};
pub use fill::resolve_fill;
pub use placement::ContentPlacement;
pub use scene::{
    DotAnchor, HitArea, Layer, OverlayNode, PointerBindings, Scene, SceneNode, Shape,
};
