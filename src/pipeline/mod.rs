//! The four-panel camera pipeline.
//!
//! Each frame the model goes world -> view -> clip -> NDC, and every stage
//! gets its own panel:
//!
//! - [`Panel::World`]: axes, model, camera marker and camera gizmo
//! - [`Panel::View`]: the same scene in camera coordinates
//! - [`Panel::Clip`]: the projected and divided model inside the NDC box
//! - [`Panel::Ndc`]: undivided clip coordinates for a clipping renderer

/// Per-frame assembly of all panels.
pub mod frame;
/// Panel scene types and the renderer seams.
pub mod panel;
/// Coordinate-space conversions.
pub mod stages;

pub use frame::{Frame, FrameBuilder};
pub use panel::{
    HomogeneousRenderer, HomogeneousScene, MeshDraw, Panel, PanelRenderer,
    PanelScene,
};
pub use stages::{
    ndc_box, perspective_divide, to_clip_space, to_view_space, world_axes,
};
