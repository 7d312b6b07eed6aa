//! Debug line geometry drawn on top of the panels.
//!
//! Everything here is a pure function of the view and projection matrices
//! and is rebuilt every frame.

/// Camera axes and view frustum lines.
pub mod camera;
/// Colored line segment container.
pub mod lines;

pub use camera::{camera_axes, camera_gizmo, scaled_camera_axes, view_frustum};
pub use lines::{box_edges, LineVertex, Lines};
