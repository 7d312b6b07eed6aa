//! Camera transforms for the pipeline panels.
//!
//! Provides the orbiting look-at view matrix, orthographic and perspective
//! projections, and view frustum corner and plane extraction.

/// Orbit camera and look-at view matrix construction.
pub mod core;
/// View frustum corners and plane tests.
pub mod frustum;
/// Orthographic and perspective projection matrices.
pub mod projection;

pub use self::core::{build_view, look_at, orbit_position, OrbitCamera};
pub use self::frustum::{frustum_corners, Frustum, NDC_CORNERS};
pub use self::projection::{
    build_projection, Projection, ProjectionKind, ProjectionParams,
};
