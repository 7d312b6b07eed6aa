//! Coordinate-space stages of the pipeline.

use glam::{Mat4, Vec3, Vec4};

use crate::camera::NDC_CORNERS;
use crate::gizmo::lines::{box_edges, Lines, AXIS_COLORS, EDGE_COLOR};

/// World space to view space.
pub fn to_view_space(points: &[Vec3], view: &Mat4) -> Vec<Vec3> {
    points.iter().map(|&p| view.transform_point3(p)).collect()
}

/// View space to homogeneous clip space (no divide).
pub fn to_clip_space(points: &[Vec3], projection: &Mat4) -> Vec<Vec4> {
    points.iter().map(|&p| *projection * p.extend(1.0)).collect()
}

/// Clip space to NDC.
///
/// Points with `w == 0` have no NDC position; their xyz is passed through
/// unchanged so they still show up somewhere.
pub fn perspective_divide(clip: &[Vec4]) -> Vec<Vec3> {
    clip.iter().copied().map(divide).collect()
}

/// [`perspective_divide`] for a single point.
pub fn divide(p: Vec4) -> Vec3 {
    if p.w == 0.0 {
        p.truncate()
    } else {
        p.truncate() / p.w
    }
}

/// Unit x, y and z axes from the origin, colored red, green and blue.
pub fn world_axes() -> Lines {
    [Vec3::X, Vec3::Y, Vec3::Z]
        .into_iter()
        .zip(AXIS_COLORS)
        .map(|(axis, color)| (Vec3::ZERO, axis, color))
        .collect()
}

/// The 12 edges of the `[-1, 1]^3` NDC cube.
pub fn ndc_box() -> Lines {
    box_edges(&NDC_CORNERS, EDGE_COLOR)
}
