//! Camera gizmo: local axes plus the visible volume.

use glam::{Mat4, Vec3};

use super::lines::{box_edges, Lines, AXIS_COLORS, EDGE_COLOR, RAY_COLOR};
use crate::camera::{frustum_corners, Projection, ProjectionKind};

/// Length of the drawn camera axes.
pub const AXIS_SCALE: f32 = 0.25;

/// The camera's local x, y and z axes in world space, starting at the
/// camera origin and scaled by [`AXIS_SCALE`].
pub fn camera_axes(view: &Mat4) -> Lines {
    scaled_camera_axes(view, AXIS_SCALE)
}

/// [`camera_axes`] with a custom axis length.
pub fn scaled_camera_axes(view: &Mat4, scale: f32) -> Lines {
    let camera_to_world = view.inverse();
    let origin = camera_to_world.transform_point3(Vec3::ZERO);
    [Vec3::X, Vec3::Y, Vec3::Z]
        .into_iter()
        .zip(AXIS_COLORS)
        .map(|(axis, color)| {
            let tip = camera_to_world.transform_point3(scale * axis);
            (origin, tip, color)
        })
        .collect()
}

/// Edges of the volume visible through `projection`, in world space.
///
/// Empty for [`ProjectionKind::Identity`]. A perspective projection also
/// gets four rays from the camera origin to the near-plane corners.
pub fn view_frustum(view: &Mat4, projection: &Projection) -> Lines {
    if projection.kind == ProjectionKind::Identity {
        return Lines::new();
    }

    let corners = frustum_corners(view, &projection.matrix);
    let mut lines = box_edges(&corners, EDGE_COLOR);

    if projection.is_perspective() {
        let eye = view.inverse().transform_point3(Vec3::ZERO);
        lines.extend(
            corners[..4].iter().map(|&corner| (eye, corner, RAY_COLOR)),
        );
    }
    lines
}

/// Axes followed by the frustum, as drawn for one camera.
pub fn camera_gizmo(view: &Mat4, projection: &Projection) -> Lines {
    let mut lines = camera_axes(view);
    lines.append(&mut view_frustum(view, projection));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{build_projection, build_view, ProjectionParams};

    fn perspective() -> Projection {
        build_projection(ProjectionParams::Perspective {
            fov_degrees: 60.0,
            near: 0.35,
            far: 1.6,
        })
    }

    #[test]
    fn axes_start_at_the_eye() {
        let eye = Vec3::new(0.0, 0.5_f32.sqrt(), 0.5_f32.sqrt());
        let axes = camera_axes(&build_view(0.0, Vec3::ZERO, Vec3::Y));
        assert_eq!(axes.len(), 3);
        for (start, end, _) in axes.segments() {
            assert!(start.abs_diff_eq(eye, 1e-5));
            assert!((start.distance(end) - AXIS_SCALE).abs() < 1e-5);
        }
        assert_eq!(axes.colors(), &AXIS_COLORS);
    }

    #[test]
    fn camera_z_axis_points_away_from_target() {
        let axes = camera_axes(&build_view(1.2, Vec3::ZERO, Vec3::Y));
        let (start, end, _) = axes.segments().nth(2).unwrap_or_default();
        assert!(end.length() > start.length());
    }

    #[test]
    fn identity_view_axes_are_world_axes() {
        let axes = scaled_camera_axes(&Mat4::IDENTITY, 1.0);
        assert_eq!(
            axes.positions(),
            &[Vec3::ZERO, Vec3::X, Vec3::ZERO, Vec3::Y, Vec3::ZERO, Vec3::Z]
        );
    }

    #[test]
    fn rays_end_on_near_corners() {
        let view = build_view(0.4, Vec3::ZERO, Vec3::Y);
        let eye = view.inverse().transform_point3(Vec3::ZERO);
        let lines = view_frustum(&view, &perspective());
        assert_eq!(lines.len(), 16);

        let near: Vec<Vec3> = lines.segments().take(4).map(|s| s.0).collect();
        for (start, end, color) in lines.segments().skip(12) {
            assert_eq!(color, RAY_COLOR);
            assert!(near.iter().any(|c| c.abs_diff_eq(end, 1e-5)));
            assert!(start.abs_diff_eq(eye, 1e-5));
        }
    }

    #[test]
    fn gizmo_concatenates_axes_and_frustum() {
        let view = build_view(0.4, Vec3::ZERO, Vec3::Y);
        assert_eq!(camera_gizmo(&view, &perspective()).len(), 19);
        assert_eq!(camera_gizmo(&view, &Projection::IDENTITY).len(), 3);
    }
}
