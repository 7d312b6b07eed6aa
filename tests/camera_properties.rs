//! End-to-end properties of the view, projection and frustum gizmo.

use std::f32::consts::TAU;

use camview::camera::{
    build_projection, build_view, frustum_corners, orbit_position,
    Projection, ProjectionParams, NDC_CORNERS,
};
use camview::gizmo::{camera_axes, view_frustum};
use glam::{Mat3, Mat4, Vec3};

const EPSILON: f32 = 1e-5;

fn azimuths() -> impl Iterator<Item = f32> {
    (0..32).map(|i| TAU * i as f32 / 32.0)
}

fn orthographic() -> Projection {
    build_projection(ProjectionParams::Orthographic {
        size: 1.0,
        near: 0.35,
        far: 1.6,
    })
}

fn perspective() -> Projection {
    build_projection(ProjectionParams::Perspective {
        fov_degrees: 60.0,
        near: 0.35,
        far: 1.6,
    })
}

#[test]
fn test_view_rotation_is_orthonormal() {
    for azimuth in azimuths() {
        let view = build_view(azimuth, Vec3::ZERO, Vec3::Y);
        let rotation = Mat3::from_mat4(view);
        for col in [rotation.x_axis, rotation.y_axis, rotation.z_axis] {
            assert!((col.length() - 1.0).abs() < EPSILON);
        }
        assert!(rotation.x_axis.dot(rotation.y_axis).abs() < EPSILON);
        assert!(rotation.y_axis.dot(rotation.z_axis).abs() < EPSILON);
        assert!(rotation.z_axis.dot(rotation.x_axis).abs() < EPSILON);
        assert!((rotation.determinant() - 1.0).abs() < EPSILON);
    }
}

#[test]
fn test_view_maps_camera_origin_to_view_origin() {
    for azimuth in azimuths() {
        let view = build_view(azimuth, Vec3::ZERO, Vec3::Y);
        let eye = orbit_position(
            azimuth,
            std::f32::consts::FRAC_PI_4,
            1.0,
            Vec3::ZERO,
        );
        let mapped = view * eye.extend(1.0);
        assert!(mapped.truncate().length() < EPSILON, "azimuth {azimuth}");
        assert!((mapped.w - 1.0).abs() < EPSILON);
    }
}

#[test]
fn test_orthographic_depth_range() {
    let proj = orthographic().matrix;
    let near = proj.project_point3(Vec3::new(0.0, 0.0, -0.35));
    let far = proj.project_point3(Vec3::new(0.0, 0.0, -1.6));
    assert!((near.z + 1.0).abs() < EPSILON);
    assert!((far.z - 1.0).abs() < EPSILON);
}

#[test]
fn test_perspective_depth_range() {
    let proj = perspective().matrix;
    // Off-axis points on the planes land on the same NDC depth
    let near = proj * Vec3::new(0.1, -0.05, -0.35).extend(1.0);
    let far = proj * Vec3::new(-0.3, 0.2, -1.6).extend(1.0);
    assert!((near.w - 0.35).abs() < EPSILON);
    assert!((near.z / near.w + 1.0).abs() < EPSILON);
    assert!((far.z / far.w - 1.0).abs() < EPSILON);
}

#[test]
fn test_identity_projection_has_no_frustum() {
    for azimuth in azimuths() {
        let view = build_view(azimuth, Vec3::ZERO, Vec3::Y);
        assert!(view_frustum(&view, &Projection::IDENTITY).is_empty());
    }
    assert!(view_frustum(&Mat4::IDENTITY, &Projection::IDENTITY).is_empty());
}

#[test]
fn test_rays_only_for_perspective() {
    let view = build_view(0.7, Vec3::ZERO, Vec3::Y);
    assert_eq!(view_frustum(&view, &orthographic()).len(), 12);
    assert_eq!(view_frustum(&view, &perspective()).len(), 16);
}

#[test]
fn test_inferred_projection_matches_explicit_kind() {
    let view = build_view(2.0, Vec3::ZERO, Vec3::Y);
    for projection in [orthographic(), perspective()] {
        let inferred = Projection::from_matrix(projection.matrix);
        assert_eq!(
            view_frustum(&view, &inferred),
            view_frustum(&view, &projection)
        );
    }
}

#[test]
fn test_ndc_corners_round_trip() {
    for azimuth in azimuths() {
        let view = build_view(azimuth, Vec3::ZERO, Vec3::Y);
        for projection in [orthographic(), perspective()] {
            let world_to_clip = projection.matrix * view;
            let corners = frustum_corners(&view, &projection.matrix);
            for (corner, ndc) in corners.iter().zip(NDC_CORNERS) {
                let back = world_to_clip.project_point3(*corner);
                assert!(back.abs_diff_eq(ndc, 1e-3), "{back} != {ndc}");
            }
        }
    }
}

#[test]
fn test_orthographic_frustum_is_a_box() {
    let view = build_view(1.1, Vec3::ZERO, Vec3::Y);
    let corners = frustum_corners(&view, &orthographic().matrix);
    // Near and far faces have the same size
    let near_width = corners[0].distance(corners[1]);
    let far_width = corners[4].distance(corners[5]);
    assert!((near_width - 1.0).abs() < 1e-4);
    assert!((far_width - 1.0).abs() < 1e-4);
    assert!((corners[0].distance(corners[4]) - 1.25).abs() < 1e-4);
}

#[test]
fn test_camera_axes_follow_view() {
    let view = build_view(0.3, Vec3::ZERO, Vec3::Y);
    let axes = camera_axes(&view);
    let inverse = view.inverse();
    for ((_, end, _), local) in axes.segments().zip([Vec3::X, Vec3::Y, Vec3::Z])
    {
        let expected = inverse.transform_point3(0.25 * local);
        assert!(end.abs_diff_eq(expected, EPSILON));
    }
}
