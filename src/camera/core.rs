use glam::{Mat4, Vec3, Vec4};

/// Polar angle of the orbit, measured from the world up axis.
pub const DEFAULT_POLAR_ANGLE: f32 = std::f32::consts::FRAC_PI_4;
/// Distance between the camera and its target.
pub const DEFAULT_ORBIT_RADIUS: f32 = 1.0;

/// Camera orbiting a target point at constant elevation.
///
/// Only the azimuth is expected to change from frame to frame; the other
/// fields come from [`CameraOptions`](crate::options::CameraOptions).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Horizontal orbit angle in radians. Wraps visually every 2π.
    pub azimuth: f32,
    /// Angle between the world up axis and the eye direction, in radians.
    pub polar: f32,
    /// Orbit radius.
    pub radius: f32,
    /// Look-at target in world space.
    pub target: Vec3,
    /// World up direction used to build the camera basis.
    pub up: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            polar: DEFAULT_POLAR_ANGLE,
            radius: DEFAULT_ORBIT_RADIUS,
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl OrbitCamera {
    /// Camera origin in world space.
    pub fn eye(&self) -> Vec3 {
        orbit_position(self.azimuth, self.polar, self.radius, self.target)
    }

    /// Build the world-to-camera matrix for the current azimuth.
    pub fn build_view(&self) -> Mat4 {
        look_at(self.eye(), self.target, self.up)
    }
}

/// Point on the orbit sphere around `target`.
///
/// At azimuth 0 the camera sits on the +z side of the target.
pub fn orbit_position(
    azimuth: f32,
    polar: f32,
    radius: f32,
    target: Vec3,
) -> Vec3 {
    let (sin_polar, cos_polar) = polar.sin_cos();
    let (sin_az, cos_az) = azimuth.sin_cos();
    target
        + radius
            * Vec3::new(sin_az * sin_polar, cos_polar, cos_az * sin_polar)
}

/// Right-handed look-at matrix: the camera looks down its local -z.
///
/// The rows of the rotation block are `right`, `up` and `-forward`, and
/// the translation is `-eye` expressed in that basis, so `eye` lands on
/// the view-space origin. `forward` parallel to `world_up` gives NaN.
pub fn look_at(eye: Vec3, target: Vec3, world_up: Vec3) -> Mat4 {
    let forward = (target - eye).normalize();
    let right = forward.cross(world_up).normalize();
    let up = right.cross(forward);

    Mat4::from_cols(
        Vec4::new(right.x, up.x, -forward.x, 0.0),
        Vec4::new(right.y, up.y, -forward.y, 0.0),
        Vec4::new(right.z, up.z, -forward.z, 0.0),
        Vec4::new(-right.dot(eye), -up.dot(eye), forward.dot(eye), 1.0),
    )
}

/// View matrix for a camera orbiting `target` at the default elevation and
/// radius.
pub fn build_view(azimuth: f32, target: Vec3, world_up: Vec3) -> Mat4 {
    OrbitCamera {
        azimuth,
        target,
        up: world_up,
        ..OrbitCamera::default()
    }
    .build_view()
}
