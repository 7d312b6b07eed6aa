use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::OrbitCamera;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Orbit camera placement and gizmo parameters.
pub struct CameraOptions {
    /// Azimuth at startup, in radians.
    #[schemars(title = "Azimuth", range(min = -6.2832, max = 6.2832), extend("step" = 0.01))]
    pub azimuth: f32,
    /// Angle between the world up axis and the camera, in degrees.
    #[schemars(title = "Polar Angle", range(min = 1.0, max = 179.0), extend("step" = 1.0))]
    pub polar_angle: f32,
    /// Distance between camera and target.
    #[schemars(skip)]
    pub radius: f32,
    /// Look-at target.
    #[schemars(skip)]
    pub target: Vec3,
    /// World up direction.
    #[schemars(skip)]
    pub world_up: Vec3,
    /// Length of the camera axes gizmo.
    #[schemars(title = "Axis Length", range(min = 0.05, max = 1.0), extend("step" = 0.05))]
    pub axis_length: f32,
    /// Turntable speed for headless runs, in radians per second.
    #[schemars(skip)]
    pub turntable_speed: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            polar_angle: 45.0,
            radius: 1.0,
            target: Vec3::ZERO,
            world_up: Vec3::Y,
            axis_length: 0.25,
            turntable_speed: 0.5,
        }
    }
}

impl CameraOptions {
    /// Orbit camera at `azimuth` with these options.
    pub fn orbit(&self, azimuth: f32) -> OrbitCamera {
        OrbitCamera {
            azimuth,
            polar: self.polar_angle.to_radians(),
            radius: self.radius,
            target: self.target,
            up: self.world_up,
        }
    }
}
