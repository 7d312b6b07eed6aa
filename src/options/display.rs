use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Colors and sizes of the drawn meshes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
pub struct DisplayOptions {
    /// Uniform color of the test model.
    #[schemars(skip)]
    pub model_color: [f32; 3],
    /// Color of the sphere marking the camera origin.
    #[schemars(skip)]
    pub camera_marker_color: [f32; 3],
    /// Radius of the camera marker sphere.
    #[schemars(title = "Camera Marker", range(min = 0.0, max = 0.2), extend("step" = 0.005))]
    pub camera_marker_radius: f32,
    /// Draw the camera gizmo in the world and view panels.
    #[schemars(title = "Show Camera")]
    pub show_camera: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            model_color: [0.75; 3],
            camera_marker_color: [1.0, 0.0, 1.0],
            camera_marker_radius: 0.03,
            show_camera: true,
        }
    }
}
