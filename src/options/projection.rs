use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::controls::TransformationType;

/// Projection type and its parameters at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Projection", inline)]
#[serde(default)]
pub struct ProjectionOptions {
    /// Orthographic or perspective.
    #[schemars(title = "Transformation")]
    pub transformation: TransformationType,
    /// Orthographic box size.
    #[schemars(title = "Size", range(min = 0.1, max = 2.0), extend("step" = 0.01))]
    pub size: f32,
    /// Perspective field of view in degrees.
    #[schemars(title = "FOV", range(min = 5.0, max = 80.0), extend("step" = 1.0))]
    pub fov: f32,
    /// Near plane distance.
    #[schemars(title = "Near", range(min = 0.1, max = 20.0), extend("step" = 0.01))]
    pub near: f32,
    /// Far plane distance.
    #[schemars(title = "Far", range(min = 0.1, max = 20.0), extend("step" = 0.01))]
    pub far: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            transformation: TransformationType::Orthographic,
            size: 0.8,
            fov: 60.0,
            near: 0.35,
            far: 1.6,
        }
    }
}
