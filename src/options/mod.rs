//! Startup options with TOML preset support.
//!
//! Camera placement, the initial projection and display colors are
//! consolidated here. Options serialize to/from TOML so a classroom setup
//! can be saved as a preset and reloaded.

mod camera;
mod display;
mod projection;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use projection::ProjectionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::controls::{FrameState, ParameterEdit, MAX_FAR, MIN_NEAR};
use crate::error::CamviewError;

/// Closest the world up vector may come to the orbit's view cone, as a
/// difference of y components.
const PARALLEL_UP_TOLERANCE: f32 = 1e-3;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[projection]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit camera parameters.
    pub camera: CameraOptions,
    /// Initial projection.
    pub projection: ProjectionOptions,
    /// Mesh colors and sizes.
    pub display: DisplayOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CamviewError> {
        let content = std::fs::read_to_string(path).map_err(CamviewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| CamviewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CamviewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CamviewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CamviewError::Io)?;
        }
        std::fs::write(path, content).map_err(CamviewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Check the camera and projection preconditions the math relies on.
    pub fn validate(&self) -> Result<(), CamviewError> {
        let camera = &self.camera;
        if !(camera.polar_angle > 0.0 && camera.polar_angle < 180.0) {
            return Err(CamviewError::InvalidOption(format!(
                "polar angle must lie in (0, 180) degrees, got {}",
                camera.polar_angle
            )));
        }
        if camera.radius.is_nan() || camera.radius <= 0.0 {
            return Err(CamviewError::InvalidOption(format!(
                "orbit radius must be positive, got {}",
                camera.radius
            )));
        }
        if camera.world_up.length_squared() == 0.0 {
            return Err(CamviewError::InvalidOption(
                "world up vector must be non-zero".to_owned(),
            ));
        }
        // The view direction sweeps a cone around +y at the polar angle;
        // an up vector on that cone is parallel to it at some azimuth.
        let up_y = camera.world_up.normalize().y.abs();
        let cone_y = camera.polar_angle.to_radians().cos().abs();
        if (up_y - cone_y).abs() < PARALLEL_UP_TOLERANCE {
            return Err(CamviewError::InvalidOption(format!(
                "world up {} is parallel to the view direction at some \
                 azimuth for polar angle {}",
                camera.world_up, camera.polar_angle
            )));
        }
        self.initial_state().projection_params().validate()
    }

    /// Frame state at startup, clamped to the slider ranges.
    pub fn initial_state(&self) -> FrameState {
        let projection = &self.projection;
        // Widest depth range first so neither plane clamps against a stale
        // default, then far before near.
        let mut state = FrameState {
            transformation: projection.transformation,
            near: MIN_NEAR,
            far: MAX_FAR,
            ..FrameState::default()
        };
        let changes = state.apply_all([
            ParameterEdit::Azimuth(self.camera.azimuth),
            ParameterEdit::Size(projection.size),
            ParameterEdit::Fov(projection.fov),
            ParameterEdit::Far(projection.far),
            ParameterEdit::Near(projection.near),
        ]);
        if state.near != projection.near || state.far != projection.far {
            log::warn!(
                "near/far planes clamped to [{}, {}] (configured [{}, {}])",
                state.near,
                state.far,
                projection.near,
                projection.far
            );
        }
        log::debug!("initial state {:?} (changes {:#b})", state, changes.bits());
        state
    }
}
