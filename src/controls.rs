//! Per-frame parameter state and the GUI-update seam.
//!
//! The frame loop owns one [`FrameState`] and hands it by `&mut` to a
//! [`ControlPanel`] each frame. Edits are clamped to the slider ranges and
//! reported back as a [`ParameterChanges`] mask.

use std::f32::consts::TAU;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::ProjectionParams;

/// Slider range of the azimuth, in radians.
pub const AZIMUTH_RANGE: (f32, f32) = (-TAU, TAU);
/// Slider range of the orthographic size.
pub const SIZE_RANGE: (f32, f32) = (0.1, 2.0);
/// Slider range of the field of view, in degrees.
pub const FOV_RANGE: (f32, f32) = (5.0, 80.0);
/// Lower bound of the near plane; the upper bound is the far plane.
pub const MIN_NEAR: f32 = 0.1;
/// Upper bound of the far plane; the lower bound is the near plane.
pub const MAX_FAR: f32 = 20.0;

/// Which projection the clip-space panels use.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TransformationType {
    /// Box projection sized by [`FrameState::size`].
    #[default]
    Orthographic,
    /// Frustum projection opened by [`FrameState::fov`].
    Perspective,
}

/// The adjustable parameters, in change-bit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Camera azimuth.
    Azimuth = 0,
    /// Orthographic or perspective.
    TransformationType = 1,
    /// Orthographic size.
    Size = 2,
    /// Perspective field of view.
    Fov = 3,
    /// Near plane distance.
    Near = 4,
    /// Far plane distance.
    Far = 5,
}

impl Parameter {
    /// All parameters in bit order.
    pub const ALL: [Self; 6] = [
        Self::Azimuth,
        Self::TransformationType,
        Self::Size,
        Self::Fov,
        Self::Near,
        Self::Far,
    ];

    /// Bit index in a [`ParameterChanges`] mask.
    pub const fn index(self) -> u32 {
        self as u32
    }
}

/// Bitmask of parameters changed by one GUI update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParameterChanges(u32);

impl ParameterChanges {
    /// No changes.
    pub const NONE: Self = Self(0);

    /// Mask from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Mark `parameter` as changed.
    pub fn insert(&mut self, parameter: Parameter) {
        self.0 |= 1 << parameter.index();
    }

    /// Whether `parameter` changed.
    pub const fn contains(self, parameter: Parameter) -> bool {
        self.has_changed(parameter.index())
    }

    /// Whether the parameter at bit `index` changed. Indices past the mask
    /// width are never set.
    pub const fn has_changed(self, index: u32) -> bool {
        match 1_u32.checked_shl(index) {
            Some(bit) => self.0 & bit != 0,
            None => false,
        }
    }

    /// Whether nothing changed.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Changed parameters in bit order.
    pub fn iter(self) -> impl Iterator<Item = Parameter> {
        Parameter::ALL.into_iter().filter(move |p| self.contains(*p))
    }
}

impl std::ops::BitOr for ParameterChanges {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for ParameterChanges {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// One edit coming from the GUI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterEdit {
    /// New azimuth in radians.
    Azimuth(f32),
    /// New projection type.
    TransformationType(TransformationType),
    /// New orthographic size.
    Size(f32),
    /// New field of view in degrees.
    Fov(f32),
    /// New near plane distance.
    Near(f32),
    /// New far plane distance.
    Far(f32),
}

/// The adjustable parameters of the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    /// Camera azimuth in radians.
    pub azimuth: f32,
    /// Perspective field of view in degrees.
    pub fov: f32,
    /// Orthographic size.
    pub size: f32,
    /// Near plane distance.
    pub near: f32,
    /// Far plane distance.
    pub far: f32,
    /// Active projection.
    pub transformation: TransformationType,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            fov: 60.0,
            size: 0.8,
            near: 0.35,
            far: 1.6,
            transformation: TransformationType::Orthographic,
        }
    }
}

impl FrameState {
    /// Parameters of the active projection.
    pub fn projection_params(&self) -> ProjectionParams {
        match self.transformation {
            TransformationType::Orthographic => ProjectionParams::Orthographic {
                size: self.size,
                near: self.near,
                far: self.far,
            },
            TransformationType::Perspective => ProjectionParams::Perspective {
                fov_degrees: self.fov,
                near: self.near,
                far: self.far,
            },
        }
    }

    /// Apply one edit, clamped to its slider range.
    ///
    /// The returned mask has the edited parameter's bit set only if the
    /// stored value actually changed.
    pub fn apply(&mut self, edit: ParameterEdit) -> ParameterChanges {
        let mut changes = ParameterChanges::NONE;
        let changed = match edit {
            ParameterEdit::Azimuth(value) => (
                Parameter::Azimuth,
                replace(&mut self.azimuth, clamp(value, AZIMUTH_RANGE)),
            ),
            ParameterEdit::TransformationType(value) => {
                let changed = self.transformation != value;
                self.transformation = value;
                (Parameter::TransformationType, changed)
            }
            ParameterEdit::Size(value) => (
                Parameter::Size,
                replace(&mut self.size, clamp(value, SIZE_RANGE)),
            ),
            ParameterEdit::Fov(value) => (
                Parameter::Fov,
                replace(&mut self.fov, clamp(value, FOV_RANGE)),
            ),
            ParameterEdit::Near(value) => {
                let range = (MIN_NEAR, self.far.max(MIN_NEAR));
                (Parameter::Near, replace(&mut self.near, clamp(value, range)))
            }
            ParameterEdit::Far(value) => {
                let range = (self.near.min(MAX_FAR), MAX_FAR);
                (Parameter::Far, replace(&mut self.far, clamp(value, range)))
            }
        };
        if let (parameter, true) = changed {
            changes.insert(parameter);
            log::debug!("{:?} changed: {:?}", parameter, self);
        }
        changes
    }

    /// Apply several edits in order and merge their change masks.
    pub fn apply_all(
        &mut self,
        edits: impl IntoIterator<Item = ParameterEdit>,
    ) -> ParameterChanges {
        edits
            .into_iter()
            .fold(ParameterChanges::NONE, |acc, edit| acc | self.apply(edit))
    }
}

fn clamp(value: f32, (min, max): (f32, f32)) -> f32 {
    value.clamp(min, max)
}

fn replace(slot: &mut f32, value: f32) -> bool {
    let changed = *slot != value;
    *slot = value;
    changed
}

/// GUI-update seam: reads the current parameters, applies whatever the
/// user did since the last frame, and reports what changed.
pub trait ControlPanel {
    /// Update `state` for a frame that took `dt` seconds.
    fn update(&mut self, state: &mut FrameState, dt: f32) -> ParameterChanges;
}

/// Headless control that spins the camera at a constant angular speed.
///
/// The azimuth wraps into `[0, 2π)` whenever a step leaves the slider
/// range, however many turns the step covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turntable {
    /// Angular speed in radians per second.
    pub speed: f32,
}

impl Turntable {
    /// Turntable spinning at `speed` radians per second.
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }
}

impl ControlPanel for Turntable {
    fn update(&mut self, state: &mut FrameState, dt: f32) -> ParameterChanges {
        let mut azimuth = state.azimuth + self.speed * dt;
        if !(AZIMUTH_RANGE.0..=AZIMUTH_RANGE.1).contains(&azimuth) {
            azimuth = azimuth.rem_euclid(TAU);
        }
        state.apply(ParameterEdit::Azimuth(azimuth))
    }
}

/// Control that replays a fixed list of edits, one batch per frame, then
/// does nothing.
#[derive(Debug, Clone, Default)]
pub struct ScriptedControls {
    frames: std::collections::VecDeque<Vec<ParameterEdit>>,
}

impl ScriptedControls {
    /// Replay `frames`, one inner list per frame.
    pub fn new(frames: impl IntoIterator<Item = Vec<ParameterEdit>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl ControlPanel for ScriptedControls {
    fn update(&mut self, state: &mut FrameState, _dt: f32) -> ParameterChanges {
        self.frames
            .pop_front()
            .map_or(ParameterChanges::NONE, |edits| state.apply_all(edits))
    }
}
