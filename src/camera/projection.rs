//! Orthographic and perspective projection matrices.
//!
//! Both map right-handed camera space (looking down -z) to OpenGL-style
//! clip space, where the near plane lands on NDC z = -1 and the far plane
//! on NDC z = +1.

use glam::{Mat4, Vec4};
use serde::{Deserialize, Serialize};

use crate::error::CamviewError;

/// Parameters of a projection, one variant per projection type.
///
/// Callers must keep `0 < near < far`, `size > 0` and
/// `0 < fov_degrees < 180`; [`build_projection`] does not check them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProjectionParams {
    /// Symmetric box of edge `size` in x and y.
    Orthographic {
        /// Width and height of the visible box.
        size: f32,
        /// Distance to the near plane.
        near: f32,
        /// Distance to the far plane.
        far: f32,
    },
    /// Symmetric frustum with a square aspect ratio.
    Perspective {
        /// Full field of view in degrees.
        fov_degrees: f32,
        /// Distance to the near plane.
        near: f32,
        /// Distance to the far plane.
        far: f32,
    },
}

impl ProjectionParams {
    /// Near and far plane distances.
    pub fn depth_range(&self) -> (f32, f32) {
        match *self {
            Self::Orthographic { near, far, .. }
            | Self::Perspective { near, far, .. } => (near, far),
        }
    }

    /// Kind of projection these parameters build.
    pub fn kind(&self) -> ProjectionKind {
        match self {
            Self::Orthographic { .. } => ProjectionKind::Orthographic,
            Self::Perspective { .. } => ProjectionKind::Perspective,
        }
    }

    /// Check the preconditions of [`build_projection`].
    pub fn validate(&self) -> Result<(), CamviewError> {
        let (near, far) = self.depth_range();
        if near.is_nan() || near <= 0.0 {
            return Err(CamviewError::InvalidOption(format!(
                "near plane must be positive, got {near}"
            )));
        }
        if far.is_nan() || far <= near {
            return Err(CamviewError::InvalidOption(format!(
                "far plane ({far}) must lie beyond near plane ({near})"
            )));
        }
        match *self {
            Self::Orthographic { size, .. } if size.is_nan() || size <= 0.0 => {
                Err(CamviewError::InvalidOption(format!(
                    "orthographic size must be positive, got {size}"
                )))
            }
            Self::Perspective { fov_degrees, .. }
                if !(fov_degrees > 0.0 && fov_degrees < 180.0) =>
            {
                Err(CamviewError::InvalidOption(format!(
                    "field of view must lie in (0, 180) degrees, got \
                     {fov_degrees}"
                )))
            }
            _ => Ok(()),
        }
    }
}

/// What a projection matrix does, carried next to the matrix so consumers
/// do not have to guess from its entries.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionKind {
    /// No projection: view space is shown as is.
    Identity,
    /// Affine box-to-cube mapping.
    Orthographic,
    /// Frustum-to-cube mapping with a w divide.
    Perspective,
}

impl ProjectionKind {
    /// Classify a bare matrix.
    ///
    /// Exact identity is [`Identity`](Self::Identity); a non-zero entry in
    /// the w row for x, y or z means [`Perspective`](Self::Perspective);
    /// anything else is treated as orthographic.
    pub fn infer(matrix: &Mat4) -> Self {
        if *matrix == Mat4::IDENTITY {
            Self::Identity
        } else if matrix.x_axis.w != 0.0
            || matrix.y_axis.w != 0.0
            || matrix.z_axis.w != 0.0
        {
            Self::Perspective
        } else {
            Self::Orthographic
        }
    }
}

/// A projection matrix together with its kind.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// Camera-to-clip matrix.
    pub matrix: Mat4,
    /// How `matrix` was built.
    pub kind: ProjectionKind,
}

impl Projection {
    /// The "no projection" value used by the raw view-space preview.
    pub const IDENTITY: Self = Self {
        matrix: Mat4::IDENTITY,
        kind: ProjectionKind::Identity,
    };

    /// Wrap a matrix of unknown origin, classifying it with
    /// [`ProjectionKind::infer`].
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self {
            matrix,
            kind: ProjectionKind::infer(&matrix),
        }
    }

    /// Whether clip coordinates need a w divide to reach NDC.
    pub fn is_perspective(&self) -> bool {
        self.kind == ProjectionKind::Perspective
    }
}

impl From<ProjectionParams> for Projection {
    fn from(params: ProjectionParams) -> Self {
        build_projection(params)
    }
}

/// Build the projection described by `params`.
pub fn build_projection(params: ProjectionParams) -> Projection {
    let matrix = match params {
        ProjectionParams::Orthographic { size, near, far } => {
            orthographic(size, near, far)
        }
        ProjectionParams::Perspective {
            fov_degrees,
            near,
            far,
        } => perspective(fov_degrees.to_radians(), near, far),
    };
    Projection {
        matrix,
        kind: params.kind(),
    }
}

fn orthographic(size: f32, near: f32, far: f32) -> Mat4 {
    let (right, left) = (size / 2.0, -size / 2.0);
    let (top, bottom) = (size / 2.0, -size / 2.0);

    Mat4::from_cols(
        Vec4::new(2.0 / (right - left), 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 / (top - bottom), 0.0, 0.0),
        Vec4::new(0.0, 0.0, -2.0 / (far - near), 0.0),
        Vec4::new(
            -(right + left) / (right - left),
            -(top + bottom) / (top - bottom),
            -(far + near) / (far - near),
            1.0,
        ),
    )
}

fn perspective(fov: f32, near: f32, far: f32) -> Mat4 {
    let s = 1.0 / (fov / 2.0).tan();
    let a = -(far + near) / (far - near);
    let b = -(2.0 * far * near) / (far - near);

    // w_clip = -z_view
    Mat4::from_cols(
        Vec4::new(s, 0.0, 0.0, 0.0),
        Vec4::new(0.0, s, 0.0, 0.0),
        Vec4::new(0.0, 0.0, a, -1.0),
        Vec4::new(0.0, 0.0, b, 0.0),
    )
}
