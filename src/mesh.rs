//! Indexed triangle meshes drawn in the panels.
//!
//! The scene needs two: the test model the pipeline transforms, and a
//! small sphere marking the camera origin in the world panel. Both are
//! generated procedurally.

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Indexed triangle mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions.
    pub positions: Vec<Vec3>,
    /// Triangles as indices into `positions`.
    pub indices: Vec<[u32; 3]>,
}

impl Mesh {
    /// The fixed model shown in every panel: a torus fitted into the unit
    /// bounding box.
    pub fn test_model() -> Self {
        Self::torus(0.35, 0.15, 48, 24).fit_unit_box()
    }

    /// UV sphere centered on the origin.
    ///
    /// `stacks` and `slices` are clamped to at least 2 and 3.
    pub fn uv_sphere(radius: f32, stacks: u32, slices: u32) -> Self {
        let stacks = stacks.max(2);
        let slices = slices.max(3);

        let mut positions =
            Vec::with_capacity(((stacks + 1) * (slices + 1)) as usize);
        for stack in 0..=stacks {
            let polar = PI * stack as f32 / stacks as f32;
            let (sin_polar, cos_polar) = polar.sin_cos();
            for slice in 0..=slices {
                let azimuth = TAU * slice as f32 / slices as f32;
                let (sin_az, cos_az) = azimuth.sin_cos();
                positions.push(
                    radius
                        * Vec3::new(
                            sin_polar * cos_az,
                            cos_polar,
                            sin_polar * sin_az,
                        ),
                );
            }
        }

        Self {
            positions,
            indices: grid_indices(stacks, slices),
        }
    }

    /// Torus around the y axis.
    ///
    /// `rings` and `sides` are clamped to at least 3.
    pub fn torus(major: f32, minor: f32, rings: u32, sides: u32) -> Self {
        let rings = rings.max(3);
        let sides = sides.max(3);

        let mut positions =
            Vec::with_capacity(((rings + 1) * (sides + 1)) as usize);
        for ring in 0..=rings {
            let u = TAU * ring as f32 / rings as f32;
            let (sin_u, cos_u) = u.sin_cos();
            for side in 0..=sides {
                let v = TAU * side as f32 / sides as f32;
                let (sin_v, cos_v) = v.sin_cos();
                let r = major + minor * cos_v;
                positions.push(Vec3::new(r * cos_u, minor * sin_v, r * sin_u));
            }
        }

        Self {
            positions,
            indices: grid_indices(rings, sides),
        }
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(self.positions.iter().fold((first, first), |(min, max), &p| {
            (min.min(p), max.max(p))
        }))
    }

    /// Center the mesh on the origin and scale it so its largest extent
    /// is 1.
    #[must_use]
    pub fn fit_unit_box(self) -> Self {
        let Some((min, max)) = self.bounds() else {
            return self;
        };
        let extent = (max - min).max_element();
        if extent <= 0.0 {
            return self;
        }
        let center = (min + max) * 0.5;
        self.transformed(
            &(Mat4::from_scale(Vec3::splat(1.0 / extent))
                * Mat4::from_translation(-center)),
        )
    }

    /// Mesh with every vertex moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            positions: self.positions.iter().map(|&p| p + offset).collect(),
            indices: self.indices.clone(),
        }
    }

    /// Mesh with every vertex mapped through an affine `matrix`.
    #[must_use]
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self {
            positions: self
                .positions
                .iter()
                .map(|&p| matrix.transform_point3(p))
                .collect(),
            indices: self.indices.clone(),
        }
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}

/// Two triangles per cell of a `(rows + 1) x (cols + 1)` vertex grid.
fn grid_indices(rows: u32, cols: u32) -> Vec<[u32; 3]> {
    let stride = cols + 1;
    let mut indices = Vec::with_capacity((rows * cols * 2) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let a = row * stride + col;
            let b = a + stride;
            indices.push([a, b, a + 1]);
            indices.push([a + 1, b, b + 1]);
        }
    }
    indices
}
