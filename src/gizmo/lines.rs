use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Black, used for frustum and NDC box edges.
pub const EDGE_COLOR: Vec3 = Vec3::ZERO;
/// Mid gray, used for the near-plane rays of a perspective frustum.
pub const RAY_COLOR: Vec3 = Vec3::splat(0.75);
/// Red, green and blue for the x, y and z axes.
pub const AXIS_COLORS: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

/// Colored line segments.
///
/// Endpoints are stored pairwise, one color per segment, so
/// `positions().len() == 2 * colors().len()` always holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lines {
    positions: Vec<Vec3>,
    colors: Vec<Vec3>,
}

/// Interleaved line vertex for GPU upload (`LineList` topology).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// Vertex position.
    pub position: [f32; 3],
    /// Vertex color, shared by both ends of a segment.
    pub color: [f32; 3],
}

impl Lines {
    /// Create an empty line set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty line set with room for `segments` segments.
    pub fn with_capacity(segments: usize) -> Self {
        Self {
            positions: Vec::with_capacity(segments * 2),
            colors: Vec::with_capacity(segments),
        }
    }

    /// Append one segment.
    pub fn push(&mut self, start: Vec3, end: Vec3, color: Vec3) {
        self.positions.push(start);
        self.positions.push(end);
        self.colors.push(color);
    }

    /// Append every segment of `other`.
    pub fn append(&mut self, other: &mut Self) {
        self.positions.append(&mut other.positions);
        self.colors.append(&mut other.colors);
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether there are no segments.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Endpoints, two per segment.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// One color per segment.
    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    /// Iterate over `(start, end, color)` triples.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3, Vec3)> + '_ {
        self.positions
            .chunks_exact(2)
            .zip(&self.colors)
            .map(|(ends, &color)| (ends[0], ends[1], color))
    }

    /// Copy of these lines with every endpoint mapped through `f`.
    #[must_use]
    pub fn map_positions(&self, f: impl FnMut(Vec3) -> Vec3) -> Self {
        Self {
            positions: self.positions.iter().copied().map(f).collect(),
            colors: self.colors.clone(),
        }
    }

    /// Copy of these lines with every endpoint mapped through `matrix`,
    /// including the w divide.
    #[must_use]
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        self.map_positions(|p| matrix.project_point3(p))
    }

    /// Interleaved vertex data with the segment color on both ends.
    pub fn to_vertices(&self) -> Vec<LineVertex> {
        self.segments()
            .flat_map(|(start, end, color)| {
                [start, end].map(|position| LineVertex {
                    position: position.to_array(),
                    color: color.to_array(),
                })
            })
            .collect()
    }
}

impl Extend<(Vec3, Vec3, Vec3)> for Lines {
    fn extend<T: IntoIterator<Item = (Vec3, Vec3, Vec3)>>(&mut self, iter: T) {
        for (start, end, color) in iter {
            self.push(start, end, color);
        }
    }
}

impl FromIterator<(Vec3, Vec3, Vec3)> for Lines {
    fn from_iter<T: IntoIterator<Item = (Vec3, Vec3, Vec3)>>(iter: T) -> Self {
        let mut lines = Self::new();
        lines.extend(iter);
        lines
    }
}

/// The 12 edges of a box given its corners in
/// [`NDC_CORNERS`](crate::camera::NDC_CORNERS) order: near ring, far ring,
/// then the four near-to-far connectors.
pub fn box_edges(corners: &[Vec3; 8], color: Vec3) -> Lines {
    let mut lines = Lines::with_capacity(12);
    for i in 0..4 {
        lines.push(corners[i], corners[(i + 1) % 4], color);
    }
    for i in 0..4 {
        lines.push(corners[4 + i], corners[4 + (i + 1) % 4], color);
    }
    for i in 0..4 {
        lines.push(corners[i], corners[i + 4], color);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::NDC_CORNERS;

    #[test]
    fn push_keeps_pairs_and_colors_in_step() {
        let mut lines = Lines::new();
        lines.push(Vec3::ZERO, Vec3::X, Vec3::X);
        lines.push(Vec3::ZERO, Vec3::Y, Vec3::Y);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.positions().len(), 4);
        assert_eq!(lines.colors(), &[Vec3::X, Vec3::Y]);
    }

    #[test]
    fn box_edges_are_unit_length_on_ndc_cube() {
        let edges = box_edges(&NDC_CORNERS, EDGE_COLOR);
        assert_eq!(edges.len(), 12);
        for (start, end, color) in edges.segments() {
            assert!((start.distance(end) - 2.0).abs() < 1e-6);
            assert_eq!(color, EDGE_COLOR);
        }
    }

    #[test]
    fn vertices_repeat_segment_color() {
        let lines: Lines =
            [(Vec3::ZERO, Vec3::ONE, RAY_COLOR)].into_iter().collect();
        let vertices = lines.to_vertices();
        assert_eq!(vertices.len(), 2);
        assert_eq!(vertices[0].color, vertices[1].color);
        assert_eq!(vertices[1].position, [1.0, 1.0, 1.0]);
        assert_eq!(bytemuck::cast_slice::<_, u8>(vertices.as_slice()).len(), 48);
    }

    #[test]
    fn transformed_moves_endpoints_only() {
        let lines: Lines =
            [(Vec3::ZERO, Vec3::X, Vec3::X)].into_iter().collect();
        let moved = lines.transformed(&Mat4::from_translation(Vec3::Z));
        assert_eq!(moved.positions(), &[Vec3::Z, Vec3::new(1.0, 0.0, 1.0)]);
        assert_eq!(moved.colors(), lines.colors());
    }

    #[test]
    fn append_drains_other() {
        let mut a: Lines =
            [(Vec3::ZERO, Vec3::X, Vec3::X)].into_iter().collect();
        let mut b = box_edges(&NDC_CORNERS, EDGE_COLOR);
        a.append(&mut b);
        assert_eq!(a.len(), 13);
        assert!(b.is_empty());
    }
}
