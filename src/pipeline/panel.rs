use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

use crate::gizmo::Lines;

/// The four side-by-side panels, left to right.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// Scene and camera in world space.
    World,
    /// Scene in the camera's frame.
    View,
    /// Scene after projection and w divide, inside the NDC box.
    Clip,
    /// Homogeneous clip coordinates, divided and clipped by the renderer.
    Ndc,
}

impl Panel {
    /// All panels, left to right.
    pub const ALL: [Self; 4] = [Self::World, Self::View, Self::Clip, Self::Ndc];

    /// Horizontal viewport `(x, width)` as fractions of the window width.
    pub fn viewport(self) -> (f32, f32) {
        match self {
            Self::World => (0.0, 0.248),
            Self::View => (0.25, 0.248),
            Self::Clip => (0.5, 0.248),
            Self::Ndc => (0.75, 0.25),
        }
    }
}

/// A triangle mesh with one flat color, ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshDraw {
    /// Vertex positions in the panel's space.
    pub positions: Vec<Vec3>,
    /// Triangles as indices into `positions`.
    pub indices: Vec<[u32; 3]>,
    /// Uniform color.
    pub color: Vec3,
}

/// What one 3D panel draws.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelScene {
    /// Meshes in draw order.
    pub meshes: Vec<MeshDraw>,
    /// Line overlay, drawn after the meshes.
    pub lines: Lines,
}

/// What the homogeneous panel draws: points still carry their w.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HomogeneousScene {
    /// Clip-space model vertices.
    pub positions: Vec<Vec4>,
    /// Triangles as indices into `positions`.
    pub indices: Vec<[u32; 3]>,
    /// Uniform model color.
    pub color: Vec3,
    /// Clip-space axis endpoints, two per axis.
    pub axes: Vec<Vec4>,
    /// One color per axis.
    pub axis_colors: Vec<Vec3>,
}

/// Drawing capability of a 3D panel, supplied by the host.
pub trait PanelRenderer {
    /// Draw line segments, one color per segment.
    fn render_lines(&mut self, lines: &Lines);
    /// Draw an indexed triangle mesh with a uniform color.
    fn render_mesh(
        &mut self,
        positions: &[Vec3],
        indices: &[[u32; 3]],
        color: Vec3,
    );
}

/// Drawing capability of a panel that clips and divides by itself.
pub trait HomogeneousRenderer {
    /// Draw line segments given as homogeneous endpoints.
    fn render_lines(&mut self, positions: &[Vec4], colors: &[Vec3]);
    /// Draw an indexed triangle mesh given as homogeneous vertices.
    fn render_mesh(
        &mut self,
        positions: &[Vec4],
        indices: &[[u32; 3]],
        color: Vec3,
    );
}

impl PanelScene {
    /// Submit meshes, then lines.
    pub fn draw(&self, renderer: &mut impl PanelRenderer) {
        for mesh in &self.meshes {
            renderer.render_mesh(&mesh.positions, &mesh.indices, mesh.color);
        }
        if !self.lines.is_empty() {
            renderer.render_lines(&self.lines);
        }
    }
}

impl HomogeneousScene {
    /// Submit the model, then the axes.
    pub fn draw(&self, renderer: &mut impl HomogeneousRenderer) {
        renderer.render_mesh(&self.positions, &self.indices, self.color);
        renderer.render_lines(&self.axes, &self.axis_colors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl PanelRenderer for Recorder {
        fn render_lines(&mut self, _lines: &Lines) {
            self.calls.push("lines");
        }

        fn render_mesh(
            &mut self,
            _positions: &[Vec3],
            _indices: &[[u32; 3]],
            _color: Vec3,
        ) {
            self.calls.push("mesh");
        }
    }

    #[test]
    fn meshes_draw_before_lines() {
        let mut lines = Lines::new();
        lines.push(Vec3::ZERO, Vec3::X, Vec3::X);
        let scene = PanelScene {
            meshes: vec![MeshDraw {
                positions: vec![Vec3::ZERO; 3],
                indices: vec![[0, 1, 2]],
                color: Vec3::ONE,
            }],
            lines,
        };
        let mut recorder = Recorder::default();
        scene.draw(&mut recorder);
        assert_eq!(recorder.calls, ["mesh", "lines"]);
    }

    #[test]
    fn empty_lines_are_skipped() {
        let mut recorder = Recorder::default();
        PanelScene::default().draw(&mut recorder);
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn viewports_tile_left_to_right() {
        let starts: Vec<f32> =
            Panel::ALL.iter().map(|p| p.viewport().0).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }
}
