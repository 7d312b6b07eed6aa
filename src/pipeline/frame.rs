//! Per-frame assembly of all four panels.

use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

use super::panel::{HomogeneousScene, MeshDraw, PanelScene};
use super::stages::{
    divide, ndc_box, perspective_divide, to_clip_space, to_view_space,
    world_axes,
};
use crate::camera::{build_projection, Frustum, OrbitCamera, Projection};
use crate::controls::FrameState;
use crate::gizmo::{scaled_camera_axes, view_frustum, Lines};
use crate::mesh::Mesh;
use crate::options::Options;

/// Stacks and slices of the camera marker sphere.
const MARKER_RESOLUTION: (u32, u32) = (12, 16);

/// Everything drawn in one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Parameters the frame was built from.
    pub state: FrameState,
    /// Camera origin in world space.
    pub camera_origin: Vec3,
    /// World-to-camera matrix.
    pub view: Mat4,
    /// Camera-to-clip matrix and its kind.
    pub projection: Projection,
    /// Share of model vertices inside the view frustum.
    pub visible_fraction: f32,
    /// Left panel.
    pub world: PanelScene,
    /// Second panel.
    pub view_space: PanelScene,
    /// Third panel.
    pub clip_space: PanelScene,
    /// Right panel.
    pub ndc: HomogeneousScene,
}

/// Builds [`Frame`]s for a fixed model and options.
#[derive(Debug, Clone)]
pub struct FrameBuilder {
    options: Options,
    model: Mesh,
    marker: Mesh,
}

impl FrameBuilder {
    /// Builder for the standard test model.
    pub fn new(options: Options) -> Self {
        Self::with_model(options, Mesh::test_model())
    }

    /// Builder for a custom model.
    pub fn with_model(options: Options, model: Mesh) -> Self {
        let (stacks, slices) = MARKER_RESOLUTION;
        let marker = Mesh::uv_sphere(
            options.display.camera_marker_radius,
            stacks,
            slices,
        );
        Self {
            options,
            model,
            marker,
        }
    }

    /// Options the builder was created with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The transformed model.
    pub fn model(&self) -> &Mesh {
        &self.model
    }

    /// Orbit camera for `state`.
    pub fn camera(&self, state: &FrameState) -> OrbitCamera {
        self.options.camera.orbit(state.azimuth)
    }

    /// Run the whole pipeline for one frame.
    pub fn build(&self, state: &FrameState) -> Frame {
        let camera = self.camera(state);
        let camera_origin = camera.eye();
        let view = camera.build_view();
        let projection = build_projection(state.projection_params());

        let view_positions = to_view_space(&self.model.positions, &view);
        let clip_positions =
            to_clip_space(&view_positions, &projection.matrix);
        let view_axes = world_axes().transformed(&view);

        Frame {
            state: *state,
            camera_origin,
            view,
            projection,
            visible_fraction: self.visible_fraction(&view, &projection),
            world: self.world_panel(&view, &projection, camera_origin),
            view_space: PanelScene {
                meshes: vec![self.model_draw(view_positions)],
                lines: self.with_gizmo(
                    view_axes.clone(),
                    &Mat4::IDENTITY,
                    &projection,
                ),
            },
            clip_space: self.clip_panel(
                &clip_positions,
                &view_axes,
                &projection,
            ),
            ndc: self.ndc_panel(clip_positions, &view_axes, &projection),
        }
    }

    fn world_panel(
        &self,
        view: &Mat4,
        projection: &Projection,
        camera_origin: Vec3,
    ) -> PanelScene {
        let display = &self.options.display;
        let marker = self.marker.translated(camera_origin);
        PanelScene {
            meshes: vec![
                self.model_draw(self.model.positions.clone()),
                MeshDraw {
                    positions: marker.positions,
                    indices: marker.indices,
                    color: Vec3::from(display.camera_marker_color),
                },
            ],
            lines: self.with_gizmo(world_axes(), view, projection),
        }
    }

    fn clip_panel(
        &self,
        clip_positions: &[Vec4],
        view_axes: &Lines,
        projection: &Projection,
    ) -> PanelScene {
        let mut lines = ndc_box();
        lines.append(&mut view_axes.map_positions(|p| {
            divide(projection.matrix * p.extend(1.0))
        }));
        PanelScene {
            meshes: vec![self.model_draw(perspective_divide(clip_positions))],
            lines,
        }
    }

    fn ndc_panel(
        &self,
        clip_positions: Vec<Vec4>,
        view_axes: &Lines,
        projection: &Projection,
    ) -> HomogeneousScene {
        HomogeneousScene {
            positions: clip_positions,
            indices: self.model.indices.clone(),
            color: Vec3::from(self.options.display.model_color),
            axes: to_clip_space(view_axes.positions(), &projection.matrix),
            axis_colors: view_axes.colors().to_vec(),
        }
    }

    fn model_draw(&self, positions: Vec<Vec3>) -> MeshDraw {
        MeshDraw {
            positions,
            indices: self.model.indices.clone(),
            color: Vec3::from(self.options.display.model_color),
        }
    }

    /// `lines` followed by the camera gizmo seen through `view`, unless the
    /// gizmo is hidden.
    fn with_gizmo(
        &self,
        mut lines: Lines,
        view: &Mat4,
        projection: &Projection,
    ) -> Lines {
        if self.options.display.show_camera {
            lines.append(&mut scaled_camera_axes(
                view,
                self.options.camera.axis_length,
            ));
            lines.append(&mut view_frustum(view, projection));
        }
        lines
    }

    fn visible_fraction(&self, view: &Mat4, projection: &Projection) -> f32 {
        let Some((min, max)) = self.model.bounds() else {
            return 0.0;
        };
        let frustum = Frustum::from_view_projection(projection.matrix * *view);

        // Bounding sphere settles fully culled or fully visible models
        let center = (min + max) / 2.0;
        let radius = (max - min).length() / 2.0;
        if !frustum.intersects_sphere(center, radius) {
            return 0.0;
        }
        if frustum.contains_sphere(center, radius) {
            return 1.0;
        }

        let inside = self
            .model
            .positions
            .iter()
            .filter(|&&p| frustum.contains_point(p))
            .count();
        inside as f32 / self.model.positions.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::TransformationType;

    fn perspective_state() -> FrameState {
        FrameState {
            transformation: TransformationType::Perspective,
            ..FrameState::default()
        }
    }

    #[test]
    fn world_panel_has_model_marker_and_gizmo() {
        let builder = FrameBuilder::new(Options::default());
        let frame = builder.build(&FrameState::default());

        assert_eq!(frame.world.meshes.len(), 2);
        // world axes + camera axes + orthographic frustum
        assert_eq!(frame.world.lines.len(), 3 + 3 + 12);

        let marker = &frame.world.meshes[1];
        let center = marker.positions.iter().copied().sum::<Vec3>()
            / marker.positions.len() as f32;
        assert!(center.abs_diff_eq(frame.camera_origin, 1e-2));
    }

    #[test]
    fn perspective_adds_near_rays() {
        let builder = FrameBuilder::new(Options::default());
        let frame = builder.build(&perspective_state());
        assert_eq!(frame.world.lines.len(), 3 + 3 + 16);
        assert_eq!(frame.view_space.lines.len(), 3 + 3 + 16);
    }

    #[test]
    fn view_panel_camera_sits_at_origin() {
        let builder = FrameBuilder::new(Options::default());
        let frame = builder.build(&FrameState::default());
        // first camera-axis segment starts after the three world axes
        let (start, _, _) = frame
            .view_space
            .lines
            .segments()
            .nth(3)
            .unwrap_or_default();
        assert!(start.abs_diff_eq(Vec3::ZERO, 1e-6));
        // world origin is one unit in front of the camera
        let (origin, _, _) =
            frame.view_space.lines.segments().next().unwrap_or_default();
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -1.0), 1e-5));
    }

    #[test]
    fn clip_panel_model_fits_in_ndc_box() {
        let builder = FrameBuilder::new(Options::default());
        let frame = builder.build(&perspective_state());
        let model = &frame.clip_space.meshes[0];
        assert_eq!(model.positions.len(), builder.model().positions.len());
        assert_eq!(frame.clip_space.lines.len(), 12 + 3);
        assert!(frame.visible_fraction > 0.9);
        let inside = model
            .positions
            .iter()
            .filter(|p| p.abs().max_element() <= 1.0)
            .count();
        let fraction = inside as f32 / model.positions.len() as f32;
        assert!((fraction - frame.visible_fraction).abs() < 0.05);
    }

    #[test]
    fn ndc_panel_divides_to_clip_panel() {
        let builder = FrameBuilder::new(Options::default());
        let frame = builder.build(&perspective_state());
        let divided = perspective_divide(&frame.ndc.positions);
        assert_eq!(divided, frame.clip_space.meshes[0].positions);
        assert_eq!(frame.ndc.axes.len(), 6);
        assert_eq!(frame.ndc.axis_colors.len(), 3);
    }

    #[test]
    fn hidden_camera_drops_gizmo() {
        let mut options = Options::default();
        options.display.show_camera = false;
        let frame = FrameBuilder::new(options).build(&perspective_state());
        assert_eq!(frame.world.lines.len(), 3);
        assert_eq!(frame.view_space.lines.len(), 3);
    }

    #[test]
    fn bounding_sphere_settles_far_and_near_models() {
        let options = Options::default();
        // Well behind the camera: culled as a whole
        let behind = Mesh::uv_sphere(0.1, 6, 8).translated(Vec3::new(
            0.0, 3.0, 3.0,
        ));
        let frame = FrameBuilder::with_model(options.clone(), behind)
            .build(&FrameState::default());
        assert_eq!(frame.visible_fraction, 0.0);

        // Tiny model at the target: entirely inside
        let small = Mesh::uv_sphere(0.05, 6, 8);
        let frame = FrameBuilder::with_model(options, small)
            .build(&FrameState::default());
        assert_eq!(frame.visible_fraction, 1.0);
    }

    #[test]
    fn empty_model_is_never_visible() {
        let builder =
            FrameBuilder::with_model(Options::default(), Mesh::default());
        let frame = builder.build(&FrameState::default());
        assert_eq!(frame.visible_fraction, 0.0);
        assert!(frame.ndc.positions.is_empty());
    }
}
