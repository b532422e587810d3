//! Renderer interface consumed by the scene composer
//!
//! A renderer draws a [`Scene`] through a [`PerspectiveCamera`] onto some
//! surface. Size is given in logical pixels; the backing buffer is the
//! logical size multiplied by the pixel ratio.

use crate::{
    error::RenderError,
    gfx::{camera::PerspectiveCamera, scene::Scene},
};

pub trait SceneRenderer {
    /// Sets the device pixel ratio used to size the backing buffer.
    fn set_pixel_ratio(&mut self, ratio: f64);

    /// Sets the logical drawing size.
    fn set_size(&mut self, width: u32, height: u32);

    /// Draws a single frame.
    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RenderError>;

    /// Number of draw calls issued by the last [`render`](Self::render).
    fn draw_calls(&self) -> u32 {
        0
    }
}

/// Logical size and pixel ratio of a render target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTarget {
    pub width: u32,
    pub height: u32,
    pub pixel_ratio: f64,
}

impl Default for RenderTarget {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            pixel_ratio: 1.0,
        }
    }
}

impl RenderTarget {
    /// Physical size of the backing buffer in pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        let scale = |logical: u32| (logical as f64 * self.pixel_ratio).round().max(1.0) as u32;
        (scale(self.width), scale(self.height))
    }

    /// [`backing_size`](Self::backing_size) scaled down, keeping its aspect,
    /// so neither side exceeds `max_dimension`.
    pub fn backing_size_within(&self, max_dimension: u32) -> (u32, u32) {
        let (width, height) = self.backing_size();
        let largest = width.max(height);
        if largest <= max_dimension {
            return (width, height);
        }
        let fit = |side: u32| {
            let scaled = side as u64 * max_dimension as u64 / largest as u64;
            (scaled as u32).clamp(1, max_dimension)
        };
        (fit(width), fit(height))
    }
}

/// Summary of one frame submitted to a [`HeadlessRenderer`]
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRecord {
    /// Camera aspect at submission time
    pub aspect: f32,
    /// Visible renderable nodes drawn
    pub draw_calls: u32,
    pub target: RenderTarget,
}

/// Renderer without a display surface.
///
/// Walks the scene exactly like a GPU renderer would and records what it
/// would have drawn. Only the latest frame is kept, so it can drive the
/// scene offscreen for as long as needed.
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    pub target: RenderTarget,
    last: Option<FrameRecord>,
    frames_rendered: u64,
    fail_next: Option<String>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `render` call fail with `reason`.
    pub fn fail_next_frame(&mut self, reason: impl Into<String>) {
        self.fail_next = Some(reason.into());
    }

    pub fn last_frame(&self) -> Option<&FrameRecord> {
        self.last.as_ref()
    }

    /// Frames rendered successfully so far.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

impl SceneRenderer for HeadlessRenderer {
    fn set_pixel_ratio(&mut self, ratio: f64) {
        self.target.pixel_ratio = ratio;
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.target.width = width;
        self.target.height = height;
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        if let Some(reason) = self.fail_next.take() {
            return Err(RenderError::Submission(reason));
        }

        let mut draw_calls = 0;
        scene.graph.visit_visible(|_, node, _| {
            if node.renderable.and_then(|r| scene.mesh(r.mesh)).is_some() {
                draw_calls += 1;
            }
        });

        self.last = Some(FrameRecord {
            aspect: camera.aspect,
            draw_calls,
            target: self.target,
        });
        self.frames_rendered += 1;
        Ok(())
    }

    fn draw_calls(&self) -> u32 {
        self.last.as_ref().map_or(0, |frame| frame.draw_calls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        geometry::generate_cube,
        scene::{Color, Material, Renderable, Transform},
    };
    use cgmath::Deg;

    #[test]
    fn backing_size_scales_with_pixel_ratio() {
        let target = RenderTarget {
            width: 800,
            height: 600,
            pixel_ratio: 2.0,
        };
        assert_eq!(target.backing_size(), (1600, 1200));

        let fractional = RenderTarget {
            pixel_ratio: 1.25,
            ..target
        };
        assert_eq!(fractional.backing_size(), (1000, 750));
    }

    #[test]
    fn oversized_backing_buffers_fit_the_texture_limit() {
        let target = RenderTarget {
            width: 2200,
            height: 1400,
            pixel_ratio: 2.0,
        };
        assert_eq!(target.backing_size(), (4400, 2800));
        assert_eq!(target.backing_size_within(4096), (4096, 2606));
        assert_eq!(target.backing_size_within(8192), (4400, 2800));

        let tall = RenderTarget {
            width: 10,
            height: 5000,
            pixel_ratio: 1.0,
        };
        assert_eq!(tall.backing_size_within(4096), (8, 4096));
    }

    #[test]
    fn headless_renderer_counts_visible_renderables() {
        let mut scene = Scene::new(Color::WHITE);
        let mesh = scene.add_mesh(generate_cube());
        let material = scene.add_material(Material::Basic { color: Color::WHITE });
        let group = scene.graph.add_group(None, "group");
        for name in ["a", "b"] {
            scene.graph.add_node(
                Some(group),
                name,
                Transform::default(),
                Some(Renderable { mesh, material }),
            );
        }

        let camera = PerspectiveCamera::new(Deg(60.0), 1.5, 0.1, 100.0);
        let mut renderer = HeadlessRenderer::new();
        renderer.render(&scene, &camera).unwrap();

        assert_eq!(renderer.draw_calls(), 2);
        assert_eq!(renderer.last_frame().unwrap().aspect, 1.5);
    }

    #[test]
    fn injected_failure_affects_one_frame() {
        let scene = Scene::new(Color::WHITE);
        let camera = PerspectiveCamera::new(Deg(60.0), 1.0, 0.1, 100.0);
        let mut renderer = HeadlessRenderer::new();

        renderer.fail_next_frame("surface lost");
        assert!(renderer.render(&scene, &camera).is_err());
        assert!(renderer.render(&scene, &camera).is_ok());
        assert_eq!(renderer.frames_rendered(), 1);
    }

    #[test]
    fn long_runs_keep_only_the_latest_frame() {
        let mut scene = Scene::new(Color::WHITE);
        let mesh = scene.add_mesh(generate_cube());
        let material = scene.add_material(Material::Basic { color: Color::WHITE });
        let node = scene.graph.add_node(
            None,
            "cube",
            Transform::default(),
            Some(Renderable { mesh, material }),
        );

        let mut camera = PerspectiveCamera::new(Deg(60.0), 1.0, 0.1, 100.0);
        let mut renderer = HeadlessRenderer::new();
        for _ in 0..10_000 {
            renderer.render(&scene, &camera).unwrap();
        }

        scene.graph.get_mut(node).unwrap().visible = false;
        camera.aspect = 2.0;
        renderer.render(&scene, &camera).unwrap();

        assert_eq!(renderer.frames_rendered(), 10_001);
        let last = renderer.last_frame().unwrap();
        assert_eq!(last.draw_calls, 0);
        assert_eq!(last.aspect, 2.0);
    }
}
