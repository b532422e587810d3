//! # Scene Composer
//!
//! Owns everything one running scene needs: the scene graph with its
//! container of shapes, the camera, the renderer, the stats bracket, the
//! latest pointer sample and the surface size.
//!
//! [`SceneComposer::setup`] builds the scene once its assets are loaded.
//! After that an outer loop calls [`SceneComposer::run_once`] for every
//! display refresh and forwards resize and pointer notifications in between.
//!
//! ## Usage
//!
//! ```rust
//! use floating_shapes::assets::{Asset, StaticAssetLoader, TextureData};
//! use floating_shapes::composer::SceneComposer;
//! use floating_shapes::config::{SceneConfig, MATCAP_ASSET};
//! use floating_shapes::gfx::rendering::HeadlessRenderer;
//! use floating_shapes::performance::PerformanceMonitor;
//! use floating_shapes::viewport::SurfaceSize;
//!
//! let loader = StaticAssetLoader::new().with(
//!     MATCAP_ASSET,
//!     Asset::Texture(TextureData { bytes: vec![], locator: "matcap.png".into() }),
//! );
//! let config = SceneConfig::default().with_title(None).with_assets(vec![
//!     floating_shapes::assets::AssetRequest::texture(MATCAP_ASSET, "matcap.png"),
//! ]);
//!
//! let mut composer = futures::executor::block_on(SceneComposer::setup(
//!     &loader,
//!     HeadlessRenderer::new(),
//!     PerformanceMonitor::new(),
//!     &config,
//!     SurfaceSize::new(800, 600),
//!     None,
//! ))
//! .unwrap();
//!
//! composer.run_once(16.0).unwrap();
//! assert_eq!(composer.frame_count(), 1);
//! ```

use std::time::Instant;

use cgmath::{Deg, Vector3};

use crate::{
    animation::Tween,
    assets::{AssetLoader, AssetMap},
    config::{GeometryKind, SceneConfig, TitleConfig, MATCAP_ASSET, TITLE_FONT_ASSET},
    error::Result,
    gfx::{
        camera::{OrbitControls, PerspectiveCamera},
        geometry::{
            generate_axis_bars, generate_icosahedron, generate_sphere, generate_torus,
            GeometryData,
        },
        rendering::SceneRenderer,
        scene::{Color, Material, NodeId, Renderable, Scene, Transform},
    },
    input::{InputTracker, PointerOffset},
    performance::FrameStats,
    shape::{Shape, ShapeDescriptor},
    ui::PanelParams,
    viewport::{sync_viewport, SurfaceSize},
};

/// Monotonic clock started when the scene is activated.
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    started: Instant,
}

impl FrameClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Milliseconds since activation.
    pub fn elapsed_ms(&self) -> f64 {
        self.started.elapsed().as_secs_f64() * 1000.0
    }
}

/// The title text mesh and its intro.
#[derive(Debug, Clone)]
pub struct Title {
    node: NodeId,
    intro: Tween,
    /// X offset that centres the text on the container origin
    centering_offset: f32,
}

impl Title {
    pub fn node(&self) -> NodeId {
        self.node
    }

    pub fn centering_offset(&self) -> f32 {
        self.centering_offset
    }
}

pub struct SceneComposer<R: SceneRenderer, S: FrameStats> {
    renderer: R,
    stats: S,
    scene: Scene,
    camera: PerspectiveCamera,
    orbit: Option<OrbitControls>,
    container: NodeId,
    shapes: Vec<Shape>,
    title: Option<Title>,
    input: InputTracker,
    surface: SurfaceSize,
    pixel_ratio: f64,
    panel: PanelParams,
    parallax_degrees: f32,
    clock: FrameClock,
    frame_count: u64,
}

impl<R: SceneRenderer, S: FrameStats> SceneComposer<R, S> {
    /// Loads the configured assets and builds the scene.
    ///
    /// Steps run strictly in order: assets, stats and panel, background and
    /// camera, container and shapes, helpers and title, viewport. Any failure
    /// aborts setup.
    pub async fn setup<L: AssetLoader>(
        loader: &L,
        renderer: R,
        stats: S,
        config: &SceneConfig,
        surface: SurfaceSize,
        pixel_ratio: Option<f64>,
    ) -> Result<Self> {
        let surface = surface.validate()?;

        log::info!("loading {} scene assets", config.assets.len());
        let assets = loader.load(&config.assets).await?;

        let panel = PanelParams::default();

        let mut scene = Scene::new(config.background);
        let camera_config = &config.camera;
        let mut camera = PerspectiveCamera::new(
            Deg(camera_config.fov_degrees),
            surface.aspect(),
            camera_config.near,
            camera_config.far,
        );
        camera.set_position(camera_config.position);
        camera.look_at(camera_config.target);
        let orbit = config
            .orbit_controls
            .then(|| OrbitControls::new(camera_config.target));

        let container = scene.graph.add_group(None, "container");
        let shapes = build_shapes(&mut scene, container, &assets, config)?;
        log::info!("added {} shapes to the container", shapes.len());

        if let Some(size) = config.axes_helper {
            add_axes_helper(&mut scene, size);
        }
        let title = match &config.title {
            Some(title) => Some(build_title(&mut scene, container, &assets, title)?),
            None => None,
        };

        let mut composer = Self {
            renderer,
            stats,
            scene,
            camera,
            orbit,
            container,
            shapes,
            title,
            input: InputTracker::new(),
            surface,
            pixel_ratio: 1.0,
            panel,
            parallax_degrees: config.parallax_degrees,
            clock: FrameClock::start(),
            frame_count: 0,
        };
        composer.resize(surface.width, surface.height, pixel_ratio)?;

        let statistics = composer.scene.get_statistics();
        log::info!(
            "scene ready: {} nodes, {} triangles",
            statistics.node_count,
            statistics.total_triangles
        );
        Ok(composer)
    }

    /// Advances and draws one frame at `timestamp_ms` on the scene clock.
    ///
    /// A renderer failure is returned as is; the loop driving this should
    /// stop.
    pub fn run_once(&mut self, timestamp_ms: f64) -> Result<()> {
        self.stats.begin();

        if let Some(orbit) = self.orbit.as_mut() {
            orbit.update(&mut self.camera);
        }
        self.animate_intros((timestamp_ms / 1000.0) as f32);

        if let Err(e) = self.renderer.render(&self.scene, &self.camera) {
            log::error!("frame {} failed to render: {e}", self.frame_count);
            return Err(e.into());
        }
        self.stats.record_draw_calls(self.renderer.draw_calls());

        for shape in &mut self.shapes {
            shape.render(&mut self.scene.graph, timestamp_ms);
        }

        let pointer = self.input.offset();
        if let Some(container) = self.scene.graph.transform_mut(self.container) {
            container.rotation.y = (pointer.x * self.parallax_degrees).to_radians();
            container.rotation.x = (pointer.y * self.parallax_degrees).to_radians();
        }

        self.stats.end();
        self.frame_count += 1;
        log::trace!("frame {} at {:.1}ms", self.frame_count, timestamp_ms);
        Ok(())
    }

    /// Runs one frame at the current [`FrameClock`] time.
    pub fn tick(&mut self) -> Result<()> {
        let now = self.clock.elapsed_ms();
        self.run_once(now)
    }

    fn animate_intros(&mut self, seconds: f32) {
        for shape in &mut self.shapes {
            shape.animate_intro(&mut self.scene.graph, seconds);
        }

        if let Some(title) = self.title.as_mut() {
            if !title.intro.is_done() {
                let scale = title.intro.sample(seconds);
                if let Some(transform) = self.scene.graph.transform_mut(title.node) {
                    transform.scale = scale;
                }
            }
        }
    }

    /// Applies a new surface size and pixel ratio to camera and renderer.
    pub fn resize(&mut self, width: u32, height: u32, pixel_ratio: Option<f64>) -> Result<()> {
        let size = SurfaceSize::new(width, height);
        self.pixel_ratio = sync_viewport(&mut self.camera, &mut self.renderer, size, pixel_ratio)?;
        self.surface = size;
        Ok(())
    }

    /// Records a pointer position in surface pixels.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        self.input.pointer_moved(x, y, self.surface);
    }

    /// Pushes panel values onto the title mesh.
    pub fn apply_panel(&mut self, params: &PanelParams) {
        self.panel = *params;
        let Some(title) = &self.title else {
            log::debug!("panel change ignored, scene has no title");
            return;
        };
        if let Some(node) = self.scene.graph.get_mut(title.node) {
            node.transform.position.y = params.vertical_offset;
            node.visible = params.show_title;
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    pub fn pointer(&self) -> PointerOffset {
        self.input.offset()
    }

    pub fn surface(&self) -> SurfaceSize {
        self.surface
    }

    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    pub fn panel(&self) -> &PanelParams {
        &self.panel
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn stats(&self) -> &S {
        &self.stats
    }

    /// Orbit controls, when enabled in the configuration.
    pub fn orbit_controls_mut(&mut self) -> Option<&mut OrbitControls> {
        self.orbit.as_mut()
    }

    /// Scene and camera together, for renderers that draw extra layers.
    pub fn frame_parts(&mut self) -> (&mut R, &Scene, &PerspectiveCamera) {
        (&mut self.renderer, &self.scene, &self.camera)
    }
}

fn build_geometry(kind: &GeometryKind, assets: &AssetMap) -> Result<GeometryData> {
    Ok(match kind {
        GeometryKind::Sphere {
            radius,
            width_segments,
            height_segments,
        } => generate_sphere(*radius, *width_segments, *height_segments),
        GeometryKind::Torus {
            radius,
            tube,
            radial_segments,
            tubular_segments,
        } => generate_torus(*radius, *tube, *radial_segments, *tubular_segments),
        GeometryKind::Icosahedron { radius, detail } => generate_icosahedron(*radius, *detail),
        GeometryKind::Model { asset } => assets.geometry(asset)?.clone(),
    })
}

fn build_shapes(
    scene: &mut Scene,
    container: NodeId,
    assets: &AssetMap,
    config: &SceneConfig,
) -> Result<Vec<Shape>> {
    if config.shapes.is_empty() {
        return Ok(Vec::new());
    }

    assets.texture(MATCAP_ASSET)?;
    let material = scene.add_material(Material::Matcap {
        texture: MATCAP_ASSET.to_string(),
        tint: Color::WHITE,
    });

    let mut shapes = Vec::with_capacity(config.shapes.len());
    for (index, shape) in config.shapes.iter().enumerate() {
        let mesh = scene.add_mesh(build_geometry(&shape.geometry, assets)?);
        let descriptor = ShapeDescriptor::new(mesh, material, shape.position, index)
            .with_speed(shape.speed)
            .with_offset(shape.offset)
            .with_spin(config.spin_per_frame);
        shapes.push(Shape::new(&mut scene.graph, container, descriptor, &config.intro, 0.0)?);
    }
    Ok(shapes)
}

fn add_axes_helper(scene: &mut Scene, size: f32) -> NodeId {
    let axes = scene.graph.add_group(None, "axes");
    let colors = [
        ("x", Color::new(1.0, 0.0, 0.0)),
        ("y", Color::new(0.0, 1.0, 0.0)),
        ("z", Color::new(0.0, 0.0, 1.0)),
    ];
    for (bar, (name, color)) in generate_axis_bars(size).into_iter().zip(colors) {
        let mesh = scene.add_mesh(bar);
        let material = scene.add_material(Material::Basic { color });
        scene.graph.add_node(
            Some(axes),
            format!("axis-{name}"),
            Transform::default(),
            Some(Renderable { mesh, material }),
        );
    }
    axes
}

fn build_title(
    scene: &mut Scene,
    container: NodeId,
    assets: &AssetMap,
    config: &TitleConfig,
) -> Result<Title> {
    let font = assets.font(TITLE_FONT_ASSET)?;
    let geometry = font.text_geometry(&config.text, &config.style);
    let centering_offset = geometry
        .bounding_box()
        .map_or(0.0, |bounds| -bounds.width() / 2.0);

    let mesh = scene.add_mesh(geometry);
    let material = scene.add_material(Material::Basic {
        color: config.color,
    });
    let node = scene.graph.add_node(
        Some(container),
        "title",
        Transform {
            position: Vector3::new(centering_offset, 0.0, 0.0),
            scale: config.intro_from,
            ..Default::default()
        },
        Some(Renderable { mesh, material }),
    );

    let intro = Tween::new(config.intro_from, Vector3::new(1.0, 1.0, 1.0), config.intro_duration)
        .with_easing(config.intro_easing);

    log::debug!(
        "title `{}` uses font `{}`, centred at x = {:.3}",
        config.text,
        font.name(),
        centering_offset
    );
    Ok(Title {
        node,
        intro,
        centering_offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        assets::{Asset, AssetRequest, StaticAssetLoader, TextureData},
        config::ShapeConfig,
        error::{RenderError, SceneError},
        gfx::{
            geometry::{BlockFont, Font},
            rendering::HeadlessRenderer,
        },
        shape::DEFAULT_SPEED,
    };
    use futures::executor::block_on;
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct CountingStats {
        begins: u32,
        ends: u32,
        draw_calls: u32,
    }

    impl FrameStats for CountingStats {
        fn begin(&mut self) {
            self.begins += 1;
        }

        fn end(&mut self) {
            self.ends += 1;
        }

        fn record_draw_calls(&mut self, draw_calls: u32) {
            self.draw_calls = draw_calls;
        }
    }

    fn loader() -> StaticAssetLoader {
        StaticAssetLoader::new()
            .with(
                MATCAP_ASSET,
                Asset::Texture(TextureData {
                    bytes: vec![1, 2, 3],
                    locator: "./img/matcap.png".into(),
                }),
            )
            .with(TITLE_FONT_ASSET, Asset::Font(Arc::new(BlockFont::new("roboto"))))
    }

    fn composer(config: &SceneConfig, surface: SurfaceSize) -> SceneComposer<HeadlessRenderer, CountingStats> {
        block_on(SceneComposer::setup(
            &loader(),
            HeadlessRenderer::new(),
            CountingStats::default(),
            config,
            surface,
            None,
        ))
        .unwrap()
    }

    #[test]
    fn showcase_scene_animates_and_follows_the_pointer() {
        let config = SceneConfig::default();
        let mut composer = composer(&config, SurfaceSize::new(800, 600));

        let shapes = composer.shapes();
        assert_eq!(shapes.len(), 3);
        assert_eq!(shapes[0].reference_position(), Vector3::new(6.0, 2.0, -2.0));
        assert_eq!(shapes[0].speed(), DEFAULT_SPEED);
        assert_eq!(shapes[1].speed(), 0.002);
        assert_eq!(shapes[2].speed(), 0.001);

        composer.run_once(0.0).unwrap();
        for shape in composer.shapes() {
            let y = composer.scene().graph.transform(shape.node()).unwrap().position.y;
            let expected = shape.reference_position().y as f64 + shape.offset().sin();
            assert!((y as f64 - expected).abs() < 1e-5);
        }

        composer.handle_pointer_move(600.0, 450.0);
        assert_eq!(composer.pointer(), PointerOffset::new(0.5, -0.5));
        composer.run_once(16.0).unwrap();

        let container = composer.scene().graph.transform(composer.container()).unwrap();
        assert!((container.rotation.y - 5.0f32.to_radians()).abs() < 1e-6);
        assert!((container.rotation.x - (-5.0f32).to_radians()).abs() < 1e-6);

        assert_eq!(composer.frame_count(), 2);
        assert_eq!(composer.stats().begins, 2);
        assert_eq!(composer.stats().ends, 2);
    }

    #[test]
    fn every_shape_and_helper_is_drawn() {
        let mut composer = composer(&SceneConfig::default(), SurfaceSize::new(800, 600));
        composer.run_once(0.0).unwrap();

        // 3 shapes, 1 title, 3 axis bars
        assert_eq!(composer.renderer().last_frame().unwrap().draw_calls, 7);
        assert_eq!(composer.stats().draw_calls, 7);
    }

    #[test]
    fn shapes_share_the_matcap_material() {
        let composer = composer(&SceneConfig::default(), SurfaceSize::new(800, 600));
        let scene = composer.scene();
        for shape in composer.shapes() {
            let renderable = scene.graph.get(shape.node()).unwrap().renderable.unwrap();
            assert_eq!(
                scene.material(renderable.material),
                Some(&Material::Matcap {
                    texture: MATCAP_ASSET.to_string(),
                    tint: Color::WHITE,
                })
            );
        }
    }

    #[test]
    fn resize_updates_the_aspect_used_by_the_next_draw() {
        let mut composer = composer(&SceneConfig::default(), SurfaceSize::new(800, 600));
        composer.run_once(0.0).unwrap();
        assert!((composer.renderer().last_frame().unwrap().aspect - 4.0 / 3.0).abs() < 1e-3);

        composer.resize(1600, 900, Some(2.0)).unwrap();
        composer.run_once(16.0).unwrap();

        let frame = composer.renderer().last_frame().unwrap();
        assert!((frame.aspect - 16.0 / 9.0).abs() < 1e-3);
        assert_eq!(frame.target.width, 1600);
        assert_eq!(frame.target.pixel_ratio, 2.0);
        assert_eq!(composer.surface(), SurfaceSize::new(1600, 900));
    }

    #[test]
    fn pointer_is_normalized_against_the_resized_surface() {
        let mut composer = composer(&SceneConfig::default(), SurfaceSize::new(800, 600));
        composer.resize(1600, 900, None).unwrap();
        composer.handle_pointer_move(800.0, 450.0);
        assert_eq!(composer.pointer(), PointerOffset::new(0.0, 0.0));
    }

    #[test]
    fn intros_run_once_on_the_scene_clock() {
        let mut composer = composer(&SceneConfig::default(), SurfaceSize::new(800, 600));
        let graph = &composer.scene().graph;
        for shape in composer.shapes() {
            assert_eq!(graph.transform(shape.node()).unwrap().scale, Vector3::new(0.0, 0.0, 0.0));
        }
        let title = composer.title().unwrap().node();
        assert_eq!(graph.transform(title).unwrap().scale, Vector3::new(1.0, 0.0, 0.0));

        composer.run_once(5_000.0).unwrap();
        composer.run_once(6_000.0).unwrap();

        let graph = &composer.scene().graph;
        for shape in composer.shapes() {
            assert_eq!(graph.transform(shape.node()).unwrap().scale, Vector3::new(1.0, 1.0, 1.0));
            assert!(shape.intro().is_done());
        }
        assert_eq!(graph.transform(title).unwrap().scale, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn title_is_centred_and_driven_by_the_panel() {
        let mut composer = composer(&SceneConfig::default(), SurfaceSize::new(800, 600));
        let title = composer.title().unwrap().clone();

        let expected = BlockFont::new("roboto")
            .text_geometry("Welcome to my website!", &Default::default())
            .bounding_box()
            .unwrap()
            .width()
            / -2.0;
        assert!((title.centering_offset() - expected).abs() < 1e-5);
        let node = composer.scene().graph.get(title.node()).unwrap();
        assert_eq!(node.transform.position.x, title.centering_offset());
        assert_eq!(node.parent(), Some(composer.container()));

        let mut params = PanelParams::default();
        params.set_vertical_offset(2.5);
        params.set_show_title(false);
        composer.apply_panel(&params);

        let node = composer.scene().graph.get(title.node()).unwrap();
        assert_eq!(node.transform.position.y, 2.5);
        assert!(!node.visible);
        composer.run_once(0.0).unwrap();
        assert_eq!(composer.renderer().last_frame().unwrap().draw_calls, 6);
    }

    #[test]
    fn render_failure_stops_the_frame() {
        let mut composer = composer(&SceneConfig::default(), SurfaceSize::new(800, 600));
        composer.renderer_mut().fail_next_frame("device lost");

        let result = composer.run_once(0.0);
        assert!(matches!(
            result,
            Err(SceneError::Render(RenderError::Submission(_)))
        ));
        assert_eq!(composer.frame_count(), 0);
        assert_eq!(composer.stats().ends, 0);

        let shape = &composer.shapes()[0];
        assert_eq!(shape.frames(), 0);
    }

    #[test]
    fn setup_fails_without_required_assets() {
        let without_font = StaticAssetLoader::new().with(
            MATCAP_ASSET,
            Asset::Texture(TextureData {
                bytes: vec![],
                locator: "m.png".into(),
            }),
        );
        let result = block_on(SceneComposer::setup(
            &without_font,
            HeadlessRenderer::new(),
            CountingStats::default(),
            &SceneConfig::default(),
            SurfaceSize::new(800, 600),
            None,
        ));
        assert!(matches!(
            result,
            Err(SceneError::AssetUnavailable { ref name, .. }) if name == TITLE_FONT_ASSET
        ));

        let unrequested = SceneConfig::default()
            .with_assets(vec![AssetRequest::texture(MATCAP_ASSET, "./img/matcap.png")]);
        let result = block_on(SceneComposer::setup(
            &loader(),
            HeadlessRenderer::new(),
            CountingStats::default(),
            &unrequested,
            SurfaceSize::new(800, 600),
            None,
        ));
        assert!(matches!(
            result,
            Err(SceneError::MissingAsset { ref name }) if name == TITLE_FONT_ASSET
        ));
    }

    #[test]
    fn zero_sized_surface_fails_setup() {
        for surface in [SurfaceSize::new(0, 0), SurfaceSize::new(0, 600), SurfaceSize::new(800, 0)] {
            let result = block_on(SceneComposer::setup(
                &loader(),
                HeadlessRenderer::new(),
                CountingStats::default(),
                &SceneConfig::default(),
                surface,
                None,
            ));
            assert!(matches!(
                result,
                Err(SceneError::InvalidViewport { width, height })
                    if width == surface.width && height == surface.height
            ));
        }
    }

    #[test]
    fn tick_runs_frames_on_the_activation_clock() {
        let config = SceneConfig::default().with_title(None).with_shapes(vec![ShapeConfig::new(
            GeometryKind::Icosahedron {
                radius: 1.0,
                detail: 0,
            },
            Vector3::new(0.0, 0.0, 0.0),
        )]);
        let mut composer = composer(&config, SurfaceSize::new(800, 600));
        let node = composer.shapes()[0].node();

        // sin(0.001 * t) rises over the first second and a half
        let before = composer.clock().elapsed_ms();
        composer.tick().unwrap();
        let between = composer.clock().elapsed_ms();
        let first = composer.scene().graph.transform(node).unwrap().position.y;
        composer.tick().unwrap();
        let after = composer.clock().elapsed_ms();
        let second = composer.scene().graph.transform(node).unwrap().position.y;

        assert!(before <= between && between <= after);
        let shape = &composer.shapes()[0];
        assert!(shape.height_at(before) <= first && first <= shape.height_at(between));
        assert!(shape.height_at(between) <= second && second <= shape.height_at(after));
        assert!(first <= second);
        assert_eq!(composer.frame_count(), 2);
        assert_eq!(composer.renderer().frames_rendered(), 2);
    }

    #[test]
    fn orbit_controls_are_opt_in() {
        let mut composer = composer(&SceneConfig::default(), SurfaceSize::new(800, 600));
        assert!(composer.orbit_controls_mut().is_none());

        let config = SceneConfig::default().with_orbit_controls(true);
        let mut composer = composer_with(&config);
        let orbit = composer.orbit_controls_mut().unwrap();
        orbit.enable_damping = false;
        orbit.rotate(-100.0, 0.0);
        composer.run_once(0.0).unwrap();

        let eye = composer.camera().eye;
        assert!(eye.x > 0.0);
        assert!((composer.camera().distance() - 10.0).abs() < 1e-3);
    }

    fn composer_with(config: &SceneConfig) -> SceneComposer<HeadlessRenderer, CountingStats> {
        composer(config, SurfaceSize::new(800, 600))
    }
}
