use anyhow::Context;
use std::{path::PathBuf, sync::Arc};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use crate::{
    assets::FileAssetLoader,
    composer::SceneComposer,
    config::SceneConfig,
    error::RenderError,
    gfx::{
        camera::PerspectiveCamera,
        rendering::{RenderEngine, SceneRenderer},
        scene::Scene,
    },
    performance::{render_overlay, FrameStats, PerformanceMetrics, PerformanceMonitor},
    ui::{parameter_panel, PanelParams, UiManager},
    viewport::SurfaceSize,
};

/// Window renderer: the wgpu engine plus the imgui overlay.
pub struct AppRenderer {
    window: Arc<Window>,
    engine: RenderEngine,
    ui: UiManager,
    panel: PanelParams,
    panel_changed: bool,
    metrics: PerformanceMetrics,
}

impl AppRenderer {
    pub fn new(window: Arc<Window>, engine: RenderEngine) -> Self {
        let ui = UiManager::new(engine.device(), engine.queue(), engine.surface_format(), &window);
        Self {
            window,
            engine,
            ui,
            panel: PanelParams::default(),
            panel_changed: false,
            metrics: PerformanceMetrics::default(),
        }
    }

    /// Panel values edited since the last call, if any.
    pub fn take_panel_change(&mut self) -> Option<PanelParams> {
        std::mem::take(&mut self.panel_changed).then_some(self.panel)
    }

    /// Stats shown by the overlay on the next frame.
    pub fn set_metrics(&mut self, metrics: PerformanceMetrics) {
        self.metrics = metrics;
    }

    pub fn ui_mut(&mut self) -> &mut UiManager {
        &mut self.ui
    }

    fn sync_ui_size(&mut self) {
        let (width, height) = self.engine.surface_size();
        self.ui.update_display_size(width, height);
    }
}

impl SceneRenderer for AppRenderer {
    fn set_pixel_ratio(&mut self, ratio: f64) {
        self.engine.set_pixel_ratio(ratio);
        self.sync_ui_size();
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.engine.set_size(width, height);
        self.sync_ui_size();
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera) -> Result<(), RenderError> {
        let Self {
            window,
            engine,
            ui,
            panel,
            panel_changed,
            metrics,
        } = self;

        let mut overlay = Ok(());
        engine.render_with_overlay(scene, camera, |device, queue, encoder, view| {
            overlay = ui.draw(device, queue, encoder, window, view, |frame| {
                render_overlay(frame, metrics);
                if parameter_panel(frame, panel) {
                    *panel_changed = true;
                }
            });
        })?;
        overlay
    }

    fn draw_calls(&self) -> u32 {
        self.engine.draw_calls()
    }
}

type AppComposer = SceneComposer<AppRenderer, PerformanceMonitor>;

/// Windowed driver for the floating shapes scene.
pub struct ShowcaseApp {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState,
}

struct AppState {
    config: SceneConfig,
    loader: FileAssetLoader,
    window: Option<Arc<Window>>,
    composer: Option<AppComposer>,
    dragging: bool,
    last_cursor: Option<PhysicalPosition<f64>>,
    failure: Option<anyhow::Error>,
}

impl ShowcaseApp {
    /// Creates the app. Assets are resolved under `asset_root`.
    ///
    /// Initialises `env_logger` with an `info` default, overridable through
    /// `RUST_LOG`.
    pub fn new(config: SceneConfig, asset_root: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();

        let event_loop = EventLoop::new().context("failed to create event loop")?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                config,
                loader: FileAssetLoader::new(asset_root),
                window: None,
                composer: None,
                dragging: false,
                last_cursor: None,
                failure: None,
            },
        })
    }

    /// Runs until the window closes or a frame fails.
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .context("event loop already consumed")?;
        event_loop.set_control_flow(ControlFlow::Poll);

        event_loop
            .run_app(&mut self.app_state)
            .context("event loop terminated abnormally")?;

        match self.app_state.failure.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn fail(failure: &mut Option<anyhow::Error>, event_loop: &ActiveEventLoop, error: anyhow::Error) {
    log::error!("{error:#}");
    *failure = Some(error);
    event_loop.exit();
}

/// Feeds a physical cursor position to the composer in logical pixels.
fn track_pointer<R: SceneRenderer, S: FrameStats>(
    composer: &mut SceneComposer<R, S>,
    position: PhysicalPosition<f64>,
    scale_factor: f64,
) {
    let logical = position.to_logical::<f64>(scale_factor);
    composer.handle_pointer_move(logical.x, logical.y);
}

fn logical_surface(size: PhysicalSize<u32>, scale_factor: f64) -> SurfaceSize {
    let logical = size.to_logical::<f64>(scale_factor);
    SurfaceSize::new(logical.width.round() as u32, logical.height.round() as u32)
}

impl AppState {
    fn start(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let window = event_loop
            .create_window(
                Window::default_attributes()
                    .with_title("Floating Shapes")
                    .with_inner_size(winit::dpi::LogicalSize::new(1200.0, 800.0)),
            )
            .context("failed to create window")?;
        let window = Arc::new(window);
        self.window = Some(window.clone());

        let size = window.inner_size();
        let scale_factor = window.scale_factor();
        let engine = pollster::block_on(RenderEngine::new(
            window.clone(),
            size.width,
            size.height,
        ))
        .context("failed to initialise renderer")?;
        let renderer = AppRenderer::new(window.clone(), engine);

        let composer = pollster::block_on(SceneComposer::setup(
            &self.loader,
            renderer,
            PerformanceMonitor::new(),
            &self.config,
            logical_surface(size, scale_factor),
            Some(scale_factor),
        ))
        .context("scene setup failed")?;

        self.composer = Some(composer);
        Ok(())
    }

    fn resize(&mut self, size: PhysicalSize<u32>) {
        let (Some(window), Some(composer)) = (self.window.as_ref(), self.composer.as_mut()) else {
            return;
        };
        let scale_factor = window.scale_factor();
        let surface = logical_surface(size, scale_factor);
        if let Err(e) = composer.resize(surface.width, surface.height, Some(scale_factor)) {
            log::warn!("resize ignored: {e}");
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(error) = self.start(event_loop) {
            fail(&mut self.failure, event_loop, error);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let (Some(window), Some(composer)) = (self.window.clone(), self.composer.as_mut()) else {
            return;
        };

        // Parallax follows the pointer even over the panel
        if let WindowEvent::CursorMoved { position, .. } = &event {
            track_pointer(composer, *position, window.scale_factor());
        }

        // Handle UI input first
        if composer
            .renderer_mut()
            .ui_mut()
            .handle_input(&window, window_id, &event)
        {
            window.request_redraw();
            return;
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    winit::event::KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => self.resize(size),
            WindowEvent::ScaleFactorChanged { .. } => self.resize(window.inner_size()),
            WindowEvent::CursorMoved { position, .. } => {
                if let (true, Some(last)) = (self.dragging, self.last_cursor) {
                    if let Some(orbit) = composer.orbit_controls_mut() {
                        orbit.rotate((position.x - last.x) as f32, (position.y - last.y) as f32);
                    }
                }
                self.last_cursor = Some(position);
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => self.dragging = state == ElementState::Pressed,
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / 50.0,
                };
                if let Some(orbit) = composer.orbit_controls_mut() {
                    orbit.zoom(-amount);
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = composer.tick() {
                    fail(
                        &mut self.failure,
                        event_loop,
                        anyhow::Error::from(e).context("render loop stopped"),
                    );
                    return;
                }

                let metrics = composer.stats().get_metrics().clone();
                let renderer = composer.renderer_mut();
                renderer.set_metrics(metrics);
                if let Some(params) = renderer.take_panel_change() {
                    composer.apply_panel(&params);
                }
            }
            _ => (),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
