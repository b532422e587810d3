//! Scene configuration
//!
//! [`SceneConfig::default`] describes the hand-placed showcase scene. The
//! `with_*` methods cover the usual overrides.

use cgmath::{Point3, Vector3};

use crate::{
    animation::Easing,
    assets::AssetRequest,
    gfx::{geometry::TextStyle, scene::Color},
};

/// Name of the matcap texture every shape material samples.
pub const MATCAP_ASSET: &str = "matcap";
/// Name of the font used for the title.
pub const TITLE_FONT_ASSET: &str = "roboto-font";

#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Point3<f32>,
    pub target: Point3<f32>,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 60.0,
            near: 0.1,
            far: 10000.0,
            position: Point3::new(0.0, 0.0, 10.0),
            target: Point3::new(0.0, 0.0, 0.0),
        }
    }
}

/// Mesh source of a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryKind {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Icosahedron {
        radius: f32,
        detail: u32,
    },
    /// Geometry loaded as the named model asset
    Model { asset: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShapeConfig {
    pub geometry: GeometryKind,
    pub position: Vector3<f32>,
    /// Oscillation speed in radians per millisecond; `None` uses the default
    pub speed: Option<f64>,
    /// Oscillation phase; `None` uses 0
    pub offset: Option<f64>,
}

impl ShapeConfig {
    pub fn new(geometry: GeometryKind, position: Vector3<f32>) -> Self {
        Self {
            geometry,
            position,
            speed: None,
            offset: None,
        }
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TitleConfig {
    pub text: String,
    pub style: TextStyle,
    pub color: Color,
    pub intro_duration: f32,
    pub intro_easing: Easing,
    /// Scale the title grows from
    pub intro_from: Vector3<f32>,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            text: "Welcome to my website!".into(),
            style: TextStyle {
                size: 0.8,
                depth: 0.1,
            },
            color: Color::from_hex(0xf8c291),
            intro_duration: 2.0,
            intro_easing: Easing::ExpoOut,
            intro_from: Vector3::new(1.0, 0.0, 0.0),
        }
    }
}

/// Staggered scale-in of the shapes.
///
/// Shape `i` starts after `base_delay + i * stagger` seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntroConfig {
    pub duration: f32,
    pub base_delay: f32,
    pub stagger: f32,
    pub easing: Easing,
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            duration: 2.0,
            base_delay: 0.2,
            stagger: 0.1,
            easing: Easing::ExpoOut,
        }
    }
}

impl IntroConfig {
    pub fn delay_for(&self, index: usize) -> f32 {
        self.base_delay + index as f32 * self.stagger
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub background: Color,
    /// Axes helper bar length, `None` hides the helper
    pub axes_helper: Option<f32>,
    /// Container rotation in degrees at a pointer offset of 1
    pub parallax_degrees: f32,
    /// Y rotation added to every shape per frame, in radians
    pub spin_per_frame: f64,
    pub assets: Vec<AssetRequest>,
    pub shapes: Vec<ShapeConfig>,
    pub title: Option<TitleConfig>,
    pub orbit_controls: bool,
    pub intro: IntroConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            background: Color::from_hex(0xffffff),
            axes_helper: Some(3.0),
            parallax_degrees: 10.0,
            spin_per_frame: 0.01,
            assets: vec![
                AssetRequest::texture(MATCAP_ASSET, "./img/matcap.png"),
                AssetRequest::font(TITLE_FONT_ASSET, "./font/Roboto_Regular.json"),
            ],
            shapes: vec![
                ShapeConfig::new(
                    GeometryKind::Sphere {
                        radius: 1.0,
                        width_segments: 32,
                        height_segments: 32,
                    },
                    Vector3::new(6.0, 2.0, -2.0),
                ),
                ShapeConfig::new(
                    GeometryKind::Torus {
                        radius: 2.0,
                        tube: 0.5,
                        radial_segments: 16,
                        tubular_segments: 100,
                    },
                    Vector3::new(-6.0, -1.0, -4.0),
                )
                .with_speed(0.002)
                .with_offset(5.0),
                ShapeConfig::new(
                    GeometryKind::Icosahedron {
                        radius: 0.8,
                        detail: 0,
                    },
                    Vector3::new(-1.0, 0.0, 4.0),
                )
                .with_speed(0.001)
                .with_offset(10.0),
            ],
            title: Some(TitleConfig::default()),
            orbit_controls: false,
            intro: IntroConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn with_shapes(mut self, shapes: Vec<ShapeConfig>) -> Self {
        self.shapes = shapes;
        self
    }

    pub fn with_title(mut self, title: Option<TitleConfig>) -> Self {
        self.title = title;
        self
    }

    pub fn with_orbit_controls(mut self, enabled: bool) -> Self {
        self.orbit_controls = enabled;
        self
    }

    pub fn with_axes_helper(mut self, size: Option<f32>) -> Self {
        self.axes_helper = size;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_assets(mut self, assets: Vec<AssetRequest>) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_camera(mut self, camera: CameraConfig) -> Self {
        self.camera = camera;
        self
    }
}
