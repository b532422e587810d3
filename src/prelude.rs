//! # Floating Shapes Prelude
//!
//! Commonly used types in one import.
//!
//! ```rust
//! use floating_shapes::prelude::*;
//!
//! let config = SceneConfig::default().with_orbit_controls(true);
//! assert_eq!(config.shapes.len(), 3);
//! ```

// Application and composer
pub use crate::app::ShowcaseApp;
pub use crate::composer::{FrameClock, SceneComposer};
pub use crate::config::{GeometryKind, IntroConfig, SceneConfig, ShapeConfig, TitleConfig};
pub use crate::default;
pub use crate::error::{RenderError, Result, SceneError};

// Scene building blocks
pub use crate::animation::{Easing, Tween, TweenState};
pub use crate::assets::{Asset, AssetKind, AssetLoader, AssetMap, AssetRequest, FileAssetLoader, StaticAssetLoader};
pub use crate::gfx::camera::{OrbitControls, PerspectiveCamera};
pub use crate::gfx::geometry::{BlockFont, Font, GeometryData, TextStyle};
pub use crate::gfx::rendering::{HeadlessRenderer, RenderEngine, SceneRenderer};
pub use crate::gfx::scene::{Color, Material, NodeId, Scene, Transform};
pub use crate::input::{InputTracker, PointerOffset};
pub use crate::shape::{Shape, ShapeDescriptor};
pub use crate::viewport::{sync_viewport, SurfaceSize};

// Stats and panel
pub use crate::performance::{FrameStats, PerformanceMetrics, PerformanceMonitor};
pub use crate::ui::PanelParams;

// Re-export common external dependencies
pub use cgmath::{Point3, Vector3};
