//! Viewport synchronization
//!
//! Keeps the camera aspect and the renderer's backing buffer in step with
//! the display surface. Run once at startup and again on every resize.

use crate::{
    error::{Result, SceneError},
    gfx::{camera::PerspectiveCamera, rendering::SceneRenderer},
};

/// Surface size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the size, or `InvalidViewport` if either side is zero.
    pub fn validate(self) -> Result<Self> {
        if self.is_empty() {
            return Err(SceneError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }
}

/// Device pixel ratio to use for a reported value.
///
/// Missing or unusable values fall back to 1, and ratios below 1 are raised
/// to 1.
pub fn effective_pixel_ratio(reported: Option<f64>) -> f64 {
    match reported {
        Some(ratio) if ratio.is_finite() && ratio > 0.0 => ratio.max(1.0),
        _ => 1.0,
    }
}

/// Applies `size` and the pixel ratio to `camera` and `renderer`.
///
/// Zero-sized surfaces are rejected without touching either. Calling this
/// twice with the same inputs leaves the same state as calling it once.
pub fn sync_viewport<R: SceneRenderer + ?Sized>(
    camera: &mut PerspectiveCamera,
    renderer: &mut R,
    size: SurfaceSize,
    pixel_ratio: Option<f64>,
) -> Result<f64> {
    let size = size.validate()?;

    let ratio = effective_pixel_ratio(pixel_ratio);
    camera.aspect = size.aspect();
    camera.update_projection_matrix();

    renderer.set_pixel_ratio(ratio);
    renderer.set_size(size.width, size.height);

    log::debug!(
        "viewport {}x{} @{}x, aspect {:.3}",
        size.width,
        size.height,
        ratio,
        camera.aspect
    );
    Ok(ratio)
}
