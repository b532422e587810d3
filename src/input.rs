//! Pointer tracking for the parallax effect

use crate::viewport::SurfaceSize;

/// Pointer position relative to the surface centre.
///
/// `(0, 0)` is the centre, `(-1, 1)` the top-left corner and `(1, -1)` the
/// bottom-right corner. Positions outside the surface map outside `[-1, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Keeps the latest normalized pointer sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputTracker {
    latest: PointerOffset,
    samples: u64,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a pointer position in surface pixels and stores it as the
    /// latest sample. Ignored while the surface has no area.
    pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, surface: SurfaceSize) {
        if surface.width == 0 || surface.height == 0 {
            log::warn!("pointer move ignored on an empty surface");
            return;
        }

        self.latest = PointerOffset {
            x: (client_x / surface.width as f64 * 2.0 - 1.0) as f32,
            y: (-(client_y / surface.height as f64) * 2.0 + 1.0) as f32,
        };
        self.samples += 1;
    }

    /// Overwrites the latest sample with an already normalized offset.
    pub fn set_offset(&mut self, offset: PointerOffset) {
        self.latest = offset;
        self.samples += 1;
    }

    pub fn offset(&self) -> PointerOffset {
        self.latest
    }

    /// Number of samples recorded so far.
    pub fn sample_count(&self) -> u64 {
        self.samples
    }
}
