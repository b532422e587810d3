//! Easing curves mapping normalized progress `p` in `[0, 1]` to eased progress.

/// Easing curve applied to tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    QuadOut,
    CubicOut,
    /// Exponential ease-out: `1 - 2^(-10p)`, landing exactly on 1 at `p = 1`.
    #[default]
    ExpoOut,
}

impl Easing {
    /// Applies the curve. Input is clamped to `[0, 1]`.
    pub fn apply(self, p: f32) -> f32 {
        let p = p.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::QuadOut => 1.0 - (1.0 - p) * (1.0 - p),
            Easing::CubicOut => 1.0 - (1.0 - p).powi(3),
            Easing::ExpoOut => {
                if p >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * p)
                }
            }
        }
    }
}
