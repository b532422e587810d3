//! Text meshes
//!
//! A [`Font`] turns a string into extruded [`GeometryData`] laid out along +X
//! from the origin, baseline at y = 0. Glyph outline decoding belongs to the
//! font implementation; the scene only needs the resulting geometry and its
//! bounding box for centering.

use cgmath::Vector3;

use super::{generate_box, GeometryData};

/// Layout parameters for a text mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Glyph height in world units
    pub size: f32,
    /// Extrusion depth along +Z
    pub depth: f32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 0.8,
            depth: 0.1,
        }
    }
}

/// Source of text geometry.
pub trait Font: Send + Sync + std::fmt::Debug {
    fn name(&self) -> &str;

    /// Lays `text` out into a single mesh.
    fn text_geometry(&self, text: &str, style: &TextStyle) -> GeometryData;
}

/// Monospace font drawing every visible glyph as a solid block.
///
/// Used when no outline font decoder is configured; keeps text layout and
/// centering behaviour identical to a real font with the same metrics.
#[derive(Debug, Clone)]
pub struct BlockFont {
    name: String,
    /// Horizontal advance per glyph, as a fraction of the glyph size
    pub advance: f32,
    /// Block width per glyph, as a fraction of the glyph size
    pub glyph_width: f32,
}

impl BlockFont {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            advance: 0.6,
            glyph_width: 0.5,
        }
    }
}

impl Default for BlockFont {
    fn default() -> Self {
        Self::new("block")
    }
}

impl Font for BlockFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn text_geometry(&self, text: &str, style: &TextStyle) -> GeometryData {
        let mut data = GeometryData::new();
        let advance = self.advance * style.size;
        let width = self.glyph_width * style.size;

        for (column, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let x = column as f32 * advance;
            let glyph = generate_box(
                Vector3::new(x, 0.0, 0.0),
                Vector3::new(x + width, style.size, style.depth),
            );
            data.merge(&glyph);
        }

        data
    }
}
