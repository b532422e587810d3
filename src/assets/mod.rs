//! # Asset Loading
//!
//! Scene setup waits on an [`AssetLoader`] for everything it needs before it
//! builds a single node. A load either yields every requested asset or fails
//! as a whole.
//!
//! - [`FileAssetLoader`] - Reads assets from a directory, one thread per request
//! - [`StaticAssetLoader`] - Serves preloaded assets from memory
//!
//! ## Usage
//!
//! ```rust
//! use floating_shapes::assets::{Asset, AssetKind, AssetLoader, AssetRequest, StaticAssetLoader};
//! use floating_shapes::gfx::geometry::generate_cube;
//!
//! let loader = StaticAssetLoader::new().with("crate", Asset::Geometry(generate_cube()));
//! let requests = [AssetRequest::new("crate", "./models/crate.obj", AssetKind::Model)];
//!
//! let assets = futures::executor::block_on(loader.load(&requests)).unwrap();
//! assert_eq!(assets.geometry("crate").unwrap().vertex_count(), 24);
//! ```

pub mod loader;

pub use loader::{BlockFontDecoder, FileAssetLoader, FontDecoder, StaticAssetLoader};

use std::{collections::HashMap, fmt, path::PathBuf, sync::Arc};

use crate::{
    error::{Result, SceneError},
    gfx::geometry::{Font, GeometryData},
};

/// What a request expects the locator to point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Texture,
    Font,
    Model,
}

impl AssetKind {
    pub fn label(self) -> &'static str {
        match self {
            AssetKind::Texture => "texture",
            AssetKind::Font => "font",
            AssetKind::Model => "model",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One named entry of a load.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRequest {
    pub name: String,
    /// Path relative to the loader root
    pub locator: PathBuf,
    pub kind: AssetKind,
}

impl AssetRequest {
    pub fn new(name: impl Into<String>, locator: impl Into<PathBuf>, kind: AssetKind) -> Self {
        Self {
            name: name.into(),
            locator: locator.into(),
            kind,
        }
    }

    pub fn texture(name: impl Into<String>, locator: impl Into<PathBuf>) -> Self {
        Self::new(name, locator, AssetKind::Texture)
    }

    pub fn font(name: impl Into<String>, locator: impl Into<PathBuf>) -> Self {
        Self::new(name, locator, AssetKind::Font)
    }

    pub fn model(name: impl Into<String>, locator: impl Into<PathBuf>) -> Self {
        Self::new(name, locator, AssetKind::Model)
    }
}

/// Encoded image data. Decoding is left to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureData {
    pub bytes: Vec<u8>,
    pub locator: PathBuf,
}

#[derive(Debug, Clone)]
pub enum Asset {
    Texture(TextureData),
    Font(Arc<dyn Font>),
    Geometry(GeometryData),
}

impl Asset {
    pub fn kind(&self) -> AssetKind {
        match self {
            Asset::Texture(_) => AssetKind::Texture,
            Asset::Font(_) => AssetKind::Font,
            Asset::Geometry(_) => AssetKind::Model,
        }
    }
}

/// Result of a completed load, keyed by request name.
#[derive(Debug, Clone, Default)]
pub struct AssetMap {
    assets: HashMap<String, Asset>,
}

impl AssetMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, asset: Asset) {
        self.assets.insert(name.into(), asset);
    }

    pub fn get(&self, name: &str) -> Option<&Asset> {
        self.assets.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.assets.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn texture(&self, name: &str) -> Result<&TextureData> {
        match self.lookup(name)? {
            Asset::Texture(texture) => Ok(texture),
            _ => Err(wrong_kind(name, AssetKind::Texture)),
        }
    }

    pub fn font(&self, name: &str) -> Result<Arc<dyn Font>> {
        match self.lookup(name)? {
            Asset::Font(font) => Ok(Arc::clone(font)),
            _ => Err(wrong_kind(name, AssetKind::Font)),
        }
    }

    pub fn geometry(&self, name: &str) -> Result<&GeometryData> {
        match self.lookup(name)? {
            Asset::Geometry(geometry) => Ok(geometry),
            _ => Err(wrong_kind(name, AssetKind::Model)),
        }
    }

    fn lookup(&self, name: &str) -> Result<&Asset> {
        self.assets.get(name).ok_or_else(|| SceneError::MissingAsset {
            name: name.to_string(),
        })
    }
}

impl FromIterator<(String, Asset)> for AssetMap {
    fn from_iter<I: IntoIterator<Item = (String, Asset)>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().collect(),
        }
    }
}

fn wrong_kind(name: &str, expected: AssetKind) -> SceneError {
    SceneError::WrongAssetKind {
        name: name.to_string(),
        expected: expected.label(),
    }
}

/// Asynchronous source of scene assets.
#[allow(async_fn_in_trait)]
pub trait AssetLoader {
    /// Loads every request. Any single failure fails the whole load.
    async fn load(&self, requests: &[AssetRequest]) -> Result<AssetMap>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::{generate_cube, BlockFont};

    fn map() -> AssetMap {
        let mut map = AssetMap::new();
        map.insert("cube", Asset::Geometry(generate_cube()));
        map.insert("font", Asset::Font(Arc::new(BlockFont::new("roboto"))));
        map
    }

    #[test]
    fn typed_access_returns_the_stored_asset() {
        let map = map();
        assert_eq!(map.geometry("cube").unwrap().triangle_count(), 12);
        assert_eq!(map.font("font").unwrap().name(), "roboto");
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn absent_asset_is_reported_by_name() {
        match map().texture("matcap") {
            Err(SceneError::MissingAsset { name }) => assert_eq!(name, "matcap"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn kind_mismatch_is_reported() {
        match map().texture("cube") {
            Err(SceneError::WrongAssetKind { name, expected }) => {
                assert_eq!(name, "cube");
                assert_eq!(expected, "texture");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
