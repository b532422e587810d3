use std::{
    collections::HashMap,
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::{channel::oneshot, future::try_join_all};

use super::{Asset, AssetKind, AssetLoader, AssetMap, AssetRequest, TextureData};
use crate::{
    error::{Result, SceneError},
    gfx::geometry::{BlockFont, Font, GeometryData},
};

/// Turns the raw bytes of a font file into a [`Font`].
pub trait FontDecoder: Send + Sync {
    fn decode(&self, name: &str, bytes: &[u8]) -> std::result::Result<Arc<dyn Font>, String>;
}

/// Decoder producing [`BlockFont`]s with the default metrics.
///
/// The file has to exist and be non-empty; its outlines are not read.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockFontDecoder;

impl FontDecoder for BlockFontDecoder {
    fn decode(&self, name: &str, bytes: &[u8]) -> std::result::Result<Arc<dyn Font>, String> {
        if bytes.is_empty() {
            return Err("font file is empty".into());
        }
        Ok(Arc::new(BlockFont::new(name)))
    }
}

/// Loads assets from files under a root directory.
///
/// Each request is read and decoded on its own thread, so a batch loads in
/// parallel.
pub struct FileAssetLoader {
    root: PathBuf,
    fonts: Arc<dyn FontDecoder>,
}

impl fmt::Debug for FileAssetLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileAssetLoader")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl FileAssetLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            fonts: Arc::new(BlockFontDecoder),
        }
    }

    pub fn with_font_decoder(mut self, decoder: impl FontDecoder + 'static) -> Self {
        self.fonts = Arc::new(decoder);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn load_one(&self, request: &AssetRequest) -> Result<(String, Asset)> {
        let (sender, receiver) = oneshot::channel();
        let root = self.root.clone();
        let fonts = Arc::clone(&self.fonts);
        let job = request.clone();
        let unavailable = |reason: String| SceneError::AssetUnavailable {
            name: request.name.clone(),
            reason,
        };

        std::thread::Builder::new()
            .name(format!("asset-{}", request.name))
            .spawn(move || {
                let _ = sender.send(read_asset(&root, fonts.as_ref(), &job));
            })
            .map_err(|e| unavailable(format!("failed to start loader thread: {e}")))?;

        receiver
            .await
            .map_err(|_| unavailable("loader thread stopped".into()))?
    }
}

fn read_asset(root: &Path, fonts: &dyn FontDecoder, request: &AssetRequest) -> Result<(String, Asset)> {
    let path = root.join(&request.locator);
    log::debug!("loading {} `{}` from {}", request.kind, request.name, path.display());

    let unavailable = |reason: String| SceneError::AssetUnavailable {
        name: request.name.clone(),
        reason,
    };

    let asset = match request.kind {
        AssetKind::Texture => {
            let bytes =
                std::fs::read(&path).map_err(|e| unavailable(format!("{}: {e}", path.display())))?;
            Asset::Texture(TextureData {
                bytes,
                locator: request.locator.clone(),
            })
        }
        AssetKind::Font => {
            let bytes =
                std::fs::read(&path).map_err(|e| unavailable(format!("{}: {e}", path.display())))?;
            let font = fonts.decode(&request.name, &bytes).map_err(unavailable)?;
            Asset::Font(font)
        }
        AssetKind::Model => Asset::Geometry(load_obj(&path).map_err(unavailable)?),
    };

    Ok((request.name.clone(), asset))
}

impl AssetLoader for FileAssetLoader {
    async fn load(&self, requests: &[AssetRequest]) -> Result<AssetMap> {
        let loaded = try_join_all(requests.iter().map(|request| self.load_one(request))).await?;
        log::info!("loaded {} assets from {}", loaded.len(), self.root.display());
        Ok(loaded.into_iter().collect())
    }
}

/// Reads every model of an OBJ file into one mesh.
fn load_obj(path: &Path) -> std::result::Result<GeometryData, String> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|e| format!("{}: {e}", path.display()))?;

    let mut geometry = GeometryData::new();
    let mut missing_normals = false;

    for model in &models {
        let mesh = &model.mesh;
        let part = GeometryData {
            vertices: mesh.positions.chunks_exact(3).map(|p| [p[0], p[1], p[2]]).collect(),
            normals: mesh.normals.chunks_exact(3).map(|n| [n[0], n[1], n[2]]).collect(),
            tex_coords: mesh.texcoords.chunks_exact(2).map(|t| [t[0], t[1]]).collect(),
            indices: mesh.indices.clone(),
        };
        missing_normals |= part.normals.len() != part.vertices.len();
        geometry.merge(&part);
    }

    if geometry.is_empty() {
        return Err(format!("{}: no geometry", path.display()));
    }
    if missing_normals {
        geometry.compute_vertex_normals();
    }

    Ok(geometry)
}

/// In-memory loader for tests and embedded assets.
#[derive(Debug, Clone, Default)]
pub struct StaticAssetLoader {
    assets: HashMap<String, Asset>,
}

impl StaticAssetLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, asset: Asset) -> Self {
        self.assets.insert(name.into(), asset);
        self
    }
}

impl AssetLoader for StaticAssetLoader {
    async fn load(&self, requests: &[AssetRequest]) -> Result<AssetMap> {
        requests
            .iter()
            .map(|request| {
                let asset = self
                    .assets
                    .get(&request.name)
                    .ok_or_else(|| SceneError::AssetUnavailable {
                        name: request.name.clone(),
                        reason: "not registered".into(),
                    })?;
                if asset.kind() != request.kind {
                    return Err(SceneError::AssetUnavailable {
                        name: request.name.clone(),
                        reason: format!("registered as {}, requested as {}", asset.kind(), request.kind),
                    });
                }
                Ok((request.name.clone(), asset.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::fs;

    struct TempDir(PathBuf);

    impl TempDir {
        fn new(label: &str) -> Self {
            let path = std::env::temp_dir().join(format!(
                "floating-shapes-{label}-{}",
                std::process::id()
            ));
            fs::create_dir_all(&path).unwrap();
            Self(path)
        }
    }

    impl Drop for TempDir {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    const TRIANGLE_OBJ: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

    #[test]
    fn file_loader_reads_every_kind() {
        let dir = TempDir::new("all-kinds");
        fs::create_dir_all(dir.0.join("img")).unwrap();
        fs::create_dir_all(dir.0.join("font")).unwrap();
        fs::write(dir.0.join("img/matcap.png"), [0x89, b'P', b'N', b'G']).unwrap();
        fs::write(dir.0.join("font/roboto.json"), "{\"glyphs\":{}}").unwrap();
        fs::write(dir.0.join("tri.obj"), TRIANGLE_OBJ).unwrap();

        let loader = FileAssetLoader::new(&dir.0);
        let requests = [
            AssetRequest::texture("matcap", "./img/matcap.png"),
            AssetRequest::font("roboto", "./font/roboto.json"),
            AssetRequest::model("tri", "tri.obj"),
        ];
        let assets = block_on(loader.load(&requests)).unwrap();

        assert_eq!(assets.len(), 3);
        assert_eq!(assets.texture("matcap").unwrap().bytes.len(), 4);
        assert_eq!(assets.font("roboto").unwrap().name(), "roboto");

        let tri = assets.geometry("tri").unwrap();
        assert_eq!(tri.triangle_count(), 1);
        assert_eq!(tri.normals.len(), 3);
        for normal in &tri.normals {
            assert!((normal[2] - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn one_missing_file_fails_the_whole_load() {
        let dir = TempDir::new("missing");
        fs::write(dir.0.join("tri.obj"), TRIANGLE_OBJ).unwrap();

        let loader = FileAssetLoader::new(&dir.0);
        let requests = [
            AssetRequest::model("tri", "tri.obj"),
            AssetRequest::texture("matcap", "img/matcap.png"),
        ];

        match block_on(loader.load(&requests)) {
            Err(SceneError::AssetUnavailable { name, .. }) => assert_eq!(name, "matcap"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn custom_font_decoder_is_used() {
        struct Wide;
        impl FontDecoder for Wide {
            fn decode(&self, name: &str, _: &[u8]) -> std::result::Result<Arc<dyn Font>, String> {
                let mut font = BlockFont::new(format!("wide-{name}"));
                font.advance = 1.0;
                Ok(Arc::new(font))
            }
        }

        let dir = TempDir::new("decoder");
        fs::write(dir.0.join("f.json"), "{}").unwrap();
        let loader = FileAssetLoader::new(&dir.0).with_font_decoder(Wide);

        let assets = block_on(loader.load(&[AssetRequest::font("f", "f.json")])).unwrap();
        assert_eq!(assets.font("f").unwrap().name(), "wide-f");
    }

    #[test]
    fn each_request_is_read_off_the_calling_thread() {
        use std::sync::Mutex;

        #[derive(Default)]
        struct ThreadNames(Mutex<Vec<String>>);
        impl FontDecoder for Arc<ThreadNames> {
            fn decode(&self, name: &str, _: &[u8]) -> std::result::Result<Arc<dyn Font>, String> {
                let thread = std::thread::current().name().unwrap_or_default().to_string();
                self.0.lock().unwrap().push(thread);
                Ok(Arc::new(BlockFont::new(name)))
            }
        }

        let dir = TempDir::new("threads");
        fs::write(dir.0.join("a.json"), "{}").unwrap();
        fs::write(dir.0.join("b.json"), "{}").unwrap();
        let names = Arc::new(ThreadNames::default());
        let loader = FileAssetLoader::new(&dir.0).with_font_decoder(Arc::clone(&names));

        let requests = [AssetRequest::font("a", "a.json"), AssetRequest::font("b", "b.json")];
        let assets = block_on(loader.load(&requests)).unwrap();
        assert_eq!(assets.len(), 2);

        let mut seen = names.0.lock().unwrap().clone();
        seen.sort();
        assert_eq!(seen, ["asset-a", "asset-b"]);
    }

    #[test]
    fn static_loader_rejects_unknown_and_mismatched_requests() {
        let loader = StaticAssetLoader::new()
            .with("font", Asset::Font(Arc::new(BlockFont::default())));

        assert!(block_on(loader.load(&[AssetRequest::font("font", "x")])).is_ok());
        assert!(block_on(loader.load(&[AssetRequest::texture("font", "x")])).is_err());
        assert!(block_on(loader.load(&[AssetRequest::font("other", "x")])).is_err());
    }
}
