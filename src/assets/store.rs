use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use image::RgbaImage;

use crate::{
    assets::decode::decode_png,
    foundation::error::{CardError, CardResult},
};

/// Key used by the frame category regardless of member data.
pub const FRAME_KEY: &str = "default";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Asset categories, each mapped to one subdirectory of the assets root.
pub enum AssetCategory {
    /// Per-member portrait, keyed by member id.
    Avatar,
    /// Club icon, keyed by club identifier.
    Club,
    /// Grade badge, keyed by the decimal form of the grade. Establishes
    /// the card canvas bounds.
    Grade,
    /// Special icon, keyed by special identifier.
    Special,
    /// Background frame. Always resolves [`FRAME_KEY`].
    Frame,
}

impl AssetCategory {
    /// Subdirectory name under the assets root.
    pub fn dir(self) -> &'static str {
        match self {
            AssetCategory::Avatar => "avatars",
            AssetCategory::Club => "clubs",
            AssetCategory::Grade => "grades",
            AssetCategory::Special => "icons",
            AssetCategory::Frame => "frame",
        }
    }
}

impl std::fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir())
    }
}

/// Filesystem-backed resolver from `(category, key)` to a decoded image.
///
/// Decoded images are cached for the life of the store, so frame and grade
/// assets shared across the roster are read and decoded once per run.
#[derive(Debug, Default)]
pub struct AssetStore {
    root: PathBuf,
    cache: HashMap<(AssetCategory, String), Arc<RgbaImage>>,
    decode_counts: HashMap<(AssetCategory, String), u32>,
}

impl AssetStore {
    /// Create a store resolving assets under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
            decode_counts: HashMap::new(),
        }
    }

    /// Root directory used when resolving asset paths.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path an asset would be read from, without touching the filesystem.
    pub fn asset_path(&self, category: AssetCategory, key: &str) -> PathBuf {
        self.root.join(category.dir()).join(format!("{key}.png"))
    }

    /// Resolve and decode one asset, reusing the cache when possible.
    ///
    /// A missing file is [`CardError::AssetNotFound`]; undecodable bytes
    /// are [`CardError::AssetDecode`]. Neither ever yields an empty image.
    pub fn load(&mut self, category: AssetCategory, key: &str) -> CardResult<Arc<RgbaImage>> {
        let cache_key = (category, key.to_string());
        if let Some(img) = self.cache.get(&cache_key) {
            return Ok(Arc::clone(img));
        }

        let path = self.asset_path(category, key);
        let bytes = std::fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CardError::asset_not_found(path.display().to_string())
            } else {
                CardError::asset_decode(path.display().to_string(), e.to_string())
            }
        })?;
        let img = decode_png(&bytes)
            .map_err(|e| CardError::asset_decode(path.display().to_string(), e.to_string()))?;

        *self.decode_counts.entry(cache_key.clone()).or_insert(0) += 1;
        let img = Arc::new(img);
        self.cache.insert(cache_key, Arc::clone(&img));
        Ok(img)
    }

    /// Resolve the background frame asset.
    pub fn frame(&mut self) -> CardResult<Arc<RgbaImage>> {
        self.load(AssetCategory::Frame, FRAME_KEY)
    }

    /// Resolve the badge asset for an integer grade.
    pub fn grade(&mut self, grade: u32) -> CardResult<Arc<RgbaImage>> {
        self.load(AssetCategory::Grade, &grade.to_string())
    }

    /// Number of times `(category, key)` has been decoded from disk.
    pub fn decode_count(&self, category: AssetCategory, key: &str) -> u32 {
        self.decode_counts
            .get(&(category, key.to_string()))
            .copied()
            .unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
