//! Texture providers
//!
//! The simulation only needs a texture's id and native size, so neither
//! provider keeps pixel data around. [`ImageTextureProvider`] reads the size
//! from image file headers; [`StaticTextures`] serves sizes from a table.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use engine2d::assets::{AssetError, TextureHandle, TextureId, TextureProvider};
use slotmap::SlotMap;

/// Image file extensions tried when a name has none
const EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Texture provider backed by image files on disk
///
/// Names are resolved against each search path in order, trying the name
/// as given and then with each known extension. Resolved textures are
/// cached by name.
#[derive(Debug, Default)]
pub struct ImageTextureProvider {
    search_paths: Vec<PathBuf>,
    sources: SlotMap<TextureId, PathBuf>,
    cache: HashMap<String, TextureHandle>,
}

impl ImageTextureProvider {
    /// Create a provider searching the given directories
    pub fn new<I, P>(search_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            search_paths: search_paths.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// File a loaded texture was read from
    pub fn source(&self, id: TextureId) -> Option<&Path> {
        self.sources.get(id).map(PathBuf::as_path)
    }

    /// Number of distinct textures loaded
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check whether nothing has been loaded yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    fn resolve(&self, name: &str) -> Option<PathBuf> {
        for dir in &self.search_paths {
            let direct = dir.join(name);
            if direct.is_file() {
                return Some(direct);
            }

            for ext in EXTENSIONS {
                let candidate = dir.join(format!("{name}.{ext}"));
                if candidate.is_file() {
                    return Some(candidate);
                }
            }
        }
        None
    }
}

impl TextureProvider for ImageTextureProvider {
    fn load_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError> {
        if let Some(handle) = self.cache.get(name) {
            return Ok(*handle);
        }

        let path = self
            .resolve(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))?;

        log::debug!("Loading texture '{}' from {:?}", name, path);
        let (width, height) = image::image_dimensions(&path)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to read {}: {}", path.display(), e)))?;

        let id = self.sources.insert(path);
        let handle = TextureHandle::new(id, width, height);
        self.cache.insert(name.to_string(), handle);

        log::info!("Loaded texture '{}' ({}x{})", name, width, height);
        Ok(handle)
    }
}

/// Texture provider serving sizes from an in-memory table
#[derive(Debug, Default)]
pub struct StaticTextures {
    sizes: HashMap<String, (u32, u32)>,
    ids: SlotMap<TextureId, ()>,
    cache: HashMap<String, TextureHandle>,
}

impl StaticTextures {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: Add a texture size
    pub fn with(mut self, name: impl Into<String>, width: u32, height: u32) -> Self {
        self.insert(name, width, height);
        self
    }

    /// Add or replace a texture size
    pub fn insert(&mut self, name: impl Into<String>, width: u32, height: u32) {
        let name = name.into();
        self.cache.remove(&name);
        self.sizes.insert(name, (width, height));
    }
}

impl<S: Into<String>> FromIterator<(S, [u32; 2])> for StaticTextures {
    fn from_iter<T: IntoIterator<Item = (S, [u32; 2])>>(iter: T) -> Self {
        let mut textures = Self::new();
        for (name, [width, height]) in iter {
            textures.insert(name, width, height);
        }
        textures
    }
}

impl TextureProvider for StaticTextures {
    fn load_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError> {
        if let Some(handle) = self.cache.get(name) {
            return Ok(*handle);
        }

        let &(width, height) = self
            .sizes
            .get(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))?;

        let handle = TextureHandle::new(self.ids.insert(()), width, height);
        self.cache.insert(name.to_string(), handle);
        Ok(handle)
    }
}
