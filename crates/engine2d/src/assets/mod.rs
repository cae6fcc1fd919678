//! Asset interface
//!
//! The core never decodes images. Entities only need a texture's native size
//! to size their transform, so the host hands out opaque [`TextureHandle`]s
//! through a [`TextureProvider`].

use thiserror::Error;

slotmap::new_key_type! {
    /// Opaque texture identifier assigned by the host
    pub struct TextureId;
}

/// Opaque texture reference plus its native dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle {
    id: TextureId,
    width: u32,
    height: u32,
}

impl TextureHandle {
    /// Create a handle (called by texture providers)
    pub const fn new(id: TextureId, width: u32, height: u32) -> Self {
        Self { id, width, height }
    }

    /// Host-assigned identifier
    pub const fn id(&self) -> TextureId {
        self.id
    }

    /// Native width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Native height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Native size as a vector
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> crate::foundation::math::Vec2 {
        crate::foundation::math::Vec2::new(self.width as f32, self.height as f32)
    }
}

/// Texture source consumed by scenes while loading
pub trait TextureProvider {
    /// Load (or fetch a cached) texture by asset name
    fn load_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError>;
}

/// Asset loading errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Failed to load asset
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// IO error during asset loading
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
