//! Shared fakes for unit tests

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::assets::{AssetError, TextureHandle, TextureId, TextureProvider};
use crate::foundation::math::Mat4;
use crate::render::{Color, Renderer, SpriteDraw};

/// Make a texture handle of the given size
pub fn texture(width: u32, height: u32) -> TextureHandle {
    let mut ids: SlotMap<TextureId, ()> = SlotMap::with_key();
    TextureHandle::new(ids.insert(()), width, height)
}

/// Texture provider backed by a fixed name → size table
#[derive(Default)]
pub struct FakeTextures {
    ids: SlotMap<TextureId, ()>,
    sizes: HashMap<String, (u32, u32)>,
}

impl FakeTextures {
    pub fn with(mut self, name: &str, width: u32, height: u32) -> Self {
        self.sizes.insert(name.to_string(), (width, height));
        self
    }
}

impl TextureProvider for FakeTextures {
    fn load_texture(&mut self, name: &str) -> Result<TextureHandle, AssetError> {
        let &(width, height) = self
            .sizes
            .get(name)
            .ok_or_else(|| AssetError::NotFound(name.to_string()))?;
        Ok(TextureHandle::new(self.ids.insert(()), width, height))
    }
}

/// Renderer that records every call
#[derive(Default)]
pub struct RecordingRenderer {
    pub clears: Vec<Color>,
    pub begins: Vec<Option<Mat4>>,
    pub draws: Vec<SpriteDraw>,
    pub ends: usize,
}

impl Renderer for RecordingRenderer {
    fn clear(&mut self, color: Color) {
        self.clears.push(color);
    }

    fn begin(&mut self, view: Option<Mat4>) {
        self.begins.push(view);
    }

    fn draw(&mut self, sprite: &SpriteDraw) {
        self.draws.push(*sprite);
    }

    fn end(&mut self) {
        self.ends += 1;
    }
}
