//! Draw-order layers

use serde::{Serialize, Deserialize};

/// Layer controlling draw order
///
/// Lower layers are drawn first, so later layers render on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum RenderLayer {
    /// Backdrops and terrain
    Background = 0,
    /// Gameplay objects
    #[default]
    World = 1,
    /// Objects drawn over the world (foliage, roofs)
    Foreground = 2,
    /// Screen-space overlays
    Overlay = 3,
}
