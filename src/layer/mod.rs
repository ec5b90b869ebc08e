//! Layer infrastructure for icon composition.
//!
//! An icon is rendered by running an ordered list of layers over a blank
//! canvas. Each layer implements [`LayerEffect`] and mutates the image held
//! by the [`RenderContext`] that flows through the list.
//!
//! ```text
//! Blank canvas (size x size, transparent)
//!     │
//!     ▼
//! ┌──────────────┐
//! │  Big glyph   │ ◄── pattern[0]
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │ Small glyphs │ ◄── pattern[1], pattern[2]
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐
//! │   Lighten    │ ◄── lightfg only
//! └──────────────┘
//! ```

pub mod glyph;
pub mod lighten;

pub use glyph::{GlyphLayer, draw_region};
pub use lighten::{Lighten, apply_lighten};

use image::RgbaImage;

use crate::icon::SizeClass;
use crate::sheet::SpriteSheets;

// ============================================================================
// Render Context
// ============================================================================

/// Context that flows through the layer list.
pub struct RenderContext<'a> {
    /// The canvas being assembled.
    pub image: RgbaImage,

    /// Size class of the icon being rendered.
    pub size: SizeClass,

    /// Sprite sheets glyph layers copy from.
    pub sheets: &'a SpriteSheets,
}

impl<'a> RenderContext<'a> {
    /// Creates a context holding a fully transparent `size x size` canvas.
    pub fn new(size: SizeClass, sheets: &'a SpriteSheets) -> Self {
        Self {
            image: RgbaImage::new(size.pixels(), size.pixels()),
            size,
            sheets,
        }
    }

    /// Consumes the context, returning the finished canvas.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

// ============================================================================
// Layer Trait
// ============================================================================

/// A single step of icon composition.
pub trait LayerEffect {
    /// Transform the image in the render context.
    fn transform(&self, ctx: &mut RenderContext<'_>);
}

/// Any layer an icon can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Glyph(GlyphLayer),
    Lighten(Lighten),
}

impl LayerEffect for Layer {
    fn transform(&self, ctx: &mut RenderContext<'_>) {
        match self {
            Layer::Glyph(layer) => layer.transform(ctx),
            Layer::Lighten(layer) => layer.transform(ctx),
        }
    }
}

impl From<GlyphLayer> for Layer {
    fn from(layer: GlyphLayer) -> Self {
        Layer::Glyph(layer)
    }
}

impl From<Lighten> for Layer {
    fn from(layer: Lighten) -> Self {
        Layer::Lighten(layer)
    }
}

/// Runs `layers` in order over a blank canvas and returns the result.
pub fn render(layers: &[Layer], size: SizeClass, sheets: &SpriteSheets) -> RgbaImage {
    let mut ctx = RenderContext::new(size, sheets);
    for layer in layers {
        layer.transform(&mut ctx);
    }
    ctx.into_image()
}
