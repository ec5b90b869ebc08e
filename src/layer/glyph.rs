//! Glyph layer: copies a sprite from a sheet onto the canvas.

use image::RgbaImage;
use image::imageops;

use super::{LayerEffect, RenderContext};
use crate::icon::{Glyph, SizeClass};
use crate::sheet::{Slot, SpriteSheets};

/// Draws one glyph's sprite into one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphLayer {
    pub slot: Slot,
    pub glyph: Glyph,
}

impl GlyphLayer {
    /// Creates a glyph layer.
    ///
    /// Returns `None` if the slot's sprite table has no entry for `glyph`.
    pub fn new(slot: Slot, glyph: Glyph) -> Option<Self> {
        let has_sprite = match slot {
            Slot::Big => true,
            Slot::FirstSmall | Slot::SecondSmall => glyph.has_small(),
        };
        has_sprite.then_some(Self { slot, glyph })
    }
}

impl LayerEffect for GlyphLayer {
    fn transform(&self, ctx: &mut RenderContext<'_>) {
        draw_region(&mut ctx.image, ctx.sheets, ctx.size, self.slot, self.glyph);
    }
}

/// Crops the sprite for `glyph` out of the sheet for `size` and pastes it onto
/// `canvas` at the slot's target offset.
///
/// Pasting replaces the destination pixels, alpha included. Parts of the
/// sprite that fall outside the canvas are dropped.
pub fn draw_region(
    canvas: &mut RgbaImage,
    sheets: &SpriteSheets,
    size: SizeClass,
    slot: Slot,
    glyph: Glyph,
) {
    let Some(rect) = slot.source(glyph, size) else {
        return;
    };

    let region = sheets.get(size).crop(rect);
    let target = slot.target(size);
    imageops::replace(canvas, &region, i64::from(target.x), i64::from(target.y));
}
