//! Lighten layer: brightens every visible pixel.

use image::RgbaImage;

use super::{LayerEffect, RenderContext};

/// Adds a fixed amount to the color channels of every non-transparent pixel.
///
/// Channels saturate at 255. Alpha is never changed, and pixels with zero
/// alpha are skipped entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lighten {
    pub amount: u8,
}

impl Lighten {
    /// Brightening applied to `lightfg` icons.
    pub const LIGHT_FOREGROUND: Lighten = Lighten { amount: 128 };

    pub fn new(amount: u8) -> Self {
        Self { amount }
    }
}

impl Default for Lighten {
    fn default() -> Self {
        Self::LIGHT_FOREGROUND
    }
}

impl LayerEffect for Lighten {
    fn transform(&self, ctx: &mut RenderContext<'_>) {
        apply_lighten(&mut ctx.image, self.amount);
    }
}

/// Brightens `image` in place.
pub fn apply_lighten(image: &mut RgbaImage, amount: u8) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        if a == 0 {
            continue;
        }

        pixel.0 = [
            r.saturating_add(amount),
            g.saturating_add(amount),
            b.saturating_add(amount),
            a,
        ];
    }
}
