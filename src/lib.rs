//! sprite-icons: toolbar icon generator
//!
//! This crate builds a fixed family of small status icons by copying glyph
//! sprites out of two sprite sheets (16px and 32px) onto transparent
//! canvases. An icon is selected by a [`Pattern`] of up to three glyphs and a
//! [`ColorVariant`]; `lightfg` icons have their visible pixels brightened.
//!
//! # Example
//!
//! ```no_run
//! use sprite_icons::{GenerateOptions, generate};
//!
//! // Reads sprites16.png / sprites32.png and writes all 48 icons.
//! let written = generate(&GenerateOptions::new("sprites", "generated_icons"))?;
//! assert_eq!(written.len(), 48);
//! # Ok::<(), sprite_icons::Error>(())
//! ```
//!
//! Single icons can be rendered without touching the filesystem:
//!
//! ```no_run
//! use sprite_icons::{ColorVariant, IconCompositor, Pattern, SizeClass, SpriteSheets};
//!
//! let compositor = IconCompositor::new(SpriteSheets::load("sprites")?);
//! let icon = compositor.build_icon(&"46".parse::<Pattern>()?, SizeClass::Px32, ColorVariant::DarkFg);
//! assert_eq!(icon.dimensions(), (32, 32));
//! # Ok::<(), sprite_icons::Error>(())
//! ```

mod compositor;
mod error;
mod icon;
mod layer;
mod sheet;

pub use compositor::{GenerateOptions, IconCompositor, generate};
pub use error::{Error, Result};
pub use icon::{ColorVariant, Glyph, IconSpec, Pattern, PointPx, RectPx, SizeClass, Suffix};
pub use layer::{
    GlyphLayer, Layer, LayerEffect, Lighten, RenderContext, apply_lighten, draw_region, render,
};
pub use sheet::{Slot, SpriteSheet, SpriteSheets, big_region, small_region};
