//! Sprite sheets and the fixed sprite layout.
//!
//! Each size class has one sprite sheet. The big glyphs sit side by side at
//! the left of the sheet and the small glyphs are stacked to their right.
//! Where each sprite lives, and where it lands on the output canvas, is
//! fixed by the tables in this module.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use image::imageops;
use tracing::debug;

use crate::error::{Error, Result};
use crate::icon::{Glyph, PointPx, RectPx, SizeClass};

// ============================================================================
// Layout tables
// ============================================================================

/// Location of a glyph's big sprite within the sheet for `size`.
pub fn big_region(glyph: Glyph, size: SizeClass) -> RectPx {
    match (glyph, size) {
        (Glyph::Four, SizeClass::Px16) => RectPx::new(1, 1, 9, 14),
        (Glyph::Four, SizeClass::Px32) => RectPx::new(1, 1, 21, 28),
        (Glyph::Six, SizeClass::Px16) => RectPx::new(11, 1, 9, 14),
        (Glyph::Six, SizeClass::Px32) => RectPx::new(23, 1, 21, 28),
        (Glyph::Query, SizeClass::Px16) => RectPx::new(21, 1, 9, 14),
        (Glyph::Query, SizeClass::Px32) => RectPx::new(45, 1, 21, 28),
    }
}

/// Location of a glyph's small sprite within the sheet for `size`.
///
/// Returns `None` for glyphs without a small sprite.
pub fn small_region(glyph: Glyph, size: SizeClass) -> Option<RectPx> {
    match (glyph, size) {
        (Glyph::Four, SizeClass::Px16) => Some(RectPx::new(31, 1, 6, 6)),
        (Glyph::Four, SizeClass::Px32) => Some(RectPx::new(67, 1, 10, 10)),
        (Glyph::Six, SizeClass::Px16) => Some(RectPx::new(31, 8, 6, 6)),
        (Glyph::Six, SizeClass::Px32) => Some(RectPx::new(67, 12, 10, 10)),
        (Glyph::Query, _) => None,
    }
}

/// A position on the output canvas that a sprite can be drawn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The large glyph on the left.
    Big,
    /// Upper small glyph on the right.
    FirstSmall,
    /// Lower small glyph on the right.
    SecondSmall,
}

impl Slot {
    /// Slots in the order pattern glyphs fill them.
    pub const ALL: [Slot; 3] = [Slot::Big, Slot::FirstSmall, Slot::SecondSmall];

    /// Top-left corner on the canvas where this slot's sprite is pasted.
    pub fn target(self, size: SizeClass) -> PointPx {
        match (self, size) {
            (Slot::Big, SizeClass::Px16) => PointPx::new(0, 1),
            (Slot::Big, SizeClass::Px32) => PointPx::new(0, 2),
            (Slot::FirstSmall, SizeClass::Px16) => PointPx::new(10, 1),
            (Slot::FirstSmall, SizeClass::Px32) => PointPx::new(22, 2),
            (Slot::SecondSmall, SizeClass::Px16) => PointPx::new(10, 8),
            (Slot::SecondSmall, SizeClass::Px32) => PointPx::new(22, 14),
        }
    }

    /// Source rectangle of `glyph` for this slot: big slots read the big
    /// table, small slots read the small table.
    pub fn source(self, glyph: Glyph, size: SizeClass) -> Option<RectPx> {
        match self {
            Slot::Big => Some(big_region(glyph, size)),
            Slot::FirstSmall | Slot::SecondSmall => small_region(glyph, size),
        }
    }
}

// ============================================================================
// SpriteSheet
// ============================================================================

/// A decoded sprite sheet for one size class.
///
/// Construction checks that the image covers every sprite region of its
/// size class, so cropping never runs off the edge.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheet {
    size: SizeClass,
    image: RgbaImage,
}

impl SpriteSheet {
    /// File name of the sheet for `size`, e.g. `sprites16.png`.
    pub fn file_name(size: SizeClass) -> String {
        format!("sprites{size}.png")
    }

    /// Smallest `(width, height)` a sheet for `size` may have.
    pub fn required_extent(size: SizeClass) -> (u32, u32) {
        Glyph::BIG
            .iter()
            .flat_map(|&glyph| {
                std::iter::once(big_region(glyph, size)).chain(small_region(glyph, size))
            })
            .fold((0, 0), |(w, h), rect| (w.max(rect.right()), h.max(rect.bottom())))
    }

    /// Wraps an already decoded image.
    pub fn from_image(size: SizeClass, image: RgbaImage) -> Result<Self> {
        let (required_width, required_height) = Self::required_extent(size);
        if image.width() < required_width || image.height() < required_height {
            return Err(Error::SheetTooSmall {
                size,
                width: image.width(),
                height: image.height(),
                required_width,
                required_height,
            });
        }
        Ok(Self { size, image })
    }

    /// Opens and decodes a sheet, converting it to RGBA.
    pub fn open(size: SizeClass, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .map_err(|source| Error::SheetLoad {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();

        debug!(
            "Loaded {} ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Self::from_image(size, image)
    }

    pub fn size(&self) -> SizeClass {
        self.size
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Copies the pixels of `rect` out of the sheet.
    pub fn crop(&self, rect: RectPx) -> RgbaImage {
        imageops::crop_imm(&self.image, rect.x, rect.y, rect.width, rect.height).to_image()
    }
}

// ============================================================================
// SpriteSheets
// ============================================================================

/// The sprite sheets for both size classes.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteSheets {
    px16: SpriteSheet,
    px32: SpriteSheet,
}

impl SpriteSheets {
    /// Loads `sprites16.png` and `sprites32.png` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let path = |size: SizeClass| -> PathBuf { dir.join(SpriteSheet::file_name(size)) };

        Ok(Self {
            px16: SpriteSheet::open(SizeClass::Px16, path(SizeClass::Px16))?,
            px32: SpriteSheet::open(SizeClass::Px32, path(SizeClass::Px32))?,
        })
    }

    /// Builds the sheet set from in-memory images.
    pub fn from_images(px16: RgbaImage, px32: RgbaImage) -> Result<Self> {
        Ok(Self {
            px16: SpriteSheet::from_image(SizeClass::Px16, px16)?,
            px32: SpriteSheet::from_image(SizeClass::Px32, px32)?,
        })
    }

    /// Returns the sheet for `size`.
    pub fn get(&self, size: SizeClass) -> &SpriteSheet {
        match size {
            SizeClass::Px16 => &self.px16,
            SizeClass::Px32 => &self.px32,
        }
    }
}

/// Builds a sheet of the minimum size where every pixel encodes its own
/// coordinates, so crops can be checked against their source position.
#[cfg(test)]
pub(crate) fn coordinate_sheet(size: SizeClass) -> RgbaImage {
    let (width, height) = SpriteSheet::required_extent(size);
    RgbaImage::from_fn(width, height, |x, y| {
        image::Rgba([x as u8, y as u8, (x + y) as u8 % 100, 255])
    })
}

#[cfg(test)]
pub(crate) fn coordinate_sheets() -> SpriteSheets {
    SpriteSheets::from_images(
        coordinate_sheet(SizeClass::Px16),
        coordinate_sheet(SizeClass::Px32),
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_extent_covers_all_regions() {
        assert_eq!(SpriteSheet::required_extent(SizeClass::Px16), (37, 15));
        assert_eq!(SpriteSheet::required_extent(SizeClass::Px32), (77, 29));
    }

    #[test]
    fn small_sprites_only_for_digits() {
        assert!(small_region(Glyph::Four, SizeClass::Px16).is_some());
        assert!(small_region(Glyph::Six, SizeClass::Px32).is_some());
        assert!(small_region(Glyph::Query, SizeClass::Px16).is_none());
        assert!(Slot::FirstSmall.source(Glyph::Query, SizeClass::Px32).is_none());
        assert_eq!(
            Slot::Big.source(Glyph::Query, SizeClass::Px32),
            Some(RectPx::new(45, 1, 21, 28))
        );
    }

    #[test]
    fn sprites_fit_on_canvas() {
        for size in SizeClass::ALL {
            for slot in Slot::ALL {
                let target = slot.target(size);
                for glyph in Glyph::BIG {
                    if let Some(rect) = slot.source(glyph, size) {
                        assert!(target.x + rect.width <= size.pixels());
                        assert!(target.y + rect.height <= size.pixels());
                    }
                }
            }
        }
    }

    #[test]
    fn undersized_sheet_rejected() {
        let err = SpriteSheet::from_image(SizeClass::Px32, RgbaImage::new(76, 29)).unwrap_err();
        assert!(matches!(
            err,
            Error::SheetTooSmall {
                size: SizeClass::Px32,
                required_width: 77,
                required_height: 29,
                ..
            }
        ));
    }

    #[test]
    fn crop_copies_region() {
        let sheets = coordinate_sheets();
        let sheet = sheets.get(SizeClass::Px16);
        let crop = sheet.crop(RectPx::new(31, 8, 6, 6));

        assert_eq!(crop.dimensions(), (6, 6));
        assert_eq!(crop.get_pixel(0, 0).0, [31, 8, 39, 255]);
        assert_eq!(crop.get_pixel(5, 5).0, [36, 13, 49, 255]);
    }

    #[test]
    fn load_missing_sheet_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = SpriteSheets::load(dir.path()).unwrap_err();
        match err {
            Error::SheetLoad { path, .. } => assert!(path.ends_with("sprites16.png")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        for size in SizeClass::ALL {
            coordinate_sheet(size)
                .save(dir.path().join(SpriteSheet::file_name(size)))
                .unwrap();
        }

        let sheets = SpriteSheets::load(dir.path()).unwrap();
        assert_eq!(sheets.get(SizeClass::Px32).size(), SizeClass::Px32);
        assert_eq!(sheets, coordinate_sheets());
    }
}
