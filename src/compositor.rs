//! Icon composition engine and the generation driver.

use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};
use crate::icon::{ColorVariant, IconSpec, Pattern, SizeClass};
use crate::layer::{self, GlyphLayer, Layer, Lighten};
use crate::sheet::{Slot, SpriteSheets};

// ============================================================================
// GenerateOptions
// ============================================================================

/// Where sprite sheets are read from and icons are written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory containing `sprites16.png` and `sprites32.png`.
    pub sprites_dir: PathBuf,

    /// Existing directory the icons are written into.
    pub output_dir: PathBuf,
}

impl GenerateOptions {
    pub fn new(sprites_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            sprites_dir: sprites_dir.into(),
            output_dir: output_dir.into(),
        }
    }
}

impl Default for GenerateOptions {
    /// `sprites/` and `generated_icons/` next to this crate's manifest.
    fn default() -> Self {
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        Self::new(root.join("sprites"), root.join("generated_icons"))
    }
}

// ============================================================================
// IconCompositor
// ============================================================================

/// Builds icons from a pair of sprite sheets.
///
/// # Example
///
/// ```no_run
/// use sprite_icons::{ColorVariant, IconCompositor, Pattern, SizeClass, SpriteSheets};
///
/// let sheets = SpriteSheets::load("sprites")?;
/// let compositor = IconCompositor::new(sheets);
///
/// let pattern: Pattern = "q46".parse()?;
/// let icon = compositor.build_icon(&pattern, SizeClass::Px32, ColorVariant::LightFg);
/// icon.save("lightfg32_q46.png")?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct IconCompositor {
    sheets: SpriteSheets,
}

impl IconCompositor {
    /// Creates a compositor over the given sheets.
    pub fn new(sheets: SpriteSheets) -> Self {
        Self { sheets }
    }

    /// Returns the sprite sheets sprites are copied from.
    pub fn sheets(&self) -> &SpriteSheets {
        &self.sheets
    }

    /// Returns the layers that render `pattern` in `color`, in draw order.
    ///
    /// Glyphs fill the big slot, then the first and second small slots.
    /// `lightfg` adds a [`Lighten`] pass at the end.
    pub fn layers(pattern: &Pattern, color: ColorVariant) -> Vec<Layer> {
        let mut layers: Vec<Layer> = Slot::ALL
            .iter()
            .zip(pattern.glyphs())
            .filter_map(|(&slot, &glyph)| GlyphLayer::new(slot, glyph))
            .map(Layer::from)
            .collect();

        if color == ColorVariant::LightFg {
            layers.push(Lighten::LIGHT_FOREGROUND.into());
        }
        layers
    }

    /// Renders one `size x size` icon.
    ///
    /// The result depends only on the arguments and the sheets, so repeated
    /// calls return identical images.
    pub fn build_icon(&self, pattern: &Pattern, size: SizeClass, color: ColorVariant) -> RgbaImage {
        layer::render(&Self::layers(pattern, color), size, &self.sheets)
    }

    /// Renders the icon described by `spec`.
    pub fn render(&self, spec: &IconSpec) -> RgbaImage {
        self.build_icon(&spec.pattern, spec.size, spec.color)
    }

    /// Renders every icon in [`IconSpec::all`] order.
    pub fn render_all(&self) -> impl Iterator<Item = (IconSpec, RgbaImage)> + '_ {
        IconSpec::all().into_iter().map(move |spec| {
            let image = self.render(&spec);
            (spec, image)
        })
    }

    /// Renders every icon and writes it as PNG into `output_dir`.
    ///
    /// Stops at the first failed write; files already written are left in
    /// place. Returns the written paths in generation order.
    pub fn write_all(&self, output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let output_dir = output_dir.as_ref();
        let mut written = Vec::new();

        for (spec, image) in self.render_all() {
            let path = output_dir.join(spec.file_name());
            info!("Writing {}", path.display());
            image
                .save_with_format(&path, ImageFormat::Png)
                .map_err(|source| Error::Write {
                    path: path.clone(),
                    source,
                })?;
            written.push(path);
        }

        Ok(written)
    }
}

/// Checks the output directory, loads the sheets, and writes every icon.
///
/// A missing output directory is reported before any sprite sheet is read.
pub fn generate(options: &GenerateOptions) -> Result<Vec<PathBuf>> {
    if !options.output_dir.is_dir() {
        return Err(Error::OutputDirMissing {
            path: options.output_dir.clone(),
        });
    }

    let sheets = SpriteSheets::load(&options.sprites_dir)?;
    let written = IconCompositor::new(sheets).write_all(&options.output_dir)?;

    info!("Done!");
    Ok(written)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Glyph;
    use crate::layer::apply_lighten;
    use crate::sheet::{big_region, coordinate_sheets, small_region};
    use image::Rgba;

    fn compositor() -> IconCompositor {
        IconCompositor::new(coordinate_sheets())
    }

    fn pattern(s: &str) -> Pattern {
        Pattern::parse(s).unwrap()
    }

    /// Asserts the canvas area at `(tx, ty)` equals the sheet area `rect`.
    fn assert_region(
        canvas: &RgbaImage,
        compositor: &IconCompositor,
        size: SizeClass,
        rect: crate::icon::RectPx,
        (tx, ty): (u32, u32),
    ) {
        let sheet = compositor.sheets().get(size).image();
        for y in 0..rect.height {
            for x in 0..rect.width {
                assert_eq!(
                    canvas.get_pixel(tx + x, ty + y),
                    sheet.get_pixel(rect.x + x, rect.y + y),
                    "canvas ({}, {})",
                    tx + x,
                    ty + y
                );
            }
        }
    }

    #[test]
    fn layers_follow_pattern() {
        let layers = IconCompositor::layers(&pattern("q46"), ColorVariant::LightFg);
        assert_eq!(
            layers,
            vec![
                Layer::Glyph(GlyphLayer { slot: Slot::Big, glyph: Glyph::Query }),
                Layer::Glyph(GlyphLayer { slot: Slot::FirstSmall, glyph: Glyph::Four }),
                Layer::Glyph(GlyphLayer { slot: Slot::SecondSmall, glyph: Glyph::Six }),
                Layer::Lighten(Lighten::LIGHT_FOREGROUND),
            ]
        );

        assert!(IconCompositor::layers(&Pattern::empty(), ColorVariant::DarkFg).is_empty());
    }

    #[test]
    fn canvas_is_square_rgba() {
        let compositor = compositor();
        for spec in IconSpec::all() {
            let icon = compositor.render(&spec);
            let px = spec.size.pixels();
            assert_eq!(icon.dimensions(), (px, px), "{}", spec.file_name());
        }
    }

    #[test]
    fn build_icon_is_deterministic() {
        let compositor = compositor();
        let p = pattern("646");
        let first = compositor.build_icon(&p, SizeClass::Px32, ColorVariant::LightFg);
        let second = compositor.build_icon(&p, SizeClass::Px32, ColorVariant::LightFg);
        assert_eq!(first, second);
    }

    #[test]
    fn dark_single_glyph_16() {
        let compositor = compositor();
        let icon = compositor.build_icon(&pattern("4"), SizeClass::Px16, ColorVariant::DarkFg);

        let rect = big_region(Glyph::Four, SizeClass::Px16);
        assert_eq!(rect, crate::icon::RectPx::new(1, 1, 9, 14));
        assert_region(&icon, &compositor, SizeClass::Px16, rect, (0, 1));

        for (x, y, pixel) in icon.enumerate_pixels() {
            let inside = x < 9 && (1..15).contains(&y);
            if !inside {
                assert_eq!(pixel.0, [0, 0, 0, 0], "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn light_big_and_first_small_32() {
        let compositor = compositor();
        let p = pattern("46");
        let light = compositor.build_icon(&p, SizeClass::Px32, ColorVariant::LightFg);
        let dark = compositor.build_icon(&p, SizeClass::Px32, ColorVariant::DarkFg);

        assert_region(
            &dark,
            &compositor,
            SizeClass::Px32,
            big_region(Glyph::Four, SizeClass::Px32),
            (0, 2),
        );
        assert_region(
            &dark,
            &compositor,
            SizeClass::Px32,
            small_region(Glyph::Six, SizeClass::Px32).unwrap(),
            (22, 2),
        );
        // No second small glyph
        for y in 14..24 {
            for x in 22..32 {
                assert_eq!(dark.get_pixel(x, y).0, [0, 0, 0, 0]);
            }
        }

        for (d, l) in dark.pixels().zip(light.pixels()) {
            if d[3] == 0 {
                assert_eq!(l, d);
            } else {
                assert_eq!(l[0], d[0].saturating_add(128));
                assert_eq!(l[1], d[1].saturating_add(128));
                assert_eq!(l[2], d[2].saturating_add(128));
                assert_eq!(l[3], d[3]);
            }
        }
    }

    #[test]
    fn lightfg_equals_lightened_darkfg() {
        let compositor = compositor();
        for spec in IconSpec::all().into_iter().filter(|s| s.color == ColorVariant::DarkFg) {
            let mut expected = compositor.render(&spec);
            apply_lighten(&mut expected, 128);

            let light = compositor.build_icon(&spec.pattern, spec.size, ColorVariant::LightFg);
            assert_eq!(light, expected, "{}", spec.file_name());
        }
    }

    #[test]
    fn translucent_sprite_pixels_survive() {
        let mut sheet16 = crate::sheet::coordinate_sheet(SizeClass::Px16);
        sheet16.put_pixel(1, 1, Rgba([250, 5, 5, 40]));
        let sheets =
            SpriteSheets::from_images(sheet16, crate::sheet::coordinate_sheet(SizeClass::Px32))
                .unwrap();
        let compositor = IconCompositor::new(sheets);

        let dark = compositor.build_icon(&pattern("4"), SizeClass::Px16, ColorVariant::DarkFg);
        assert_eq!(dark.get_pixel(0, 1).0, [250, 5, 5, 40]);

        let light = compositor.build_icon(&pattern("4"), SizeClass::Px16, ColorVariant::LightFg);
        assert_eq!(light.get_pixel(0, 1).0, [255, 133, 133, 40]);
    }

    #[test]
    fn generate_requires_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        // No sprite sheets either: the directory check has to come first.
        let options = GenerateOptions::new(dir.path(), dir.path().join("missing"));

        let err = generate(&options).unwrap_err();
        assert!(matches!(err, Error::OutputDirMissing { .. }));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn write_all_reports_failed_write() {
        let dir = tempfile::tempdir().unwrap();
        let not_a_dir = dir.path().join("file");
        std::fs::write(&not_a_dir, b"").unwrap();

        let err = compositor().write_all(&not_a_dir).unwrap_err();
        match err {
            Error::Write { path, .. } => assert!(path.ends_with("lightfg16_4.png")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn default_options_point_at_crate() {
        let options = GenerateOptions::default();
        assert!(options.sprites_dir.ends_with("sprites"));
        assert!(options.output_dir.ends_with("generated_icons"));
    }
}
