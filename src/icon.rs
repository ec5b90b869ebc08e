//! Icon description types.
//!
//! This module provides the small vocabulary the compositor works with:
//! pixel geometry, the two size classes, the glyph alphabet, patterns built
//! from glyphs, and the color variants an icon can be rendered in.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A rectangle defined in pixel coordinates.
///
/// Used to locate a sprite within a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// A point on the output canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointPx {
    pub x: u32,
    pub y: u32,
}

impl PointPx {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// SizeClass
// ============================================================================

/// The two icon sizes, each backed by its own sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Px16,
    Px32,
}

impl SizeClass {
    /// All size classes, in generation order.
    pub const ALL: [SizeClass; 2] = [SizeClass::Px16, SizeClass::Px32];

    /// Edge length of an icon in this size class.
    pub fn pixels(self) -> u32 {
        match self {
            SizeClass::Px16 => 16,
            SizeClass::Px32 => 32,
        }
    }

    /// Returns the size class for an edge length, if there is one.
    pub fn from_pixels(pixels: u32) -> Option<Self> {
        match pixels {
            16 => Some(SizeClass::Px16),
            32 => Some(SizeClass::Px32),
            _ => None,
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pixels())
    }
}

// ============================================================================
// Glyph
// ============================================================================

/// A drawable sprite key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// `4`
    Four,
    /// `6`
    Six,
    /// `q`, drawn as a question mark. Only exists as a big sprite.
    Query,
}

impl Glyph {
    /// Glyphs that have a big sprite, in generation order.
    pub const BIG: [Glyph; 3] = [Glyph::Four, Glyph::Six, Glyph::Query];

    /// Returns the single-character key for this glyph.
    pub fn as_char(self) -> char {
        match self {
            Glyph::Four => '4',
            Glyph::Six => '6',
            Glyph::Query => 'q',
        }
    }

    /// Parses a single-character key.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '4' => Some(Glyph::Four),
            '6' => Some(Glyph::Six),
            'q' => Some(Glyph::Query),
            _ => None,
        }
    }

    /// Returns true if the small sprite table has an entry for this glyph.
    pub fn has_small(self) -> bool {
        matches!(self, Glyph::Four | Glyph::Six)
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

// ============================================================================
// Pattern
// ============================================================================

/// The small glyphs appended to a big glyph when enumerating patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    None,
    Four,
    Six,
    FourSix,
}

impl Suffix {
    /// All suffixes, in generation order.
    pub const ALL: [Suffix; 4] = [Suffix::None, Suffix::Four, Suffix::Six, Suffix::FourSix];

    pub fn glyphs(self) -> &'static [Glyph] {
        match self {
            Suffix::None => &[],
            Suffix::Four => &[Glyph::Four],
            Suffix::Six => &[Glyph::Six],
            Suffix::FourSix => &[Glyph::Four, Glyph::Six],
        }
    }
}

/// A sequence of up to three glyphs selecting what an icon shows.
///
/// The first glyph is drawn as the big sprite; the second and third are drawn
/// as small sprites. Every glyph in a small position is guaranteed to have a
/// small sprite.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pattern {
    glyphs: Vec<Glyph>,
}

impl Pattern {
    /// Maximum number of glyphs in a pattern.
    pub const MAX_LEN: usize = 3;

    /// Creates an empty pattern, which renders a blank icon.
    pub fn empty() -> Self {
        Self { glyphs: Vec::new() }
    }

    /// Builds `prefix + suffix`.
    pub fn with_suffix(prefix: Glyph, suffix: Suffix) -> Self {
        let mut glyphs = Vec::with_capacity(Self::MAX_LEN);
        glyphs.push(prefix);
        glyphs.extend_from_slice(suffix.glyphs());
        Self { glyphs }
    }

    /// Parses a pattern such as `"q46"`.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidPattern {
            pattern: s.to_string(),
            reason,
        };

        let mut glyphs = Vec::with_capacity(Self::MAX_LEN);
        for (i, c) in s.chars().enumerate() {
            if i >= Self::MAX_LEN {
                return Err(invalid(format!("more than {} glyphs", Self::MAX_LEN)));
            }
            let glyph = Glyph::from_char(c).ok_or_else(|| invalid(format!("unknown glyph {c:?}")))?;
            if i > 0 && !glyph.has_small() {
                return Err(invalid(format!("glyph {c:?} has no small sprite")));
            }
            glyphs.push(glyph);
        }

        Ok(Self { glyphs })
    }

    /// Returns the glyph drawn in the big slot, if any.
    pub fn big(&self) -> Option<Glyph> {
        self.glyphs.first().copied()
    }

    /// Returns the glyphs drawn in the small slots, in slot order.
    pub fn small(&self) -> &[Glyph] {
        self.glyphs.get(1..).unwrap_or(&[])
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for glyph in &self.glyphs {
            write!(f, "{glyph}")?;
        }
        Ok(())
    }
}

// ============================================================================
// ColorVariant
// ============================================================================

/// Foreground color variant of an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorVariant {
    /// Non-transparent pixels are brightened, for use on dark backgrounds.
    LightFg,
    /// Sprites are used as drawn.
    DarkFg,
}

impl ColorVariant {
    /// All variants, in generation order.
    pub const ALL: [ColorVariant; 2] = [ColorVariant::LightFg, ColorVariant::DarkFg];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorVariant::LightFg => "lightfg",
            ColorVariant::DarkFg => "darkfg",
        }
    }
}

impl fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "lightfg" => Ok(ColorVariant::LightFg),
            "darkfg" => Ok(ColorVariant::DarkFg),
            other => Err(format!("unknown color variant {other:?}")),
        }
    }
}

// ============================================================================
// IconSpec
// ============================================================================

/// Everything needed to render and name one output icon.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IconSpec {
    pub pattern: Pattern,
    pub size: SizeClass,
    pub color: ColorVariant,
}

impl IconSpec {
    pub fn new(pattern: Pattern, size: SizeClass, color: ColorVariant) -> Self {
        Self { pattern, size, color }
    }

    /// Output file name, e.g. `lightfg32_q46.png`.
    pub fn file_name(&self) -> String {
        format!("{}{}_{}.png", self.color, self.size, self.pattern)
    }

    /// Every icon the generator produces, in generation order:
    /// color, then size, then big glyph, then suffix.
    pub fn all() -> Vec<IconSpec> {
        let mut specs = Vec::with_capacity(
            ColorVariant::ALL.len() * SizeClass::ALL.len() * Glyph::BIG.len() * Suffix::ALL.len(),
        );
        for color in ColorVariant::ALL {
            for size in SizeClass::ALL {
                for prefix in Glyph::BIG {
                    for suffix in Suffix::ALL {
                        specs.push(IconSpec::new(Pattern::with_suffix(prefix, suffix), size, color));
                    }
                }
            }
        }
        specs
    }
}
