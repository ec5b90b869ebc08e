//! Error types for icon generation.

use std::path::PathBuf;

use crate::icon::SizeClass;

/// Errors that can occur while loading sprite sheets or writing icons.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output directory must exist before any work starts.
    #[error("output directory does not exist: {}", path.display())]
    OutputDirMissing { path: PathBuf },

    /// A sprite sheet could not be opened or decoded.
    #[error("failed to load sprite sheet {}", path.display())]
    SheetLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A sprite sheet does not cover every sprite region of its size class.
    #[error(
        "{size}px sprite sheet is {width}x{height}, needs at least {required_width}x{required_height}"
    )]
    SheetTooSmall {
        size: SizeClass,
        width: u32,
        height: u32,
        required_width: u32,
        required_height: u32,
    },

    /// A pattern string could not be parsed.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// An icon could not be written to disk.
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
