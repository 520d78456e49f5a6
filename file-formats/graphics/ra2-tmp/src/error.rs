//! Error handling for TMP parsing and compositing

use std::io;

use ra2_data::ReadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading the file from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A header or tile read ran past the end of the data
    #[error(transparent)]
    Read(#[from] ReadError),

    /// The low 16 bits of the first word are zero, as in a SHP header
    #[error("This looks like a SHP file")]
    LooksLikeShp,

    /// Tile dimensions other than 60x30
    #[error("Incompatible tile size [{width} {height}], require [60 30]")]
    IncompatibleTileSize { width: u32, height: u32 },

    /// The tile grid is empty
    #[error("TMP contains no tiles ({tiles_x} x {tiles_y})")]
    NoTiles { tiles_x: u32, tiles_y: u32 },

    /// Tile index past the end of the grid
    #[error("Tile {index} out of range ({count} tiles)")]
    TileIndexOutOfRange { index: usize, count: usize },

    /// A tile or extra would be painted outside the canvas
    #[error(
        "Tile {tile}: {width}x{height} region at ({x}, {y}) does not fit a {canvas_width}x{canvas_height} canvas"
    )]
    TileOutOfRange {
        tile: usize,
        x: i64,
        y: i64,
        width: u32,
        height: u32,
        canvas_width: usize,
        canvas_height: usize,
    },

    /// The template bounds are too large to allocate a canvas for
    #[error("Template of {width}x{height} pixels is too large")]
    TemplateTooLarge { width: u64, height: u64 },

    /// The tile has no extra overlay
    #[error("Tile {tile} does not have extra data")]
    NoExtraData { tile: usize },

    /// Pixel coordinate outside a tile or extra
    #[error("Pixel ({x}, {y}) out of range for a {width}x{height} image")]
    PixelOutOfRange {
        x: usize,
        y: usize,
        width: u32,
        height: u32,
    },

    /// A tile failed to decode; wraps the underlying error
    #[error("Tile {index}: {source}")]
    Tile {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn in_tile(self, index: usize) -> Self {
        Error::Tile {
            index,
            source: Box::new(self),
        }
    }

    /// Whether the data itself is malformed, as opposed to a bad request or I/O failure.
    pub fn is_corruption(&self) -> bool {
        match self {
            Error::Read(_)
            | Error::LooksLikeShp
            | Error::IncompatibleTileSize { .. }
            | Error::NoTiles { .. }
            | Error::TemplateTooLarge { .. } => true,
            Error::Tile { source, .. } => source.is_corruption(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
