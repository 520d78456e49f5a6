//! Parser and compositor for Red Alert 2 isometric tile sets (`.tem`, `.sno`, `.urb`, ...).
//!
//! A TMP file is a grid of 60x30 diamond tiles. Each non-empty tile carries
//! an image, a z (depth) image, a height level and optionally an "extra"
//! image drawn on top of it, such as a cliff face.
//!
//! Placement needs the whole set: a tile's screen y depends on how far its
//! height is below the highest tile, so [`TmpFile::max_height`] is found
//! first, then the [`Bounds`], and only then can tiles be painted onto a
//! [`Canvas`] with [`TmpFile::composite`].

pub mod canvas;
pub mod error;
pub mod file;
pub mod geometry;
pub mod header;
pub mod iso;
pub mod tile;

pub use canvas::Canvas;
pub use error::{Error, Result};
pub use file::{CompositeOptions, TmpFile};
pub use geometry::Bounds;
pub use header::{TileFlags, TileHeader, TmpHeader};
pub use iso::{ISO_TILE_SIZE, TILE_HEIGHT, TILE_PIXELS, TILE_WIDTH, read_iso_to_rect, row_width};
pub use tile::Tile;
