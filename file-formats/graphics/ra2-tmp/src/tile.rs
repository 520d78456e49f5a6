use custom_debug::Debug;
use ra2_data::BoundedReader;
use ra2_utils::debug;

use crate::header::TileHeader;
use crate::iso::{TILE_HEIGHT, TILE_PIXELS, TILE_WIDTH, read_iso_to_rect};
use crate::{Error, Result};

/// One decoded, non-empty tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    /// Position in the file's tile grid
    pub index: usize,
    pub header: TileHeader,
    #[debug(with = debug::trimmed_collection_fmt)]
    pixels: Box<[u8; TILE_PIXELS]>,
    #[debug(with = debug::trimmed_collection_fmt)]
    heights: Box<[u8; TILE_PIXELS]>,
    #[debug(with = debug::option_trimmed_collection_fmt)]
    extra: Option<Vec<u8>>,
}

impl Tile {
    /// Read a tile header and body starting at the reader's position.
    ///
    /// The body is the image diamond, the z diamond, then the extra image if
    /// the header flags one.
    pub fn read(reader: &mut BoundedReader<'_>, index: usize) -> Result<Self> {
        let header: TileHeader = reader.read()?;

        let mut pixels = Box::new([0u8; TILE_PIXELS]);
        read_iso_to_rect(reader, &mut pixels)?;
        let mut heights = Box::new([0u8; TILE_PIXELS]);
        read_iso_to_rect(reader, &mut heights)?;

        let extra = if header.has_extra() {
            Some(reader.read_bytes(header.extra_len())?.to_vec())
        } else {
            None
        };

        Ok(Self {
            index,
            header,
            pixels,
            heights,
            extra,
        })
    }

    /// Row-major 60x30 palette indices.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels[..]
    }

    /// Row-major 60x30 z values.
    pub fn heights(&self) -> &[u8] {
        &self.heights[..]
    }

    pub fn extra(&self) -> Option<&[u8]> {
        self.extra.as_deref()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Result<u8> {
        Ok(self.pixels[tile_index(x, y)?])
    }

    pub fn height_pixel(&self, x: usize, y: usize) -> Result<u8> {
        Ok(self.heights[tile_index(x, y)?])
    }

    pub fn extra_pixel(&self, x: usize, y: usize) -> Result<u8> {
        let extra = self
            .extra
            .as_deref()
            .ok_or(Error::NoExtraData { tile: self.index })?;
        let (width, height) = (self.header.extra_width, self.header.extra_height);
        if x >= width as usize || y >= height as usize {
            return Err(Error::PixelOutOfRange {
                x,
                y,
                width,
                height,
            });
        }
        Ok(extra[y * width as usize + x])
    }
}

fn tile_index(x: usize, y: usize) -> Result<usize> {
    if x >= TILE_WIDTH || y >= TILE_HEIGHT {
        return Err(Error::PixelOutOfRange {
            x,
            y,
            width: TILE_WIDTH as u32,
            height: TILE_HEIGHT as u32,
        });
    }
    Ok(y * TILE_WIDTH + x)
}
