//! TMP file and tile headers

use bitflags::bitflags;
use ra2_data::{BoundedReader, ReadLe};

use crate::iso::{TILE_HEIGHT, TILE_WIDTH};
use crate::{Error, Result};

pub const TILE_HEADER_SIZE: usize = 52;

/// The 16-byte file header, followed by `tiles_x * tiles_y` u32 tile offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TmpHeader {
    pub tiles_x: u32,
    pub tiles_y: u32,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl TmpHeader {
    pub fn read(reader: &mut BoundedReader<'_>) -> Result<Self> {
        let tiles_x = reader.read_u32()?;
        if tiles_x & 0xFFFF == 0 {
            return Err(Error::LooksLikeShp);
        }
        let header = Self {
            tiles_x,
            tiles_y: reader.read_u32()?,
            tile_width: reader.read_u32()?,
            tile_height: reader.read_u32()?,
        };
        if header.tile_width != TILE_WIDTH as u32 || header.tile_height != TILE_HEIGHT as u32 {
            return Err(Error::IncompatibleTileSize {
                width: header.tile_width,
                height: header.tile_height,
            });
        }
        if header.tile_count() == 0 {
            return Err(Error::NoTiles {
                tiles_x: header.tiles_x,
                tiles_y: header.tiles_y,
            });
        }
        Ok(header)
    }

    pub fn tile_count(&self) -> usize {
        self.tiles_x as usize * self.tiles_y as usize
    }
}

bitflags! {
    /// Optional data present in a tile
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TileFlags: u32 {
        /// An extra overlay image follows the z data
        const HAS_EXTRA = 0x1;
        const HAS_Z = 0x2;
        const HAS_DAMAGED = 0x4;
    }
}

/// Per-tile header found at each non-zero offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileHeader {
    pub x: i32,
    pub y: i32,
    pub extra_offset: u32,
    pub z_offset: u32,
    pub extra_z_offset: u32,
    pub extra_x: i32,
    pub extra_y: i32,
    pub extra_width: u32,
    pub extra_height: u32,
    pub flags: TileFlags,
    /// Height level, 0-255; only shifts the tile vertically
    pub height: u8,
    pub terrain_type: u8,
    pub ramp_type: u8,
    pub radar_left: [u8; 3],
    pub radar_right: [u8; 3],
    pub pad: [u8; 3],
}

impl ReadLe for TileHeader {
    fn read_le(reader: &mut BoundedReader<'_>) -> ra2_data::Result<Self> {
        Ok(Self {
            x: reader.read_i32()?,
            y: reader.read_i32()?,
            extra_offset: reader.read_u32()?,
            z_offset: reader.read_u32()?,
            extra_z_offset: reader.read_u32()?,
            extra_x: reader.read_i32()?,
            extra_y: reader.read_i32()?,
            extra_width: reader.read_u32()?,
            extra_height: reader.read_u32()?,
            flags: TileFlags::from_bits_retain(reader.read_u32()?),
            height: reader.read_u8()?,
            terrain_type: reader.read_u8()?,
            ramp_type: reader.read_u8()?,
            radar_left: reader.read_array()?,
            radar_right: reader.read_array()?,
            pad: reader.read_array()?,
        })
    }
}

impl TileHeader {
    pub fn has_extra(&self) -> bool {
        self.flags.contains(TileFlags::HAS_EXTRA)
    }

    /// Vertical shift applied to a tile `max_height - height` levels below the top.
    fn height_shift(&self, max_height: u8) -> i64 {
        (TILE_HEIGHT as i64 / 2) * (i64::from(max_height) - i64::from(self.height))
    }

    /// Screen y of the tile once every tile is placed relative to `max_height`.
    pub fn y_at(&self, max_height: u8) -> i64 {
        i64::from(self.y) + self.height_shift(max_height)
    }

    pub fn extra_y_at(&self, max_height: u8) -> i64 {
        i64::from(self.extra_y) + self.height_shift(max_height)
    }

    pub fn extra_len(&self) -> usize {
        if self.has_extra() {
            self.extra_width as usize * self.extra_height as usize
        } else {
            0
        }
    }
}
