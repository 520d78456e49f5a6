//! File and frame headers
//!
//! ```text
//! ShpHeader (8 bytes)
//!   u16 zero          // always 0
//!   u16 width
//!   u16 height
//!   u16 frame_count
//!
//! FrameHeader (24 bytes), frame_count times
//!   u16 x, y
//!   u16 width, height
//!   u8  compression
//!   u8  reserved
//!   u16 reserved2
//!   u32 transparent
//!   u32 zero          // always 0
//!   u32 offset        // absolute offset of the pixel data
//! ```

use std::fmt;

use ra2_data::{BoundedReader, ReadLe};

use crate::{Error, Result};

pub const SHP_HEADER_SIZE: usize = 8;
pub const FRAME_HEADER_SIZE: usize = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShpHeader {
    pub zero: u16,
    pub width: u16,
    pub height: u16,
    pub frame_count: u16,
}

impl ReadLe for ShpHeader {
    fn read_le(reader: &mut BoundedReader<'_>) -> ra2_data::Result<Self> {
        Ok(Self {
            zero: reader.read_u16()?,
            width: reader.read_u16()?,
            height: reader.read_u16()?,
            frame_count: reader.read_u16()?,
        })
    }
}

impl ShpHeader {
    pub fn validate(&self) -> Result<()> {
        if self.zero != 0 {
            return Err(Error::InvalidHeader(format!(
                "first word is {}, expected 0",
                self.zero
            )));
        }
        Ok(())
    }
}

/// Pixel encoding of a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Raw `width * height` bytes
    Raw0,
    /// Raw `width * height` bytes
    Raw1,
    /// Length-prefixed scanlines of literal bytes
    Scanline,
    /// Length-prefixed scanlines with zero runs
    ScanlineRle,
}

impl Compression {
    pub fn id(self) -> u8 {
        match self {
            Compression::Raw0 => 0,
            Compression::Raw1 => 1,
            Compression::Scanline => 2,
            Compression::ScanlineRle => 3,
        }
    }
}

impl TryFrom<u8> for Compression {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, u8> {
        match value {
            0 => Ok(Compression::Raw0),
            1 => Ok(Compression::Raw1),
            2 => Ok(Compression::Scanline),
            3 => Ok(Compression::ScanlineRle),
            other => Err(other),
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Compression::Raw0 | Compression::Raw1 => "raw",
            Compression::Scanline => "scanline",
            Compression::ScanlineRle => "scanline RLE",
        };
        write!(f, "{} ({})", name, self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    pub compression: Compression,
    pub reserved: u8,
    pub reserved2: u16,
    pub transparent: u32,
    pub zero: u32,
    pub offset: u32,
}

impl FrameHeader {
    /// Read and validate the header of frame `index`.
    pub fn read(reader: &mut BoundedReader<'_>, index: usize) -> Result<Self> {
        let x = reader.read_u16()?;
        let y = reader.read_u16()?;
        let width = reader.read_u16()?;
        let height = reader.read_u16()?;
        let compression = Compression::try_from(reader.read_u8()?).map_err(|compression| {
            Error::UnsupportedEncoding {
                frame: index,
                compression,
            }
        })?;
        let reserved = reader.read_u8()?;
        let reserved2 = reader.read_u16()?;
        let transparent = reader.read_u32()?;
        let zero = reader.read_u32()?;
        if zero != 0 {
            return Err(Error::InvalidHeader(format!(
                "frame {index} zero field is {zero}"
            )));
        }
        let offset = reader.read_u32()?;

        Ok(Self {
            x,
            y,
            width,
            height,
            compression,
            reserved,
            reserved2,
            transparent,
            zero,
            offset,
        })
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
