//! `IsoMapPack5` terrain cells
//!
//! Once unpacked, the section is a flat array of 11-byte records:
//!
//! ```text
//! i16 x
//! i16 y
//! i16 tile        // index into the theater's tile set list
//! u8  zero1[2]
//! u8  sub_tile    // tile within a multi-tile template
//! u8  z           // height level
//! u8  zero2
//! ```

use std::fmt;

use ra2_data::{BoundedReader, ReadLe};

use crate::pack::MapPack;
use crate::Result;

pub const CELL_SIZE: usize = 11;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IsoCell {
    pub x: i16,
    pub y: i16,
    pub tile: i16,
    pub zero1: [u8; 2],
    pub sub_tile: u8,
    pub z: u8,
    pub zero2: u8,
}

impl ReadLe for IsoCell {
    fn read_le(reader: &mut BoundedReader<'_>) -> ra2_data::Result<Self> {
        Ok(Self {
            x: reader.read_i16()?,
            y: reader.read_i16()?,
            tile: reader.read_i16()?,
            zero1: reader.read_array()?,
            sub_tile: reader.read_u8()?,
            z: reader.read_u8()?,
            zero2: reader.read_u8()?,
        })
    }
}

impl fmt::Display for IsoCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position ({}, {}, {}), tile {} / {}",
            self.x, self.y, self.z, self.tile, self.sub_tile
        )
    }
}

/// Parse unpacked `IsoMapPack5` data.
///
/// A trailing partial record is reported and dropped.
pub fn parse_cells(data: &[u8]) -> Result<Vec<IsoCell>> {
    if data.len() % CELL_SIZE != 0 {
        log::error!(
            "IsoMapPack5 data is {} bytes, not a multiple of {}; ignoring {} trailing bytes",
            data.len(),
            CELL_SIZE,
            data.len() % CELL_SIZE
        );
    }
    let mut reader = BoundedReader::new(data);
    Ok(reader.read_vec(data.len() / CELL_SIZE)?)
}

/// Unpack and parse a Base64 decoded `IsoMapPack5` section.
pub fn read_iso_map_pack(packed: &[u8]) -> Result<Vec<IsoCell>> {
    parse_cells(&MapPack::IsoMapPack5.unpack(packed)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cell_bytes(x: i16, y: i16, tile: i16, sub_tile: u8, z: u8) -> Vec<u8> {
        let mut data = Vec::new();
        data.extend(&x.to_le_bytes());
        data.extend(&y.to_le_bytes());
        data.extend(&tile.to_le_bytes());
        data.extend(&[0, 0, sub_tile, z, 0]);
        data
    }

    #[test]
    fn parses_records() {
        let mut data = cell_bytes(62, 1, 17, 2, 4);
        data.extend(cell_bytes(63, 1, -1, 0, 0));
        let cells = parse_cells(&data).unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(
            cells[0],
            IsoCell {
                x: 62,
                y: 1,
                tile: 17,
                sub_tile: 2,
                z: 4,
                ..IsoCell::default()
            }
        );
        assert_eq!(cells[1].tile, -1);
        assert_eq!(cells[0].to_string(), "position (62, 1, 4), tile 17 / 2");
    }

    #[test]
    fn trailing_partial_record_is_dropped() {
        let mut data = cell_bytes(1, 2, 3, 0, 0);
        data.extend(&[0xAA; 5]);
        assert_eq!(parse_cells(&data).unwrap().len(), 1);
    }
}
