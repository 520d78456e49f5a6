//! VXL file layout
//!
//! ```text
//! VxlHeader (802 bytes)
//!   char  file_type[16]      // "Voxel Animation\0"
//!   u32   unknown            // always 1
//!   u32   limb_count
//!   u32   limb_count2        // equals limb_count
//!   u32   body_size
//!   u8    remap_start, remap_end
//!   u8    palette[768]       // 8 bits per channel
//! LimbHeader[limb_count]     (28 bytes each)
//! u8      body[body_size]
//! LimbTailer[limb_count]     (92 bytes each)
//! ```

use std::borrow::Cow;

use glam::{Mat4, Vec3, Vec4};
use ra2_data::{BoundedReader, Palette};

use crate::normals::NormalType;
use crate::{Error, Result};

pub const FILE_TYPE: &[u8; 16] = b"Voxel Animation\0";
pub const VXL_HEADER_SIZE: usize = 802;
pub const LIMB_HEADER_SIZE: usize = 28;
pub const LIMB_TAILER_SIZE: usize = 92;

/// A 3x4 row-major affine transform as stored on disk
pub type Transform = [[f32; 4]; 3];

/// Expand a stored 3x4 transform to a 4x4 matrix with a `0, 0, 0, 1` bottom row.
pub fn transform_to_mat4(t: &Transform) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(t[0][0], t[1][0], t[2][0], 0.0),
        Vec4::new(t[0][1], t[1][1], t[2][1], 0.0),
        Vec4::new(t[0][2], t[1][2], t[2][2], 0.0),
        Vec4::new(t[0][3], t[1][3], t[2][3], 1.0),
    )
}

/// A fixed 16-byte name up to its first NUL.
pub fn name_from_bytes(bytes: &[u8; 16]) -> Cow<'_, str> {
    let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..len])
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VxlHeader {
    pub unknown: u32,
    pub limb_count: u32,
    pub body_size: u32,
    pub remap_start: u8,
    pub remap_end: u8,
    pub palette: Palette,
}

impl VxlHeader {
    pub fn read(reader: &mut BoundedReader<'_>) -> Result<Self> {
        let file_type: [u8; 16] = reader.read_array()?;
        if &file_type != FILE_TYPE {
            return Err(Error::InvalidHeader(format!(
                "file type is \"{}\", expected \"Voxel Animation\"",
                name_from_bytes(&file_type)
            )));
        }
        let unknown = reader.read_u32()?;
        if unknown != 1 {
            return Err(Error::InvalidHeader(format!(
                "second field is {unknown}, should always be 1"
            )));
        }
        let limb_count = reader.read_u32()?;
        let limb_count2 = reader.read_u32()?;
        if limb_count != limb_count2 {
            return Err(Error::InvalidHeader(format!(
                "limb counts differ ({limb_count} and {limb_count2})"
            )));
        }
        let body_size = reader.read_u32()?;
        let remap_start = reader.read_u8()?;
        let remap_end = reader.read_u8()?;
        let palette = reader.read::<Palette>()?.with_channel_depth(8, 8, 8);

        Ok(Self {
            unknown,
            limb_count,
            body_size,
            remap_start,
            remap_end,
            palette,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LimbHeader {
    pub name: [u8; 16],
    pub number: u32,
    pub unknown: u32,
    pub unknown2: u32,
}

impl LimbHeader {
    pub fn read(reader: &mut BoundedReader<'_>) -> Result<Self> {
        let name: [u8; 16] = reader.read_array()?;
        if !name.contains(&0) {
            return Err(Error::InvalidHeader(
                "limb name is not NUL terminated".to_string(),
            ));
        }
        Ok(Self {
            name,
            number: reader.read_u32()?,
            unknown: reader.read_u32()?,
            unknown2: reader.read_u32()?,
        })
    }

    pub fn name(&self) -> Cow<'_, str> {
        name_from_bytes(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbTailer {
    /// Offset of the span start table within the body region
    pub span_start_offset: u32,
    pub span_end_offset: u32,
    /// Expected offset of the span data within the body region
    pub span_data_offset: u32,
    pub scale: f32,
    pub transform: Transform,
    pub min_bounds: Vec3,
    pub max_bounds: Vec3,
    pub x_size: u8,
    pub y_size: u8,
    pub z_size: u8,
    pub normal_type: NormalType,
}

impl LimbTailer {
    /// Read the tailer of limb `index`.
    pub fn read(reader: &mut BoundedReader<'_>, index: usize) -> Result<Self> {
        let span_start_offset = reader.read_u32()?;
        let span_end_offset = reader.read_u32()?;
        let span_data_offset = reader.read_u32()?;
        let scale = reader.read_f32()?;
        let transform: Transform = reader.read()?;
        let min_bounds = Vec3::from_array(reader.read()?);
        let max_bounds = Vec3::from_array(reader.read()?);
        let x_size = reader.read_u8()?;
        let y_size = reader.read_u8()?;
        let z_size = reader.read_u8()?;
        let normal_type =
            NormalType::try_from(reader.read_u8()?).map_err(|normal_type| {
                Error::UnsupportedEncoding {
                    limb: index,
                    normal_type,
                }
            })?;

        Ok(Self {
            span_start_offset,
            span_end_offset,
            span_data_offset,
            scale,
            transform,
            min_bounds,
            max_bounds,
            x_size,
            y_size,
            z_size,
            normal_type,
        })
    }

    pub fn column_count(&self) -> usize {
        self.x_size as usize * self.y_size as usize
    }

    pub fn size(&self) -> [u8; 3] {
        [self.x_size, self.y_size, self.z_size]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn mat4_is_column_major_with_identity_row() {
        let t: Transform = [
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
        ];
        let m = transform_to_mat4(&t);
        assert_eq!(
            m.to_cols_array(),
            [1.0, 5.0, 9.0, 0.0, 2.0, 6.0, 10.0, 0.0, 3.0, 7.0, 11.0, 0.0, 4.0, 8.0, 12.0, 1.0]
        );
        assert_eq!(m.row(3), Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn names_stop_at_nul() {
        let mut name = [0u8; 16];
        name[..6].copy_from_slice(b"turret");
        name[7] = b'x';
        assert_eq!(name_from_bytes(&name), "turret");
        assert_eq!(name_from_bytes(&[b'a'; 16]).len(), 16);
    }

    #[test]
    fn limb_name_must_be_terminated() {
        let mut data = vec![b'a'; 16];
        data.extend([0u8; 12]);
        assert!(matches!(
            LimbHeader::read(&mut BoundedReader::new(&data)),
            Err(Error::InvalidHeader(_))
        ));
        data[15] = 0;
        let header = LimbHeader::read(&mut BoundedReader::new(&data)).unwrap();
        assert_eq!(header.name().len(), 15);
    }

    #[test]
    fn tailer_rejects_unknown_normal_type() {
        let mut data = vec![0u8; LIMB_TAILER_SIZE - 1];
        data.push(3);
        assert!(matches!(
            LimbTailer::read(&mut BoundedReader::new(&data), 2),
            Err(Error::UnsupportedEncoding {
                limb: 2,
                normal_type: 3,
            })
        ));
    }
}
