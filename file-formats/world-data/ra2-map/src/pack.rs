//! Names and encodings of the packed INI sections in a map file

use std::fmt;
use std::str::FromStr;

use ra2_pack::PackFormat;

use crate::{Error, Result};

/// A Base64 encoded, packed section of a map file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapPack {
    /// Minimap thumbnail, RGB pixels
    PreviewPack,
    /// Terrain cells, see [`crate::iso`]
    IsoMapPack5,
    /// Overlay frame numbers, one byte per cell
    OverlayDataPack,
    /// Overlay type ids, one byte per cell
    OverlayPack,
}

impl MapPack {
    pub const ALL: [MapPack; 4] = [
        MapPack::PreviewPack,
        MapPack::IsoMapPack5,
        MapPack::OverlayDataPack,
        MapPack::OverlayPack,
    ];

    /// The INI section name
    pub fn name(self) -> &'static str {
        match self {
            MapPack::PreviewPack => "PreviewPack",
            MapPack::IsoMapPack5 => "IsoMapPack5",
            MapPack::OverlayDataPack => "OverlayDataPack",
            MapPack::OverlayPack => "OverlayPack",
        }
    }

    /// The codec used by every section of this pack
    pub fn format(self) -> PackFormat {
        match self {
            MapPack::PreviewPack | MapPack::IsoMapPack5 => PackFormat::Lzo,
            MapPack::OverlayDataPack | MapPack::OverlayPack => PackFormat::Format80,
        }
    }

    /// Unpack the Base64 decoded contents of this section.
    pub fn unpack(self, data: &[u8]) -> Result<Vec<u8>> {
        let unpacked = ra2_pack::unpack(data, self.format())?;
        log::debug!(
            "Unpacked {} bytes from {} ({})",
            unpacked.len(),
            self.name(),
            self.format().name()
        );
        Ok(unpacked)
    }
}

impl fmt::Display for MapPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapPack {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        MapPack::ALL
            .into_iter()
            .find(|pack| pack.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPack(s.to_string()))
    }
}
