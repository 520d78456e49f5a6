//! Pack format identifiers

use crate::{Error, Result};

/// Numeric ids used by tools to name a pack encoding
pub mod format_ids {
    /// LZO1X sections (`PreviewPack`, `IsoMapPack5`)
    pub const LZO: u8 = 1;
    /// Format80 sections (`OverlayPack`, `OverlayDataPack`)
    pub const FORMAT80: u8 = 2;
}

/// Codec applied to every section of a packed buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackFormat {
    /// LZO1X
    Lzo,
    /// Westwood Format80
    Format80,
}

impl PackFormat {
    pub fn id(self) -> u8 {
        match self {
            PackFormat::Lzo => format_ids::LZO,
            PackFormat::Format80 => format_ids::FORMAT80,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PackFormat::Lzo => "LZO",
            PackFormat::Format80 => "Format80",
        }
    }
}

impl TryFrom<u8> for PackFormat {
    type Error = Error;

    fn try_from(id: u8) -> Result<Self> {
        match id {
            format_ids::LZO => Ok(PackFormat::Lzo),
            format_ids::FORMAT80 => Ok(PackFormat::Format80),
            other => Err(Error::unsupported(format!("pack format id {other}"))),
        }
    }
}

/// Outcome of decoding one section into its output slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Bytes written to the output
    pub written: usize,
    /// Whether the stream ended on its own terminator rather than running out of input
    pub terminated: bool,
}
