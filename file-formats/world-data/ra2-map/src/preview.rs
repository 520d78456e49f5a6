//! Map preview thumbnails
//!
//! Two encodings exist. `PreviewPack` sections in current maps simply unpack
//! to 24-bit RGB pixels ([`PreviewImage::from_pack`]). Older previews use a
//! palette-pair stream ([`decode_colour_pairs`]): a table of colour pairs is
//! built from the map palette, optionally extended by pairs stored in the
//! stream, and every following 16-bit index expands to two RGB pixels.
//!
//! ```text
//! u16 extra_pair_count
//! u16 extra_pairs[extra_pair_count][6]   // r, g, b, r, g, b (low byte used)
//! u16 indices[..]
//! ```

use custom_debug::Debug;
use ra2_data::{BoundedReader, Palette};
use ra2_utils::debug;

use crate::pack::MapPack;
use crate::{Error, Result};

pub const DEFAULT_PREVIEW_WIDTH: u32 = 160;
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 80;

/// Pairs derived from palette entries `(0, 1), (2, 3), ... (254, 255)`.
pub const BASE_COLOUR_PAIRS: usize = 128;

/// Two RGB triples packed into the low 48 bits of a `u64`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColourPair(u64);

impl ColourPair {
    pub fn new(first: [u8; 3], second: [u8; 3]) -> Self {
        Self::from_bytes([first[0], first[1], first[2], second[0], second[1], second[2]])
    }

    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes.iter().fold(0u64, |key, &b| (key << 8) | b as u64))
    }

    pub fn key(self) -> u64 {
        self.0
    }

    pub fn to_bytes(self) -> [u8; 6] {
        let mut out = [0u8; 6];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = (self.0 >> (40 - 8 * i)) as u8;
        }
        out
    }
}

/// The lookup table indexed by a palette-pair stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColourPairTable {
    #[debug(with = debug::trimmed_collection_fmt)]
    pairs: Vec<ColourPair>,
}

impl ColourPairTable {
    /// The 128 pairs every table starts with.
    pub fn from_palette(palette: &Palette) -> Self {
        let pairs = (0..BASE_COLOUR_PAIRS)
            .map(|i| ColourPair::new(palette.rgb((2 * i) as u8), palette.rgb((2 * i + 1) as u8)))
            .collect();
        Self { pairs }
    }

    pub fn push(&mut self, pair: ColourPair) {
        self.pairs.push(pair);
    }

    pub fn get(&self, index: u16) -> Option<ColourPair> {
        self.pairs.get(index as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Decode a palette-pair stream into RGB bytes.
///
/// An index outside the table is logged and written as a black pair; only a
/// write past `output_capacity` or a truncated header is fatal.
pub fn decode_colour_pairs(
    input: &[u8],
    palette: &Palette,
    output_capacity: usize,
) -> Result<Vec<u8>> {
    let mut output = vec![0u8; output_capacity];
    let written = decode_colour_pairs_into(input, palette, &mut output)?;
    output.truncate(written);
    Ok(output)
}

/// Decode into a caller provided buffer, returning the bytes written.
pub fn decode_colour_pairs_into(input: &[u8], palette: &Palette, output: &mut [u8]) -> Result<usize> {
    let words = if input.len() % 2 == 0 {
        input
    } else {
        log::warn!(
            "Preview stream has odd length {}, ignoring the last byte",
            input.len()
        );
        &input[..input.len() - 1]
    };
    let mut reader = BoundedReader::new(words);

    let mut table = ColourPairTable::from_palette(palette);
    let extra = reader.read_u16()?;
    for _ in 0..extra {
        let channels: [u16; 6] = reader.read()?;
        table.push(ColourPair::from_bytes(channels.map(|c| c as u8)));
    }
    log::debug!(
        "Preview colour table: {} base + {} stored pairs",
        BASE_COLOUR_PAIRS,
        extra
    );

    let mut out = 0usize;
    while !reader.is_at_end() {
        let position = reader.position();
        let index = reader.read_u16()?;
        let pair = table.get(index).unwrap_or_else(|| {
            log::error!(
                "Position {}: colour pair {} is outside the table of {} pairs",
                position,
                index,
                table.len()
            );
            ColourPair::default()
        });

        let end = out + 6;
        if end > output.len() {
            return Err(Error::BufferOverrun {
                position: out,
                count: 6,
                limit: output.len(),
            });
        }
        output[out..end].copy_from_slice(&pair.to_bytes());
        out = end;
    }

    Ok(out)
}

/// An RGB map thumbnail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewImage {
    pub width: u32,
    pub height: u32,
    #[debug(with = debug::trimmed_collection_fmt)]
    pub rgb: Vec<u8>,
}

impl PreviewImage {
    /// Unpack a Base64 decoded `PreviewPack` section of the given size.
    ///
    /// Bytes past `width * height * 3` are dropped.
    pub fn from_pack(data: &[u8], width: u32, height: u32) -> Result<Self> {
        Self::from_rgb(MapPack::PreviewPack.unpack(data)?, width, height)
    }

    pub fn from_rgb(mut rgb: Vec<u8>, width: u32, height: u32) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if rgb.len() < expected {
            return Err(Error::PreviewSize {
                width,
                height,
                expected,
                actual: rgb.len(),
            });
        }
        rgb.truncate(expected);
        Ok(Self { width, height, rgb })
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.rgb[i], self.rgb[i + 1], self.rgb[i + 2]])
    }
}
