//! 256-entry packed RGB palettes.
//!
//! Westwood palettes usually store 6 significant bits per channel, so a value
//! has to be shifted left by `8 - depth` to reach full 8-bit range. Voxel
//! models embed full-depth palettes instead; the depth is set per palette.

use custom_debug::Debug;
use glam::Vec3;
use ra2_utils::debug;

use crate::error::Result;
use crate::reader::{BoundedReader, ReadLe};

pub const PALETTE_ENTRIES: usize = 256;
/// Size of a packed palette on disk.
pub const PALETTE_SIZE: usize = PALETTE_ENTRIES * 3;

pub const DEFAULT_CHANNEL_DEPTH: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    #[debug(with = debug::trimmed_collection_fmt)]
    entries: Box<[[u8; 3]; PALETTE_ENTRIES]>,
    channel_depth: [u8; 3],
}

impl Palette {
    /// A palette from already-unpacked entries, using the default depth.
    pub fn from_entries(entries: [[u8; 3]; PALETTE_ENTRIES]) -> Self {
        Self {
            entries: Box::new(entries),
            channel_depth: [DEFAULT_CHANNEL_DEPTH; 3],
        }
    }

    /// Parse 768 packed bytes. Extra trailing bytes are ignored.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        BoundedReader::new(data).read()
    }

    /// Set the per-channel bit depth. Depths above 8 are treated as 8.
    pub fn with_channel_depth(mut self, red: u8, green: u8, blue: u8) -> Self {
        self.set_channel_depth(red, green, blue);
        self
    }

    pub fn set_channel_depth(&mut self, red: u8, green: u8, blue: u8) {
        self.channel_depth = [red.min(8), green.min(8), blue.min(8)];
    }

    pub fn channel_depth(&self) -> [u8; 3] {
        self.channel_depth
    }

    /// The stored entry, without depth normalisation.
    pub fn raw(&self, index: u8) -> [u8; 3] {
        self.entries[index as usize]
    }

    /// The entry normalised to 8 bits per channel.
    pub fn rgb(&self, index: u8) -> [u8; 3] {
        let raw = self.raw(index);
        let mut out = [0u8; 3];
        for ((dst, value), depth) in out.iter_mut().zip(raw).zip(self.channel_depth) {
            *dst = value.checked_shl(u32::from(8 - depth)).unwrap_or(0);
        }
        out
    }

    /// The entry as floating point colour in `[0, 1]`.
    pub fn rgb_f32(&self, index: u8) -> Vec3 {
        let [r, g, b] = self.rgb(index);
        Vec3::new(r as f32, g as f32, b as f32) / 255.0
    }
}

impl ReadLe for Palette {
    fn read_le(reader: &mut BoundedReader<'_>) -> Result<Self> {
        let packed = reader.read_bytes(PALETTE_SIZE)?;
        let mut entries = [[0u8; 3]; PALETTE_ENTRIES];
        for (entry, rgb) in entries.iter_mut().zip(packed.chunks_exact(3)) {
            entry.copy_from_slice(rgb);
        }
        Ok(Self::from_entries(entries))
    }
}
