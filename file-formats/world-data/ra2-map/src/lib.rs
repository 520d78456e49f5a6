//! Decoders for the packed sections of Red Alert 2 and Tiberian Sun map files.
//!
//! Map files are INI documents; a few of their sections hold Base64 encoded
//! packed binary data. This crate takes over once the section has been
//! Base64 decoded:
//!
//! - [`MapPack`] names each section and knows its codec
//! - [`preview`] turns `PreviewPack` data into an RGB thumbnail
//! - [`iso`] parses the terrain cells of `IsoMapPack5`
//!
//! INI and Base64 handling are left to the caller.

pub mod error;
pub mod iso;
pub mod pack;
pub mod preview;

pub use error::{Error, Result};
pub use iso::{IsoCell, parse_cells, read_iso_map_pack};
pub use pack::MapPack;
pub use preview::{
    ColourPair, ColourPairTable, PreviewImage, decode_colour_pairs, decode_colour_pairs_into,
};
