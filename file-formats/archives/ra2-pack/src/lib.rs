//! Decoder for the packed sections embedded in Red Alert 2 and Tiberian Sun maps.
//!
//! Map files carry several Base64 encoded INI sections (`IsoMapPack5`,
//! `OverlayPack`, `PreviewPack`, ...). Once Base64 decoded, each is a packed
//! buffer: a run of independently compressed sections using either Westwood's
//! Format80 codec or LZO1X.
//!
//! # Examples
//!
//! ```
//! use ra2_pack::{PackFormat, unpack};
//!
//! // One section: a 4 byte Format80 fill expanding to 8 bytes.
//! let packed = [4, 0, 8, 0, 0xFE, 8, 0, 0x2A];
//! let data = unpack(&packed, PackFormat::Format80)?;
//! assert_eq!(data, vec![0x2A; 8]);
//! # Ok::<(), ra2_pack::Error>(())
//! ```

pub mod compression;
pub mod container;
pub mod error;

pub use compression::{Decoded, PackFormat, format80, lzo};
pub use container::{PackedSection, SectionDecoder, sections, unpack, unpack_with, unpacked_size};
pub use error::{Error, Overrun, Result};
