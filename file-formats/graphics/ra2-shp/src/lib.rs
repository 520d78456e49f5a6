//! Parser for Westwood SHP sprite files as used by Red Alert 2 and Tiberian Sun.
//!
//! A SHP file holds a list of 8-bit palette-indexed frames. Each frame has
//! its own header naming one of four encodings ([`Compression`]); frames are
//! decoded eagerly when the file is parsed.
//!
//! ```
//! use ra2_shp::ShpFile;
//!
//! // One 2x2 raw frame
//! let mut data = vec![0, 0, 2, 0, 2, 0, 1, 0];
//! data.extend([0, 0, 0, 0, 2, 0, 2, 0, 1, 0, 0, 0]);
//! data.extend([0, 0, 0, 0, 0, 0, 0, 0, 32, 0, 0, 0]);
//! data.extend([1, 2, 3, 4]);
//!
//! let shp = ShpFile::parse(&data).unwrap();
//! assert_eq!(shp.pixel(0, 1, 1).unwrap(), 4);
//! ```

pub mod decode;
pub mod error;
pub mod file;
pub mod header;

pub use decode::{decode_frame, decode_pixels};
pub use error::{Error, Result};
pub use file::{Frame, ShpFile, parse_headers};
pub use header::{Compression, FrameHeader, ShpHeader};
