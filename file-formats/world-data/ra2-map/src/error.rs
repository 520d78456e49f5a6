//! Error types for map section decoding

use ra2_data::ReadError;
use thiserror::Error;

/// Result type alias for map operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding map sections
#[derive(Error, Debug)]
pub enum Error {
    /// Input ended inside a header or table
    #[error(transparent)]
    Read(#[from] ReadError),

    /// Unpacking the section container failed
    #[error("Pack error: {0}")]
    Pack(#[from] ra2_pack::Error),

    /// Decoded output does not fit the buffer provided for it
    #[error("Output overrun: {count} bytes at position {position} (capacity {limit})")]
    BufferOverrun {
        /// Start of the write
        position: usize,
        /// Length of the write
        count: usize,
        /// Output capacity
        limit: usize,
    },

    /// Unpacked preview holds fewer pixels than its declared size
    #[error("Preview is {actual} bytes, {width}x{height} RGB needs {expected}")]
    PreviewSize {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Required byte count
        expected: usize,
        /// Unpacked byte count
        actual: usize,
    },

    /// Section name that this crate does not know how to unpack
    #[error("Unknown map pack: {0}")]
    UnknownPack(String),
}
