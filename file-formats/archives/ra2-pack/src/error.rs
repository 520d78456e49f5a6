//! Error types for pack section decoding

use std::fmt;

use ra2_data::ReadError;
use thiserror::Error;

/// Result type alias for pack operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a copy ran past its buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overrun {
    /// Source range reaches bytes that have not been produced yet
    Read,
    /// Destination range does not fit the output capacity
    Write,
}

impl fmt::Display for Overrun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// Main error type for pack operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input ended or an offset fell outside the buffer
    #[error(transparent)]
    Read(#[from] ReadError),

    /// A copy or fill ran outside the buffers it is allowed to touch
    #[error("Buffer {kind} overrun: {count} bytes at position {position} (limit {limit})")]
    BufferOverrun {
        /// Read or write side
        kind: Overrun,
        /// Start of the offending range
        position: usize,
        /// Length of the offending range
        count: usize,
        /// First position outside the allowed range
        limit: usize,
    },

    /// Encoding id or backend this build cannot decode
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    /// Section header claims more compressed than decompressed bytes
    #[error("Pack section {index}: compressed length {compressed} exceeds decompressed length {decompressed}")]
    PackFormat {
        /// Section index
        index: usize,
        /// Declared compressed length
        compressed: u16,
        /// Declared decompressed length
        decompressed: u16,
    },

    /// Section decoded to a different size than its header declared
    #[error("Pack section {index}: expected {expected} bytes, decoded {actual}")]
    SectionSizeMismatch {
        /// Section index
        index: usize,
        /// Declared decompressed length
        expected: usize,
        /// Bytes actually produced
        actual: usize,
    },

    /// A section other than the last ran out of input before its terminator
    #[error("Pack section {index} ended without a terminate command")]
    UnterminatedSection {
        /// Section index
        index: usize,
    },

    /// LZO backend failure
    #[error("LZO error: {0}")]
    Lzo(String),
}

impl Error {
    /// Create a new UnsupportedEncoding error
    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        Error::UnsupportedEncoding(msg.into())
    }

    pub(crate) fn read_overrun(position: usize, count: usize, limit: usize) -> Self {
        Error::BufferOverrun {
            kind: Overrun::Read,
            position,
            count,
            limit,
        }
    }

    pub(crate) fn write_overrun(position: usize, count: usize, limit: usize) -> Self {
        Error::BufferOverrun {
            kind: Overrun::Write,
            position,
            count,
            limit,
        }
    }

    /// Check if this error means the input data is damaged rather than unsupported
    pub fn is_corruption(&self) -> bool {
        !matches!(self, Error::UnsupportedEncoding(_))
    }
}
