//! Error handling for SHP parsing

use std::io;

use ra2_data::ReadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading the file from disk failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A header or pixel read ran past the end of the data
    #[error(transparent)]
    Read(#[from] ReadError),

    /// Frame header names a compression type this decoder does not know
    #[error("Frame {frame}: unsupported compression type 0x{compression:02X}")]
    UnsupportedEncoding { frame: usize, compression: u8 },

    /// A header field that must hold a fixed value does not
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Decoded pixels would not fit the frame
    #[error("Scanline {scanline}: writing at x {x} overruns the {width}x{height} frame")]
    ImageOverrun {
        scanline: usize,
        x: usize,
        width: u16,
        height: u16,
    },

    /// Frame index past the end of the file
    #[error("Frame {index} out of range ({count} frames)")]
    FrameOutOfRange { index: usize, count: usize },

    /// Pixel coordinate outside the frame
    #[error("Pixel ({x}, {y}) out of range for a {width}x{height} frame")]
    PixelOutOfRange {
        x: usize,
        y: usize,
        width: u16,
        height: u16,
    },

    /// A frame failed to decode; wraps the underlying error
    #[error("Frame {index}: {source}")]
    Frame {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn in_frame(self, index: usize) -> Self {
        match self {
            Error::Frame { .. } | Error::UnsupportedEncoding { .. } => self,
            other => Error::Frame {
                index,
                source: Box::new(other),
            },
        }
    }

    /// Whether the data itself is malformed, as opposed to a bad request or I/O failure.
    pub fn is_corruption(&self) -> bool {
        match self {
            Error::Io(_) | Error::FrameOutOfRange { .. } | Error::PixelOutOfRange { .. } => false,
            Error::Frame { source, .. } => source.is_corruption(),
            _ => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
