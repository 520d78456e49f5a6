//! Error handling for VXL and HVA parsing

use std::io;

use ra2_data::ReadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A read ran past the end of the data, or a seek left it
    #[error(transparent)]
    Read(#[from] ReadError),

    /// A fixed header field holds an unexpected value
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Limb tailer names a normal table other than 2 or 4
    #[error("Limb {limb}: unknown normal encoding {normal_type}")]
    UnsupportedEncoding { limb: usize, normal_type: u8 },

    /// Head and tail voxel counts of a run disagree
    #[error("Head and tail voxel counts do not match (head == {head}, tail == {tail})")]
    RunLengthMismatch { head: u8, tail: u8 },

    /// A run would write past the top of the column
    #[error("Z {z}: cannot write {count} voxels (z size {z_size})")]
    BufferOverrun { z: usize, count: usize, z_size: u8 },

    /// Voxel coordinate outside the limb
    #[error("Voxel ({x}, {y}, {z}) out of range for a {size:?} limb")]
    CoordinateOutOfRange { x: usize, y: usize, z: usize, size: [u8; 3] },

    /// No limb has this name
    #[error("Could not find limb with name \"{0}\"")]
    LimbNotFound(String),

    /// Limb index past the end of the model
    #[error("Limb {index} out of range ({count} limbs)")]
    LimbOutOfRange { index: usize, count: usize },

    /// No HVA section has this name
    #[error("Could not find section with name \"{0}\"")]
    SectionNotFound(String),

    /// HVA section index past the end
    #[error("Section {index} out of range ({count} sections)")]
    SectionOutOfRange { index: usize, count: usize },

    /// HVA frame past the end of the animation
    #[error("Frame {frame} is out of range (there are only {count} frames)")]
    FrameOutOfRange { frame: usize, count: usize },

    /// A column failed to decode; wraps the underlying error
    #[error("Column {column}: {source}")]
    Column {
        column: usize,
        #[source]
        source: Box<Error>,
    },

    /// A limb failed to decode; wraps the underlying error
    #[error("Limb {index}: {source}")]
    Limb {
        index: usize,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    pub(crate) fn in_column(self, column: usize) -> Self {
        Error::Column {
            column,
            source: Box::new(self),
        }
    }

    pub(crate) fn in_limb(self, index: usize) -> Self {
        match self {
            Error::UnsupportedEncoding { .. } => self,
            other => Error::Limb {
                index,
                source: Box::new(other),
            },
        }
    }

    /// Whether the data itself is malformed, as opposed to a bad request or I/O failure.
    pub fn is_corruption(&self) -> bool {
        match self {
            Error::Read(_)
            | Error::InvalidHeader(_)
            | Error::UnsupportedEncoding { .. }
            | Error::RunLengthMismatch { .. }
            | Error::BufferOverrun { .. } => true,
            Error::Column { source, .. } | Error::Limb { source, .. } => source.is_corruption(),
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = Error::RunLengthMismatch { head: 3, tail: 2 }
            .in_column(7)
            .in_limb(1);
        assert_eq!(
            error.to_string(),
            "Limb 1: Column 7: Head and tail voxel counts do not match (head == 3, tail == 2)"
        );
        assert!(error.is_corruption());
        assert!(!Error::LimbNotFound("turret".into()).is_corruption());
    }
}
