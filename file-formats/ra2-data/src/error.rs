use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// A read asked for more bytes than the buffer holds past the cursor
    #[error("Truncated input at offset {offset}: wanted {wanted} bytes, {available} available")]
    TruncatedInput {
        offset: usize,
        wanted: usize,
        available: usize,
    },

    /// A seek landed outside `[0, len]`
    #[error("Invalid offset {offset} (buffer is {len} bytes)")]
    InvalidOffset { offset: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, ReadError>;
