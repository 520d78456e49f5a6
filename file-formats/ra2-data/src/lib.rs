//! Building blocks shared by every ra2-rs decoder.
//!
//! [`BoundedReader`] is the single place where input bounds are enforced:
//! each format crate reads its headers and payloads through it and turns the
//! resulting [`ReadError`] into its own error type.

pub mod error;
pub mod palette;
pub mod reader;

pub use error::{ReadError, Result};
pub use palette::Palette;
pub use reader::{BoundedReader, ReadLe};

pub mod prelude {
    pub use crate::error::ReadError;
    pub use crate::palette::Palette;
    pub use crate::reader::{BoundedReader, ReadLe};
}
