//! Shared utilities for the ra2-tools CLI

pub mod format;
pub mod table;

pub use format::*;
pub use table::*;
