//! ra2-tools library
//!
//! Command implementations behind the `ra2-tools` binary.

pub mod cli;
pub mod commands;
pub mod utils;
