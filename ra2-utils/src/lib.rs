//! Shared helpers for the ra2-rs file format crates.

pub mod debug;
