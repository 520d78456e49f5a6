//! Command implementations for each file format

pub mod hva;
pub mod pack;
pub mod shp;
pub mod tmp;
pub mod vxl;
