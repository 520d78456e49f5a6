//! Individual section decoders

pub mod format80;
pub mod lzo;
