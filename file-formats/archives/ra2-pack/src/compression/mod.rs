//! Section codecs used by packed map data

mod algorithms;
mod methods;

pub use algorithms::format80;
pub use algorithms::lzo;
pub use methods::{Decoded, PackFormat, format_ids};
