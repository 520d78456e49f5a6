//! Parser for Westwood voxel models (VXL) and their animations (HVA).
//!
//! A VXL file holds one or more limbs, each a grid of run-length encoded
//! voxel columns with a palette index and a normal index per voxel. An HVA
//! file supplies per-frame transforms for limbs by name.
//!
//! ```no_run
//! use ra2_vxl::{HvaFile, VxlFile};
//!
//! let vxl = VxlFile::open("htnk.vxl")?;
//! let hva = HvaFile::open("htnk.hva")?;
//! for limb in vxl.limbs() {
//!     let transform = hva.section_matrix(&limb.name(), 0)? * limb.matrix();
//!     println!("{}: {} voxels, {transform}", limb.name(), limb.populated_count());
//! }
//! # Ok::<(), ra2_vxl::Error>(())
//! ```

pub mod error;
pub mod file;
pub mod header;
pub mod hva;
pub mod limb;
pub mod normals;
pub mod span;

pub use error::{Error, Result};
pub use file::VxlFile;
pub use header::{LimbHeader, LimbTailer, Transform, VxlHeader, transform_to_mat4};
pub use hva::{HvaFile, HvaSection};
pub use limb::{BoundingBox, Limb};
pub use normals::{NormalType, RA2_NORMALS, TS_NORMALS};
pub use span::{Column, Voxel, decode_limb_body, decode_span};
