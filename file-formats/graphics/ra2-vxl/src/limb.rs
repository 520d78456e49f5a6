use custom_debug::Debug;
use glam::{Mat4, Vec3};

use crate::header::{LimbHeader, LimbTailer, transform_to_mat4};
use crate::span::{Column, Voxel};
use crate::{Error, Result};

/// Axis-aligned box in limb-local units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    pub fn union(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// One rigid body of a voxel model
#[derive(Debug, Clone, PartialEq)]
pub struct Limb {
    pub header: LimbHeader,
    pub tailer: LimbTailer,
    /// `x_size * y_size` columns, row-major in y
    #[debug(skip)]
    columns: Vec<Column>,
}

impl Limb {
    pub fn new(header: LimbHeader, tailer: LimbTailer, columns: Vec<Column>) -> Self {
        Self {
            header,
            tailer,
            columns,
        }
    }

    pub fn name(&self) -> String {
        self.header.name().into_owned()
    }

    pub fn size(&self) -> [u8; 3] {
        self.tailer.size()
    }

    pub fn scale(&self) -> f32 {
        self.tailer.scale
    }

    pub fn bounds(&self) -> BoundingBox {
        BoundingBox {
            min: self.tailer.min_bounds,
            max: self.tailer.max_bounds,
        }
    }

    /// The limb transform as a 4x4 matrix with a `0, 0, 0, 1` bottom row.
    pub fn matrix(&self) -> Mat4 {
        transform_to_mat4(&self.tailer.transform)
    }

    pub fn normal_vector(&self, index: u8) -> Vec3 {
        self.tailer.normal_type.normal(index)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The voxel at `(x, y, z)`, `None` when that position is empty.
    pub fn voxel(&self, x: usize, y: usize, z: usize) -> Result<Option<Voxel>> {
        let [sx, sy, sz] = self.size();
        if x >= sx as usize || y >= sy as usize || z >= sz as usize {
            return Err(Error::CoordinateOutOfRange {
                x,
                y,
                z,
                size: self.size(),
            });
        }
        Ok(self
            .columns
            .get(y * sx as usize + x)
            .and_then(|column| column.get(z).copied().flatten()))
    }

    pub fn populated_count(&self) -> usize {
        self.columns
            .iter()
            .map(|column| column.iter().filter(|voxel| voxel.is_some()).count())
            .sum()
    }
}
