//! Run-length voxel columns
//!
//! A limb's body holds two tables of `x_size * y_size` i32 offsets (span
//! starts, then span ends), followed by the span data. A column whose start
//! or end is -1 is empty. Otherwise its data is a sequence of runs:
//!
//! ```text
//! u8 skip                       // empty voxels before the run
//! u8 count
//! (u8 colour, u8 normal)[count]
//! u8 count                      // repeated
//! ```
//!
//! until the z cursor reaches the limb's z size. Two bytes of padding follow
//! each column.

use ra2_data::{BoundedReader, ReadError};

use crate::header::LimbTailer;
use crate::{Error, Result};

const EMPTY_SPAN: i32 = -1;
const SPAN_PADDING: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Voxel {
    /// Palette index
    pub colour: u8,
    /// Index into the limb's normal table
    pub normal: u8,
}

/// Voxels of one column indexed by z, up to the last populated z.
pub type Column = Vec<Option<Voxel>>;

/// Decode one column's runs from the reader's position.
///
/// The returned column ends after the last populated voxel; an empty column
/// is an empty vector.
pub fn decode_span(reader: &mut BoundedReader<'_>, z_size: u8) -> Result<Column> {
    let limit = z_size as usize;
    let mut column = vec![None; limit];
    let mut z = 0usize;
    let mut extent = 0usize;

    while z < limit {
        z += reader.read_u8()? as usize;
        if z >= limit {
            break;
        }
        let count = reader.read_u8()?;
        let run = count as usize;
        if z + run > limit {
            return Err(Error::BufferOverrun {
                z,
                count: run,
                z_size,
            });
        }
        let pairs = reader.read_bytes(2 * run)?;
        for (slot, pair) in column[z..z + run].iter_mut().zip(pairs.chunks_exact(2)) {
            *slot = Some(Voxel {
                colour: pair[0],
                normal: pair[1],
            });
        }
        z += run;
        extent = z;

        let tail = reader.read_u8()?;
        if tail != count {
            return Err(Error::RunLengthMismatch { head: count, tail });
        }
    }

    column.truncate(extent);
    Ok(column)
}

/// Decode every column of a limb from the shared body region.
pub fn decode_limb_body(body: &[u8], tailer: &LimbTailer) -> Result<Vec<Column>> {
    let mut reader = BoundedReader::new(body);
    let count = tailer.column_count();

    reader.seek(tailer.span_start_offset as usize)?;
    let starts: Vec<i32> = reader.read_vec(count)?;
    let ends: Vec<i32> = reader.read_vec(count)?;

    let data_start = reader.position();
    if data_start != tailer.span_data_offset as usize {
        log::warn!(
            "Span data begins at {}, tailer says {}",
            data_start,
            tailer.span_data_offset
        );
    }

    let mut columns = Vec::with_capacity(count);
    for (index, (&start, &end)) in starts.iter().zip(&ends).enumerate() {
        if start == EMPTY_SPAN || end == EMPTY_SPAN {
            columns.push(Column::new());
            continue;
        }
        let column = decode_column(&mut reader, data_start, start, tailer.z_size)
            .map_err(|e| e.in_column(index))?;
        columns.push(column);
    }
    Ok(columns)
}

fn decode_column(
    reader: &mut BoundedReader<'_>,
    data_start: usize,
    start: i32,
    z_size: u8,
) -> Result<Column> {
    let target = usize::try_from(start)
        .ok()
        .and_then(|start| data_start.checked_add(start))
        .ok_or(ReadError::InvalidOffset {
            offset: data_start,
            len: reader.len(),
        })?;
    if reader.position() != target {
        log::debug!(
            "Column data expected at {}, reader at {}",
            target,
            reader.position()
        );
        reader.seek(target)?;
    }
    let column = decode_span(reader, z_size)?;
    reader.skip(SPAN_PADDING)?;
    Ok(column)
}
