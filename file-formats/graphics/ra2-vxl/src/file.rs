use std::fmt;
use std::fs;
use std::io::Write;
use std::path::Path;

use ra2_data::{BoundedReader, Palette};

use crate::header::{LimbHeader, LimbTailer, VxlHeader};
use crate::limb::{BoundingBox, Limb};
use crate::span::decode_limb_body;
use crate::{Error, Result};

/// A parsed voxel model
#[derive(Debug, Clone, PartialEq)]
pub struct VxlFile {
    pub header: VxlHeader,
    limbs: Vec<Limb>,
}

impl VxlFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::parse(&data)
    }

    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BoundedReader::new(data);
        let header = VxlHeader::read(&mut reader)?;
        let limb_count = header.limb_count as usize;

        let mut headers = Vec::with_capacity(limb_count.min(reader.remaining()));
        for index in 0..limb_count {
            headers.push(LimbHeader::read(&mut reader).map_err(|e| e.in_limb(index))?);
        }

        let body = reader.read_bytes(header.body_size as usize)?;

        let mut tailers = Vec::with_capacity(headers.len());
        for index in 0..limb_count {
            tailers.push(LimbTailer::read(&mut reader, index).map_err(|e| e.in_limb(index))?);
        }

        let limbs = headers
            .into_iter()
            .zip(tailers)
            .enumerate()
            .map(|(index, (limb_header, tailer))| {
                let columns = decode_limb_body(body, &tailer).map_err(|e| e.in_limb(index))?;
                Ok(Limb::new(limb_header, tailer, columns))
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Loaded {} limbs ({})",
            limbs.len(),
            limbs
                .iter()
                .map(Limb::name)
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(Self { header, limbs })
    }

    pub fn palette(&self) -> &Palette {
        &self.header.palette
    }

    pub fn limb_count(&self) -> usize {
        self.limbs.len()
    }

    pub fn limbs(&self) -> &[Limb] {
        &self.limbs
    }

    pub fn limb(&self, index: usize) -> Result<&Limb> {
        self.limbs.get(index).ok_or(Error::LimbOutOfRange {
            index,
            count: self.limbs.len(),
        })
    }

    pub fn limb_by_name(&self, name: &str) -> Result<&Limb> {
        self.limbs
            .iter()
            .find(|limb| limb.header.name() == name)
            .ok_or_else(|| Error::LimbNotFound(name.to_string()))
    }

    /// The union of every limb's bounding box, `None` for a model without limbs.
    pub fn total_bounds(&self) -> Option<BoundingBox> {
        self.limbs
            .iter()
            .map(Limb::bounds)
            .reduce(BoundingBox::union)
    }

    /// Write one limb as a raw NRRD volume.
    ///
    /// The volume has five bytes per voxel (used flag, RGB from the model
    /// palette, normal index) and is ordered with x varying fastest.
    pub fn write_limb_nrrd<W: Write>(&self, limb: &Limb, out: &mut W) -> Result<()> {
        let [sx, sy, sz] = limb.size();
        write!(
            out,
            "NRRD0001\n\
             type: uint8_t\n\
             dimension: 4\n\
             # Dimensions are used/R/G/B/normal, x, y, z\n\
             sizes: 5 {sx} {sy} {sz}\n\
             encoding: raw\n\
             endian: little\n"
        )?;

        let mut voxels = Vec::with_capacity(5 * sx as usize * sy as usize * sz as usize);
        for z in 0..sz as usize {
            for y in 0..sy as usize {
                for x in 0..sx as usize {
                    match limb.voxel(x, y, z)? {
                        Some(voxel) => {
                            let [r, g, b] = self.palette().rgb(voxel.colour);
                            voxels.extend_from_slice(&[1, r, g, b, voxel.normal]);
                        }
                        None => voxels.extend_from_slice(&[0; 5]),
                    }
                }
            }
        }
        out.write_all(&voxels)?;
        Ok(())
    }
}

fn fmt_rows(f: &mut fmt::Formatter<'_>, rows: &[[f32; 4]; 3], suffix: [&str; 3]) -> fmt::Result {
    let labels = ["            ", "  Transform:", "            "];
    for ((label, row), suffix) in labels.iter().zip(rows).zip(suffix) {
        writeln!(
            f,
            "{label}|{:8.3}  {:8.3}  {:8.3}  {:8.3}|{suffix}",
            row[0], row[1], row[2], row[3]
        )?;
    }
    Ok(())
}

impl fmt::Display for VxlFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Contains {} limbs", self.limbs.len())?;
        for (i, limb) in self.limbs.iter().enumerate() {
            let [sx, sy, sz] = limb.size();
            let bounds = limb.bounds();
            writeln!(
                f,
                "Limb {i} - \"{}\" (number {}) {sx} x {sy} x {sz}",
                limb.name(),
                limb.header.number
            )?;
            writeln!(
                f,
                "  Bounding ({:.6}, {:.6}, {:.6}) -> ({:.6}, {:.6}, {:.6})",
                bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
            )?;
            let scale = format!(" scale = {:.6}", limb.scale());
            fmt_rows(f, &limb.tailer.transform, ["", &scale, ""])?;
        }
        Ok(())
    }
}
