//! HVA animation files
//!
//! ```text
//! char  file_name[16]
//! u32   frame_count
//! u32   section_count
//! char  section_names[section_count][16]
//! f32   matrices[frame_count][section_count][3][4]
//! ```
//!
//! Each section animates the VXL limb of the same name. Matrices are stored
//! frame-major: every section's matrix for frame 0, then frame 1, and so on.

use std::fmt;
use std::fs;
use std::path::Path;

use custom_debug::Debug;
use glam::Mat4;
use ra2_data::BoundedReader;
use ra2_utils::debug;

use crate::header::{Transform, name_from_bytes, transform_to_mat4};
use crate::{Error, Result};

/// Translation factor applied when printing section matrices
pub const TRANSLATION_SCALE: f32 = 1.0 / 12.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HvaSection {
    pub name: String,
    /// One transform per frame
    #[debug(with = debug::trimmed_collection_fmt)]
    pub matrices: Vec<Transform>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HvaFile {
    pub file_name: String,
    pub frame_count: usize,
    pub sections: Vec<HvaSection>,
}

impl HvaFile {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = fs::read(path)?;
        Self::parse(&data)
    }

    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut reader = BoundedReader::new(data);
        let file_name = name_from_bytes(&reader.read_array()?).into_owned();
        let frame_count = reader.read_u32()? as usize;
        let section_count = reader.read_u32()? as usize;
        log::debug!(
            "HVA \"{}\" has {} frames for {} sections",
            file_name,
            frame_count,
            section_count
        );

        let names: Vec<[u8; 16]> = reader.read_vec(section_count)?;
        let matrices: Vec<Transform> = reader.read_vec(frame_count.saturating_mul(section_count))?;

        let sections = names
            .iter()
            .enumerate()
            .map(|(index, name)| HvaSection {
                name: name_from_bytes(name).into_owned(),
                matrices: matrices
                    .iter()
                    .skip(index)
                    .step_by(section_count)
                    .copied()
                    .collect(),
            })
            .collect();

        Ok(Self {
            file_name,
            frame_count,
            sections,
        })
    }

    pub fn section_index(&self, name: &str) -> Result<usize> {
        self.sections
            .iter()
            .position(|section| section.name == name)
            .ok_or_else(|| Error::SectionNotFound(name.to_string()))
    }

    /// The transform of `section` at `frame` as a 4x4 matrix.
    pub fn matrix(&self, section: usize, frame: usize) -> Result<Mat4> {
        let entry = self.sections.get(section).ok_or(Error::SectionOutOfRange {
            index: section,
            count: self.sections.len(),
        })?;
        let transform = entry.matrices.get(frame).ok_or(Error::FrameOutOfRange {
            frame,
            count: self.frame_count,
        })?;
        Ok(transform_to_mat4(transform))
    }

    pub fn section_matrix(&self, name: &str, frame: usize) -> Result<Mat4> {
        self.matrix(self.section_index(name)?, frame)
    }
}

impl fmt::Display for HvaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Contains {} frames for {} sections",
            self.frame_count,
            self.sections.len()
        )?;
        for section in &self.sections {
            writeln!(f, "Section {}", section.name)?;
            for (frame, m) in section.matrices.iter().enumerate() {
                let label = format!("  Frame {frame:03}:");
                let labels = ["            ", label.as_str(), "            "];
                let middles = ["       _  ", " x 0.083  ", "          "];
                for ((label, row), middle) in labels.iter().zip(m).zip(middles) {
                    writeln!(
                        f,
                        "{label}|{:8.3}  {:8.3}  {:8.3}  {:8.3}|{middle}|{:8.3}|",
                        row[0],
                        row[1],
                        row[2],
                        row[3],
                        row[3] * TRANSLATION_SCALE
                    )?;
                }
                writeln!(f, "             --------------------------------------")?;
            }
        }
        Ok(())
    }
}
