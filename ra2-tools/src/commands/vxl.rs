//! VXL voxel model command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use ra2_vxl::{Limb, VxlFile};

use crate::utils::{add_table_row, create_table, print_file_line, print_heading};

#[derive(Subcommand)]
pub enum VxlCommands {
    /// Display limbs, sizes, bounds and voxel counts of a VXL file
    Info {
        /// Path to the VXL file
        file: PathBuf,

        /// Also print each limb's transform
        #[arg(long)]
        transforms: bool,
    },

    /// Write one limb as a raw NRRD volume
    Nrrd {
        /// Path to the VXL file
        file: PathBuf,

        /// Limb name or index
        #[arg(short, long, default_value = "0")]
        limb: String,

        /// Output path
        #[arg(short, long)]
        output: PathBuf,
    },
}

pub fn execute(command: VxlCommands) -> Result<()> {
    match command {
        VxlCommands::Info { file, transforms } => execute_info(&file, transforms),
        VxlCommands::Nrrd { file, limb, output } => execute_nrrd(&file, &limb, &output),
    }
}

fn load(path: &Path) -> Result<(usize, VxlFile)> {
    let data =
        fs::read(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let vxl = VxlFile::parse(&data)
        .with_context(|| format!("Failed to parse VXL file: {}", path.display()))?;
    Ok((data.len(), vxl))
}

fn execute_info(path: &Path, transforms: bool) -> Result<()> {
    let (size, vxl) = load(path)?;

    print_heading("VXL File Information");
    print_file_line(path, size);
    println!("{}: {}", style("Limbs").bold(), vxl.limb_count());
    println!(
        "{}: {} - {}",
        style("Remap range").bold(),
        vxl.header.remap_start,
        vxl.header.remap_end
    );
    if let Some(bounds) = vxl.total_bounds() {
        println!(
            "{}: {} -> {}",
            style("Bounds").bold(),
            bounds.min,
            bounds.max
        );
    }
    println!();

    let mut table = create_table(&["Limb", "Name", "Size", "Voxels", "Normals", "Scale"]);
    for (i, limb) in vxl.limbs().iter().enumerate() {
        let [x, y, z] = limb.size();
        add_table_row(
            &mut table,
            vec![
                i.to_string(),
                limb.name(),
                format!("{x} x {y} x {z}"),
                limb.populated_count().to_string(),
                format!("{:?}", limb.tailer.normal_type),
                format!("{:.4}", limb.scale()),
            ],
        );
    }
    table.printstd();

    if transforms {
        println!();
        print!("{vxl}");
    }
    Ok(())
}

fn find_limb<'a>(vxl: &'a VxlFile, selector: &str) -> Result<&'a Limb> {
    let limb = match selector.parse::<usize>() {
        Ok(index) => vxl.limb(index),
        Err(_) => vxl.limb_by_name(selector),
    };
    Ok(limb?)
}

fn execute_nrrd(path: &Path, selector: &str, output: &Path) -> Result<()> {
    let (_, vxl) = load(path)?;
    let limb = find_limb(&vxl, selector)?;

    let file = File::create(output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    vxl.write_limb_nrrd(limb, &mut writer)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!(
        "Wrote limb \"{}\" to {}",
        limb.name(),
        style(output.display()).cyan()
    );
    Ok(())
}
