//! SHP sprite command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;
use std::fs;
use std::path::{Path, PathBuf};

use ra2_shp::ShpFile;

use crate::utils::{add_table_row, create_table, format_bytes, print_file_line, print_heading};

#[derive(Subcommand)]
pub enum ShpCommands {
    /// Display the frame table of an SHP file
    Info {
        /// Path to the SHP file
        file: PathBuf,
    },

    /// Write the palette indices of one frame to a raw 8-bit file
    Export {
        /// Path to the SHP file
        file: PathBuf,

        /// Frame to export
        #[arg(short, long, default_value = "0")]
        frame: usize,

        /// Output path
        #[arg(short, long)]
        output: PathBuf,
    },
}

pub fn execute(command: ShpCommands) -> Result<()> {
    match command {
        ShpCommands::Info { file } => execute_info(&file),
        ShpCommands::Export {
            file,
            frame,
            output,
        } => execute_export(&file, frame, &output),
    }
}

fn load(path: &Path) -> Result<(Vec<u8>, ShpFile)> {
    let data =
        fs::read(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let shp = ShpFile::parse(&data)
        .with_context(|| format!("Failed to parse SHP file: {}", path.display()))?;
    Ok((data, shp))
}

fn execute_info(path: &Path) -> Result<()> {
    let (data, shp) = load(path)?;

    print_heading("SHP File Information");
    print_file_line(path, data.len());
    println!(
        "{}: {} x {}",
        style("Canvas").bold(),
        shp.width(),
        shp.height()
    );
    println!("{}: {}", style("Frames").bold(), shp.frame_count());
    println!();

    let mut table = create_table(&["Frame", "Position", "Size", "Compression", "Offset", "Pixels"]);
    for (i, frame) in shp.frames().iter().enumerate() {
        let header = &frame.header;
        add_table_row(
            &mut table,
            vec![
                i.to_string(),
                format!("({}, {})", header.x, header.y),
                format!("{} x {}", header.width, header.height),
                header.compression.to_string(),
                format!("0x{:08X}", header.offset),
                format_bytes(frame.pixels.len() as u64),
            ],
        );
    }
    table.printstd();
    Ok(())
}

fn execute_export(path: &Path, index: usize, output: &Path) -> Result<()> {
    let (_, shp) = load(path)?;
    let frame = shp
        .frame(index)
        .with_context(|| format!("Cannot export frame {index}"))?;

    fs::write(output, &frame.pixels)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Wrote frame {} ({} x {}) to {}",
        index,
        frame.width(),
        frame.height(),
        style(output.display()).cyan()
    );
    Ok(())
}
