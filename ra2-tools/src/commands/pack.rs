//! Packed map section command implementations
//!
//! Inputs are the raw bytes of a map section, already Base64 decoded.

use anyhow::{Context, Result};
use clap::{Subcommand, ValueEnum};
use console::style;
use std::fs;
use std::path::{Path, PathBuf};

use ra2_data::Palette;
use ra2_map::{PreviewImage, decode_colour_pairs, read_iso_map_pack};
use ra2_pack::PackFormat;

use crate::utils::{
    add_table_row, create_table, format_bytes, format_compression_ratio, print_file_line,
    print_heading,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// LZO1X (PreviewPack, IsoMapPack5)
    Lzo,
    /// Westwood Format80 (OverlayPack, OverlayDataPack)
    #[value(name = "f80", alias = "format80")]
    Format80,
}

impl From<FormatArg> for PackFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Lzo => PackFormat::Lzo,
            FormatArg::Format80 => PackFormat::Format80,
        }
    }
}

#[derive(Subcommand)]
pub enum PackCommands {
    /// Unpack every section of a packed buffer
    Unpack {
        /// Path to the packed data
        file: PathBuf,

        /// Section codec
        #[arg(short, long)]
        format: FormatArg,

        /// Output path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Decode a map preview to raw 24-bit RGB
    Preview {
        /// Path to the packed preview
        file: PathBuf,

        /// Treat the input as a palette-pair stream decoded with this 768 byte palette
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Significant bits per palette channel
        #[arg(long, default_value = "6", requires = "palette")]
        palette_depth: u8,

        /// Preview width in pixels
        #[arg(long, default_value_t = ra2_map::preview::DEFAULT_PREVIEW_WIDTH)]
        width: u32,

        /// Preview height in pixels
        #[arg(long, default_value_t = ra2_map::preview::DEFAULT_PREVIEW_HEIGHT)]
        height: u32,

        /// Output path
        #[arg(short, long)]
        output: PathBuf,
    },

    /// List the terrain cells of an IsoMapPack5 section
    Cells {
        /// Path to the packed cell data
        file: PathBuf,

        /// Show at most this many cells (0 for all)
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

pub fn execute(command: PackCommands) -> Result<()> {
    match command {
        PackCommands::Unpack {
            file,
            format,
            output,
        } => execute_unpack(&file, format.into(), &output),
        PackCommands::Preview {
            file,
            palette,
            palette_depth,
            width,
            height,
            output,
        } => execute_preview(
            &file,
            palette.as_deref(),
            palette_depth,
            width,
            height,
            &output,
        ),
        PackCommands::Cells { file, limit } => execute_cells(&file, limit),
    }
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to open file: {}", path.display()))
}

fn execute_unpack(path: &Path, format: PackFormat, output: &Path) -> Result<()> {
    let data = read(path)?;
    let sections = ra2_pack::sections(&data)
        .with_context(|| format!("Failed to read sections of {}", path.display()))?;
    let unpacked = ra2_pack::unpack(&data, format)
        .with_context(|| format!("Failed to unpack {}", path.display()))?;

    print_heading("Pack Information");
    print_file_line(path, data.len());
    println!("{}: {}", style("Format").bold(), format.name());
    println!(
        "{}: {} ({} saved)",
        style("Unpacked").bold(),
        format_bytes(unpacked.len() as u64),
        format_compression_ratio(unpacked.len() as u64, data.len() as u64)
    );
    println!();

    let mut table = create_table(&["Section", "Compressed", "Decompressed"]);
    for (i, section) in sections.iter().enumerate() {
        add_table_row(
            &mut table,
            vec![
                i.to_string(),
                section.compressed_len.to_string(),
                section.decompressed_len.to_string(),
            ],
        );
    }
    table.printstd();

    fs::write(output, &unpacked)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Wrote {}", style(output.display()).cyan());
    Ok(())
}

fn execute_preview(
    path: &Path,
    palette: Option<&Path>,
    depth: u8,
    width: u32,
    height: u32,
    output: &Path,
) -> Result<()> {
    let data = read(path)?;
    let image = match palette {
        Some(palette_path) => {
            let palette = Palette::from_bytes(&read(palette_path)?)
                .with_context(|| format!("Failed to read palette {}", palette_path.display()))?
                .with_channel_depth(depth, depth, depth);
            let capacity = width as usize * height as usize * 3;
            let rgb = decode_colour_pairs(&data, &palette, capacity)
                .with_context(|| format!("Failed to decode preview {}", path.display()))?;
            PreviewImage::from_rgb(rgb, width, height)
        }
        None => PreviewImage::from_pack(&data, width, height),
    }
    .with_context(|| format!("Failed to decode preview {}", path.display()))?;

    fs::write(output, &image.rgb)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Wrote {} x {} preview to {}",
        image.width,
        image.height,
        style(output.display()).cyan()
    );
    Ok(())
}

fn execute_cells(path: &Path, limit: usize) -> Result<()> {
    let data = read(path)?;
    let cells = read_iso_map_pack(&data)
        .with_context(|| format!("Failed to read cells from {}", path.display()))?;

    print_heading("IsoMapPack5 Cells");
    print_file_line(path, data.len());
    println!("{}: {}", style("Cells").bold(), cells.len());
    println!();

    let shown = if limit == 0 { cells.len() } else { limit };
    let mut table = create_table(&["X", "Y", "Z", "Tile", "Sub-tile"]);
    for cell in cells.iter().take(shown) {
        add_table_row(
            &mut table,
            vec![
                cell.x.to_string(),
                cell.y.to_string(),
                cell.z.to_string(),
                cell.tile.to_string(),
                cell.sub_tile.to_string(),
            ],
        );
    }
    table.printstd();
    if cells.len() > shown {
        println!("... {} more", cells.len() - shown);
    }
    Ok(())
}
