//! TMP terrain tile command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;
use std::fs;
use std::path::{Path, PathBuf};

use ra2_tmp::{CompositeOptions, TmpFile};

use crate::utils::{add_table_row, create_table, print_file_line, print_heading};

#[derive(Subcommand)]
pub enum TmpCommands {
    /// Display tile headers, bounds and heights of a TMP file
    Info {
        /// Path to the TMP file
        file: PathBuf,
    },

    /// Composite all tiles onto one 8-bit canvas and write it raw
    Template {
        /// Path to the TMP file
        file: PathBuf,

        /// Output path
        #[arg(short, long)]
        output: PathBuf,

        /// Write the height (z) data instead of palette indices
        #[arg(long)]
        heights: bool,

        /// Leave out the tile diamonds
        #[arg(long, conflicts_with = "heights")]
        no_tiles: bool,

        /// Leave out the extra overlays
        #[arg(long, conflicts_with = "heights")]
        no_extras: bool,
    },
}

pub fn execute(command: TmpCommands) -> Result<()> {
    match command {
        TmpCommands::Info { file } => execute_info(&file),
        TmpCommands::Template {
            file,
            output,
            heights,
            no_tiles,
            no_extras,
        } => {
            let options = CompositeOptions {
                tiles: !no_tiles,
                extras: !no_extras,
            };
            execute_template(&file, &output, heights, options)
        }
    }
}

fn load(path: &Path) -> Result<(usize, TmpFile)> {
    let data =
        fs::read(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let tmp = TmpFile::parse(&data)
        .with_context(|| format!("Failed to parse TMP file: {}", path.display()))?;
    Ok((data.len(), tmp))
}

fn execute_info(path: &Path) -> Result<()> {
    let (size, tmp) = load(path)?;

    print_heading("TMP File Information");
    print_file_line(path, size);
    println!(
        "{}: {} x {} ({} slots, {} tiles)",
        style("Grid").bold(),
        tmp.header.tiles_x,
        tmp.header.tiles_y,
        tmp.tile_count(),
        tmp.tiles().count()
    );
    match tmp.bounds() {
        Some(bounds) => println!("{}: {}", style("Bounds").bold(), bounds),
        None => println!("{}: empty", style("Bounds").bold()),
    }
    let (width, height) = tmp.total_size();
    println!("{}: {} x {}", style("Template").bold(), width, height);
    if let Some(max) = tmp.max_height() {
        println!("{}: {}", style("Max height").bold(), max);
    }
    println!();

    let mut table = create_table(&["Tile", "Position", "Height", "Flags", "Extra"]);
    for tile in tmp.tiles() {
        let header = &tile.header;
        let extra = if header.has_extra() {
            format!(
                "({}, {}) {} x {}",
                header.extra_x, header.extra_y, header.extra_width, header.extra_height
            )
        } else {
            "-".to_string()
        };
        add_table_row(
            &mut table,
            vec![
                tile.index.to_string(),
                format!("({}, {})", header.x, header.y),
                header.height.to_string(),
                format!("{:?}", header.flags),
                extra,
            ],
        );
    }
    table.printstd();
    Ok(())
}

fn execute_template(
    path: &Path,
    output: &Path,
    heights: bool,
    options: CompositeOptions,
) -> Result<()> {
    let (_, tmp) = load(path)?;
    let canvas = if heights {
        tmp.height_template()
    } else {
        tmp.template(options)
    }
    .with_context(|| format!("Failed to composite {}", path.display()))?;

    fs::write(output, canvas.pixels())
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!(
        "Wrote {} x {} {} to {}",
        canvas.width(),
        canvas.height(),
        if heights { "height map" } else { "template" },
        style(output.display()).cyan()
    );
    Ok(())
}
