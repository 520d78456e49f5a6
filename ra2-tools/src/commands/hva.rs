//! HVA animation command implementations

use anyhow::{Context, Result};
use clap::Subcommand;
use console::style;
use std::fs;
use std::path::{Path, PathBuf};

use ra2_vxl::HvaFile;

use crate::utils::{add_table_row, create_table, print_file_line, print_heading};

#[derive(Subcommand)]
pub enum HvaCommands {
    /// Display sections and matrices of an HVA file
    Info {
        /// Path to the HVA file
        file: PathBuf,

        /// Print every section's matrix for every frame
        #[arg(long)]
        matrices: bool,
    },
}

pub fn execute(command: HvaCommands) -> Result<()> {
    match command {
        HvaCommands::Info { file, matrices } => execute_info(&file, matrices),
    }
}

fn execute_info(path: &Path, matrices: bool) -> Result<()> {
    let data =
        fs::read(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
    let hva = HvaFile::parse(&data)
        .with_context(|| format!("Failed to parse HVA file: {}", path.display()))?;

    print_heading("HVA File Information");
    print_file_line(path, data.len());
    println!("{}: {}", style("Name").bold(), hva.file_name);
    println!("{}: {}", style("Frames").bold(), hva.frame_count);
    println!("{}: {}", style("Sections").bold(), hva.sections.len());
    println!();

    let mut table = create_table(&["Section", "Name", "Frame 0 translation"]);
    for (i, section) in hva.sections.iter().enumerate() {
        let translation = match hva.matrix(i, 0) {
            Ok(m) => m.w_axis.truncate().to_string(),
            Err(_) => "-".to_string(),
        };
        add_table_row(
            &mut table,
            vec![i.to_string(), section.name.clone(), translation],
        );
    }
    table.printstd();

    if matrices {
        println!();
        print!("{hva}");
    }
    Ok(())
}
