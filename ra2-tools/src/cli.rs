//! Root CLI structure for ra2-tools

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ra2-tools")]
#[command(about = "Command-line tools for Red Alert 2 file formats", long_about = None)]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// SHP sprite operations
    Shp {
        #[command(subcommand)]
        command: crate::commands::shp::ShpCommands,
    },

    /// TMP terrain tile operations
    Tmp {
        #[command(subcommand)]
        command: crate::commands::tmp::TmpCommands,
    },

    /// VXL voxel model operations
    Vxl {
        #[command(subcommand)]
        command: crate::commands::vxl::VxlCommands,
    },

    /// HVA animation operations
    Hva {
        #[command(subcommand)]
        command: crate::commands::hva::HvaCommands,
    },

    /// Packed map section operations
    Pack {
        #[command(subcommand)]
        command: crate::commands::pack::PackCommands,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
