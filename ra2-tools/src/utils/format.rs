//! Formatting utilities

use std::path::Path;

use console::style;
use humansize::{DECIMAL, format_size};

/// Format file size in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, DECIMAL)
}

/// Format a percentage
pub fn format_percentage(value: f64) -> String {
    format!("{value:.1}%")
}

/// Format a compression ratio
pub fn format_compression_ratio(original: u64, compressed: u64) -> String {
    if original == 0 {
        "N/A".to_string()
    } else {
        let ratio = 100.0 - (compressed as f64 / original as f64 * 100.0);
        format_percentage(ratio)
    }
}

/// Print a bold title with an underline of matching width
pub fn print_heading(title: &str) {
    println!("{}", style(title).bold().cyan());
    println!("{}", style("=".repeat(title.len())).cyan());
    println!();
}

/// Print the `File:` and `Size:` lines common to every info command
pub fn print_file_line(path: &Path, size: usize) {
    println!("{}: {}", style("File").bold(), path.display());
    println!("{}: {}", style("Size").bold(), format_bytes(size as u64));
}
