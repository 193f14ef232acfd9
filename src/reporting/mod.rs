//! Console rendering and JSON export of compliance reports.

pub mod console;
pub mod export;
mod guidance;
mod shared;

pub use console::{print_batch_summary, print_palette, print_report, print_rules, print_tools};
pub use export::{write_export, ExportDocument};

use anyhow::Result;

/// Prints a serializable object as JSON to stdout.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
