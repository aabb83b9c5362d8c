//! Gaps command implementation.
//!
//! Lists the unknown indices of a sample table without filling anything.

use std::path::Path;

use adapter_table::read_series_from_path;
use fill_core::engine::detect_gaps;
use tracing::info;

use crate::{CliError, Result};

/// Run the gaps command.
pub fn run(input: &str) -> Result<()> {
    info!("Scanning for gaps...");
    info!("  Input: {}", input);

    if !Path::new(input).exists() {
        return Err(CliError::FileNotFound(input.to_string()));
    }

    let series = read_series_from_path(input)?;
    let gaps = detect_gaps(&series);

    if gaps.is_empty() {
        println!("No gaps detected in {} sample(s)", series.len());
    } else {
        println!("{} gap(s) in {} sample(s):", gaps.len(), series.len());
        for index in gaps {
            println!("  index {} at position {}", index, series.position(index));
        }
    }

    Ok(())
}
