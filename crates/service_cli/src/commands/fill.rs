//! Fill command implementation.
//!
//! Reads a sample table, runs a fill pass, and emits the result as a JSON
//! report or a human-readable table.

use std::fs;
use std::path::Path;

use adapter_table::read_series_from_path;
use fill_core::engine::{detect_gaps, fill_series, CandidatePolicy, FillOptions, FillStrategy};
use tracing::info;

use crate::report::FillReport;
use crate::{CliError, Result};

/// Run the fill command.
pub fn run(
    input: &str,
    strategy: &str,
    candidates: &str,
    output: Option<&str>,
    format: &str,
) -> Result<()> {
    info!("Starting fill...");
    info!("  Input: {}", input);
    info!("  Strategy: {}", strategy);
    info!("  Candidate policy: {}", candidates);
    info!("  Output format: {}", format);

    let options = FillOptions {
        strategy: parse_strategy(strategy)?,
        candidates: parse_policy(candidates)?,
    };

    if !Path::new(input).exists() {
        return Err(CliError::FileNotFound(input.to_string()));
    }

    let mut series = read_series_from_path(input)?;
    let gap_count = detect_gaps(&series).len();

    let outcome = fill_series(&mut series, options);
    info!("Filled {} of {} gaps", outcome.len(), gap_count);

    let report = FillReport::new(&series, &outcome, strategy, candidates);

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&report)?;
            match output {
                Some(path) => {
                    fs::write(path, json)?;
                    info!("Report written to {}", path);
                }
                None => println!("{}", json),
            }
        }
        "table" => print_table(&report),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            )));
        }
    }

    info!("Fill complete");
    Ok(())
}

fn parse_strategy(name: &str) -> Result<FillStrategy> {
    match name {
        "linear" => Ok(FillStrategy::Linear),
        "quadratic" => Ok(FillStrategy::Quadratic),
        "quadratic-fallback" => Ok(FillStrategy::QuadraticWithFallback),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown strategy: {}. Supported: linear, quadratic, quadratic-fallback",
            other
        ))),
    }
}

fn parse_policy(name: &str) -> Result<CandidatePolicy> {
    match name {
        "side-balanced" => Ok(CandidatePolicy::SideBalanced),
        "global-nearest" => Ok(CandidatePolicy::GlobalNearest),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown candidate policy: {}. Supported: side-balanced, global-nearest",
            other
        ))),
    }
}

fn print_table(report: &FillReport) {
    println!("\n┌────────────┬──────────────────┬──────────────────┐");
    println!("│ Index      │ Method           │ Value            │");
    println!("├────────────┼──────────────────┼──────────────────┤");
    if report.details.is_empty() {
        println!("│ (no fills) │                  │                  │");
    } else {
        for (index, record) in &report.details {
            println!(
                "│ {:<10} │ {:<16} │ {:<16.6} │",
                index, record.method, record.value
            );
        }
    }
    println!("└────────────┴──────────────────┴──────────────────┘");

    let unfilled = report
        .values
        .iter()
        .filter(|value| value.value.is_none())
        .count();
    if unfilled > 0 {
        println!("{} gap(s) could not be filled", unfilled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!(parse_strategy("linear").unwrap(), FillStrategy::Linear);
        assert_eq!(
            parse_strategy("quadratic-fallback").unwrap(),
            FillStrategy::QuadraticWithFallback
        );
        assert!(matches!(
            parse_strategy("cubic").unwrap_err(),
            CliError::InvalidArgument(_)
        ));
    }

    #[test]
    fn test_parse_policy() {
        assert_eq!(
            parse_policy("side-balanced").unwrap(),
            CandidatePolicy::SideBalanced
        );
        assert_eq!(
            parse_policy("global-nearest").unwrap(),
            CandidatePolicy::GlobalNearest
        );
        assert!(parse_policy("nearest").is_err());
    }

    #[test]
    fn test_missing_input_is_reported() {
        let result = run(
            "/definitely/not/here.csv",
            "linear",
            "side-balanced",
            None,
            "table",
        );
        assert!(matches!(result.unwrap_err(), CliError::FileNotFound(_)));
    }
}
