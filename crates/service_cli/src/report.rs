//! JSON report types for fill results.
//!
//! Serialisation is a service-layer concern: the engine hands over plain
//! data types, and this module shapes them into the document written by
//! the `fill` command (final values plus per-index fill details).

use std::collections::BTreeMap;

use fill_core::engine::FillOutcome;
use fill_core::types::Series;
use serde::Serialize;

/// Serialisable result of one fill pass.
#[derive(Debug, Serialize)]
pub struct FillReport {
    /// Strategy name as requested on the command line.
    pub strategy: String,
    /// Candidate policy name as requested on the command line.
    pub candidate_policy: String,
    /// Final (position, value) pairs; `null` for gaps that stayed unfilled.
    pub values: Vec<ReportValue>,
    /// Per-index fill details, keyed by series index.
    pub details: BTreeMap<usize, ReportRecord>,
}

/// One sample of the final series.
#[derive(Debug, Serialize)]
pub struct ReportValue {
    /// Sample position.
    pub position: f64,
    /// Final value, or `None` for a remaining gap.
    pub value: Option<f64>,
}

/// Provenance of one filled index.
#[derive(Debug, Serialize)]
pub struct ReportRecord {
    /// Position of the filled sample.
    pub position: f64,
    /// Method name (`linear`, `quadratic`, `linear-fallback`).
    pub method: String,
    /// The (position, value) pairs consulted, ordered by position.
    pub used_points: Vec<(f64, f64)>,
    /// The interpolated value.
    pub value: f64,
    /// Fitted `a·x² + b·x + c` coefficients, for quadratic fills only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<ReportCoefficients>,
}

/// Quadratic coefficients in report form.
#[derive(Debug, Serialize)]
pub struct ReportCoefficients {
    /// Quadratic coefficient.
    pub a: f64,
    /// Linear coefficient.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl FillReport {
    /// Build a report from the filled series and the outcome mapping.
    pub fn new(
        series: &Series<f64>,
        outcome: &FillOutcome<f64>,
        strategy: &str,
        candidate_policy: &str,
    ) -> Self {
        let values = series
            .samples()
            .iter()
            .map(|sample| ReportValue {
                position: sample.position,
                value: sample.value.known(),
            })
            .collect();

        let details = outcome
            .iter()
            .map(|(index, record)| {
                (
                    index,
                    ReportRecord {
                        position: record.position,
                        method: record.method.name().to_string(),
                        used_points: record.points.clone(),
                        value: record.value,
                        coefficients: record.coefficients.map(|coeffs| ReportCoefficients {
                            a: coeffs.a,
                            b: coeffs.b,
                            c: coeffs.c,
                        }),
                    },
                )
            })
            .collect();

        Self {
            strategy: strategy.to_string(),
            candidate_policy: candidate_policy.to_string(),
            values,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fill_core::engine::{fill_series, FillOptions};
    use fill_core::types::Value;

    #[test]
    fn test_report_shape() {
        let mut series = Series::from_columns(
            &[1.0, 2.0, 3.0],
            &[Value::Known(1.0), Value::Unknown, Value::Known(9.0)],
        )
        .unwrap();
        let outcome = fill_series(&mut series, FillOptions::default());

        let report = FillReport::new(&series, &outcome, "quadratic-fallback", "side-balanced");
        assert_eq!(report.values.len(), 3);
        assert_eq!(report.details.len(), 1);
        assert_eq!(report.details[&1].method, "linear-fallback");

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"used_points\""));
        assert!(json.contains("\"strategy\":\"quadratic-fallback\""));
        // Fallback fills carry no coefficients
        assert!(!json.contains("\"coefficients\""));
    }

    #[test]
    fn test_report_nulls_for_unfilled_gaps() {
        let series = Series::from_columns(
            &[1.0, 2.0],
            &[Value::Unknown, Value::Known(5.0)],
        )
        .unwrap();
        let mut untouched = series.clone();
        let outcome = fill_series(
            &mut untouched,
            FillOptions {
                strategy: fill_core::engine::FillStrategy::Linear,
                ..FillOptions::default()
            },
        );

        let report = FillReport::new(&untouched, &outcome, "linear", "side-balanced");
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"value\":null"));
        assert!(report.details.is_empty());
    }
}
