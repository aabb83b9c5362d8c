//! Delimiter-separated table reading.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use fill_core::types::{Sample, Series, Value};
use tracing::debug;

use crate::error::TableError;

/// Read a `position;value` table from a file.
///
/// See [`read_series`] for the expected layout.
pub fn read_series_from_path<P: AsRef<Path>>(path: P) -> Result<Series<f64>, TableError> {
    let reader = ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_path(path.as_ref())?;
    parse(reader)
}

/// Read a `position;value` table from any reader.
///
/// One header line is skipped. Each remaining row holds an integer
/// position and a real value; an empty or unparseable value field becomes
/// [`Value::Unknown`]. Positions must be strictly increasing.
///
/// # Example
///
/// ```
/// use adapter_table::read_series;
///
/// let series = read_series("x;y\n1;2.5\n2;oops\n".as_bytes()).unwrap();
/// assert_eq!(series.value(0).known(), Some(2.5));
/// assert!(series.value(1).is_unknown());
/// ```
pub fn read_series<R: Read>(reader: R) -> Result<Series<f64>, TableError> {
    let csv_reader = ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_reader(reader);
    parse(csv_reader)
}

fn parse<R: Read>(mut csv_reader: csv::Reader<R>) -> Result<Series<f64>, TableError> {
    let mut samples = Vec::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let position_field = record.get(0).unwrap_or("").trim();
        let position: i64 =
            position_field
                .parse()
                .map_err(|_| TableError::InvalidPosition {
                    line,
                    field: position_field.to_string(),
                })?;

        let value_field = record.get(1).ok_or(TableError::MissingColumn { line })?;
        // Unparseable or empty value fields are gaps, not errors
        let value = match value_field.trim().parse::<f64>() {
            Ok(y) => Value::Known(y),
            Err(_) => Value::Unknown,
        };

        samples.push(Sample {
            position: position as f64,
            value,
        });
    }

    let series = Series::new(samples)?;
    debug!(
        samples = series.len(),
        gaps = series.len() - series.known_indices().count(),
        "parsed sample table"
    );
    Ok(series)
}
