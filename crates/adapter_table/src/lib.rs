//! # adapter_table
//!
//! Adapter layer: reads delimiter-separated sample tables into
//! [`fill_core`] series.
//!
//! The expected layout is one header line followed by `position;value`
//! rows. Positions are integers and must be strictly increasing; a value
//! field that is empty or unparseable becomes the explicit unknown marker,
//! so upstream data quality issues surface as gaps rather than parse
//! failures.
//!
//! ## Example
//!
//! ```
//! use adapter_table::read_series;
//!
//! let table = "x;y\n1;2.0\n2;\n3;6.0\n";
//! let series = read_series(table.as_bytes()).unwrap();
//!
//! assert_eq!(series.len(), 3);
//! assert!(series.value(1).is_unknown());
//! ```

mod error;
mod reader;

pub use error::TableError;
pub use reader::{read_series, read_series_from_path};
