//! Standard size tables.
//!
//! A size table is a CSV file with a `size` column and one column per
//! measurement field. Rows hold pattern-ready values in input units; they are
//! scaled to drawing units but not fitted (see [`crate::measurements::Basis`]).
//!
//! ```text
//! size,length_of_pants,crotch_line,thigh_scope,waist_scope,ankle_scope,lower_center
//! 38,1.0,0.28,0.16,0.18,0.12,0.02
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::error::{DraftError, Result};
use crate::measurements::{MeasurementRecord, parse_measurement};

/// Name of the column holding the size identifier.
pub const SIZE_COLUMN: &str = "size";

/// One row of a size table, values kept as text until a garment asks for
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeRow {
    size: String,
    values: BTreeMap<String, String>,
}

impl SizeRow {
    pub fn new(size: impl Into<String>, values: BTreeMap<String, String>) -> Self {
        Self { size: size.into(), values }
    }

    pub fn size(&self) -> &str {
        &self.size
    }
}

impl MeasurementRecord for SizeRow {
    fn value(&self, field: &'static str) -> Result<f64> {
        match self.values.get(field) {
            Some(text) => parse_measurement(field, text),
            None => Err(DraftError::MissingMeasurement(field.to_string())),
        }
    }
}

/// Where standard sizes come from.
pub trait SizeSource {
    /// Find the row for `size`. Unknown sizes are an error, never a fallback
    /// row.
    fn lookup(&self, size: &str) -> Result<SizeRow>;

    /// Human-readable name of the source, used in error messages.
    fn describe(&self) -> String;
}

/// Sizes compare as trimmed text, or as numbers when both sides are numeric
/// ("38" matches "38.0").
fn same_size(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    if a == b {
        return true;
    }
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}

/// An in-memory size table.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeTable {
    source: String,
    rows: Vec<SizeRow>,
}

impl SizeTable {
    /// Read a table from CSV text.
    pub fn from_csv_reader<R: io::Read>(source: impl Into<String>, reader: R) -> Result<Self> {
        let source = source.into();
        let unavailable = |e: csv::Error| DraftError::SourceUnavailable(format!("{}: {}", source, e));

        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(unavailable)?.clone();
        let Some(size_index) = headers.iter().position(|h| h == SIZE_COLUMN) else {
            return Err(DraftError::SourceUnavailable(format!(
                "{}: no '{}' column",
                source, SIZE_COLUMN
            )));
        };

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record.map_err(unavailable)?;
            let size = record.get(size_index).unwrap_or_default().to_string();
            let values = headers
                .iter()
                .zip(record.iter())
                .enumerate()
                .filter(|(i, _)| *i != size_index)
                .map(|(_, (h, v))| (h.to_string(), v.to_string()))
                .collect();
            rows.push(SizeRow::new(size, values));
        }

        debug!(source = %source, rows = rows.len(), "loaded size table");
        Ok(Self { source, rows })
    }

    /// Read a table from a CSV file.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DraftError::SourceUnavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_csv_reader(path.display().to_string(), io::BufReader::new(file))
    }

    /// Sizes in table order.
    pub fn sizes(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.size())
    }
}

impl SizeSource for SizeTable {
    fn lookup(&self, size: &str) -> Result<SizeRow> {
        self.rows
            .iter()
            .find(|row| same_size(row.size(), size))
            .cloned()
            .ok_or_else(|| DraftError::SizeNotFound {
                size: size.to_string(),
                source_name: self.source.clone(),
            })
    }

    fn describe(&self) -> String {
        self.source.clone()
    }
}
