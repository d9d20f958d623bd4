//! Tabular dataset loading.
//!
//! Rows are kept as typed cells so category extraction can tell missing and
//! numeric values apart from text. A column is numeric when every present
//! value in it parses as a number; everything else stays text.

use std::collections::HashMap;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{LabelcheckError, Result};

// ============================================================================
// Cell
// ============================================================================

/// One field value of one row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Empty or absent field
    Missing,
    /// Free text, possibly holding several delimited categories
    Text(String),
    /// Value of a column where every present value is numeric
    Number(f64),
}

impl Cell {
    /// Convenience constructor for text cells.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// The text content, or `None` for missing and numeric cells.
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// Rendered value for diagnostics; empty for missing cells.
    pub fn display_value(&self) -> String {
        match self {
            Cell::Missing => String::new(),
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => n.to_string(),
        }
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// Header plus rows of cells, all rows padded to the header width.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    headers: Vec<String>,
    column_index: HashMap<String, usize>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    /// Build a dataset from headers and rows of raw field values.
    ///
    /// Empty or whitespace-only fields become [`Cell::Missing`]; short rows
    /// are padded with missing cells and extra fields are dropped.
    pub fn from_raw_rows<H, R>(headers: H, raw_rows: Vec<Vec<R>>) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: AsRef<str>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let width = headers.len();

        let numeric_columns: Vec<bool> = (0..width)
            .map(|col| is_numeric_column(raw_rows.iter().map(|row| row.get(col))))
            .collect();

        let rows = raw_rows
            .iter()
            .map(|raw| {
                (0..width)
                    .map(|col| parse_cell(raw.get(col).map(|v| v.as_ref()), numeric_columns[col]))
                    .collect()
            })
            .collect();

        let mut column_index = HashMap::with_capacity(width);
        for (idx, name) in headers.iter().enumerate() {
            // First occurrence wins for duplicated headers
            column_index.entry(name.clone()).or_insert(idx);
        }

        Self {
            headers,
            column_index,
            rows,
        }
    }

    /// Load a CSV file with a header row.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let content = std::fs::read(path).map_err(|e| LabelcheckError::io(path, e))?;
        let dataset = Self::from_csv_reader(content.as_slice())?;

        info!(
            path = %path.display(),
            rows = dataset.len(),
            columns = dataset.headers.len(),
            "Loaded dataset"
        );

        Ok(dataset)
    }

    /// Parse CSV content from any reader.
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .flexible(true) // Allow rows with different lengths
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut raw_rows = Vec::new();
        for result in reader.records() {
            let record: StringRecord = result?;
            raw_rows.push(record.iter().map(str::to_string).collect::<Vec<String>>());
        }

        debug!(rows = raw_rows.len(), "Parsed csv records");

        Ok(Self::from_raw_rows(headers, raw_rows))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index.contains_key(name)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell of `row` in column `name`, if the column exists.
    pub fn cell(&self, row: usize, name: &str) -> Option<&Cell> {
        let col = *self.column_index.get(name)?;
        self.rows.get(row)?.get(col)
    }

    /// All cells of a column, top to bottom.
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        let col = *self.column_index.get(name)?;
        Some(self.rows.iter().map(move |row| &row[col]))
    }
}

fn is_numeric_column<'a, I, R>(values: I) -> bool
where
    I: Iterator<Item = Option<&'a R>>,
    R: AsRef<str> + 'a,
{
    let mut seen = false;
    for value in values.flatten() {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.parse::<f64>().is_err() {
            return false;
        }
        seen = true;
    }
    seen
}

fn parse_cell(raw: Option<&str>, numeric: bool) -> Cell {
    match raw {
        None => Cell::Missing,
        Some(v) if v.trim().is_empty() => Cell::Missing,
        Some(v) if numeric => v
            .trim()
            .parse::<f64>()
            .map(Cell::Number)
            .unwrap_or_else(|_| Cell::text(v)),
        Some(v) => Cell::text(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Dataset Name,Modalities,Subjects
Alpha,\"US (2D), CT\",12
Beta,,40
Gamma,ultrasound,
";

    #[test]
    fn test_from_csv_reader() {
        let ds = Dataset::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.headers(), ["Dataset Name", "Modalities", "Subjects"]);
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.cell(0, "Modalities"), Some(&Cell::text("US (2D), CT")));
        assert!(ds.cell(1, "Modalities").unwrap().is_missing());
    }

    #[test]
    fn test_numeric_column_inference() {
        let ds = Dataset::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.cell(0, "Subjects"), Some(&Cell::Number(12.0)));
        assert_eq!(ds.cell(2, "Subjects"), Some(&Cell::Missing));
        assert_eq!(ds.cell(0, "Dataset Name"), Some(&Cell::text("Alpha")));
    }

    #[test]
    fn test_mixed_column_stays_text() {
        let ds = Dataset::from_raw_rows(["Subjects"], vec![vec!["12"], vec!["about 30"]]);
        assert_eq!(ds.cell(0, "Subjects"), Some(&Cell::text("12")));
    }

    #[test]
    fn test_short_rows_padded() {
        let ds = Dataset::from_raw_rows(["A", "B"], vec![vec!["x"]]);
        assert_eq!(ds.cell(0, "B"), Some(&Cell::Missing));
        assert_eq!(ds.column("B").unwrap().count(), 1);
    }

    #[test]
    fn test_unknown_column() {
        let ds = Dataset::from_csv_reader(SAMPLE.as_bytes()).unwrap();
        assert!(!ds.has_column("Licence"));
        assert!(ds.column("Licence").is_none());
        assert!(ds.cell(0, "Licence").is_none());
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::from_csv_path(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(err.is_not_found());
    }
}
