//! Row-level field validation for the dataset catalog.
//!
//! Checks the header for required columns, then every row for mandatory
//! fields, link URLs, DOI shape and Y/N flag columns. Row numbers are the
//! spreadsheet rows a curator sees: the header is row 1, so data index `i`
//! is reported as row `i + 2`.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use crate::dataset::{Cell, Dataset};

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://").expect("url pattern is valid"));

// TCIA DOIs sometimes carry extra slashes, dots or trailing spaces
static DOI_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^10\.\d{4,9}/[-._;()/:A-Z0-9\s]+$").expect("doi pattern is valid")
});

/// First data row number; the header occupies row 1.
const FIRST_DATA_ROW: usize = 2;

// ============================================================================
// Rules
// ============================================================================

/// Which columns are checked and how.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ValidationRules {
    /// Columns that must exist in the header
    pub required_columns: Vec<String>,
    /// Columns whose value may not be empty in any row
    pub mandatory_columns: Vec<String>,
    /// Column holding the dataset URL
    pub link_column: String,
    /// Column holding an optional DOI
    pub doi_column: String,
    /// Columns restricted to `Y`, `N` or empty
    pub yes_no_columns: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        let owned = |cols: &[&str]| cols.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        Self {
            required_columns: owned(&[
                "Dataset Name",
                "Modalities",
                "Clinical Application",
                "Registraition Type of Patients",
                "Segmentaitions Available",
                "Landmarks Available",
                "Meshes (STL) Available",
                "Tracking / Pose Data",
                "Ground-Truth Transformations",
                "Subjects",
                "Link",
                "Source",
                "DOI",
                "Licence",
                "Notes",
            ]),
            mandatory_columns: owned(&["Dataset Name"]),
            link_column: "Link".to_string(),
            doi_column: "DOI".to_string(),
            yes_no_columns: owned(&[
                "Segmentaitions Available",
                "Landmarks Available",
                "Meshes (STL) Available",
                "Tracking / Pose Data",
                "Ground-Truth Transformations",
            ]),
        }
    }
}

// ============================================================================
// Issues
// ============================================================================

/// A field-level defect in the header or one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    MissingColumns(Vec<String>),
    MissingField { row: usize, column: String },
    InvalidUrl { row: usize, column: String, value: String },
    InvalidDoi { row: usize, value: String },
    InvalidFlag { row: usize, column: String, value: String },
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowIssue::MissingColumns(cols) => {
                let quoted: Vec<String> = cols.iter().map(|c| format!("'{c}'")).collect();
                write!(f, "Missing columns: [{}]", quoted.join(", "))
            }
            RowIssue::MissingField { row, column } => write!(f, "Row {row}: Missing '{column}'"),
            RowIssue::InvalidUrl { row, column, value } => {
                write!(f, "Row {row}: Invalid URL in '{column}': {value}")
            }
            RowIssue::InvalidDoi { row, value } => {
                write!(f, "Row {row}: Potentially invalid DOI format: {value}")
            }
            RowIssue::InvalidFlag { row, column, value } => write!(
                f,
                "Row {row}: Column '{column}' must be 'Y', 'N' or empty. Found: '{value}'"
            ),
        }
    }
}

// ============================================================================
// Field checks
// ============================================================================

fn is_blank(cell: &Cell) -> bool {
    match cell {
        Cell::Missing => true,
        Cell::Text(s) => s.trim().is_empty(),
        Cell::Number(_) => false,
    }
}

/// A link must be text starting with `http://` or `https://`.
pub fn is_valid_url(cell: &Cell) -> bool {
    cell.as_text().is_some_and(|s| URL_PATTERN.is_match(s))
}

/// DOIs are optional: anything that is not non-blank text passes.
pub fn is_valid_doi(cell: &Cell) -> bool {
    match cell.as_text() {
        Some(s) if !s.trim().is_empty() => DOI_PATTERN.is_match(s),
        _ => true,
    }
}

fn is_valid_flag(cell: &Cell) -> bool {
    cell.is_missing() || matches!(cell.display_value().trim(), "Y" | "N" | "")
}

// ============================================================================
// Validator
// ============================================================================

/// Validate the header and every row against `rules`.
///
/// Issues are returned in the order a curator would fix them: missing
/// columns first, then rows top to bottom.
pub fn validate_rows(dataset: &Dataset, rules: &ValidationRules) -> Vec<RowIssue> {
    let mut issues = Vec::new();

    let missing: Vec<String> = rules
        .required_columns
        .iter()
        .filter(|c| !dataset.has_column(c))
        .cloned()
        .collect();
    if !missing.is_empty() {
        issues.push(RowIssue::MissingColumns(missing));
    }

    for idx in 0..dataset.len() {
        let row = idx + FIRST_DATA_ROW;

        for column in &rules.mandatory_columns {
            if dataset.cell(idx, column).map_or(true, is_blank) {
                issues.push(RowIssue::MissingField {
                    row,
                    column: column.clone(),
                });
            }
        }

        match dataset.cell(idx, &rules.link_column).filter(|c| !is_blank(c)) {
            None => issues.push(RowIssue::MissingField {
                row,
                column: rules.link_column.clone(),
            }),
            Some(cell) if !is_valid_url(cell) => issues.push(RowIssue::InvalidUrl {
                row,
                column: rules.link_column.clone(),
                value: cell.display_value(),
            }),
            Some(_) => {}
        }

        if let Some(cell) = dataset.cell(idx, &rules.doi_column) {
            if !is_valid_doi(cell) {
                issues.push(RowIssue::InvalidDoi {
                    row,
                    value: cell.display_value(),
                });
            }
        }

        for column in &rules.yes_no_columns {
            if let Some(cell) = dataset.cell(idx, column) {
                if !is_valid_flag(cell) {
                    issues.push(RowIssue::InvalidFlag {
                        row,
                        column: column.clone(),
                        value: cell.display_value(),
                    });
                }
            }
        }
    }

    debug!(rows = dataset.len(), issues = issues.len(), "Validated rows");

    issues
}
