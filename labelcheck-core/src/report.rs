//! Plain-text diagnostic output.
//!
//! One line per row issue, at most two lines per analyzed column (case
//! inconsistencies, similar categories), and a closing summary. Collections
//! are printed in full, in the order the checks produced them.

use std::io::{self, Write};
use std::path::Path;

use crate::analysis::ColumnReport;
use crate::validation::RowIssue;

const FAIL: &str = "❌";
const PASS: &str = "✅";

/// Writes diagnostics and counts how many were emitted.
pub struct Reporter<W: Write> {
    out: W,
    errors: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, errors: 0 }
    }

    /// Number of row issues and category findings reported so far.
    pub fn error_count(&self) -> usize {
        self.errors
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self, path: &Path) -> io::Result<()> {
        writeln!(self.out, "🔍 Validating {}...", path.display())
    }

    pub fn row_issue(&mut self, issue: &RowIssue) -> io::Result<()> {
        self.errors += 1;
        writeln!(self.out, "{FAIL} {issue}")
    }

    /// Emit the case and similarity lines for one column; nothing when the
    /// column is clean.
    pub fn column(&mut self, report: &ColumnReport) -> io::Result<()> {
        if !report.case_findings.is_empty() {
            let entries: Vec<String> =
                report.case_findings.iter().map(ToString::to_string).collect();
            writeln!(
                self.out,
                "{FAIL} {} - Case inconsistencies: {{{}}}",
                report.column,
                entries.join(", ")
            )?;
        }

        if !report.clusters.is_empty() {
            let entries: Vec<String> = report.clusters.iter().map(ToString::to_string).collect();
            writeln!(
                self.out,
                "{FAIL} {} - Similar categories: [{}]",
                report.column,
                entries.join(", ")
            )?;
        }

        self.errors += report.finding_count();
        Ok(())
    }

    /// Closing line; returns whether the run passed.
    pub fn summary(&mut self) -> io::Result<bool> {
        if self.errors > 0 {
            writeln!(self.out, "\nTotal errors found: {}", self.errors)?;
            Ok(false)
        } else {
            writeln!(self.out, "\n{PASS} Dataset validation passed!")?;
            Ok(true)
        }
    }
}
