//! Column analysis: tokenizer, case check and similarity grouping wired
//! together for one column at a time.

use tracing::{debug, info};

use crate::case_check::{check_case_consistency, CaseFinding};
use crate::dataset::{Cell, Dataset};
use crate::grouper::{SimilarityCluster, SimilarityGrouper, DEFAULT_SIMILARITY_THRESHOLD};
use crate::tokenizer::{extract_categories, DEFAULT_DELIMITER};
use crate::whitelist::Whitelist;

/// A reportable category defect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    Case(CaseFinding),
    Similar(SimilarityCluster),
}

/// Findings for one analyzed column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnReport {
    pub column: String,
    /// Distinct categories seen in the column
    pub category_count: usize,
    /// Sorted by normalized key
    pub case_findings: Vec<CaseFinding>,
    /// In discovery order
    pub clusters: Vec<SimilarityCluster>,
}

impl ColumnReport {
    pub fn has_findings(&self) -> bool {
        !self.case_findings.is_empty() || !self.clusters.is_empty()
    }

    pub fn finding_count(&self) -> usize {
        self.case_findings.len() + self.clusters.len()
    }

    /// Case findings first, then clusters, each in their own order.
    pub fn findings(&self) -> impl Iterator<Item = Finding> + '_ {
        self.case_findings
            .iter()
            .cloned()
            .map(Finding::Case)
            .chain(self.clusters.iter().cloned().map(Finding::Similar))
    }
}

/// Runs both category checks against columns of a dataset.
#[derive(Debug, Clone)]
pub struct CategoryChecker {
    whitelist: Whitelist,
    threshold: u8,
    delimiter: char,
}

impl CategoryChecker {
    pub fn new(whitelist: Whitelist) -> Self {
        Self {
            whitelist,
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Override the similarity threshold. Values above 100 are clamped.
    pub fn with_threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn whitelist(&self) -> &Whitelist {
        &self.whitelist
    }

    /// Analyze one column given its raw cells.
    pub fn analyze_column<'a, I>(&self, column: &str, cells: I) -> ColumnReport
    where
        I: IntoIterator<Item = &'a Cell>,
    {
        let categories = extract_categories(cells, self.delimiter);
        let case_findings = check_case_consistency(&categories, &self.whitelist);
        let clusters =
            SimilarityGrouper::with_threshold(self.threshold, &self.whitelist).group(&categories);

        info!(
            column = %column,
            categories = categories.len(),
            case_findings = case_findings.len(),
            clusters = clusters.len(),
            "Analyzed column"
        );

        ColumnReport {
            column: column.to_string(),
            category_count: categories.len(),
            case_findings,
            clusters,
        }
    }

    /// Analyze the named columns that exist in the dataset, in the given
    /// order. Absent columns are skipped.
    pub fn analyze_dataset<S: AsRef<str>>(
        &self,
        dataset: &Dataset,
        columns: &[S],
    ) -> Vec<ColumnReport> {
        columns
            .iter()
            .filter_map(|column| {
                let name: &str = column.as_ref();
                match dataset.column(name) {
                    Some(cells) => Some(self.analyze_column(name, cells)),
                    None => {
                        debug!(column = %name, "Column not present, skipping category checks");
                        None
                    }
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset() -> Dataset {
        Dataset::from_raw_rows(
            ["Dataset Name", "Modalities", "Clinical Application"],
            vec![
                vec!["A", "US (2D), CT", "General"],
                vec!["B", "ct", "General MSK"],
                vec!["C", "", "Segmentation"],
                vec!["D", "US (3D)", "Segmentaiton, Prostate Cancer"],
                vec!["E", "US", "Prostate"],
            ],
        )
    }

    #[test]
    fn test_analyze_column() {
        let checker = CategoryChecker::new(Whitelist::builtin());
        let ds = dataset();
        let report = checker.analyze_column("Modalities", ds.column("Modalities").unwrap());

        assert_eq!(report.category_count, 5);
        assert_eq!(report.case_findings.len(), 1);
        assert_eq!(report.case_findings[0].variants, ["CT", "ct"]);
        // "US" family is whitelisted, "CT"/"ct" cluster on their own
        assert_eq!(report.clusters.len(), 1);
        assert_eq!(report.clusters[0].members, ["CT", "ct"]);
    }

    #[test]
    fn test_whitelisted_column_clean_except_typo() {
        let checker = CategoryChecker::new(Whitelist::builtin());
        let ds = dataset();
        let column = ds.column("Clinical Application").unwrap();
        let report = checker.analyze_column("Clinical Application", column);

        assert!(report.case_findings.is_empty());
        assert_eq!(report.clusters.len(), 1);
        assert_eq!(report.clusters[0].members, ["Segmentaiton", "Segmentation"]);
        assert_eq!(report.finding_count(), 1);
    }

    #[test]
    fn test_analyze_dataset_skips_absent_columns() {
        let checker = CategoryChecker::new(Whitelist::builtin());
        let reports = checker.analyze_dataset(&dataset(), &["Imaging type", "Modalities"]);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].column, "Modalities");
    }

    #[test]
    fn test_findings_order() {
        let checker = CategoryChecker::new(Whitelist::empty());
        let cells = vec![Cell::text("ct, CT, Segmentation, Segmentaiton")];
        let report = checker.analyze_column("Modalities", &cells);
        let kinds: Vec<bool> = report.findings().map(|f| matches!(f, Finding::Case(_))).collect();
        assert_eq!(kinds, [true, false, false]);
    }

    #[test]
    fn test_empty_column_has_no_findings() {
        let checker = CategoryChecker::new(Whitelist::builtin()).with_threshold(0);
        let report = checker.analyze_column("Modalities", &Vec::<Cell>::new());
        assert!(!report.has_findings());
        assert_eq!(report.category_count, 0);
    }
}
