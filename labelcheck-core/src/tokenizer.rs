//! Category Extraction
//!
//! Turns the raw cells of one column into its [`CategorySet`]: every
//! trimmed, non-empty piece between delimiters, deduplicated and sorted.

use std::collections::BTreeSet;

use crate::dataset::Cell;

/// Delimiter separating categories inside one cell.
pub const DEFAULT_DELIMITER: char = ',';

/// Unique category tokens of one column, sorted ascending by raw string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    tokens: Vec<String>,
}

impl CategorySet {
    pub fn as_slice(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens
            .binary_search_by(|t| t.as_str().cmp(token))
            .is_ok()
    }
}

impl From<BTreeSet<String>> for CategorySet {
    fn from(set: BTreeSet<String>) -> Self {
        Self {
            tokens: set.into_iter().collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for CategorySet {
    /// Collect already-split tokens. Tokens are trimmed, and empties dropped,
    /// so the set invariants hold for hand-built sets too.
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        iter.into_iter()
            .filter_map(|t| {
                let t: String = t.into();
                let trimmed = t.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect::<BTreeSet<String>>()
            .into()
    }
}

/// Split, trim and deduplicate the categories of one column.
///
/// Missing and numeric cells are skipped silently; sparse columns are
/// expected.
///
/// # Example
/// ```
/// use labelcheck_core::dataset::Cell;
/// use labelcheck_core::tokenizer::{extract_categories, DEFAULT_DELIMITER};
///
/// let cells = [Cell::text(" Ultrasound ,  , CT"), Cell::Missing];
/// let set = extract_categories(&cells, DEFAULT_DELIMITER);
/// assert_eq!(set.as_slice(), ["CT", "Ultrasound"]);
/// ```
pub fn extract_categories<'a, I>(cells: I, delimiter: char) -> CategorySet
where
    I: IntoIterator<Item = &'a Cell>,
{
    let mut categories = BTreeSet::new();

    for value in cells.into_iter().filter_map(Cell::as_text) {
        for piece in value.split(delimiter) {
            let cleaned = piece.trim();
            if !cleaned.is_empty() {
                categories.insert(cleaned.to_string());
            }
        }
    }

    categories.into()
}
