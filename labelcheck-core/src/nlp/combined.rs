//! Combined Similarity Score
//!
//! The grouper treats two labels as likely duplicates when any one of the
//! metrics is confident, so the combination is a plain maximum rather than
//! a weighted ensemble.

use super::ratio::ratio;
use super::partial::partial_ratio;
use super::token_sort::token_sort_ratio;

/// Maximum of [`ratio`], [`partial_ratio`] and [`token_sort_ratio`].
///
/// Callers pass lowercased labels; the metrics themselves are case-sensitive
/// except for the lowercasing built into token sorting.
///
/// # Example
/// ```
/// use labelcheck_core::nlp::similarity_score;
///
/// assert_eq!(similarity_score("ultrasound", "microultrasound"), 100);
/// assert!(similarity_score("segmentation", "meshes") < 70);
/// ```
pub fn similarity_score(a: &str, b: &str) -> u8 {
    // Short-circuit for exact match
    if a == b && !a.is_empty() {
        return super::MAX_SCORE;
    }

    ratio(a, b)
        .max(partial_ratio(a, b))
        .max(token_sort_ratio(a, b))
}
