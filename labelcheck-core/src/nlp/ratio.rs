//! Edit Ratio
//!
//! Reference: Needleman, S. B. & Wunsch, C. D. (1970). "A general method
//!            applicable to the search for similarities in the amino acid
//!            sequence of two proteins"
//!
//! # Time Complexity
//! O(m × n) where m, n are string lengths in chars
//!
//! # Space Complexity
//! O(min(m, n)) with two-row dynamic programming
//!
//! The ratio counts insertions and deletions only (a substitution costs 2),
//! which reduces to the longest common subsequence:
//! `ratio = 2 × LCS / (|a| + |b|)`.

/// Length of the longest common subsequence of two strings, in chars.
///
/// # Example
/// ```
/// use labelcheck_core::nlp::lcs_length;
///
/// assert_eq!(lcs_length("segmentation", "segmentaiton"), 11);
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    lcs_chars(&a_chars, &b_chars)
}

pub(crate) fn lcs_chars(a: &[char], b: &[char]) -> usize {
    if a.len() > b.len() {
        return lcs_chars(b, a);
    }

    let m = a.len();
    let mut prev = vec![0usize; m + 1];
    let mut curr = vec![0usize; m + 1];

    for &cb in b {
        for i in 1..=m {
            curr[i] = if a[i - 1] == cb {
                prev[i - 1] + 1
            } else {
                prev[i].max(curr[i - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Edit similarity ratio on a 0–100 scale.
///
/// # Formula
/// `ratio = round(100 × 2 × LCS / (|a| + |b|))`
///
/// Returns 0 when either string is empty, so blank labels never match.
///
/// # Example
/// ```
/// use labelcheck_core::nlp::ratio;
///
/// assert_eq!(ratio("mri", "mri"), 100);
/// assert_eq!(ratio("kitten", "sitting"), 62);
/// ```
pub fn ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    ratio_chars(&a_chars, &b_chars)
}

pub(crate) fn ratio_chars(a: &[char], b: &[char]) -> u8 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let total = a.len() + b.len();
    let lcs = lcs_chars(a, b);

    // Round half up: (2x + y) / 2y
    let scaled = (400 * lcs + total) / (2 * total);
    scaled.min(super::MAX_SCORE as usize) as u8
}
