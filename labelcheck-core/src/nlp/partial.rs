//! Partial (Substring-Aware) Ratio
//!
//! Scores how well the shorter label aligns with its best-matching
//! contiguous stretch of the longer label. A label that appears verbatim
//! inside another ("Ultrasound" in "MicroUltrasound") scores 100.

use super::ratio::ratio_chars;
use super::MAX_SCORE;

/// Best edit ratio between the shorter string and any same-length window
/// of the longer string.
///
/// # Algorithm
/// 1. Order the inputs so `short.len() <= long.len()` (chars)
/// 2. Slide a window of `short.len()` over `long`
/// 3. Keep the maximum [`ratio`](super::ratio) seen, stopping early at 100
///
/// Equal lengths degrade to a plain ratio. Either string empty → 0.
///
/// # Example
/// ```
/// use labelcheck_core::nlp::partial_ratio;
///
/// assert_eq!(partial_ratio("ultrasound", "microultrasound"), 100);
/// assert!(partial_ratio("ct", "mri") < 50);
/// ```
pub fn partial_ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (short, long) = if a_chars.len() <= b_chars.len() {
        (a_chars, b_chars)
    } else {
        (b_chars, a_chars)
    };

    if short.is_empty() {
        return 0;
    }

    let mut best = 0;
    for window in long.windows(short.len()) {
        best = best.max(ratio_chars(&short, window));
        if best == MAX_SCORE {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::ratio;

    #[test]
    fn test_partial_ratio_substring() {
        assert_eq!(partial_ratio("ultrasound", "microultrasound"), 100);
        assert_eq!(partial_ratio("microultrasound", "ultrasound"), 100);
        assert_eq!(partial_ratio("us", "us (3d)"), 100);
    }

    #[test]
    fn test_partial_ratio_equal_length_is_ratio() {
        assert_eq!(
            partial_ratio("segmentation", "segmentaiton"),
            ratio("segmentation", "segmentaiton")
        );
    }

    #[test]
    fn test_partial_ratio_empty() {
        assert_eq!(partial_ratio("", ""), 0);
        assert_eq!(partial_ratio("", "ct"), 0);
    }

    #[test]
    fn test_partial_ratio_at_least_ratio() {
        let pairs = [("general", "general msk"), ("brain", "brain cancer"), ("ct", "pet-ct")];
        for (a, b) in pairs {
            assert!(partial_ratio(a, b) >= ratio(a, b), "{a} / {b}");
        }
    }
}
