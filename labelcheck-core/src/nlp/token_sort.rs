//! Token Sort Ratio
//!
//! Labels that use the same words in a different order ("Cancer, Brain"
//! vs "Brain Cancer") are compared after sorting their words.

use super::ratio::ratio;

/// Normalize a label into its sorted word form.
///
/// Lowercases, turns every non-alphanumeric character into a separator,
/// splits on whitespace, sorts the words and joins them with single spaces.
///
/// # Example
/// ```
/// use labelcheck_core::nlp::sort_tokens;
///
/// assert_eq!(sort_tokens("US (2D, 3D)"), "2d 3d us");
/// ```
pub fn sort_tokens(s: &str) -> String {
    let cleaned: String = s
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    let mut tokens: Vec<&str> = cleaned.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Edit ratio of the sorted word forms.
///
/// Punctuation-only labels normalize to an empty string and score 0.
///
/// # Example
/// ```
/// use labelcheck_core::nlp::token_sort_ratio;
///
/// assert_eq!(token_sort_ratio("general msk", "msk general"), 100);
/// ```
pub fn token_sort_ratio(a: &str, b: &str) -> u8 {
    ratio(&sort_tokens(a), &sort_tokens(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_tokens() {
        assert_eq!(sort_tokens("Brain Cancer"), "brain cancer");
        assert_eq!(sort_tokens("cancer  brain"), "brain cancer");
        assert_eq!(sort_tokens("Tracking / Pose"), "pose tracking");
        assert_eq!(sort_tokens("--"), "");
    }

    #[test]
    fn test_token_sort_ratio_reordered() {
        assert_eq!(token_sort_ratio("lung cancer", "cancer lung"), 100);
        assert_eq!(token_sort_ratio("us (video)", "video us"), 100);
    }

    #[test]
    fn test_token_sort_ratio_punctuation_only() {
        assert_eq!(token_sort_ratio("/", "-"), 0);
    }
}
