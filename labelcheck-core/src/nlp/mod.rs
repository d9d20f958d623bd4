//! String Similarity Metrics for Category Labels
//!
//! Three independent scores on a 0–100 integer scale. Each one catches a
//! different kind of labeling slip, and the grouper keeps the best of them.
//!
//! # Metrics
//!
//! | Metric | Module | Complexity | Catches |
//! |--------|--------|------------|---------|
//! | [Edit ratio](ratio) | Indel / LCS | O(m×n) | Typos, transpositions |
//! | [Partial ratio](partial) | Sliding window | O(m×n×k) | Label contained in a longer label |
//! | [Token sort ratio](token_sort) | Sorted words | O(m×n) | Same words, different order |
//! | [Combined](combined) | Max of the three | O(m×n×k) | Duplicate detection |
//!
//! # Example
//!
//! ```
//! use labelcheck_core::nlp::{ratio, partial_ratio, token_sort_ratio, similarity_score};
//!
//! assert!(ratio("segmentation", "segmentaiton") >= 90);
//! assert_eq!(partial_ratio("ultrasound", "microultrasound"), 100);
//! assert_eq!(token_sort_ratio("brain cancer", "cancer brain"), 100);
//! assert_eq!(similarity_score("ct", "ct"), 100);
//! ```

pub mod ratio;
pub mod partial;
pub mod token_sort;
pub mod combined;

pub use self::ratio::{lcs_length, ratio};
pub use partial::partial_ratio;
pub use token_sort::{sort_tokens, token_sort_ratio};
pub use combined::similarity_score;

/// Upper bound of every similarity score.
pub const MAX_SCORE: u8 = 100;
