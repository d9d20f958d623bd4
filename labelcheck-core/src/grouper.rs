//! Similarity Grouper - Near-Duplicate Label Clustering
//!
//! A single greedy pass over the sorted Category Set:
//! - each unclaimed token seeds a cluster
//! - later unclaimed tokens join if they score at or above the threshold
//!   against the seed
//! - claimed tokens are never compared again
//!
//! Clustering is order-dependent and not transitive: with A < B < C,
//! sim(A,B) and sim(B,C) high but sim(A,C) low, the result is `[A, B]`
//! and C stays alone. Singleton clusters are not reported.
//!
//! # Complexity
//! O(n²) metric evaluations over n distinct tokens.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use crate::case_check::write_quoted_list;
use crate::nlp::{similarity_score, MAX_SCORE};
use crate::tokenizer::CategorySet;
use crate::whitelist::Whitelist;

/// Default minimum score for two labels to be considered duplicates.
pub const DEFAULT_SIMILARITY_THRESHOLD: u8 = 70;

/// Labels judged likely duplicates of the seed (first member).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityCluster {
    pub members: Vec<String>,
}

impl SimilarityCluster {
    /// The token that opened the cluster; `None` for an empty cluster.
    pub fn seed(&self) -> Option<&str> {
        self.members.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.members.iter().any(|m| m == token)
    }
}

impl fmt::Display for SimilarityCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_quoted_list(f, &self.members)
    }
}

/// Greedy near-duplicate clustering with whitelist exemptions.
#[derive(Debug, Clone, Copy)]
pub struct SimilarityGrouper<'w> {
    threshold: u8,
    whitelist: &'w Whitelist,
}

impl<'w> SimilarityGrouper<'w> {
    /// Create a grouper with the default threshold.
    pub fn new(whitelist: &'w Whitelist) -> Self {
        Self::with_threshold(DEFAULT_SIMILARITY_THRESHOLD, whitelist)
    }

    /// Create with a custom threshold. Values above 100 are clamped.
    pub fn with_threshold(threshold: u8, whitelist: &'w Whitelist) -> Self {
        Self {
            threshold: threshold.min(MAX_SCORE),
            whitelist,
        }
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    /// Cluster the set in a single pass.
    ///
    /// # Example
    /// ```
    /// use labelcheck_core::grouper::SimilarityGrouper;
    /// use labelcheck_core::tokenizer::CategorySet;
    /// use labelcheck_core::whitelist::Whitelist;
    ///
    /// let whitelist = Whitelist::empty();
    /// let set: CategorySet = ["Segmentation", "Segmentaiton", "Meshes"].into_iter().collect();
    /// let clusters = SimilarityGrouper::new(&whitelist).group(&set);
    /// assert_eq!(clusters.len(), 1);
    /// assert_eq!(clusters[0].members, ["Segmentaiton", "Segmentation"]);
    /// ```
    pub fn group(&self, categories: &CategorySet) -> Vec<SimilarityCluster> {
        let tokens = categories.as_slice();
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();

        let mut processed: HashSet<usize> = HashSet::with_capacity(tokens.len());
        let mut clusters = Vec::new();

        for (i, seed) in tokens.iter().enumerate() {
            if !processed.insert(i) {
                continue;
            }
            let mut members = vec![seed.clone()];

            for (j, candidate) in tokens.iter().enumerate().skip(i + 1) {
                if processed.contains(&j) {
                    continue;
                }
                if self.whitelist.are_co_whitelisted(seed, candidate) {
                    trace!(seed = %seed, candidate = %candidate, "Skipping whitelisted pair");
                    continue;
                }

                let score = similarity_score(&lowered[i], &lowered[j]);
                if score >= self.threshold {
                    debug!(seed = %seed, candidate = %candidate, score, "Similar labels");
                    members.push(candidate.clone());
                    processed.insert(j);
                }
            }

            if members.len() > 1 {
                clusters.push(SimilarityCluster { members });
            }
        }

        clusters
    }
}
