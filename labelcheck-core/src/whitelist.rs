//! Whitelist of Intentionally Distinct Label Variants
//!
//! Some labels look like typos of each other but are both legitimate:
//!   - "General" ↔ "General MSK"
//!   - "Ultrasound" ↔ "MicroUltrasound"
//!   - "Prostate" ↔ "Prostate Cancer"
//!
//! A [`Whitelist`] is an immutable set of named groups built once at startup
//! and passed by reference to the checkers. Group names are for readability
//! only; the member lists carry the meaning.
//!
//! # Lookup
//! - O(1) member → groups lookup via a pre-built HashMap keyed by the
//!   lowercased member
//! - Both exemptions compare lowercased forms, so listing "Ultrasound" once
//!   sanctions every casing of it

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

/// Built-in groups used when no configuration file overrides them.
/// Each entry is `(group name, members)`.
pub static DEFAULT_WHITELIST_GROUPS: &[(&str, &[&str])] = &[
    ("Ultrasound", &["MicroUltrasound", "Ultrasound"]),
    ("General", &["General", "General MSK"]),
    (
        "Modalities",
        &[
            "US", "US (2D)", "US (3D)", "US (2D, 3D)", "US (Video)", "US (Sweep)",
            "US (MicroUltrasound)", "US (2D",
        ],
    ),
    (
        "Clinical Application",
        &[
            "Brain Cancer", "Breast Cancer", "Lung Cancer", "Liver Cancer", "Uterus Cancer",
            "Pancreas Cancer", "General", "General MSK", "Prostate", "Prostate Cancer",
        ],
    ),
];

// ============================================================================
// Whitelist Group
// ============================================================================

/// A named set of labels that may coexist without being reported.
#[derive(Debug, Clone)]
pub struct WhitelistGroup {
    name: String,
    members: HashSet<String>,
    lowered: HashSet<String>,
}

impl WhitelistGroup {
    /// Create a group from a name and its member labels.
    pub fn new<N, I, S>(name: N, members: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: HashSet<String> = members.into_iter().map(Into::into).collect();
        let lowered = members.iter().map(|m| m.to_lowercase()).collect();
        Self {
            name: name.into(),
            members,
            lowered,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Case-insensitive membership.
    #[inline]
    pub fn contains_folded(&self, label: &str) -> bool {
        self.lowered.contains(&label.to_lowercase())
    }
}

// ============================================================================
// Whitelist Index
// ============================================================================

/// Immutable index over all configured groups.
#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    groups: Vec<WhitelistGroup>,
    /// Lowercased member → indices of the groups listing it.
    member_index: HashMap<String, Vec<usize>>,
}

impl Whitelist {
    /// Build the index from a list of groups.
    pub fn new(groups: Vec<WhitelistGroup>) -> Self {
        let mut member_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, group) in groups.iter().enumerate() {
            if group.len() < 2 {
                warn!(
                    group = group.name(),
                    members = group.len(),
                    "Whitelist group has fewer than two members"
                );
            }
            for lowered in &group.lowered {
                member_index.entry(lowered.clone()).or_default().push(idx);
            }
        }

        debug!(
            groups = groups.len(),
            members = member_index.len(),
            "Built whitelist index"
        );

        Self {
            groups,
            member_index,
        }
    }

    /// A whitelist with no groups; nothing is exempt.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in groups from [`DEFAULT_WHITELIST_GROUPS`].
    pub fn builtin() -> Self {
        Self::new(
            DEFAULT_WHITELIST_GROUPS
                .iter()
                .map(|(name, members)| WhitelistGroup::new(*name, members.iter().copied()))
                .collect(),
        )
    }

    pub fn groups(&self) -> &[WhitelistGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn groups_of(&self, lowered: &str) -> &[usize] {
        self.member_index
            .get(lowered)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check whether two different labels belong to the same group,
    /// comparing lowercased forms.
    ///
    /// Symmetric. A label is never co-whitelisted with itself.
    ///
    /// # Example
    /// ```
    /// use labelcheck_core::whitelist::Whitelist;
    ///
    /// let whitelist = Whitelist::builtin();
    /// assert!(whitelist.are_co_whitelisted("Ultrasound", "microultrasound"));
    /// assert!(!whitelist.are_co_whitelisted("Ultrasound", "CT"));
    /// ```
    pub fn are_co_whitelisted(&self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }

        let groups_a = self.groups_of(&a.to_lowercase());
        if groups_a.is_empty() {
            return false;
        }
        let groups_b = self.groups_of(&b.to_lowercase());

        groups_a.iter().any(|idx| groups_b.contains(idx))
    }

    /// Check whether a whole set of case variants is sanctioned.
    ///
    /// True iff some group lists `normalized_key` and that same group lists
    /// every variant, all compared lowercased. Variants of one case group
    /// share the key, so in practice listing any casing of a label exempts
    /// all of its casings.
    ///
    /// # Example
    /// ```
    /// use labelcheck_core::whitelist::{Whitelist, WhitelistGroup};
    ///
    /// let whitelist = Whitelist::new(vec![
    ///     WhitelistGroup::new("PET", ["PET", "PET-CT"]),
    /// ]);
    /// assert!(whitelist.is_group_fully_whitelisted("pet", &["PET", "pet"]));
    /// assert!(!whitelist.is_group_fully_whitelisted("ct", &["CT", "ct"]));
    /// ```
    pub fn is_group_fully_whitelisted<S: AsRef<str>>(
        &self,
        normalized_key: &str,
        variants: &[S],
    ) -> bool {
        self.groups_of(&normalized_key.to_lowercase())
            .iter()
            .map(|&idx| &self.groups[idx])
            .any(|group| variants.iter().all(|v| group.contains_folded(v.as_ref())))
    }
}
