//! Case-Consistency Checker
//!
//! Groups category tokens by their lowercase form and reports every form
//! spelled with more than one capitalization, unless a whitelist group
//! lists that label (in any casing).

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::debug;

use crate::tokenizer::CategorySet;
use crate::whitelist::Whitelist;

/// One label observed with inconsistent capitalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFinding {
    /// Lowercased form shared by all variants
    pub normalized: String,
    /// Distinct original spellings, sorted
    pub variants: Vec<String>,
}

impl fmt::Display for CaseFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}': ", self.normalized)?;
        write_quoted_list(f, &self.variants)
    }
}

/// Write `['a', 'b']`.
pub(crate) fn write_quoted_list(f: &mut fmt::Formatter<'_>, items: &[String]) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "'{item}'")?;
    }
    f.write_str("]")
}

/// Lowercased token → sorted original spellings.
pub fn case_variations(categories: &CategorySet) -> BTreeMap<String, BTreeSet<String>> {
    let mut variations: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for category in categories.iter() {
        variations
            .entry(category.to_lowercase())
            .or_default()
            .insert(category.to_string());
    }
    variations
}

/// Report lowercase forms with more than one spelling, in key order.
///
/// # Example
/// ```
/// use labelcheck_core::case_check::check_case_consistency;
/// use labelcheck_core::tokenizer::CategorySet;
/// use labelcheck_core::whitelist::Whitelist;
///
/// let set: CategorySet = ["CT", "ct", "MRI"].into_iter().collect();
/// let findings = check_case_consistency(&set, &Whitelist::empty());
/// assert_eq!(findings.len(), 1);
/// assert_eq!(findings[0].normalized, "ct");
/// assert_eq!(findings[0].variants, ["CT", "ct"]);
/// ```
pub fn check_case_consistency(
    categories: &CategorySet,
    whitelist: &Whitelist,
) -> Vec<CaseFinding> {
    let mut findings = Vec::new();

    for (normalized, variants) in case_variations(categories) {
        if variants.len() < 2 {
            continue;
        }

        let variants: Vec<String> = variants.into_iter().collect();
        if whitelist.is_group_fully_whitelisted(&normalized, variants.as_slice()) {
            debug!(
                normalized = %normalized,
                variants = variants.len(),
                "Case variants sanctioned by whitelist"
            );
            continue;
        }

        findings.push(CaseFinding {
            normalized,
            variants,
        });
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whitelist::WhitelistGroup;

    fn set(tokens: &[&str]) -> CategorySet {
        tokens.iter().copied().collect()
    }

    #[test]
    fn test_case_finding_basic() {
        let findings = check_case_consistency(&set(&["ct", "CT"]), &Whitelist::empty());
        assert_eq!(
            findings,
            vec![CaseFinding {
                normalized: "ct".into(),
                variants: vec!["CT".into(), "ct".into()],
            }]
        );
    }

    #[test]
    fn test_single_variant_never_reported() {
        let findings =
            check_case_consistency(&set(&["CT", "MRI", "Ultrasound"]), &Whitelist::empty());
        assert!(findings.is_empty());
    }

    #[test]
    fn test_findings_sorted_by_key() {
        let findings = check_case_consistency(
            &set(&["mri", "MRI", "CT", "ct", "Brain", "brain"]),
            &Whitelist::empty(),
        );
        let keys: Vec<&str> = findings.iter().map(|f| f.normalized.as_str()).collect();
        assert_eq!(keys, ["brain", "ct", "mri"]);
    }

    #[test]
    fn test_builtin_member_split_suppressed() {
        // builtin lists only "Ultrasound"; its lowercase spelling is still exempt
        let wl = Whitelist::builtin();
        let findings = check_case_consistency(&set(&["Ultrasound", "ultrasound"]), &wl);
        assert!(findings.is_empty());
    }

    #[test]
    fn test_any_listed_casing_exempts_all() {
        let wl = Whitelist::new(vec![WhitelistGroup::new(
            "Ultrasound",
            ["MicroUltrasound", "ultrasound"],
        )]);
        let findings = check_case_consistency(
            &set(&["Ultrasound", "ULTRASOUND", "MicroUltrasound", "microultrasound"]),
            &wl,
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn test_exempt_and_reported_keys_mixed() {
        let categories = set(&["Ultrasound", "ultrasound", "CT", "ct"]);
        let findings = check_case_consistency(&categories, &Whitelist::builtin());
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].normalized, "ct");
    }

    #[test]
    fn test_unrelated_group_does_not_exempt() {
        let wl = Whitelist::new(vec![WhitelistGroup::new("PET", ["PET", "Pet"])]);
        let findings = check_case_consistency(&set(&["CT", "Ct"]), &wl);
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn test_empty_set() {
        assert!(check_case_consistency(&CategorySet::default(), &Whitelist::builtin()).is_empty());
    }

    #[test]
    fn test_display() {
        let finding = CaseFinding {
            normalized: "ct".into(),
            variants: vec!["CT".into(), "ct".into()],
        };
        assert_eq!(finding.to_string(), "'ct': ['CT', 'ct']");
    }
}
