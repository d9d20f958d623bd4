//! Check-run configuration.
//!
//! Built from defaults, optionally overlaid by a TOML file, then by
//! command-line flags. Every section may be omitted from the file.
//!
//! ```toml
//! [checker]
//! threshold = 75
//! columns = ["Modalities", "Clinical Application"]
//!
//! [whitelist.groups]
//! Ultrasound = ["MicroUltrasound", "Ultrasound"]
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::analysis::CategoryChecker;
use crate::error::{LabelcheckError, Result};
use crate::grouper::DEFAULT_SIMILARITY_THRESHOLD;
use crate::nlp::MAX_SCORE;
use crate::tokenizer::DEFAULT_DELIMITER;
use crate::validation::ValidationRules;
use crate::whitelist::{Whitelist, WhitelistGroup, DEFAULT_WHITELIST_GROUPS};

/// Settings for the category checks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Minimum similarity score (0–100) for two labels to be duplicates
    pub threshold: u32,
    /// Separator between categories inside one cell
    pub delimiter: char,
    /// Columns holding delimited categories
    pub columns: Vec<String>,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            threshold: u32::from(DEFAULT_SIMILARITY_THRESHOLD),
            delimiter: DEFAULT_DELIMITER,
            columns: vec!["Modalities".to_string(), "Clinical Application".to_string()],
        }
    }
}

/// Whitelist groups keyed by group name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WhitelistConfig {
    /// Replaces the built-in groups entirely when present
    pub groups: BTreeMap<String, Vec<String>>,
}

impl Default for WhitelistConfig {
    fn default() -> Self {
        Self {
            groups: DEFAULT_WHITELIST_GROUPS
                .iter()
                .map(|(name, members)| {
                    (name.to_string(), members.iter().map(|m| m.to_string()).collect())
                })
                .collect(),
        }
    }
}

impl WhitelistConfig {
    pub fn build(&self) -> Whitelist {
        Whitelist::new(
            self.groups
                .iter()
                .map(|(name, members)| {
                    WhitelistGroup::new(name.as_str(), members.iter().map(String::as_str))
                })
                .collect(),
        )
    }
}

/// Full configuration of a check run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub checker: CheckerConfig,
    pub whitelist: WhitelistConfig,
    pub validation: ValidationRules,
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LabelcheckError::io(path, e))?;
        let config = Self::from_toml_str(&content)?;
        debug!(
            path = %path.display(),
            groups = config.whitelist.groups.len(),
            "Loaded config file"
        );
        Ok(config)
    }

    /// Apply command-line overrides on top of file values.
    pub fn with_overrides(mut self, threshold: Option<u32>, columns: Vec<String>) -> Result<Self> {
        if let Some(threshold) = threshold {
            self.checker.threshold = threshold;
        }
        if !columns.is_empty() {
            self.checker.columns = columns;
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject settings the checks cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.checker.threshold > u32::from(MAX_SCORE) {
            return Err(LabelcheckError::InvalidThreshold(self.checker.threshold));
        }
        if self.checker.delimiter.is_control() {
            return Err(LabelcheckError::InvalidDelimiter(self.checker.delimiter));
        }
        Ok(())
    }

    /// Build the category checker described by this configuration.
    pub fn category_checker(&self) -> Result<CategoryChecker> {
        self.validate()?;
        let threshold = u8::try_from(self.checker.threshold)
            .map_err(|_| LabelcheckError::InvalidThreshold(self.checker.threshold))?;

        Ok(CategoryChecker::new(self.whitelist.build())
            .with_threshold(threshold)
            .with_delimiter(self.checker.delimiter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.checker.threshold, 70);
        assert_eq!(config.checker.delimiter, ',');
        assert_eq!(config.checker.columns, ["Modalities", "Clinical Application"]);
        assert_eq!(config.whitelist.groups.len(), DEFAULT_WHITELIST_GROUPS.len());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_toml_overrides() {
        let config = Config::from_toml_str(
            r#"
            [checker]
            threshold = 85
            columns = ["Area of body", "Imaging type"]

            [whitelist.groups]
            Ultrasound = ["MicroUltrasound", "Ultrasound"]

            [validation]
            mandatory_columns = ["Dataset Name", "Source"]
            "#,
        )
        .unwrap();

        assert_eq!(config.checker.threshold, 85);
        assert_eq!(config.checker.delimiter, ',');
        assert_eq!(config.checker.columns, ["Area of body", "Imaging type"]);
        assert_eq!(config.whitelist.groups.len(), 1);
        assert_eq!(config.validation.mandatory_columns, ["Dataset Name", "Source"]);
        assert_eq!(config.validation.link_column, "Link");

        let whitelist = config.whitelist.build();
        assert!(whitelist.are_co_whitelisted("ultrasound", "microultrasound"));
        assert!(!whitelist.are_co_whitelisted("General", "General MSK"));
    }

    #[test]
    fn test_threshold_out_of_range() {
        let err = Config::from_toml_str("[checker]\nthreshold = 101\n").unwrap_err();
        assert!(matches!(err, LabelcheckError::InvalidThreshold(101)));

        let err = Config::default().with_overrides(Some(400), vec![]).unwrap_err();
        assert!(matches!(err, LabelcheckError::InvalidThreshold(400)));
    }

    #[test]
    fn test_invalid_toml() {
        let err = Config::from_toml_str("[checker\nthreshold = 1").unwrap_err();
        assert!(matches!(err, LabelcheckError::ConfigParse(_)));
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default()
            .with_overrides(Some(90), vec!["Imaging type".to_string()])
            .unwrap();
        assert_eq!(config.checker.threshold, 90);
        assert_eq!(config.checker.columns, ["Imaging type"]);

        let checker = config.category_checker().unwrap();
        assert!(checker.whitelist().are_co_whitelisted("US", "US (3D)"));
    }

    #[test]
    fn test_control_delimiter_rejected() {
        let err = Config::from_toml_str("[checker]\ndelimiter = \"\\n\"\n").unwrap_err();
        assert!(matches!(err, LabelcheckError::InvalidDelimiter('\n')));
    }
}
