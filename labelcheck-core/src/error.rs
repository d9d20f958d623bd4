//! Error types for labelcheck operations.
//!
//! The category checks themselves never fail; errors come from loading the
//! dataset and the configuration around them.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for labelcheck operations.
pub type Result<T> = std::result::Result<T, LabelcheckError>;

/// Errors raised while preparing a check run.
#[derive(Error, Debug)]
pub enum LabelcheckError {
    /// Dataset or config file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV could not be parsed
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Config file is not valid TOML for the expected layout
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Similarity threshold outside 0..=100
    #[error("similarity threshold must be within 0..=100, got {0}")]
    InvalidThreshold(u32),

    /// Category delimiter that cannot split anything
    #[error("invalid category delimiter {0:?}")]
    InvalidDelimiter(char),
}

impl LabelcheckError {
    /// Wrap an I/O error with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LabelcheckError::Io {
            path: path.into(),
            source,
        }
    }

    /// The file an I/O error concerns, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            LabelcheckError::Io { path, .. } => Some(path),
            _ => None,
        }
    }

    /// True for errors caused by a missing input file.
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LabelcheckError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}
