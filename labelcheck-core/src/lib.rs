//! Labelcheck Core - category label quality checks for catalog datasets
//!
//! Finds two kinds of labeling defects in comma-separated category fields:
//!
//! - **Case splits**: the same label spelled with different capitalization
//!   ("Ultrasound" / "ultrasound")
//! - **Near duplicates**: labels close enough in spelling to be typos of
//!   each other ("Segmentation" / "Segmentaiton")
//!
//! Known, intentionally distinct variants are exempted through a
//! [`Whitelist`] passed in by the caller. The checks are pure and in-memory;
//! dataset loading, row validation and reporting live alongside them for the
//! `labelcheck` binary.

pub mod analysis;
pub mod case_check;
pub mod config;
pub mod dataset;
pub mod error;
pub mod grouper;
pub mod nlp;
pub mod report;
pub mod tokenizer;
pub mod validation;
pub mod whitelist;

pub use analysis::{CategoryChecker, ColumnReport, Finding};
pub use case_check::{check_case_consistency, CaseFinding};
pub use config::Config;
pub use dataset::{Cell, Dataset};
pub use error::{LabelcheckError, Result};
pub use grouper::{SimilarityCluster, SimilarityGrouper, DEFAULT_SIMILARITY_THRESHOLD};
pub use tokenizer::{extract_categories, CategorySet};
pub use whitelist::{Whitelist, WhitelistGroup};
