//! Analysis configuration.
//!
//! [`AnalysisConfig`] is the full tuning surface of the pipeline. Every
//! field has a serde default, so partial JSON configs work:
//!
//! ```json
//! { "top_k": 10, "min_frequency": 2 }
//! ```
//!
//! Unrecognized fields are captured rather than rejected at parse time;
//! the [`super::validation::ValidationEngine`] reports them as warnings,
//! or as errors when `strict` is set.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Tuning parameters for a frequency analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Strict lower bound on token length in Unicode scalar values;
    /// tokens of exactly this length or shorter are dropped. The default
    /// of 1 removes single-character tokens.
    #[serde(default = "default_min_token_length")]
    pub min_token_length: usize,

    /// Minimum occurrence count for a token to appear in ranked output.
    #[serde(default = "default_min_frequency")]
    pub min_frequency: u32,

    /// Maximum number of ranked entries returned.
    #[serde(default = "default_top_k")]
    pub top_k: usize,

    /// Replace characters outside the Han script with a space before
    /// segmentation. Each removed run becomes a single space so that
    /// separated Han runs are never joined into one segmentation unit.
    #[serde(default)]
    pub restrict_to_han: bool,

    /// Optional stopword file (one word per line). Resolve it with
    /// [`StopwordList::load_or_chinese`](crate::nlp::stopwords::StopwordList::load_or_chinese):
    /// no path, or a path that does not exist, falls back to the
    /// built-in Chinese list. The pipeline itself never reads files.
    #[serde(default)]
    pub stopwords_source: Option<PathBuf>,

    /// If `true`, unrecognized configuration fields are errors; if
    /// `false`, warnings.
    #[serde(default)]
    pub strict: bool,

    /// Captures any fields not recognized by the schema.
    /// Used by the unknown-field validation rule.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

fn default_min_token_length() -> usize {
    1
}

fn default_min_frequency() -> u32 {
    1
}

fn default_top_k() -> usize {
    20
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_token_length: default_min_token_length(),
            min_frequency: default_min_frequency(),
            top_k: default_top_k(),
            restrict_to_han: false,
            stopwords_source: None,
            strict: false,
            unknown_fields: HashMap::new(),
        }
    }
}

impl AnalysisConfig {
    /// Run the default validation rules against this configuration.
    pub fn validate(&self) -> super::validation::ValidationReport {
        super::validation::ValidationEngine::with_defaults().validate(self)
    }
}
