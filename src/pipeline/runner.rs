//! Analysis runner — orchestrates the text-to-frequency pipeline.
//!
//! An [`Analyzer`] holds a statically-composed set of capabilities: a
//! [`Segmenter`], a [`SentimentScorer`], a [`StopwordList`], and an
//! [`AnalysisConfig`]. Each analysis call is an independent, stateless
//! transformation:
//!
//! 1. Script filter (optional, `restrict_to_han`)
//! 2. Segment
//! 3. Keep-filter (stopwords + minimum token length)
//! 4. Count
//! 5. Top-K select
//!
//! # Static dispatch
//!
//! `Analyzer` is generic over the segmenter and scorer types, so the
//! compiler monomorphizes each combination into a unique concrete type.
//! Use [`ChineseAnalyzer::chinese()`] for the default jieba + lexicon
//! composition without spelling out the generics.
//!
//! # Concurrency
//!
//! Analyses share no mutable state; the stopword list and capabilities
//! are read-only, so one `Analyzer` can serve parallel callers. The
//! batch entry points fan out with rayon and return results in input
//! order — merging across inputs is caller policy.

use std::borrow::Cow;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::freq::{top_k, FrequencyTable, RankedEntry};
use crate::nlp::segmenter::{filter_to_han, JiebaSegmenter, Segmenter, WhitespaceSegmenter};
use crate::nlp::stopwords::StopwordList;
use crate::pipeline::config::AnalysisConfig;
use crate::pipeline::validation::ValidationReport;
use crate::sentiment::{LexiconScorer, Sentiment, SentimentScorer};
use crate::source::{SourceError, TextSource};

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a pipeline stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("analysis_stage", stage = $name).entered();
    };
}

// ============================================================================
// AnalysisReport — the public result of a full analysis
// ============================================================================

/// Everything one analysis produces: the segmentation, the ranked
/// keywords, and the sentiment of the whole text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The full token sequence of the raw text, before any filtering.
    pub tokens: Vec<String>,
    /// Ranked keywords from the configured pipeline.
    pub keywords: Vec<RankedEntry>,
    /// Sentiment of the raw text.
    pub sentiment: Sentiment,
}

// ============================================================================
// Analyzer — statically-composed capability container
// ============================================================================

/// A reusable analysis pipeline over a segmenter and sentiment scorer.
///
/// # Type parameters
///
/// | Param | Trait | Default impl |
/// |-------|-------|--------------|
/// | `S` | [`Segmenter`] | [`JiebaSegmenter`] |
/// | `M` | [`SentimentScorer`] | [`LexiconScorer`] |
#[derive(Debug)]
pub struct Analyzer<S = JiebaSegmenter, M = LexiconScorer> {
    segmenter: S,
    scorer: M,
    stopwords: StopwordList,
    config: AnalysisConfig,
}

/// Type alias for the default Chinese analyzer.
pub type ChineseAnalyzer = Analyzer<JiebaSegmenter, LexiconScorer>;

impl ChineseAnalyzer {
    /// Build the default Chinese pipeline: jieba segmentation, the
    /// built-in Chinese stopword list, the lexicon sentiment scorer, and
    /// default configuration.
    pub fn chinese() -> Self {
        Self {
            segmenter: JiebaSegmenter::new(),
            scorer: LexiconScorer::chinese(),
            stopwords: StopwordList::chinese(),
            config: AnalysisConfig::default(),
        }
    }
}

impl Analyzer<WhitespaceSegmenter, LexiconScorer> {
    /// Build a whitespace-tokenized pipeline with no stopwords — useful
    /// for non-CJK text and as a deterministic baseline.
    pub fn whitespace() -> Self {
        Self {
            segmenter: WhitespaceSegmenter,
            scorer: LexiconScorer::chinese(),
            stopwords: StopwordList::empty(),
            config: AnalysisConfig::default(),
        }
    }
}

impl<S, M> Analyzer<S, M>
where
    S: Segmenter,
    M: SentimentScorer,
{
    /// Build an analyzer from explicit capabilities.
    ///
    /// The configuration is validated first; if any rule reports an
    /// error the analyzer is not constructed and the full
    /// [`ValidationReport`] is returned. Warnings do not block
    /// construction.
    pub fn new(
        segmenter: S,
        scorer: M,
        stopwords: StopwordList,
        config: AnalysisConfig,
    ) -> Result<Self, ValidationReport> {
        let report = config.validate();
        if report.has_errors() {
            return Err(report);
        }
        Ok(Self {
            segmenter,
            scorer,
            stopwords,
            config,
        })
    }

    /// Replace the stopword list.
    pub fn with_stopwords(mut self, stopwords: StopwordList) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the configuration, re-validating it.
    pub fn with_config(mut self, config: AnalysisConfig) -> Result<Self, ValidationReport> {
        let report = config.validate();
        if report.has_errors() {
            return Err(report);
        }
        self.config = config;
        Ok(self)
    }

    /// The active configuration.
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// The active stopword list.
    pub fn stopwords(&self) -> &StopwordList {
        &self.stopwords
    }

    /// Segment → filter → count. The resulting table contains no
    /// stopwords and no tokens at or below the minimum length.
    pub fn frequencies(&self, text: &str) -> FrequencyTable {
        let text = if self.config.restrict_to_han {
            trace_stage!("script_filter");
            Cow::Owned(filter_to_han(text))
        } else {
            Cow::Borrowed(text)
        };

        let tokens = {
            trace_stage!("segment");
            self.segmenter.segment(&text)
        };

        trace_stage!("count");
        FrequencyTable::count_filtered(tokens, |token| {
            self.stopwords.keeps(token, self.config.min_token_length)
        })
    }

    /// The `top_k` highest-frequency tokens meeting `min_frequency`,
    /// ordered by descending count with lexicographic tie-break.
    pub fn keywords(&self, text: &str) -> Vec<RankedEntry> {
        let table = self.frequencies(text);
        trace_stage!("top_k");
        top_k(&table, self.config.top_k, self.config.min_frequency)
    }

    /// Full analysis: segmentation of the raw text, ranked keywords, and
    /// sentiment.
    ///
    /// The `tokens` field reflects the raw text (no script filter, no
    /// stopword filter) so the caller can display the segmentation as-is;
    /// keywords go through the configured pipeline. Empty input yields
    /// empty tokens, empty keywords, and neutral sentiment — never an
    /// error.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let keywords = self.keywords(text);
        let tokens = {
            trace_stage!("segment");
            self.segmenter.segment(text)
        };
        let sentiment = {
            trace_stage!("sentiment");
            Sentiment::from_score(self.scorer.score(text))
        };
        AnalysisReport {
            tokens,
            keywords,
            sentiment,
        }
    }

    /// Analyze many texts in parallel. Results are returned in input
    /// order; each analysis is independent, and merging across inputs is
    /// left to the caller.
    pub fn analyze_batch<T>(&self, texts: &[T]) -> Vec<AnalysisReport>
    where
        T: AsRef<str> + Sync,
        S: Sync,
        M: Sync,
    {
        texts
            .par_iter()
            .map(|text| self.analyze(text.as_ref()))
            .collect()
    }

    /// Fetch each URL through `source` and analyze the text, in parallel.
    ///
    /// Each fetch-then-analyze unit is independent; a failed fetch
    /// surfaces as that URL's `Err` without affecting the others.
    /// Results are returned in input order.
    pub fn analyze_sources<T, U>(
        &self,
        source: &T,
        urls: &[U],
    ) -> Vec<(String, Result<AnalysisReport, SourceError>)>
    where
        T: TextSource + Sync,
        U: AsRef<str> + Sync,
        S: Sync,
        M: Sync,
    {
        urls.par_iter()
            .map(|url| {
                let url = url.as_ref();
                let result = source
                    .fetch_text(url)
                    .map(|text| self.analyze(&text));
                (url.to_string(), result)
            })
            .collect()
    }
}
