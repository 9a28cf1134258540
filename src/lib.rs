//! Chinese text analysis: segmentation, word frequency, keyword
//! ranking, and lexicon sentiment.
//!
//! The core is a stateless, request-scoped pipeline — segment, filter by
//! stopwords and token length, count frequencies, select the top K — with
//! pluggable capabilities at every seam: [`Segmenter`] for word
//! segmentation, [`SentimentScorer`] for sentiment, [`TextSource`] for
//! turning URLs into text.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use hantext::ChineseAnalyzer;
//!
//! let analyzer = ChineseAnalyzer::chinese();
//! let report = analyzer.analyze("北京举办展览，展览吸引了很多观众。");
//! for entry in &report.keywords {
//!     println!("{} × {}", entry.token, entry.count);
//! }
//! ```
//!
//! Configuration lives in [`AnalysisConfig`]; invalid settings are
//! rejected at analyzer construction with a full
//! [`pipeline::validation::ValidationReport`] rather than one error at a
//! time. Batch entry points ([`Analyzer::analyze_batch`],
//! [`Analyzer::analyze_sources`]) fan out with rayon and return results
//! in input order.

pub mod freq;
pub mod nlp;
pub mod pipeline;
pub mod sentiment;
pub mod source;

pub use freq::{top_k, FrequencyTable, RankedEntry};
pub use nlp::segmenter::{JiebaSegmenter, Segmenter, WhitespaceSegmenter};
pub use nlp::stopwords::StopwordList;
pub use pipeline::config::AnalysisConfig;
pub use pipeline::runner::{AnalysisReport, Analyzer, ChineseAnalyzer};
pub use sentiment::{LexiconScorer, Sentiment, SentimentLabel, SentimentScorer};
pub use source::{SourceError, StaticSource, TextSource};
