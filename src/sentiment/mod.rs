//! Lexicon-based sentiment scoring.
//!
//! Scoring is a pluggable capability behind the [`SentimentScorer`]
//! trait: given a text, return a score in `[0, 1]` where 1 is most
//! positive. The three-way [`SentimentLabel`] is derived from the score
//! by fixed thresholds — at or above 0.7 is positive, at or below 0.3 is
//! negative, everything between is neutral.
//!
//! The default [`LexiconScorer`] counts positive and negative word
//! occurrences. It is deliberately simple; any conforming scorer (an ML
//! model, a remote service) can be substituted.

use serde::{Deserialize, Serialize};

/// Score above which text is labeled positive.
pub const POSITIVE_THRESHOLD: f64 = 0.7;
/// Score below which text is labeled negative.
pub const NEGATIVE_THRESHOLD: f64 = 0.3;

/// A sentiment scoring capability.
pub trait SentimentScorer {
    /// Score `text` in `[0, 1]`; 1 is most positive. Text the scorer has
    /// no opinion about (including empty text) scores 0.5.
    fn score(&self, text: &str) -> f64;
}

/// Three-way sentiment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

/// A sentiment score with its derived label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    /// Score in `[0, 1]`, rounded to 4 decimal places.
    pub score: f64,
    pub label: SentimentLabel,
}

impl Sentiment {
    /// Classify a raw score. The score is clamped to `[0, 1]` and rounded
    /// to 4 decimal places before thresholding.
    pub fn from_score(score: f64) -> Self {
        let score = (score.clamp(0.0, 1.0) * 10_000.0).round() / 10_000.0;
        let label = if score >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        Self { score, label }
    }
}

/// Counts occurrences of positive and negative lexicon words.
///
/// The score is the positive share of all lexicon hits; text with no
/// hits scores 0.5. Matching is by substring, so it works on raw
/// (unsegmented) Chinese text.
#[derive(Debug, Clone)]
pub struct LexiconScorer {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::chinese()
    }
}

impl LexiconScorer {
    /// The built-in Chinese lexicon.
    pub fn chinese() -> Self {
        let positive = [
            "开心", "高兴", "喜欢", "喜爱", "热爱", "优秀", "出色", "精彩", "满意",
            "成功", "进步", "感谢", "谢谢", "幸福", "美好", "点赞", "支持", "棒",
            "好评", "增长", "提升", "利好",
        ];
        let negative = [
            "难过", "伤心", "讨厌", "痛苦", "糟糕", "失败", "失望", "愤怒", "生气",
            "担忧", "担心", "下降", "下跌", "亏损", "问题", "事故", "差评", "批评",
            "危机", "风险", "利空",
        ];
        Self {
            positive: positive.iter().map(|s| s.to_string()).collect(),
            negative: negative.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Build a scorer from custom word lists.
    pub fn with_lexicon<I, S>(positive: I, negative: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positive: positive.into_iter().map(Into::into).collect(),
            negative: negative.into_iter().map(Into::into).collect(),
        }
    }

    fn hits(words: &[String], text: &str) -> usize {
        words.iter().map(|w| text.matches(w.as_str()).count()).sum()
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let pos = Self::hits(&self.positive, text);
        let neg = Self::hits(&self.negative, text);
        if pos + neg == 0 {
            return 0.5;
        }
        pos as f64 / (pos + neg) as f64
    }
}
