//! Word segmentation
//!
//! Segmentation is a pluggable capability behind the [`Segmenter`] trait:
//! given a string, return the ordered sequence of word tokens. Two
//! implementations are provided — [`JiebaSegmenter`] for Chinese and
//! [`WhitespaceSegmenter`] for whitespace-delimited scripts — and any
//! conforming implementation can be substituted.

use jieba_rs::Jieba;

/// A word segmentation capability.
///
/// # Contract
///
/// - **Input**: arbitrary already-decoded text; may be empty.
/// - **Output**: the tokens of the text in document order. Empty input
///   produces an empty vector; malformed input is tolerated, never an
///   error.
/// - Whitespace-only pieces are not tokens and must not be emitted.
pub trait Segmenter {
    /// Split `text` into word tokens.
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Dictionary-based Chinese segmentation backed by `jieba-rs`.
///
/// Construction loads the bundled dictionary and is comparatively
/// expensive; build one segmenter and reuse it across analyses.
pub struct JiebaSegmenter {
    jieba: Jieba,
    hmm: bool,
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl JiebaSegmenter {
    /// Create a segmenter with the default dictionary and HMM enabled
    /// (better recall on words missing from the dictionary).
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
            hmm: true,
        }
    }

    /// Enable or disable the HMM step for out-of-vocabulary words.
    pub fn with_hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }
}

impl Segmenter for JiebaSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        self.jieba
            .cut(text, self.hmm)
            .into_iter()
            .filter(|piece| !piece.trim().is_empty())
            .map(|piece| piece.to_string())
            .collect()
    }
}

impl std::fmt::Debug for JiebaSegmenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JiebaSegmenter")
            .field("hmm", &self.hmm)
            .finish_non_exhaustive()
    }
}

/// Splits on Unicode whitespace. Suitable for whitespace-delimited
/// scripts and for tests where token boundaries must be obvious.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|w| w.to_string()).collect()
    }
}

/// Returns `true` for characters in the Han script (CJK Unified
/// Ideographs plus extensions A/B and the compatibility block).
pub fn is_han(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2A6DF}')
}

/// Strip characters outside the Han script before segmentation.
///
/// Each removed run collapses to a single space so that Han runs which
/// were separated in the input are never joined — joining them would
/// change segmentation boundaries.
pub fn filter_to_han(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut gap = false;
    for c in text.chars() {
        if is_han(c) {
            if gap && !out.is_empty() {
                out.push(' ');
            }
            gap = false;
            out.push(c);
        } else {
            gap = true;
        }
    }
    out
}
