//! Stopword lists
//!
//! This module provides stopword lookup backed by the `stop-words` crate
//! for non-Chinese languages, a built-in Chinese list, and loading from
//! custom word lists or files.
//!
//! A [`StopwordList`] is immutable once construction is finished and is
//! safe to share across threads; the analysis pipeline only ever reads it.

use std::fs;
use std::io;
use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of words excluded from frequency counting.
///
/// Matching is case-insensitive: words are stored lowercased and probes
/// containing uppercase letters are lowercased before lookup. For Chinese
/// (which has no case) both steps are identity.
#[derive(Debug, Clone)]
pub struct StopwordList {
    words: FxHashSet<String>,
}

impl Default for StopwordList {
    fn default() -> Self {
        Self::chinese()
    }
}

impl StopwordList {
    /// The built-in Chinese stopword list.
    ///
    /// Covers the common function words, particles, and pronouns that
    /// dominate raw frequency counts in Chinese news text.
    pub fn chinese() -> Self {
        let words = [
            "的", "了", "是", "我", "你", "他", "她", "它", "在", "有", "就", "都",
            "和", "与", "或", "不", "也", "而", "及", "这", "那", "个", "为", "以",
            "等", "但", "被", "给", "让", "把", "从", "到", "对", "将", "于", "能",
            "会", "可", "要", "很", "还", "更", "最", "只", "已", "又", "再", "着",
            "们", "说", "么", "吗", "呢", "吧", "啊",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        Self { words }
    }

    /// Load a stopword list for a language by name.
    ///
    /// Non-Chinese languages come from the `stop-words` crate; `"zh"`
    /// resolves to the built-in [`StopwordList::chinese`] list. Unknown
    /// language names fall back to English.
    pub fn for_language(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "zh" | "chinese" => return Self::chinese(),
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => LANGUAGE::English,
        };
        let words = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { words }
    }

    /// An empty list (no filtering).
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
        }
    }

    /// Build a list from explicit words.
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// Load a list from a file: one word per line, blank lines and lines
    /// starting with `#` are skipped.
    ///
    /// A missing or unreadable file is returned as an error; falling back
    /// to [`StopwordList::chinese`] is the caller's decision.
    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let body = fs::read_to_string(path)?;
        let words = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| line.to_lowercase())
            .collect();
        Ok(Self { words })
    }

    /// Resolve an optional stopword file path.
    ///
    /// No path, or a path that does not exist, falls back to the
    /// built-in Chinese list; any other read failure is propagated.
    pub fn load_or_chinese(path: Option<&Path>) -> io::Result<Self> {
        match path {
            None => Ok(Self::chinese()),
            Some(path) => match Self::from_file(path) {
                Ok(list) => Ok(list),
                Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Self::chinese()),
                Err(err) => Err(err),
            },
        }
    }

    /// Add words to the list.
    pub fn add<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove words from the list.
    pub fn remove<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check whether a token is a stopword.
    pub fn contains(&self, token: &str) -> bool {
        if token.chars().any(char::is_uppercase) {
            self.words.contains(&token.to_lowercase())
        } else {
            self.words.contains(token)
        }
    }

    /// The keep-predicate used by the analysis pipeline: a token survives
    /// iff it is not a stopword and is strictly longer than
    /// `min_token_length`, measured in Unicode scalar values.
    ///
    /// The length cutoff is strict, so the default of 1 drops every
    /// single-character token (single ideographs, stray punctuation).
    pub fn keeps(&self, token: &str, min_token_length: usize) -> bool {
        token.chars().count() > min_token_length && !self.contains(token)
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_chinese_defaults() {
        let list = StopwordList::chinese();

        assert!(list.contains("的"));
        assert!(list.contains("了"));
        assert!(list.contains("是"));
        assert!(!list.contains("北京"));
        assert!(!list.contains("新闻"));
    }

    #[test]
    fn test_english_via_stop_words_crate() {
        let list = StopwordList::for_language("en");

        assert!(list.contains("the"));
        assert!(list.contains("The")); // case insensitive
        assert!(!list.contains("cat"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let list = StopwordList::for_language("tlh");
        assert!(list.contains("the"));
    }

    #[test]
    fn test_from_list_and_mutation() {
        let mut list = StopwordList::from_list(["foo", "Bar"]);

        assert!(list.contains("foo"));
        assert!(list.contains("bar"));
        assert!(!list.contains("baz"));

        list.add(["baz"]);
        assert!(list.contains("baz"));

        list.remove(["foo"]);
        assert!(!list.contains("foo"));
    }

    #[test]
    fn test_from_file_skips_comments_and_blanks() {
        let path = std::env::temp_dir().join(format!(
            "hantext-stopwords-{}.txt",
            std::process::id()
        ));
        {
            let mut file = std::fs::File::create(&path).unwrap();
            writeln!(file, "# comment\n的\n\n了\n  是  ").unwrap();
        }

        let list = StopwordList::from_file(&path).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.contains("的"));
        assert!(list.contains("是"));
        assert!(!list.contains("# comment"));

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_from_file_missing_is_error() {
        assert!(StopwordList::from_file("/nonexistent/stopwords.txt").is_err());
    }

    #[test]
    fn test_load_or_chinese_fallbacks() {
        let from_none = StopwordList::load_or_chinese(None).unwrap();
        assert!(from_none.contains("的"));

        let missing = Path::new("/nonexistent/stopwords.txt");
        let from_missing = StopwordList::load_or_chinese(Some(missing)).unwrap();
        assert!(from_missing.contains("的"));
    }

    #[test]
    fn test_keep_predicate() {
        let list = StopwordList::from_list(["的", "其中"]);

        // Stopwords never kept, regardless of length.
        assert!(!list.keeps("的", 1));
        assert!(!list.keeps("其中", 1));
        // Strict length cutoff in chars, not bytes.
        assert!(!list.keeps("猫", 1));
        assert!(list.keeps("北京", 1));
        assert!(!list.keeps("北京", 2));
    }
}
