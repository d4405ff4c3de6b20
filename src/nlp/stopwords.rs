//! Stop-word lists
//!
//! A [`StopwordFilter`] is built once, from the `stop-words` crate or from a
//! line-delimited file, and then shared read-only by every component.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

use crate::errors::Result;

/// A read-only set of words to exclude
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Stored lowercase unless the filter is case-sensitive
    stopwords: FxHashSet<String>,
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::empty()
    }
}

impl StopwordFilter {
    /// Built-in list for the given language
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, ja
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_builtin(language),
            case_sensitive: false,
        }
    }

    /// Filter that excludes nothing
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Filter from an explicit word list
    pub fn from_list(words: &[&str]) -> Self {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Read one stop word per line
    ///
    /// Surrounding whitespace is trimmed; blank lines and duplicates are
    /// ignored.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let mut filter = Self::empty();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                filter.insert(word);
            }
        }
        Ok(filter)
    }

    /// Read a line-delimited stop-word file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Compare words exactly instead of lowercased
    ///
    /// Words already stored stay as they were inserted.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add more stop words
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.insert(word);
        }
    }

    /// Merge another filter's words into this one
    pub fn extend(&mut self, other: &StopwordFilter) {
        self.stopwords.extend(other.stopwords.iter().cloned());
    }

    /// Whether `word` should be excluded
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn insert(&mut self, word: &str) {
        if self.case_sensitive {
            self.stopwords.insert(word.to_string());
        } else {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    fn load_builtin(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "ja" | "japanese" => return Self::japanese_stopwords(),
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_string()).collect()
    }

    /// Common Japanese function words and particles
    fn japanese_stopwords() -> FxHashSet<String> {
        [
            "の", "に", "は", "を", "た", "が", "で", "て", "と", "し", "れ", "さ", "ある", "いる",
            "も", "する", "から", "な", "こと", "として", "い", "や", "など", "なっ", "ない", "この",
            "ため", "その", "あっ", "よう", "また", "もの", "という", "あり", "まで", "られ", "なる",
            "へ", "か", "だ", "これ", "によって", "により", "おり",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_builtin() {
        let filter = StopwordFilter::new("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(!filter.is_stopword("merger"));
    }

    #[test]
    fn test_japanese_builtin() {
        let filter = StopwordFilter::new("ja");

        assert!(filter.is_stopword("の"));
        assert!(filter.is_stopword("する"));
        assert!(!filter.is_stopword("会社"));
    }

    #[test]
    fn test_from_reader_skips_blank_and_duplicate_lines() {
        let source = "the\n\n  a  \nthe\n\t\nof\n";
        let filter = StopwordFilter::from_reader(source.as_bytes()).unwrap();

        assert_eq!(filter.len(), 3);
        assert!(filter.is_stopword("a"));
        assert!(filter.is_stopword("of"));
        assert!(!filter.is_stopword(""));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = StopwordFilter::from_path("/nonexistent/stopword/list");
        assert!(result.is_err());
    }

    #[test]
    fn test_custom_and_extend() {
        let mut filter = StopwordFilter::from_list(&["said"]);
        filter.extend(&StopwordFilter::from_list(&["also"]));

        assert!(filter.is_stopword("said"));
        assert!(filter.is_stopword("also"));
        assert!(!filter.is_stopword("profit"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_case_sensitive() {
        let mut filter = StopwordFilter::empty().with_case_sensitive(true);
        filter.add_stopwords(&["Inc"]);

        assert!(filter.is_stopword("Inc"));
        assert!(!filter.is_stopword("inc"));
    }
}
