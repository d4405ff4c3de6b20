//! Per-word normalization
//!
//! Parsed words go through a [`WordFilter`] once: ASCII words are optionally
//! lowercased, then stop words and numeric tokens are dropped.

use std::sync::Arc;

use super::stopwords::StopwordFilter;
use crate::types::AnnotatedWord;

/// Normalizes words and drops the ones no component should see
#[derive(Debug, Clone)]
pub struct WordFilter {
    stopwords: Arc<StopwordFilter>,
    lowercase_ascii: bool,
}

impl WordFilter {
    pub fn new(stopwords: Arc<StopwordFilter>) -> Self {
        Self {
            stopwords,
            lowercase_ascii: false,
        }
    }

    pub fn with_lowercase_ascii(mut self, lowercase_ascii: bool) -> Self {
        self.lowercase_ascii = lowercase_ascii;
        self
    }

    /// Normalized copy of `word`, or `None` when it is blank, a stop word or
    /// a number
    pub fn normalize(&self, word: &AnnotatedWord) -> Option<AnnotatedWord> {
        let surface = if self.lowercase_ascii && word.surface_form.is_ascii() {
            word.surface_form.to_ascii_lowercase()
        } else {
            word.surface_form.clone()
        };

        if surface.trim().is_empty()
            || self.stopwords.is_stopword(&surface)
            || is_number(&surface)
        {
            return None;
        }

        Some(AnnotatedWord {
            surface_form: surface,
            coarse_pos: word.coarse_pos,
            fine_category: word.fine_category.clone(),
        })
    }

    /// Normalize a sequence, keeping order
    pub fn filter<'a, I>(&'a self, words: I) -> impl Iterator<Item = AnnotatedWord> + 'a
    where
        I: IntoIterator<Item = &'a AnnotatedWord>,
        I::IntoIter: 'a,
    {
        words.into_iter().filter_map(move |w| self.normalize(w))
    }
}

/// Whether `text` reads as a number
///
/// Anything `f64` parses counts, as does a single numeric character such as
/// `½` or a CJK numeral like `三`.
pub fn is_number(text: &str) -> bool {
    if text.trim().parse::<f64>().is_ok() {
        return true;
    }
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(c), None) if c.is_numeric() || CJK_NUMERALS.contains(c)
    )
}

const CJK_NUMERALS: &str = "〇零一二三四五六七八九十百千万億兆";
