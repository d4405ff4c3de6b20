//! Per-document word streams
//!
//! A [`DocumentDigest`] walks the parsed sentences once, normalizes every
//! word and splits the result into the streams the aggregation steps read.

use crate::config::EventGraphConfig;
use crate::nlp::normalize::WordFilter;
use crate::types::{AnnotatedWord, Document, EntityLabel, SvoTriple};

use super::frequency::FrequencyCounter;

/// Normalized streams extracted from one document
#[derive(Debug, Clone, Default)]
pub struct DocumentDigest {
    /// Ranker input: every sentence's arcs (or words), flattened
    pub ranking_words: Vec<AnnotatedWord>,
    /// Every kept word in document order
    pub words: Vec<AnnotatedWord>,
    /// Entity sets of sentences that contain at least one entity
    pub entity_sentences: Vec<Vec<EntityLabel>>,
    /// Entity occurrence counts over those sentences
    pub entity_counts: FrequencyCounter<EntityLabel>,
    /// Triples of those sentences
    pub triples: Vec<SvoTriple>,
}

impl DocumentDigest {
    pub fn collect(document: &Document, filter: &WordFilter, config: &EventGraphConfig) -> Self {
        let mut digest = Self::default();

        for sentence in &document.sentences {
            digest
                .ranking_words
                .extend(filter.filter(sentence.ranking_words()));

            let kept: Vec<AnnotatedWord> = filter.filter(&sentence.words).collect();

            let mut entities: Vec<EntityLabel> = Vec::new();
            for word in kept
                .iter()
                .filter(|w| config.is_entity_category(&w.fine_category))
            {
                let label = word.entity_label();
                digest.entity_counts.add(label.clone());
                if !entities.contains(&label) {
                    entities.push(label);
                }
            }

            if !entities.is_empty() {
                digest.entity_sentences.push(entities);
                digest.triples.extend(sentence.triples.iter().cloned());
            }

            digest.words.extend(kept);
        }

        digest
    }

    /// Whether any sentence contained an entity
    pub fn has_entities(&self) -> bool {
        !self.entity_sentences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::types::{DependencyEdge, PosTag, Sentence};
    use std::sync::Arc;

    fn filter() -> WordFilter {
        WordFilter::new(Arc::new(StopwordFilter::from_list(&["the"])))
    }

    fn noun(text: &str) -> AnnotatedWord {
        AnnotatedWord::new(text, PosTag::Noun, "")
    }

    fn org(text: &str) -> AnnotatedWord {
        AnnotatedWord::new(text, PosTag::ProperNoun, "ORG")
    }

    #[test]
    fn test_entities_and_triples_from_qualifying_sentences_only() {
        let document = Document::new(vec![
            Sentence::from_words(vec![org("Acme"), noun("merger"), org("Acme")])
                .with_triples(vec![SvoTriple::new("Acme", "announced", "merger")]),
            Sentence::from_words(vec![noun("profit"), noun("the")])
                .with_triples(vec![SvoTriple::new("profit", "rose", "")]),
        ]);

        let digest = DocumentDigest::collect(&document, &filter(), &EventGraphConfig::default());

        assert!(digest.has_entities());
        assert_eq!(digest.entity_sentences, vec![vec![EntityLabel::new("Acme", "ORG")]]);
        assert_eq!(digest.entity_counts.count(&EntityLabel::new("Acme", "ORG")), 2);
        assert_eq!(digest.triples.len(), 1);
        assert_eq!(digest.triples[0].verb, "announced");
        assert_eq!(digest.words.len(), 4);
    }

    #[test]
    fn test_ranking_words_follow_arcs() {
        let document = Document::new(vec![Sentence::from_words(vec![
            noun("board"),
            noun("vote"),
        ])
        .with_arcs(vec![
            DependencyEdge::new(noun("board"), noun("vote")),
            DependencyEdge::new(noun("the"), noun("vote")),
        ])]);

        let digest = DocumentDigest::collect(&document, &filter(), &EventGraphConfig::default());
        let ranking: Vec<_> = digest
            .ranking_words
            .iter()
            .map(|w| w.surface_form.as_str())
            .collect();

        assert_eq!(ranking, vec!["board", "vote", "vote"]);
        assert!(!digest.has_entities());
    }

    #[test]
    fn test_empty_document() {
        let digest =
            DocumentDigest::collect(&Document::default(), &filter(), &EventGraphConfig::default());

        assert!(digest.words.is_empty());
        assert!(digest.ranking_words.is_empty());
        assert!(!digest.has_entities());
    }
}
