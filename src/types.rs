//! Core value types
//!
//! Annotated words, dependency arcs, subject-verb-object triples and the
//! rendered `Event` records. All of them are transient: built per document
//! and dropped once the event list has been handed to a renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse part-of-speech category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

impl PosTag {
    /// Parse a coarse tag from an English name, a Universal Dependencies tag
    /// or a Japanese part-of-speech class.
    ///
    /// Unknown tags map to [`PosTag::Other`].
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "noun" | "n" | "nn" | "nns" | "名詞" => PosTag::Noun,
            "propn" | "proper_noun" | "nnp" | "nnps" | "固有名詞" => PosTag::ProperNoun,
            "verb" | "v" | "vb" | "vbd" | "vbg" | "vbn" | "vbp" | "vbz" | "動詞" => {
                PosTag::Verb
            }
            "adj" | "adjective" | "jj" | "jjr" | "jjs" | "形容詞" => PosTag::Adjective,
            "adv" | "adverb" | "rb" | "rbr" | "rbs" | "副詞" => PosTag::Adverb,
            _ => PosTag::Other,
        }
    }

    /// Short lowercase name used in serialized output
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "noun",
            PosTag::ProperNoun => "proper_noun",
            PosTag::Verb => "verb",
            PosTag::Adjective => "adjective",
            PosTag::Adverb => "adverb",
            PosTag::Other => "other",
        }
    }
}

impl std::str::FromStr for PosTag {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PosTag::parse(value))
    }
}

/// A word as annotated by the external parser
///
/// Graph containers identify words by [`AnnotatedWord::node_key`] (the
/// surface form only), so two words spelled the same but tagged differently
/// collapse into one node. The derived `PartialEq` still compares every field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedWord {
    /// Surface form (already normalized by the parser)
    pub surface_form: String,
    /// Coarse part of speech
    pub coarse_pos: PosTag,
    /// Fine category: entity subtype such as `ORG` or a generic class
    pub fine_category: String,
}

impl AnnotatedWord {
    /// Create a new annotated word
    pub fn new(
        surface_form: impl Into<String>,
        coarse_pos: PosTag,
        fine_category: impl Into<String>,
    ) -> Self {
        Self {
            surface_form: surface_form.into(),
            coarse_pos,
            fine_category: fine_category.into(),
        }
    }

    /// Key used for graph nodes and counters: the surface form alone
    #[inline]
    pub fn node_key(&self) -> &str {
        &self.surface_form
    }

    /// The entity label for this word (surface form plus fine category)
    pub fn entity_label(&self) -> EntityLabel {
        EntityLabel::new(self.surface_form.clone(), self.fine_category.clone())
    }
}

/// Directed dependency arc inside one sentence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub child: AnnotatedWord,
    pub parent: AnnotatedWord,
}

impl DependencyEdge {
    pub fn new(child: AnnotatedWord, parent: AnnotatedWord) -> Self {
        Self { child, parent }
    }
}

/// Subject-verb-object triple extracted by the parser
///
/// The object may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvoTriple {
    pub subject: String,
    pub verb: String,
    #[serde(default)]
    pub object: String,
}

impl SvoTriple {
    pub fn new(
        subject: impl Into<String>,
        verb: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            verb: verb.into(),
            object: object.into(),
        }
    }

    /// A triple with neither subject nor object carries no relation
    pub fn is_malformed(&self) -> bool {
        self.subject.is_empty() && self.object.is_empty()
    }

    /// Whether the triple has an object
    pub fn has_object(&self) -> bool {
        !self.object.is_empty()
    }
}

/// One parsed sentence
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Words in sentence order
    #[serde(default)]
    pub words: Vec<AnnotatedWord>,
    /// Dependency arcs in parser order
    #[serde(default)]
    pub arcs: Vec<DependencyEdge>,
    /// Subject-verb-object triples
    #[serde(default)]
    pub triples: Vec<SvoTriple>,
}

impl Sentence {
    /// Create a sentence from its words only
    pub fn from_words(words: Vec<AnnotatedWord>) -> Self {
        Self {
            words,
            ..Self::default()
        }
    }

    pub fn with_arcs(mut self, arcs: Vec<DependencyEdge>) -> Self {
        self.arcs = arcs;
        self
    }

    pub fn with_triples(mut self, triples: Vec<SvoTriple>) -> Self {
        self.triples = triples;
        self
    }

    /// Words in the order the keyword ranker consumes them
    ///
    /// Each arc contributes its child then its parent. A sentence without
    /// arcs falls back to its word list.
    pub fn ranking_words(&self) -> impl Iterator<Item = &AnnotatedWord> + '_ {
        let from_arcs = self
            .arcs
            .iter()
            .flat_map(|arc| [&arc.child, &arc.parent]);
        let from_words = self.words.iter().filter(move |_| self.arcs.is_empty());
        from_arcs.chain(from_words)
    }
}

/// A whole pre-parsed document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub sentences: Vec<Sentence>,
}

impl Document {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// Entity identity: surface form plus category
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityLabel {
    pub surface: String,
    pub category: String,
}

impl EntityLabel {
    pub fn new(surface: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            category: category.into(),
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.surface, self.category)
    }
}

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordScore {
    pub word: String,
    pub score: f64,
}

impl KeywordScore {
    pub fn new(word: impl Into<String>, score: f64) -> Self {
        Self {
            word: word.into(),
            score,
        }
    }
}

/// Which aggregation step produced an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventSource {
    Keyword,
    Triple,
    Frequency,
    Entity,
    Cooccurrence,
}

/// A labeled pair of graph nodes, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub node_a: String,
    pub color_a: String,
    pub node_b: String,
    pub color_b: String,
    pub source: EventSource,
}

impl Event {
    pub fn new(
        source: EventSource,
        node_a: impl Into<String>,
        color_a: impl Into<String>,
        node_b: impl Into<String>,
        color_b: impl Into<String>,
    ) -> Self {
        Self {
            node_a: node_a.into(),
            color_a: color_a.into(),
            node_b: node_b.into(),
            color_b: color_b.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noun(text: &str) -> AnnotatedWord {
        AnnotatedWord::new(text, PosTag::Noun, "")
    }

    #[test]
    fn test_pos_tag_parse() {
        assert_eq!(PosTag::parse("NOUN"), PosTag::Noun);
        assert_eq!(PosTag::parse("名詞"), PosTag::Noun);
        assert_eq!(PosTag::parse("動詞"), PosTag::Verb);
        assert_eq!(PosTag::parse("adjective"), PosTag::Adjective);
        assert_eq!(PosTag::parse("PROPN"), PosTag::ProperNoun);
        assert_eq!(PosTag::parse("punct"), PosTag::Other);
        assert_eq!("ADV".parse::<PosTag>().unwrap(), PosTag::Adverb);
    }

    #[test]
    fn test_node_key_ignores_tags() {
        let a = AnnotatedWord::new("apple", PosTag::Noun, "ORG");
        let b = AnnotatedWord::new("apple", PosTag::ProperNoun, "");

        assert_ne!(a, b);
        assert_eq!(a.node_key(), b.node_key());
    }

    #[test]
    fn test_entity_label_display() {
        let label = AnnotatedWord::new("Acme", PosTag::ProperNoun, "ORG").entity_label();
        assert_eq!(label.to_string(), "Acme/ORG");
    }

    #[test]
    fn test_malformed_triple() {
        assert!(SvoTriple::new("", "said", "").is_malformed());
        assert!(!SvoTriple::new("", "bought", "shares").is_malformed());
        assert!(!SvoTriple::new("board", "approved", "").is_malformed());
    }

    #[test]
    fn test_ranking_words_from_arcs() {
        let sentence = Sentence::from_words(vec![noun("a"), noun("b"), noun("c")]).with_arcs(vec![
            DependencyEdge::new(noun("a"), noun("c")),
            DependencyEdge::new(noun("b"), noun("c")),
        ]);

        let order: Vec<_> = sentence.ranking_words().map(|w| w.node_key()).collect();
        assert_eq!(order, vec!["a", "c", "b", "c"]);
    }

    #[test]
    fn test_ranking_words_fallback_to_words() {
        let sentence = Sentence::from_words(vec![noun("a"), noun("b")]);

        let order: Vec<_> = sentence.ranking_words().map(|w| w.node_key()).collect();
        assert_eq!(order, vec!["a", "b"]);
    }

    #[test]
    fn test_sentence_deserializes_with_defaults() {
        let json = r#"{"words":[{"surface_form":"x","coarse_pos":"noun","fine_category":""}]}"#;
        let sentence: Sentence = serde_json::from_str(json).unwrap();

        assert_eq!(sentence.words.len(), 1);
        assert!(sentence.arcs.is_empty());
        assert!(sentence.triples.is_empty());
    }
}
