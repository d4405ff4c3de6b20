//! Subject-verb-object triple filtering
//!
//! Only triples anchored on a ranked keyword become events. Single-character
//! subjects and verbs are parser noise and are dropped.

use rustc_hash::FxHashSet;

use crate::types::{Event, EventSource, SvoTriple};

/// Turns keyword-anchored triples into events
#[derive(Debug, Clone)]
pub struct TripleFilter {
    keywords: FxHashSet<String>,
    min_chars: usize,
}

impl TripleFilter {
    pub fn new<I, S>(keywords: I, min_chars: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
            min_chars,
        }
    }

    /// Whether `triple` should produce events
    pub fn accepts(&self, triple: &SvoTriple) -> bool {
        if triple.is_malformed() {
            return false;
        }
        let anchored =
            self.keywords.contains(&triple.subject) || self.keywords.contains(&triple.verb);
        anchored
            && triple.subject.chars().count() >= self.min_chars
            && triple.verb.chars().count() >= self.min_chars
    }

    /// Events for every accepted triple, in input order
    ///
    /// Each accepted triple links subject to verb; when it has an object, a
    /// second event links the verb to the object.
    pub fn events<'a>(
        &self,
        triples: impl IntoIterator<Item = &'a SvoTriple>,
        color: &str,
    ) -> Vec<Event> {
        let mut events = Vec::new();
        for triple in triples.into_iter().filter(|t| self.accepts(t)) {
            events.push(Event::new(
                EventSource::Triple,
                &triple.subject,
                color,
                &triple.verb,
                color,
            ));
            if triple.has_object() {
                events.push(Event::new(
                    EventSource::Triple,
                    &triple.verb,
                    color,
                    &triple.object,
                    color,
                ));
            }
        }
        events
    }
}
