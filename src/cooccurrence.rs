//! Entity co-occurrence counting
//!
//! For every sentence, the entities it shares with a restricted global set
//! are paired in both directions; each ordered pair counts the sentences it
//! appeared in. `(A, B)` and `(B, A)` are tallied independently and always
//! end up equal.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::types::EntityLabel;

/// One ordered entity pair and the number of sentences containing both
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cooccurrence {
    pub first: EntityLabel,
    pub second: EntityLabel,
    pub count: usize,
}

/// Counts entity pairs across sentences
#[derive(Debug, Clone, Default)]
pub struct CooccurrenceAggregator {
    /// Restricted entity set, deduplicated, in caller order
    entities: Vec<EntityLabel>,
}

impl CooccurrenceAggregator {
    /// Restrict counting to `global_entities`
    pub fn new(global_entities: &[EntityLabel]) -> Self {
        let mut seen = FxHashSet::default();
        let entities = global_entities
            .iter()
            .filter(|e| seen.insert(*e))
            .cloned()
            .collect();
        Self { entities }
    }

    pub fn entities(&self) -> &[EntityLabel] {
        &self.entities
    }

    /// Count pairs over `sentences`, most frequent first
    ///
    /// Each sentence is treated as a set. A sentence sharing fewer than two
    /// entities with the restricted set contributes nothing. Equal counts
    /// keep the order in which pairs were first seen.
    pub fn aggregate<S>(&self, sentences: &[S]) -> Vec<Cooccurrence>
    where
        S: AsRef<[EntityLabel]>,
    {
        let mut index: FxHashMap<(usize, usize), usize> = FxHashMap::default();
        let mut counts: Vec<((usize, usize), usize)> = Vec::new();

        for sentence in sentences {
            let present: FxHashSet<&EntityLabel> = sentence.as_ref().iter().collect();
            let shared: Vec<usize> = self
                .entities
                .iter()
                .enumerate()
                .filter(|(_, e)| present.contains(e))
                .map(|(i, _)| i)
                .collect();

            if shared.len() < 2 {
                continue;
            }

            for &a in &shared {
                for &b in &shared {
                    if a == b {
                        continue;
                    }
                    match index.get(&(a, b)) {
                        Some(&slot) => counts[slot].1 += 1,
                        None => {
                            index.insert((a, b), counts.len());
                            counts.push(((a, b), 1));
                        }
                    }
                }
            }
        }

        counts.sort_by(|x, y| y.1.cmp(&x.1));

        counts
            .into_iter()
            .map(|((a, b), count)| Cooccurrence {
                first: self.entities[a].clone(),
                second: self.entities[b].clone(),
                count,
            })
            .collect()
    }
}
