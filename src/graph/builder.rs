//! Co-occurrence graph builder
//!
//! Nodes are interned by key in first-seen order; edges are undirected and
//! accumulate one unit of weight per co-occurrence inside the window.

use rustc_hash::FxHashMap;

use crate::types::AnnotatedWord;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The key this node was interned under
    pub label: String,
    /// Adjacency list: target node ID -> accumulated weight
    pub edges: FxHashMap<u32, f64>,
}

impl BuilderNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            edges: FxHashMap::default(),
        }
    }

    /// Sum of this node's edge weights
    pub fn total_weight(&self) -> f64 {
        self.edges.values().sum()
    }
}

/// A mutable graph builder optimized for incremental construction
#[derive(Debug)]
pub struct GraphBuilder {
    label_to_id: FxHashMap<String, u32>,
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            label_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            label_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create the node for `label`, returning its ID
    ///
    /// IDs follow first-seen order.
    pub fn get_or_create_node(&mut self, label: &str) -> u32 {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.label_to_id.insert(label.to_string(), id);
        self.nodes.push(BuilderNode::new(label));
        id
    }

    /// Add `weight` to the undirected edge between two nodes
    pub fn increment_edge(&mut self, from: u32, to: u32, weight: f64) {
        if from == to {
            return;
        }

        if let Some(node) = self.nodes.get_mut(from as usize) {
            *node.edges.entry(to).or_insert(0.0) += weight;
        }
        if let Some(node) = self.nodes.get_mut(to as usize) {
            *node.edges.entry(from).or_insert(0.0) += weight;
        }
    }

    /// Build a co-occurrence graph over a flat sequence
    ///
    /// Every pair of positions `i < j` with `j - i < window_size` whose keys
    /// differ adds 1.0 to the edge between their nodes. The window runs over
    /// the whole sequence, so sentence boundaries are not respected.
    pub fn from_sequence<T, F>(items: &[T], window_size: usize, key: F) -> Self
    where
        F: Fn(&T) -> &str,
    {
        let mut builder = Self::with_capacity(items.len() / 2);

        let ids: Vec<u32> = items
            .iter()
            .map(|item| builder.get_or_create_node(key(item)))
            .collect();

        for (i, &node_i) in ids.iter().enumerate() {
            let end = std::cmp::min(i.saturating_add(window_size), ids.len());
            for &node_j in &ids[(i + 1).min(end)..end] {
                builder.increment_edge(node_i, node_j, 1.0);
            }
        }

        builder
    }

    /// Build a co-occurrence graph keyed by each word's surface form
    pub fn from_words(words: &[AnnotatedWord], window_size: usize) -> Self {
        Self::from_sequence(words, window_size, AnnotatedWord::node_key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    pub fn get_node(&self, id: u32) -> Option<&BuilderNode> {
        self.nodes.get(id as usize)
    }

    pub fn get_node_id(&self, label: &str) -> Option<u32> {
        self.label_to_id.get(label).copied()
    }

    /// Accumulated weight between two labels, zero when unconnected
    pub fn edge_weight(&self, a: &str, b: &str) -> f64 {
        match (self.get_node_id(a), self.get_node_id(b)) {
            (Some(a), Some(b)) => self
                .get_node(a)
                .and_then(|node| node.edges.get(&b).copied())
                .unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Iterate over all nodes in ID order
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PosTag;

    fn words(texts: &[&str]) -> Vec<AnnotatedWord> {
        texts
            .iter()
            .map(|t| AnnotatedWord::new(*t, PosTag::Noun, ""))
            .collect()
    }

    #[test]
    fn test_nodes_interned_in_first_seen_order() {
        let mut builder = GraphBuilder::new();

        let a = builder.get_or_create_node("merger");
        let b = builder.get_or_create_node("profit");
        let c = builder.get_or_create_node("merger");

        assert_eq!(a, c);
        assert_eq!((a, b), (0, 1));
        assert_eq!(builder.node_count(), 2);
    }

    #[test]
    fn test_edge_weights_accumulate() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");

        builder.increment_edge(a, b, 1.0);
        builder.increment_edge(b, a, 1.0);

        assert_eq!(builder.get_node(a).unwrap().edges.get(&b), Some(&2.0));
        assert_eq!(builder.get_node(b).unwrap().edges.get(&a), Some(&2.0));
    }

    #[test]
    fn test_self_loops_prevented() {
        let builder = GraphBuilder::from_words(&words(&["x", "x", "x", "x", "x"]), 10);

        assert_eq!(builder.node_count(), 1);
        assert_eq!(builder.edge_count(), 0);
        assert!(builder.get_node(0).unwrap().edges.is_empty());
    }

    #[test]
    fn test_window_bounds_edges() {
        // window 2 links adjacent positions only
        let builder = GraphBuilder::from_words(&words(&["a", "b", "c"]), 2);

        assert_eq!(builder.edge_weight("a", "b"), 1.0);
        assert_eq!(builder.edge_weight("b", "c"), 1.0);
        assert_eq!(builder.edge_weight("a", "c"), 0.0);
    }

    #[test]
    fn test_window_of_one_has_no_edges() {
        let builder = GraphBuilder::from_words(&words(&["a", "b", "c"]), 1);

        assert_eq!(builder.node_count(), 3);
        assert_eq!(builder.edge_count(), 0);
    }

    #[test]
    fn test_repeated_pairs_accumulate() {
        let builder = GraphBuilder::from_words(&words(&["a", "b", "a", "b"]), 2);

        // a-b, b-a, a-b
        assert_eq!(builder.edge_weight("a", "b"), 3.0);
        assert_eq!(builder.edge_weight("b", "a"), 3.0);
    }

    #[test]
    fn test_edge_count_grows_with_window() {
        let seq = words(&["a", "b", "c", "a", "d", "e", "b", "f", "g", "c", "h"]);
        let mut previous = 0;
        for window in 1..14 {
            let count = GraphBuilder::from_words(&seq, window).edge_count();
            assert!(count >= previous, "window {window}: {count} < {previous}");
            previous = count;
        }
    }

    #[test]
    fn test_custom_key() {
        let pairs = vec![("a", 1), ("b", 2), ("a", 3)];
        let builder = GraphBuilder::from_sequence(&pairs, 3, |p| p.0);

        assert_eq!(builder.node_count(), 2);
        assert_eq!(builder.edge_weight("a", "b"), 2.0);
    }

    #[test]
    fn test_empty_sequence() {
        let builder = GraphBuilder::from_words(&[], 10);
        assert!(builder.is_empty());
        assert_eq!(builder.edge_count(), 0);
    }
}
