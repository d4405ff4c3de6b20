//! Node table for renderers
//!
//! Events name their nodes by label. A renderer needs integer ids, so every
//! distinct label gets the next id in order of first appearance across the
//! event sequence, and keeps the color it first appeared with.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::errors::Result;
use crate::types::Event;

/// A deduplicated node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisNode {
    pub id: usize,
    pub label: String,
    pub color: String,
    pub group: String,
}

/// An edge between two node ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisEdge {
    pub from: usize,
    pub to: usize,
    pub label: String,
}

/// Label-to-id table built in first-appearance order
#[derive(Debug, Clone, Default)]
pub struct NodeTable {
    ids: FxHashMap<String, usize>,
    nodes: Vec<VisNode>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id for `label`, registering it with `color` if unseen
    pub fn intern(&mut self, label: &str, color: &str) -> usize {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }

        let id = self.nodes.len();
        self.ids.insert(label.to_string(), id);
        self.nodes.push(VisNode {
            id,
            label: label.to_string(),
            color: color.to_string(),
            group: "Event".to_string(),
        });
        id
    }

    pub fn get(&self, label: &str) -> Option<&VisNode> {
        self.ids.get(label).map(|&id| &self.nodes[id])
    }

    pub fn nodes(&self) -> &[VisNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Node and edge lists in the shape network-drawing libraries consume
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisGraph {
    pub nodes: Vec<VisNode>,
    pub edges: Vec<VisEdge>,
}

impl VisGraph {
    /// One edge per event, with nodes deduplicated by label
    pub fn from_events(events: &[Event]) -> Self {
        let mut table = NodeTable::new();
        let mut edges = Vec::with_capacity(events.len());

        for event in events {
            let from = table.intern(&event.node_a, &event.color_a);
            let to = table.intern(&event.node_b, &event.color_b);
            edges.push(VisEdge {
                from,
                to,
                label: String::new(),
            });
        }

        Self {
            nodes: table.nodes,
            edges,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventSource;

    fn event(a: &str, ca: &str, b: &str, cb: &str) -> Event {
        Event::new(EventSource::Keyword, a, ca, b, cb)
    }

    #[test]
    fn test_ids_follow_first_appearance() {
        let events = vec![
            event("company", "grey", "keyword", "red"),
            event("merger", "grey", "keyword", "red"),
            event("company", "grey", "frequent word", "yellow"),
        ];

        let graph = VisGraph::from_events(&events);
        let labels: Vec<_> = graph.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(labels, vec!["company", "keyword", "merger", "frequent word"]);

        let edges: Vec<_> = graph.edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(edges, vec![(0, 1), (2, 1), (0, 3)]);
    }

    #[test]
    fn test_first_color_wins() {
        let mut table = NodeTable::new();
        table.intern("Acme", "grey");
        table.intern("Acme", "green");

        assert_eq!(table.len(), 1);
        assert_eq!(table.get("Acme").unwrap().color, "grey");
    }

    #[test]
    fn test_json_shape() {
        let graph = VisGraph::from_events(&[event("a", "c1", "b", "c2")]);
        let value: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();

        assert_eq!(value["nodes"][0]["label"], "a");
        assert_eq!(value["nodes"][0]["group"], "Event");
        assert_eq!(value["nodes"][1]["color"], "c2");
        assert_eq!(value["edges"][0]["from"], 0);
        assert_eq!(value["edges"][0]["to"], 1);
        assert_eq!(value["edges"][0]["label"], "");
    }

    #[test]
    fn test_empty_events() {
        let graph = VisGraph::from_events(&[]);
        assert!(graph.nodes.is_empty());
        assert!(graph.edges.is_empty());
        assert_eq!(graph.to_json().unwrap(), r#"{"nodes":[],"edges":[]}"#);
    }
}
