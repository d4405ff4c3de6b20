//! Compressed Sparse Row (CSR) graph representation
//!
//! The ranker iterates over every node's neighbors on every pass, so the
//! builder's hash maps are flattened into contiguous index arrays first.

use super::builder::GraphBuilder;

/// A frozen graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    pub num_nodes: usize,
    /// Node i's edges are at indices `row_ptr[i]..row_ptr[i+1]`
    pub row_ptr: Vec<usize>,
    /// Target node for each edge
    pub col_idx: Vec<u32>,
    pub weights: Vec<f64>,
    /// Sum of edge weights per node
    pub total_weight: Vec<f64>,
    /// Node labels in ID (first-seen) order
    pub labels: Vec<String>,
}

impl CsrGraph {
    /// Freeze a builder
    ///
    /// Neighbors are sorted by ID so iteration, and therefore floating-point
    /// summation order, is deterministic.
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);
        let mut labels = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            labels.push(node.label.clone());

            let mut edges: Vec<_> = node.edges.iter().map(|(&k, &v)| (k, v)).collect();
            edges.sort_by_key(|(k, _)| *k);

            total_weight.push(edges.iter().map(|(_, w)| w).sum());

            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
            labels,
        }
    }

    /// Iterate over `(neighbor, weight)` pairs of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    pub fn label(&self, node: u32) -> &str {
        &self.labels[node as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Number of undirected edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len() / 2
    }

    /// Nodes that never co-occur with anything
    pub fn isolated_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.degree(n) == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
            labels: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_graph() -> GraphBuilder {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        let c = builder.get_or_create_node("c");

        builder.increment_edge(a, b, 1.0);
        builder.increment_edge(b, c, 2.0);
        builder.increment_edge(a, c, 1.5);

        builder
    }

    #[test]
    fn test_csr_conversion() {
        let csr = CsrGraph::from_builder(&build_test_graph());

        assert_eq!(csr.num_nodes, 3);
        assert_eq!(csr.labels, vec!["a", "b", "c"]);
        assert_eq!(csr.num_edges(), 3);
    }

    #[test]
    fn test_neighbors_sorted_with_weights() {
        let csr = CsrGraph::from_builder(&build_test_graph());

        let neighbors: Vec<_> = csr.neighbors(0).collect();
        assert_eq!(neighbors, vec![(1, 1.0), (2, 1.5)]);
        assert_eq!(csr.degree(0), 2);
        assert!((csr.node_total_weight(2) - 3.5).abs() < 1e-10);
    }

    #[test]
    fn test_isolated_nodes() {
        let mut builder = GraphBuilder::new();
        let a = builder.get_or_create_node("a");
        let b = builder.get_or_create_node("b");
        builder.get_or_create_node("lonely");
        builder.increment_edge(a, b, 1.0);

        let csr = CsrGraph::from_builder(&builder);
        assert_eq!(csr.isolated_nodes(), vec![2]);
        assert_eq!(csr.label(2), "lonely");
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::from_builder(&GraphBuilder::new());

        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
        assert_eq!(csr.row_ptr, CsrGraph::default().row_ptr);
    }
}
