// Mon Oct 12 2026 - Alex

use crate::xref::{GraphEdge, GraphNode};
use std::collections::HashMap;

/// Directed multigraph of type references. Nodes are unique per identifier.
#[derive(Clone, Debug, Default)]
pub struct TypeGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<String, usize>,
    edges: Vec<GraphEdge>,
    outgoing: HashMap<usize, Vec<usize>>,
    incoming: HashMap<usize, Vec<usize>>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the node, adding it when its identifier is new.
    pub fn add_node(&mut self, node: GraphNode) -> usize {
        if let Some(&i) = self.index.get(node.identifier()) {
            return i;
        }
        let i = self.nodes.len();
        self.index.insert(node.identifier().to_string(), i);
        self.nodes.push(node);
        i
    }

    pub fn add_edge(&mut self, edge: GraphEdge) {
        let edge_idx = self.edges.len();
        self.outgoing.entry(edge.from()).or_default().push(edge_idx);
        self.incoming.entry(edge.to()).or_default().push(edge_idx);
        self.edges.push(edge);
    }

    pub fn node(&self, index: usize) -> Option<&GraphNode> {
        self.nodes.get(index)
    }

    pub fn find(&self, identifier: &str) -> Option<usize> {
        self.index.get(identifier).copied()
    }

    pub fn edge(&self, index: usize) -> Option<&GraphEdge> {
        self.edges.get(index)
    }

    pub fn outgoing(&self, node: usize) -> Vec<&GraphEdge> {
        self.outgoing_indices(node).iter().map(|&i| &self.edges[i]).collect()
    }

    pub fn incoming(&self, node: usize) -> Vec<&GraphEdge> {
        self.incoming
            .get(&node)
            .map(|indices| indices.iter().map(|&i| &self.edges[i]).collect())
            .unwrap_or_default()
    }

    pub(crate) fn outgoing_indices(&self, node: usize) -> &[usize] {
        self.outgoing.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn successors(&self, node: usize) -> Vec<usize> {
        self.outgoing(node).iter().map(|e| e.to()).collect()
    }

    /// Target of the first edge out of `node` carrying `label`.
    pub fn step(&self, node: usize, label: &str) -> Option<usize> {
        self.outgoing(node)
            .into_iter()
            .find(|e| e.label_text() == label)
            .map(GraphEdge::to)
    }

    /// Walks `labels` from `start`, returning the node reached.
    pub fn follow<S: AsRef<str>>(&self, start: usize, labels: &[S]) -> Option<usize> {
        labels
            .iter()
            .try_fold(start, |node, label| self.step(node, label.as_ref()))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodes_are_unique_per_identifier() {
        let mut g = TypeGraph::new();
        let a = g.add_node(GraphNode::missing("a"));
        let b = g.add_node(GraphNode::missing("b"));
        assert_eq!(g.add_node(GraphNode::missing("a")), a);
        g.add_edge(GraphEdge::new(a, b, Some("*x".to_string())));
        g.add_edge(GraphEdge::new(b, a, None));

        assert_eq!(g.len(), 2);
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.successors(a), vec![b]);
        assert_eq!(g.incoming(a).len(), 1);
        assert_eq!(g.follow(a, &["*x", ""]), Some(a));
        assert_eq!(g.follow(a, &["y"]), None);
    }
}
