// Mon Oct 12 2026 - Alex

use crate::xref::TypeGraph;
use std::collections::{HashMap, HashSet, VecDeque};

/// Edge indices of a path through a `TypeGraph`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EdgePath {
    edges: Vec<usize>,
}

impl EdgePath {
    pub fn new(edges: Vec<usize>) -> Self {
        Self { edges }
    }

    pub fn edges(&self) -> &[usize] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn labels(&self, graph: &TypeGraph) -> Vec<String> {
        self.edges
            .iter()
            .filter_map(|&i| graph.edge(i))
            .map(|e| e.label_text().to_string())
            .collect()
    }

    pub fn concat(mut self, other: EdgePath) -> Self {
        self.edges.extend(other.edges);
        self
    }
}

/// Breadth-first shortest path from `from` to `to`. Between two nodes the
/// first inserted edge is taken.
pub fn shortest_path(graph: &TypeGraph, from: usize, to: usize) -> Option<EdgePath> {
    let mut queue = VecDeque::new();
    let mut visited = HashSet::new();
    let mut parent: HashMap<usize, usize> = HashMap::new();
    queue.push_back(from);
    visited.insert(from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut edges = Vec::new();
            let mut node = to;
            while let Some(&e) = parent.get(&node) {
                edges.push(e);
                node = graph.edge(e)?.from();
            }
            edges.reverse();
            return Some(EdgePath::new(edges));
        }
        for &e in graph.outgoing_indices(current) {
            let next = graph.edge(e)?.to();
            if visited.insert(next) {
                parent.insert(next, e);
                queue.push_back(next);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xref::{GraphEdge, GraphNode};

    #[test]
    fn test_shortest_path() {
        let mut g = TypeGraph::new();
        let a = g.add_node(GraphNode::missing("a"));
        let b = g.add_node(GraphNode::missing("b"));
        let c = g.add_node(GraphNode::missing("c"));
        g.add_edge(GraphEdge::new(a, b, Some("x".into())));
        g.add_edge(GraphEdge::new(b, c, Some("y".into())));
        g.add_edge(GraphEdge::new(a, c, Some("z".into())));

        let p = shortest_path(&g, a, c).unwrap();
        assert_eq!(p.labels(&g), vec!["z"]);
        assert_eq!(shortest_path(&g, a, a).map(|p| p.len()), Some(0));
        assert!(shortest_path(&g, c, a).is_none());
    }
}
