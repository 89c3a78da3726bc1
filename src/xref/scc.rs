// Mon Oct 12 2026 - Alex

use crate::xref::TypeGraph;

struct Tarjan<'g> {
    graph: &'g TypeGraph,
    counter: usize,
    index: Vec<Option<usize>>,
    lowlink: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    components: Vec<Vec<usize>>,
}

/// Node being visited and the next successor to look at.
struct Frame {
    node: usize,
    successors: Vec<usize>,
    next: usize,
}

impl<'g> Tarjan<'g> {
    fn enter(&mut self, v: usize) -> Frame {
        self.index[v] = Some(self.counter);
        self.lowlink[v] = self.counter;
        self.counter += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
        Frame {
            node: v,
            successors: self.graph.successors(v),
            next: 0,
        }
    }

    /// Depth-first walk from `root` on an explicit stack, so long reference
    /// chains do not grow the call stack.
    fn visit(&mut self, root: usize) {
        let mut work = vec![self.enter(root)];
        while let Some(frame) = work.last_mut() {
            let v = frame.node;
            if let Some(&w) = frame.successors.get(frame.next) {
                frame.next += 1;
                match self.index[w] {
                    None => {
                        let child = self.enter(w);
                        work.push(child);
                    }
                    Some(i) if self.on_stack[w] => {
                        self.lowlink[v] = self.lowlink[v].min(i);
                    }
                    Some(_) => {}
                }
                continue;
            }

            work.pop();
            self.close(v);
            if let Some(parent) = work.last() {
                let p = parent.node;
                self.lowlink[p] = self.lowlink[p].min(self.lowlink[v]);
            }
        }
    }

    fn close(&mut self, v: usize) {
        if Some(self.lowlink[v]) != self.index[v] {
            return;
        }
        let mut component = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w] = false;
            component.push(w);
            if w == v {
                break;
            }
        }
        // discovery order, so the first node is the one reached first
        component.sort_by_key(|&n| self.index[n]);
        self.components.push(component);
    }
}

/// Strongly connected components of `graph`, each listed in discovery
/// order. Nodes are visited in insertion order.
pub fn strongly_connected_components(graph: &TypeGraph) -> Vec<Vec<usize>> {
    let n = graph.len();
    let mut tarjan = Tarjan {
        graph,
        counter: 0,
        index: vec![None; n],
        lowlink: vec![0; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        components: Vec::new(),
    };
    for v in 0..n {
        if tarjan.index[v].is_none() {
            tarjan.visit(v);
        }
    }
    let mut components = tarjan.components;
    components.sort_by_key(|c| c.first().and_then(|&n| tarjan.index[n]));
    components
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xref::{GraphEdge, GraphNode};

    #[test]
    fn test_components() {
        let mut g = TypeGraph::new();
        let ids: Vec<usize> = ["a", "b", "c", "d", "e"]
            .iter()
            .map(|n| g.add_node(GraphNode::missing(n)))
            .collect();
        for (from, to) in [(0, 1), (1, 0), (1, 2), (2, 3), (3, 4), (4, 2)] {
            g.add_edge(GraphEdge::new(ids[from], ids[to], None));
        }
        assert_eq!(
            strongly_connected_components(&g),
            vec![vec![0, 1], vec![2, 3, 4]]
        );
    }

    #[test]
    fn test_acyclic_nodes_are_singletons() {
        let mut g = TypeGraph::new();
        let a = g.add_node(GraphNode::missing("a"));
        let b = g.add_node(GraphNode::missing("b"));
        g.add_edge(GraphEdge::new(a, b, None));
        assert_eq!(strongly_connected_components(&g), vec![vec![a], vec![b]]);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let mut g = TypeGraph::new();
        let n = 100_000;
        let ids: Vec<usize> = (0..n)
            .map(|i| g.add_node(GraphNode::missing(&format!("struct S{}", i))))
            .collect();
        for pair in ids.windows(2) {
            g.add_edge(GraphEdge::new(pair[0], pair[1], Some("next".into())));
        }
        g.add_edge(GraphEdge::new(ids[n - 1], ids[0], Some("head".into())));

        let components = strongly_connected_components(&g);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].len(), n);
        assert_eq!(components[0][0], ids[0]);
    }
}
