// Mon Oct 12 2026 - Alex

use crate::xref::path::shortest_path;
use crate::xref::scc::strongly_connected_components;
use crate::xref::TypeGraph;
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::BTreeSet;

/// Accessor labels of one walk from a root back to itself.
pub type Cycle = Vec<String>;

/// Cycles of every non-trivial strongly connected component, keyed by the
/// identifier of the component's root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleMap {
    roots: IndexMap<String, BTreeSet<Cycle>>,
}

impl CycleMap {
    pub fn get(&self, root: &str) -> Option<&BTreeSet<Cycle>> {
        self.roots.get(root)
    }

    pub fn roots(&self) -> impl Iterator<Item = &str> {
        self.roots.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<Cycle>)> {
        self.roots.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

impl TypeGraph {
    /// For each component of more than one node, the root is the node
    /// discovered first. Every other member contributes the shortest walk
    /// root -> member -> root.
    pub fn cycles(&self) -> CycleMap {
        let mut map = CycleMap::default();
        for component in strongly_connected_components(self) {
            if component.len() < 2 {
                continue;
            }
            let root = component[0];
            let Some(root_node) = self.node(root) else {
                continue;
            };
            let cycles: BTreeSet<Cycle> = component[1..]
                .iter()
                .filter_map(|&member| {
                    let out = shortest_path(self, root, member)?;
                    let back = shortest_path(self, member, root)?;
                    Some(out.concat(back).labels(self))
                })
                .collect();
            log::debug!(
                "{}: {} cycles through {}",
                root_node.identifier(),
                cycles.len(),
                component.iter().filter_map(|&n| self.node(n)).map(|n| n.identifier()).join(", ")
            );
            map.roots.insert(root_node.identifier().to_string(), cycles);
        }
        map
    }
}
