// Mon Oct 12 2026 - Alex

use crate::declarator::Declarator;
use crate::entity::{EntityId, Resolved, TypeEntityKind};
use crate::resolve::ResolutionCache;
use crate::xref::{GraphEdge, GraphError, GraphNode, TypeGraph};
use std::collections::HashSet;

/// Builds the reference graph reachable from an unfolded entity.
pub struct TypeGraphBuilder<'a> {
    cache: &'a ResolutionCache,
    graph: TypeGraph,
    visited: HashSet<EntityId>,
}

impl<'a> TypeGraphBuilder<'a> {
    pub fn new(cache: &'a ResolutionCache) -> Self {
        Self {
            cache,
            graph: TypeGraph::new(),
            visited: HashSet::new(),
        }
    }

    pub fn add(mut self, root: EntityId) -> Result<Self, GraphError> {
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if !self.visited.insert(id) {
                continue;
            }
            stack.extend(self.visit(id)?);
        }
        Ok(self)
    }

    pub fn build(self) -> TypeGraph {
        self.graph
    }

    fn node_for(&mut self, identifier: &str, resolved: Resolved) -> usize {
        let node = match resolved.id().and_then(|id| self.cache.get(id).map(|e| (id, e))) {
            Some((id, e)) => GraphNode::new(identifier, e.class(), id),
            None => GraphNode::missing(identifier),
        };
        self.graph.add_node(node)
    }

    /// Adds the edges out of `id` and returns the entities they reach.
    fn visit(&mut self, id: EntityId) -> Result<Vec<EntityId>, GraphError> {
        let cache = self.cache;
        let entity = cache
            .get(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        let subtypes = entity
            .subtypes()
            .ok_or_else(|| GraphError::NotUnfolded(entity.identifier().to_string()))?;
        let from = self.node_for(entity.identifier(), Resolved::Found(id));

        let mut edges: Vec<(String, Resolved, Option<String>)> = Vec::new();
        match entity.kind() {
            TypeEntityKind::Struct(fields) | TypeEntityKind::Union(fields) => {
                for field in fields {
                    let d = field.declarator()?;
                    if let Some(r) = subtypes.get(d.base()) {
                        edges.push((d.base().to_string(), *r, Some(d.show_ptr(&field.name))));
                    }
                }
            }
            TypeEntityKind::Typedef(spelling) => {
                let label = Declarator::parse_any(spelling)?.show_ptr("");
                for (name, r) in subtypes {
                    edges.push((name.clone(), *r, Some(label.clone())));
                }
            }
            _ => {
                for (name, r) in subtypes {
                    edges.push((name.clone(), *r, None));
                }
            }
        }

        let mut next = Vec::new();
        for (name, resolved, label) in edges {
            let to = self.node_for(&name, resolved);
            log::trace!("{} -> {} [{}]", entity.identifier(), name, label.as_deref().unwrap_or(""));
            self.graph.add_edge(GraphEdge::new(from, to, label));
            if let Some(target) = resolved.id() {
                if !self.visited.contains(&target) {
                    next.push(target);
                }
            }
        }
        Ok(next)
    }
}

impl TypeGraph {
    /// Graph of everything reachable from `root`, which must be unfolded.
    pub fn from_cache(cache: &ResolutionCache, root: EntityId) -> Result<Self, GraphError> {
        Ok(TypeGraphBuilder::new(cache).add(root)?.build())
    }
}
