// Mon Oct 12 2026 - Alex

use crate::entity::{EntityClass, EntityId};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Entity(EntityClass),
    /// Referenced but absent from the store.
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    identifier: String,
    kind: NodeKind,
    entity: Option<EntityId>,
}

impl GraphNode {
    pub fn new(identifier: &str, class: EntityClass, entity: EntityId) -> Self {
        Self {
            identifier: identifier.to_string(),
            kind: NodeKind::Entity(class),
            entity: Some(entity),
        }
    }

    pub fn missing(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            kind: NodeKind::Missing,
            entity: None,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn entity(&self) -> Option<EntityId> {
        self.entity
    }

    pub fn is_missing(&self) -> bool {
        matches!(self.kind, NodeKind::Missing)
    }
}

impl fmt::Display for GraphNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NodeKind::Entity(class) => write!(f, "{} ({})", self.identifier, class),
            NodeKind::Missing => write!(f, "{} (missing)", self.identifier),
        }
    }
}
