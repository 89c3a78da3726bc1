// Mon Oct 12 2026 - Alex

use crate::entity::{EntityId, Resolved, TypeEntity};
use std::collections::{HashMap, HashSet, VecDeque};
use std::ops::Index;

/// Arena of resolved entities keyed by identifier. An identifier maps to at
/// most one entity, so every referrer shares the same instance.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    entities: Vec<TypeEntity>,
    index: HashMap<String, EntityId>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entity` unless its identifier is already cached, and returns the
    /// id of the cached instance.
    pub fn insert(&mut self, entity: TypeEntity) -> EntityId {
        if let Some(id) = self.index.get(entity.identifier()) {
            return *id;
        }
        let id = EntityId(self.entities.len());
        self.index.insert(entity.identifier().to_string(), id);
        self.entities.push(entity);
        id
    }

    pub fn lookup(&self, identifier: &str) -> Option<EntityId> {
        self.index.get(identifier).copied()
    }

    pub fn get(&self, id: EntityId) -> Option<&TypeEntity> {
        self.entities.get(id.0)
    }

    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut TypeEntity> {
        self.entities.get_mut(id.0)
    }

    pub fn by_name(&self, identifier: &str) -> Option<&TypeEntity> {
        self.lookup(identifier).and_then(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &TypeEntity)> {
        self.entities
            .iter()
            .enumerate()
            .map(|(i, e)| (EntityId(i), e))
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
        self.index.clear();
    }

    /// Every identifier reachable through the unfolded subtypes of `id`,
    /// breadth first. Unresolved identifiers are listed too.
    pub fn dependencies(&self, id: EntityId) -> Vec<String> {
        let mut out = Vec::new();
        let mut seen: HashSet<EntityId> = HashSet::from([id]);
        let mut listed: HashSet<&str> = HashSet::new();
        let mut queue = VecDeque::from([id]);

        if let Some(root) = self.get(id) {
            listed.insert(root.identifier());
        }

        while let Some(current) = queue.pop_front() {
            let Some(subtypes) = self.get(current).and_then(TypeEntity::subtypes) else {
                continue;
            };
            for (name, resolved) in subtypes {
                if listed.insert(name.as_str()) {
                    out.push(name.clone());
                }
                if let Resolved::Found(child) = resolved {
                    if seen.insert(*child) {
                        queue.push_back(*child);
                    }
                }
            }
        }
        out
    }
}

impl Index<EntityId> for ResolutionCache {
    type Output = TypeEntity;

    fn index(&self, id: EntityId) -> &TypeEntity {
        &self.entities[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::TypeEntityKind;

    #[test]
    fn test_insert_keeps_first_instance() {
        let mut cache = ResolutionCache::new();
        let a = cache.insert(TypeEntity::new("t", TypeEntityKind::Typedef("int".into())));
        let b = cache.insert(TypeEntity::new("t", TypeEntityKind::Typedef("char".into())));
        assert_eq!(a, b);
        assert_eq!(cache.len(), 1);
        assert_eq!(cache[a].kind(), &TypeEntityKind::Typedef("int".into()));

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.lookup("t").is_none());
    }
}
