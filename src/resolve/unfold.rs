// Mon Oct 12 2026 - Alex

use crate::entity::{EntityId, Reference, Resolved, Subtypes, TypeEntity};
use crate::resolve::{ResolutionCache, ResolveError, TypeStore};
use std::collections::HashSet;

impl ResolutionCache {
    /// Caches `entity` (or finds the instance already cached under its
    /// identifier) and unfolds it.
    pub fn unfold_entity<S: TypeStore + ?Sized>(
        &mut self,
        entity: TypeEntity,
        store: &S,
        limit: Option<u32>,
    ) -> Result<EntityId, ResolveError> {
        let id = self.insert(entity);
        self.unfold(id, store, limit)?;
        Ok(id)
    }

    /// Resolves every identifier referenced by entity `id`, recursively.
    ///
    /// With a `limit`, references through a pointer are not followed once the
    /// limit reaches zero; each level of recursion lowers it by one. Embedded
    /// types are always resolved. An entity is unfolded only once: later calls
    /// return immediately.
    pub fn unfold<S: TypeStore + ?Sized>(
        &mut self,
        id: EntityId,
        store: &S,
        limit: Option<u32>,
    ) -> Result<(), ResolveError> {
        // explicit stack: a long chain of embedded types must not grow the
        // call stack
        let mut stack: Vec<Unfolding> = self.begin(id, limit)?.into_iter().collect();
        while let Some(top) = stack.last_mut() {
            let Some(reference) = top.next_reference() else {
                if let Some(done) = stack.pop() {
                    self.set_subtypes(done.id, done.subtypes)?;
                }
                continue;
            };
            let child_limit = top.child_limit();

            let Some(child) = self.load(&reference.identifier, store)? else {
                log::debug!("{} not found in store", reference.identifier);
                top.subtypes.insert(reference.identifier, Resolved::NotFound);
                continue;
            };
            top.subtypes.insert(reference.identifier, Resolved::Found(child));
            if let Some(next) = self.begin(child, child_limit)? {
                stack.push(next);
            }
        }
        Ok(())
    }

    /// Cached entity for `identifier`, fetched from `store` and unfolded on a
    /// cache miss. A missing document is not an error.
    pub fn resolve<S: TypeStore + ?Sized>(
        &mut self,
        identifier: &str,
        store: &S,
        limit: Option<u32>,
    ) -> Result<Resolved, ResolveError> {
        let Some(id) = self.load(identifier, store)? else {
            log::debug!("{} not found in store", identifier);
            return Ok(Resolved::NotFound);
        };
        self.unfold(id, store, limit)?;
        Ok(Resolved::Found(id))
    }

    /// Starts unfolding `id`, or `None` when it already is (or is being)
    /// unfolded.
    fn begin(&mut self, id: EntityId, limit: Option<u32>) -> Result<Option<Unfolding>, ResolveError> {
        let entity = self.get(id).ok_or(ResolveError::UnknownEntity(id))?;
        if entity.is_unfolded() {
            return Ok(None);
        }
        let references = entity.references()?;
        log::debug!(
            "unfolding {} ({} references, limit {:?})",
            entity.identifier(),
            references.len(),
            limit
        );

        // marked before descending so that cycles stop here
        self.set_subtypes(id, Subtypes::new())?;
        Ok(Some(Unfolding {
            id,
            limit,
            references: references.into_iter(),
            seen: HashSet::new(),
            subtypes: Subtypes::new(),
        }))
    }

    /// Fetches `identifier` into the cache without unfolding it.
    pub fn load<S: TypeStore + ?Sized>(
        &mut self,
        identifier: &str,
        store: &S,
    ) -> Result<Option<EntityId>, ResolveError> {
        if let Some(id) = self.lookup(identifier) {
            return Ok(Some(id));
        }
        let Some(doc) = store.get(identifier)? else {
            return Ok(None);
        };
        log::debug!("cache miss for {}, loaded from store", identifier);
        Ok(Some(self.insert(TypeEntity::from_document(&doc)?)))
    }

    fn set_subtypes(&mut self, id: EntityId, subtypes: Subtypes) -> Result<(), ResolveError> {
        let entity = self.get_mut(id).ok_or(ResolveError::UnknownEntity(id))?;
        *entity.subtypes_mut() = Some(subtypes);
        Ok(())
    }
}

/// Entity being unfolded and the references still to resolve.
struct Unfolding {
    id: EntityId,
    limit: Option<u32>,
    references: std::vec::IntoIter<Reference>,
    seen: HashSet<String>,
    subtypes: Subtypes,
}

impl Unfolding {
    fn child_limit(&self) -> Option<u32> {
        self.limit.map(|l| l.saturating_sub(1))
    }

    /// Next reference to resolve, skipping repeats and pointers past the
    /// limit.
    fn next_reference(&mut self) -> Option<Reference> {
        for r in self.references.by_ref() {
            if self.limit == Some(0) && r.through_pointer {
                continue;
            }
            if self.seen.insert(r.identifier.clone()) {
                return Some(r);
            }
        }
        None
    }
}
