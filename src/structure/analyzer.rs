// Mon Oct 12 2026 - Alex

use crate::entity::{EntityClass, TypeEntity};
use crate::resolve::{ResolutionCache, ResolveError, TypeStore};
use crate::structure::{LayoutError, OffsetCalculator, StructOffsets};
use crate::utils::logging::ScopedTimer;
use indexmap::IndexMap;

/// Outcome of laying out every composite type of a store.
#[derive(Debug, Default)]
pub struct LayoutReport {
    pub layouts: IndexMap<String, StructOffsets>,
    pub failures: IndexMap<String, LayoutError>,
}

impl LayoutReport {
    pub fn get(&self, name: &str) -> Option<&StructOffsets> {
        self.layouts.get(name)
    }

    pub fn total(&self) -> usize {
        self.layouts.len() + self.failures.len()
    }
}

pub struct LayoutAnalyzer {
    calculator: OffsetCalculator,
    cache: ResolutionCache,
}

impl LayoutAnalyzer {
    pub fn new(calculator: OffsetCalculator) -> Self {
        Self {
            calculator,
            cache: ResolutionCache::new(),
        }
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    pub fn analyze<S: TypeStore + ?Sized>(
        &mut self,
        store: &S,
        identifier: &str,
    ) -> Result<StructOffsets, LayoutError> {
        let id = self
            .cache
            .load(identifier, store)?
            .ok_or_else(|| LayoutError::UnknownType(identifier.to_string()))?;
        self.calculator.offsets(&mut self.cache, store, id)
    }

    /// Lays out every struct, union and class in `store`. Failures are
    /// collected, not fatal.
    pub fn analyze_all<S: TypeStore + ?Sized>(
        &mut self,
        store: &S,
    ) -> Result<LayoutReport, LayoutError> {
        let _timer = ScopedTimer::new("layout");
        let documents = store.search(&|d| {
            matches!(
                d.cls,
                EntityClass::Struct | EntityClass::Union | EntityClass::Class
            )
        })
        .map_err(ResolveError::from)?;

        let mut report = LayoutReport::default();
        for doc in documents {
            let entity = match TypeEntity::from_document(&doc) {
                Ok(e) => e,
                Err(e) => {
                    log::warn!("skipping {}: {}", doc.id, e);
                    continue;
                }
            };
            let id = self.cache.insert(entity);
            match self.calculator.offsets(&mut self.cache, store, id) {
                Ok(layout) => {
                    report.layouts.insert(doc.id, layout);
                }
                Err(e) => {
                    log::warn!("no layout for {}: {}", doc.id, e);
                    report.failures.insert(doc.id, e);
                }
            }
        }
        log::info!(
            "laid out {} of {} types",
            report.layouts.len(),
            report.total()
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::RawDocument;
    use crate::resolve::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_analyze_all_collects_failures() {
        let store = MemoryStore::from_documents(vec![
            RawDocument::new("struct A", EntityClass::Struct, json!([["long", "x", null]])),
            RawDocument::new("struct Bad", EntityClass::Struct, json!([["struct Gone", "g", null]])),
            RawDocument::new("t", EntityClass::Typedef, json!("int")),
            RawDocument::new(
                "class D",
                EntityClass::Class,
                json!([
                    [["parent", ""], ["", "class Missing"], ["PUBLIC", ""]],
                    [["", "int"], ["", "d"], ["PUBLIC", null]]
                ]),
            ),
            RawDocument::new(
                "class E",
                EntityClass::Class,
                json!([[["", "int"], ["", "e"], ["PUBLIC", null]]]),
            ),
        ]);
        let mut analyzer = LayoutAnalyzer::new(OffsetCalculator::new(4).unwrap());
        let report = analyzer.analyze_all(&store).unwrap();

        assert_eq!(report.total(), 4);
        assert_eq!(report.get("struct A").map(|l| l.size), Some(4));
        assert_eq!(report.get("class E").map(|l| l.size), Some(4));
        assert!(matches!(
            report.failures.get("struct Bad"),
            Some(LayoutError::UnknownType(_))
        ));
        match report.failures.get("class D") {
            Some(LayoutError::UnknownBaseType(name)) => assert_eq!(name, "class Missing"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(report.layouts.len(), 2);
        assert_eq!(analyzer.analyze(&store, "struct A").unwrap().size, 4);
        assert!(analyzer.analyze(&store, "struct None").is_err());
    }
}
