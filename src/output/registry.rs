// Mon Oct 12 2026 - Alex

use crate::entity::{EntityClass, EntityId, Resolved, TypeEntity};
use crate::output::{CFormatter, FormatError, Formatter, RawFormatter};
use crate::resolve::ResolutionCache;
use indexmap::IndexMap;
use std::collections::HashSet;
use std::sync::Arc;

/// Formatters keyed by entity kind and format name.
#[derive(Default, Clone)]
pub struct FormatterRegistry {
    formatters: IndexMap<(EntityClass, String), Arc<dyn Formatter>>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// `raw` for every kind and `C` for every kind it supports.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(RawFormatter));
        registry.register(Arc::new(CFormatter));
        registry
    }

    pub fn register(&mut self, formatter: Arc<dyn Formatter>) {
        for class in EntityClass::ALL {
            if formatter.supports(class) {
                self.formatters
                    .insert((class, formatter.name().to_string()), Arc::clone(&formatter));
            }
        }
    }

    pub fn get(&self, class: EntityClass, format: &str) -> Option<&Arc<dyn Formatter>> {
        self.formatters.get(&(class, format.to_string()))
    }

    pub fn has_format(&self, format: &str) -> bool {
        self.formatters.keys().any(|(_, f)| f == format)
    }

    pub fn formats(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for (_, f) in self.formatters.keys() {
            if !names.contains(&f.as_str()) {
                names.push(f);
            }
        }
        names
    }

    /// Renders entity `id`. With `recursive`, the definitions it depends on
    /// are emitted first, each once; `id` must then be unfolded.
    pub fn show(
        &self,
        cache: &ResolutionCache,
        id: EntityId,
        format: &str,
        recursive: bool,
    ) -> Result<String, FormatError> {
        if !self.has_format(format) {
            return Err(FormatError::UnknownFormat(format.to_string()));
        }
        let mut out = Vec::new();
        let mut emitted = HashSet::new();
        self.render(cache, id, format, recursive, &mut emitted, &mut out)?;
        Ok(out.join("\n\n"))
    }

    fn render(
        &self,
        cache: &ResolutionCache,
        id: EntityId,
        format: &str,
        recursive: bool,
        emitted: &mut HashSet<EntityId>,
        out: &mut Vec<String>,
    ) -> Result<(), FormatError> {
        let entity = cache.get(id).ok_or(FormatError::UnknownEntity(id))?;
        emitted.insert(id);
        let formatter = self
            .get(entity.class(), format)
            .ok_or_else(|| FormatError::Unsupported {
                class: entity.class(),
                format: format.to_string(),
            })?;

        if recursive {
            self.dependencies(cache, entity, format, formatter.inlines_anonymous(), emitted, out)?;
        }
        out.push(formatter.format_in(entity, cache)?);
        Ok(())
    }

    /// Emits what `entity` depends on. Anonymous types written inline are
    /// not emitted, but what they depend on is.
    fn dependencies(
        &self,
        cache: &ResolutionCache,
        entity: &TypeEntity,
        format: &str,
        inline: bool,
        emitted: &mut HashSet<EntityId>,
        out: &mut Vec<String>,
    ) -> Result<(), FormatError> {
        for (name, resolved) in entity.subtypes().into_iter().flatten() {
            match resolved {
                Resolved::Found(dep) if emitted.contains(dep) => {}
                Resolved::Found(dep) if inline && name.contains("?_") => {
                    let anonymous = cache.get(*dep).ok_or(FormatError::UnknownEntity(*dep))?;
                    emitted.insert(*dep);
                    self.dependencies(cache, anonymous, format, inline, emitted, out)?;
                }
                Resolved::Found(dep) => {
                    self.render(cache, *dep, format, true, emitted, out)?;
                }
                Resolved::NotFound => log::warn!("identifier {} not found", name),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{
        ClassMember, FieldMember, FunctionValue, RawDocument, TemplateValue, TypeEntityKind,
    };
    use crate::resolve::MemoryStore;
    use serde_json::json;

    #[test]
    fn test_lookup() {
        let registry = FormatterRegistry::with_defaults();
        assert_eq!(registry.formats(), vec!["raw", "C"]);
        assert!(registry.get(EntityClass::Struct, "C").is_some());
        assert!(registry.get(EntityClass::Template, "C").is_some());
        assert!(registry.get(EntityClass::Template, "raw").is_some());
        assert!(registry.get(EntityClass::Struct, "ctypes").is_none());
    }

    #[test]
    fn test_recursive_emits_dependencies_first() {
        let store = MemoryStore::from_documents(vec![
            RawDocument::new(
                "struct Node",
                EntityClass::Struct,
                json!([["Node_t *", "next", null], ["payload_t", "data", null]]),
            ),
            RawDocument::new("Node_t", EntityClass::Typedef, json!("struct Node")),
            RawDocument::new("payload_t", EntityClass::Typedef, json!("unsigned long")),
        ]);
        let mut cache = ResolutionCache::new();
        let id = cache.resolve("struct Node", &store, None).unwrap().id().unwrap();
        let registry = FormatterRegistry::with_defaults();

        assert_eq!(
            registry.show(&cache, id, "C", true).unwrap(),
            "typedef struct Node Node_t;\n\n\
             typedef unsigned long payload_t;\n\n\
             struct Node {\n  Node_t *next;\n  payload_t data;\n};"
        );
        assert_eq!(
            registry.show(&cache, id, "C", false).unwrap(),
            "struct Node {\n  Node_t *next;\n  payload_t data;\n};"
        );
        assert!(matches!(
            registry.show(&cache, id, "kaitai", false),
            Err(FormatError::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_recursive_inlines_anonymous_types() {
        let store = MemoryStore::from_documents(vec![
            RawDocument::new(
                "struct S",
                EntityClass::Struct,
                json!([["struct ?_1234abcd", "inner", null], ["int", "x", null]]),
            ),
            RawDocument::new(
                "struct ?_1234abcd",
                EntityClass::Struct,
                json!([["int", "a", null], ["size_type", "n", null]]),
            ),
            RawDocument::new("size_type", EntityClass::Typedef, json!("unsigned long")),
        ]);
        let mut cache = ResolutionCache::new();
        let id = cache.resolve("struct S", &store, None).unwrap().id().unwrap();
        let registry = FormatterRegistry::with_defaults();

        let inline = "struct S {\n  struct {\n    int a;\n    size_type n;\n  } inner;\n  int x;\n};";
        assert_eq!(
            registry.show(&cache, id, "C", true).unwrap(),
            format!("typedef unsigned long size_type;\n\n{}", inline)
        );
        assert_eq!(registry.show(&cache, id, "C", false).unwrap(), inline);

        // raw output keeps the anonymous type as its own entry
        let raw = registry.show(&cache, id, "raw", true).unwrap();
        assert!(raw.starts_with("size_type:"));
        assert_eq!(raw.split("\n\n").count(), 3);
    }

    #[test]
    fn test_typedef_of_anonymous_union() {
        let store = MemoryStore::from_documents(vec![
            RawDocument::new("value_t", EntityClass::Typedef, json!("union ?_0badf00d")),
            RawDocument::new(
                "union ?_0badf00d",
                EntityClass::Union,
                json!([["int", "i", null], ["float", "f", null]]),
            ),
        ]);
        let mut cache = ResolutionCache::new();
        let id = cache.resolve("value_t", &store, None).unwrap().id().unwrap();
        let registry = FormatterRegistry::with_defaults();
        assert_eq!(
            registry.show(&cache, id, "C", true).unwrap(),
            "typedef union {\n  int i;\n  float f;\n} value_t;"
        );
    }

    #[test]
    fn test_templates() {
        let mut cache = ResolutionCache::new();
        let boxed = cache.insert(TypeEntity::new(
            "struct Box<T>",
            TypeEntityKind::Template(TemplateValue::class(
                &["typename T"],
                vec![ClassMember::Field(FieldMember::new("T", "item").with_access("PUBLIC"))],
            )),
        ));
        let max = cache.insert(TypeEntity::new(
            "max",
            TypeEntityKind::Template(TemplateValue::function(
                &["typename T", "int N"],
                FunctionValue::new("T (T, T)"),
            )),
        ));
        let registry = FormatterRegistry::with_defaults();

        assert_eq!(
            registry.show(&cache, boxed, "C", false).unwrap(),
            "template<typename T>\nstruct Box {\n  public:\n    T item;\n};"
        );
        assert_eq!(
            registry.show(&cache, max, "C", false).unwrap(),
            "template<typename T,int N>\nT max(T, T);"
        );
    }

    #[test]
    fn test_empty_template() {
        let mut value = TemplateValue::class(&["typename T"], Vec::new());
        value.class = None;
        let mut cache = ResolutionCache::new();
        let id = cache.insert(TypeEntity::new("struct Box<T>", TypeEntityKind::Template(value)));
        let registry = FormatterRegistry::with_defaults();
        assert!(matches!(
            registry.show(&cache, id, "C", false),
            Err(FormatError::EmptyTemplate(_))
        ));
    }
}
