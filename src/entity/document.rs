// Mon Oct 12 2026 - Alex

use crate::entity::{EntityClass, EntityError, TypeEntity, TypeEntityKind};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Persisted form of an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,
    pub val: Value,
    pub cls: EntityClass,
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Every identifier found while unfolding the entity.
    #[serde(default, rename = "use", skip_serializing_if = "Option::is_none")]
    pub uses: Option<Vec<String>>,
}

impl RawDocument {
    pub fn new(id: &str, cls: EntityClass, val: Value) -> Self {
        Self {
            id: id.to_string(),
            val,
            cls,
            src: None,
            tag: None,
            uses: None,
        }
    }

    pub fn with_source(mut self, src: &str) -> Self {
        self.src = Some(src.to_string());
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = Some(tag.to_string());
        self
    }
}

fn payload<T: DeserializeOwned>(doc: &RawDocument) -> Result<T, EntityError> {
    serde_json::from_value(doc.val.clone()).map_err(|source| EntityError::InvalidValue {
        id: doc.id.clone(),
        cls: doc.cls.to_string(),
        source,
    })
}

impl TypeEntity {
    /// Builds a fresh, not yet unfolded entity from its document.
    pub fn from_document(doc: &RawDocument) -> Result<Self, EntityError> {
        let kind = match doc.cls {
            EntityClass::Typedef => TypeEntityKind::Typedef(payload(doc)?),
            EntityClass::Struct => TypeEntityKind::Struct(payload(doc)?),
            EntityClass::Union => TypeEntityKind::Union(payload(doc)?),
            EntityClass::Enum => TypeEntityKind::Enum(payload(doc)?),
            EntityClass::Macro => TypeEntityKind::Macro(payload(doc)?),
            EntityClass::Function => TypeEntityKind::Function(payload(doc)?),
            EntityClass::Class => TypeEntityKind::Class(payload(doc)?),
            EntityClass::Template => TypeEntityKind::Template(payload(doc)?),
            EntityClass::Namespace => TypeEntityKind::Namespace(payload(doc)?),
        };
        let mut entity = TypeEntity::new(&doc.id, kind);
        if let Some(src) = &doc.src {
            entity = entity.with_source(src);
        }
        if let Some(tag) = &doc.tag {
            entity = entity.with_tag(tag);
        }
        Ok(entity)
    }

    pub fn value(&self) -> Value {
        let v = match self.kind() {
            TypeEntityKind::Typedef(s) | TypeEntityKind::Macro(s) => serde_json::to_value(s),
            TypeEntityKind::Struct(f) | TypeEntityKind::Union(f) => serde_json::to_value(f),
            TypeEntityKind::Enum(e) => serde_json::to_value(e),
            TypeEntityKind::Function(f) => serde_json::to_value(f),
            TypeEntityKind::Class(m) => serde_json::to_value(m),
            TypeEntityKind::Template(t) => serde_json::to_value(t),
            TypeEntityKind::Namespace(n) => serde_json::to_value(n),
        };
        // plain data, serialization cannot fail
        v.unwrap_or(Value::Null)
    }

    pub fn to_document(&self, uses: Option<Vec<String>>) -> RawDocument {
        RawDocument {
            id: self.identifier().to_string(),
            val: self.value(),
            cls: self.class(),
            src: self.source().map(str::to_string),
            tag: self.tag().map(str::to_string),
            uses,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_shape() {
        let doc: RawDocument = serde_json::from_value(json!({
            "id": "struct X",
            "val": [["int", "a", null], ["yyyy *", "p", "ptr"]],
            "cls": "cStruct",
            "src": "x.h",
            "use": ["yyyy"]
        }))
        .unwrap();
        let e = TypeEntity::from_document(&doc).unwrap();
        assert_eq!(e.identifier(), "struct X");
        assert_eq!(e.fields().unwrap().len(), 2);
        assert!(!e.is_unfolded());
        assert_eq!(e.source(), Some("x.h"));

        let back = serde_json::to_value(e.to_document(Some(vec!["yyyy".into()]))).unwrap();
        assert_eq!(back["cls"], "cStruct");
        assert_eq!(back["use"], json!(["yyyy"]));
        assert!(back.get("tag").is_none());
    }

    #[test]
    fn test_enum_keeps_order() {
        let doc = RawDocument::new("enum E", EntityClass::Enum, json!({"Z": 0, "A": 1, "M": -2}));
        let e = TypeEntity::from_document(&doc).unwrap();
        match e.kind() {
            TypeEntityKind::Enum(values) => {
                let names: Vec<_> = values.keys().cloned().collect();
                assert_eq!(names, vec!["Z", "A", "M"]);
                assert_eq!(values["M"], -2);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_invalid_value() {
        let doc = RawDocument::new("xxx", EntityClass::Typedef, json!([1, 2]));
        let err = TypeEntity::from_document(&doc).unwrap_err();
        assert!(err.to_string().contains("xxx"));
    }
}
