// Mon Oct 12 2026 - Alex

use crate::entity::{StructField, TypeEntity, TypeEntityKind};

/// Prefix of synthesized vtable pointer fields.
pub const VPTR_PREFIX: &str = "__vptr$";

/// Flattened field list of a class in memory order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StructLayout {
    name: String,
    fields: Vec<StructField>,
}

impl StructLayout {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn push(&mut self, field: StructField) {
        self.fields.push(field);
    }

    pub fn extend<I: IntoIterator<Item = StructField>>(&mut self, fields: I) {
        self.fields.extend(fields);
    }

    pub fn fields(&self) -> &[StructField] {
        &self.fields
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_entity(self) -> TypeEntity {
        TypeEntity::new(&self.name, TypeEntityKind::Struct(self.fields))
    }
}

pub fn vptr_field(class_name: &str) -> StructField {
    StructField::new("void *", &format!("{}{}", VPTR_PREFIX, class_name))
}

pub fn is_vptr(field: &StructField) -> bool {
    field.name.starts_with(VPTR_PREFIX)
}

pub fn starts_with_vptr(fields: &[StructField]) -> bool {
    fields.first().is_some_and(is_vptr)
}
