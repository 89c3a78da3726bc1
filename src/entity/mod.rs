// Mon Oct 12 2026 - Alex

pub mod anonymous;
pub mod class;
pub mod document;
pub mod error;
pub mod member;
pub mod model;
pub mod value;

pub use anonymous::{anonymous_identifier, unique_typename};
pub use class::EntityClass;
pub use document::RawDocument;
pub use error::EntityError;
pub use member::{ClassMember, FieldMember, ParentClass, StructField, UsingDecl};
pub use model::{
    EntityId, MacroValue, Reference, Resolved, Subtypes, TypeEntity, TypeEntityKind,
};
pub use value::{FunctionValue, TemplateValue};
