// Mon Oct 12 2026 - Alex

use crate::declarator::DeclaratorError;
use crate::entity::EntityClass;
use crate::resolve::ResolveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Unknown base type: {0}")]
    UnknownBaseType(String),
    #[error("Type consistency error: {name} is a {found}, expected a class")]
    TypeConsistency { name: String, found: EntityClass },
    #[error("Inheritance cycle through {0}")]
    InheritanceCycle(String),
    #[error("Unknown type: {0}")]
    UnknownType(String),
    #[error("Type has no size: {0}")]
    Unsized(String),
    #[error("Recursive embedding of {0}")]
    RecursiveType(String),
    #[error("Not a struct, union or class: {0}")]
    NotAStruct(String),
    #[error("Invalid pointer size: {0}")]
    InvalidPointerSize(u64),
    #[error("Invalid packing: {0}")]
    InvalidPack(u64),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Declarator(#[from] DeclaratorError),
}
