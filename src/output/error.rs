// Mon Oct 12 2026 - Alex

use crate::declarator::DeclaratorError;
use crate::entity::{EntityClass, EntityId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
    #[error("Format {format} does not support {class}")]
    Unsupported { class: EntityClass, format: String },
    #[error("Template {0} wraps neither a class nor a function")]
    EmptyTemplate(String),
    #[error("Entity not in cache: {0}")]
    UnknownEntity(EntityId),
    #[error(transparent)]
    Declarator(#[from] DeclaratorError),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
