// Mon Oct 12 2026 - Alex

use crate::declarator::DeclaratorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EntityError {
    #[error("Unknown entity class: {0}")]
    UnknownClass(String),
    #[error("Invalid {cls} value for '{id}': {source}")]
    InvalidValue {
        id: String,
        cls: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("Malformed class member: {0}")]
    MalformedMember(String),
    #[error(transparent)]
    Declarator(#[from] DeclaratorError),
}
