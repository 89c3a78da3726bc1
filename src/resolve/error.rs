// Mon Oct 12 2026 - Alex

use crate::declarator::DeclaratorError;
use crate::entity::{EntityError, EntityId};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Entity {0} is not in the cache")]
    UnknownEntity(EntityId),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Entity(#[from] EntityError),
    #[error(transparent)]
    Declarator(#[from] DeclaratorError),
}
