// Mon Oct 12 2026 - Alex

use crate::declarator::DeclaratorError;
use crate::structure::LayoutError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Entity is not unfolded: {0}")]
    NotUnfolded(String),
    #[error("Node not found: {0}")]
    NodeNotFound(String),
    #[error("No edge labeled '{label}' from {from}")]
    EdgeNotFound { from: String, label: String },
    #[error("Invalid accessor: {0}")]
    InvalidAccessor(String),
    #[error("Field {field} not found in {entity}")]
    FieldNotFound { entity: String, field: String },
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    Declarator(#[from] DeclaratorError),
}
