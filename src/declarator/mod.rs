// Mon Oct 12 2026 - Alex

pub mod derivation;
pub mod error;
pub mod model;
pub mod nested;
pub mod parser;
pub mod primitive;
pub mod qualifiers;
pub mod render;

pub use derivation::{ArrayLength, Derivation, Indirection};
pub use error::DeclaratorError;
pub use model::{Declarator, Dialect};
pub use primitive::{is_primitive, letter_code, PRIMITIVES};
pub use qualifiers::Qualifiers;
