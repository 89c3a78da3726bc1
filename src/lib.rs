// Mon Oct 12 2026 - Alex

pub mod config;
pub mod declarator;
pub mod entity;
pub mod output;
pub mod resolve;
pub mod structure;
pub mod utils;
pub mod xref;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use declarator::{Declarator, Dialect};
pub use entity::{EntityClass, EntityId, RawDocument, Resolved, TypeEntity, TypeEntityKind};
pub use output::FormatterRegistry;
pub use resolve::{LocalStore, MemoryStore, ResolutionCache, TypeStore};
pub use structure::{AbiLayoutBuilder, LayoutAnalyzer, OffsetCalculator, StructLayout};
pub use xref::{CycleMap, TypeGraph};
