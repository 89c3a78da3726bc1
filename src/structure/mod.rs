// Mon Oct 12 2026 - Alex

pub mod abi;
pub mod alignment;
pub mod analyzer;
pub mod error;
pub mod field;
pub mod layout;
pub mod offsets;

pub use abi::{AbiLayoutBuilder, ClassLayout, VirtualBase, VptrKind};
pub use alignment::Alignment;
pub use analyzer::{LayoutAnalyzer, LayoutReport};
pub use error::LayoutError;
pub use field::{BitRange, FieldPlacement, StructOffsets};
pub use layout::{is_vptr, StructLayout, VPTR_PREFIX};
pub use offsets::{OffsetCalculator, TypeInfo};
