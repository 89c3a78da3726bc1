// Mon Oct 12 2026 - Alex

pub mod c;
pub mod error;
pub mod formatter;
pub mod raw;
pub mod registry;

pub use c::CFormatter;
pub use error::FormatError;
pub use formatter::Formatter;
pub use raw::RawFormatter;
pub use registry::FormatterRegistry;
