// Mon Oct 12 2026 - Alex

pub mod hash;
pub mod logging;

pub use hash::HashComputer;
pub use logging::{init_from_env, init_logger, LoggingUtils, ScopedTimer};
