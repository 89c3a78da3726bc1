// Mon Oct 12 2026 - Alex

pub mod cache;
pub mod error;
pub mod store;
pub mod unfold;

pub use cache::ResolutionCache;
pub use error::{ResolveError, StoreError};
pub use store::{LocalStore, MemoryStore, TypeStore};
