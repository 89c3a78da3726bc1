// Mon Oct 12 2026 - Alex

use crate::entity::{EntityClass, TypeEntity};
use crate::output::FormatError;
use crate::resolve::ResolutionCache;

/// Renders one entity in one output format.
pub trait Formatter: Send + Sync {
    /// Format name used for lookup, e.g. `C` or `raw`.
    fn name(&self) -> &str;

    fn supports(&self, class: EntityClass) -> bool;

    fn format(&self, entity: &TypeEntity) -> Result<String, FormatError>;

    /// Like `format`, with the cache `entity` was unfolded into.
    fn format_in(&self, entity: &TypeEntity, _cache: &ResolutionCache) -> Result<String, FormatError> {
        self.format(entity)
    }

    /// Whether anonymous subtypes are written inside the entities using
    /// them, instead of as definitions of their own.
    fn inlines_anonymous(&self) -> bool {
        false
    }
}
