// Mon Oct 12 2026 - Alex

use crate::entity::{EntityClass, TypeEntity};
use crate::output::{FormatError, Formatter};

/// Identifier followed by the pretty printed stored value.
#[derive(Debug, Default)]
pub struct RawFormatter;

impl Formatter for RawFormatter {
    fn name(&self) -> &str {
        "raw"
    }

    fn supports(&self, _class: EntityClass) -> bool {
        true
    }

    fn format(&self, entity: &TypeEntity) -> Result<String, FormatError> {
        let value = serde_json::to_string_pretty(&entity.value())?;
        Ok(format!("{}:\n{}", entity.identifier(), value))
    }
}
