// Mon Oct 12 2026 - Alex

use crate::entity::EntityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Variant tag of a stored entity, the `cls` field of its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityClass {
    #[serde(rename = "cTypedef")]
    Typedef,
    #[serde(rename = "cStruct")]
    Struct,
    #[serde(rename = "cUnion")]
    Union,
    #[serde(rename = "cEnum")]
    Enum,
    #[serde(rename = "cMacro")]
    Macro,
    #[serde(rename = "cFunc")]
    Function,
    #[serde(rename = "cClass")]
    Class,
    #[serde(rename = "cTemplate")]
    Template,
    #[serde(rename = "cNamespace")]
    Namespace,
}

impl EntityClass {
    pub const ALL: [EntityClass; 9] = [
        Self::Typedef,
        Self::Struct,
        Self::Union,
        Self::Enum,
        Self::Macro,
        Self::Function,
        Self::Class,
        Self::Template,
        Self::Namespace,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Typedef => "cTypedef",
            Self::Struct => "cStruct",
            Self::Union => "cUnion",
            Self::Enum => "cEnum",
            Self::Macro => "cMacro",
            Self::Function => "cFunc",
            Self::Class => "cClass",
            Self::Template => "cTemplate",
            Self::Namespace => "cNamespace",
        }
    }
}

impl fmt::Display for EntityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityClass {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| EntityError::UnknownClass(s.to_string()))
    }
}
