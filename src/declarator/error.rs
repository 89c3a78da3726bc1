// Mon Oct 12 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeclaratorError {
    #[error("Cannot parse '{fragment}' in type '{input}'")]
    Parse { fragment: String, input: String },
    #[error("Unbalanced parenthesis in type '{0}'")]
    Unbalanced(String),
    #[error("Invalid bit-field width '{width}' in type '{input}'")]
    BitfieldWidth { width: String, input: String },
}

impl DeclaratorError {
    pub(crate) fn parse(fragment: &str, input: &str) -> Self {
        Self::Parse {
            fragment: fragment.to_string(),
            input: input.to_string(),
        }
    }

    /// Original type spelling that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            Self::Parse { input, .. } => input,
            Self::Unbalanced(input) => input,
            Self::BitfieldWidth { input, .. } => input,
        }
    }
}
