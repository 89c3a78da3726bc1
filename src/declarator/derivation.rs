// Mon Oct 12 2026 - Alex

use crate::declarator::Qualifiers;
use std::fmt;

/// Pointer-like operator of a declarator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Indirection {
    /// A run of `n` stars.
    Pointer(u8),
    LvalueRef,
    RvalueRef,
}

impl Indirection {
    pub fn is_reference(self) -> bool {
        matches!(self, Self::LvalueRef | Self::RvalueRef)
    }

    pub fn depth(self) -> usize {
        match self {
            Self::Pointer(n) => n as usize,
            Self::LvalueRef | Self::RvalueRef => 1,
        }
    }
}

impl fmt::Display for Indirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pointer(n) => write!(f, "{}", "*".repeat(*n as usize)),
            Self::LvalueRef => write!(f, "&"),
            Self::RvalueRef => write!(f, "&&"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArrayLength {
    Fixed(u32),
    /// C++ dimension given by a constant expression or template parameter.
    Symbolic(String),
}

impl fmt::Display for ArrayLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(n) => write!(f, "{}", n),
            Self::Symbolic(s) => write!(f, "{}", s),
        }
    }
}

/// One step of the derivation stack. The stack is ordered innermost first:
/// element 0 applies directly to the base type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Derivation {
    Pointer {
        indirection: Indirection,
        trailing: Qualifiers,
    },
    Array {
        length: ArrayLength,
    },
    FunctionSignature {
        args: Vec<String>,
        qualifier: Option<String>,
    },
}

impl Derivation {
    pub fn pointer(stars: u8) -> Self {
        Self::Pointer {
            indirection: Indirection::Pointer(stars),
            trailing: Qualifiers::empty(),
        }
    }

    pub fn array(length: u32) -> Self {
        Self::Array {
            length: ArrayLength::Fixed(length),
        }
    }

    pub fn signature(args: Vec<String>) -> Self {
        Self::FunctionSignature {
            args,
            qualifier: None,
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Self::Pointer { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array { .. })
    }

    pub fn is_signature(&self) -> bool {
        matches!(self, Self::FunctionSignature { .. })
    }

    pub fn trailing_const(&self) -> bool {
        match self {
            Self::Pointer { trailing, .. } => trailing.contains(Qualifiers::CONST),
            _ => false,
        }
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pointer { indirection, trailing } => {
                write!(f, "{}", indirection)?;
                if !trailing.is_empty() {
                    write!(f, "{}", trailing)?;
                }
                Ok(())
            }
            Self::Array { length } => write!(f, "[{}]", length),
            Self::FunctionSignature { args, qualifier } => {
                write!(f, "({})", args.join(", "))?;
                if let Some(q) = qualifier {
                    write!(f, " {}", q)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let p = Derivation::Pointer {
            indirection: Indirection::Pointer(2),
            trailing: Qualifiers::CONST,
        };
        assert_eq!(p.to_string(), "**const");
        assert!(p.trailing_const());
        assert_eq!(Derivation::array(3).to_string(), "[3]");

        let f = Derivation::FunctionSignature {
            args: vec!["int".into(), "char *".into()],
            qualifier: Some("noexcept".into()),
        };
        assert_eq!(f.to_string(), "(int, char *) noexcept");
        assert_eq!(Derivation::signature(Vec::new()).to_string(), "()");
    }
}
