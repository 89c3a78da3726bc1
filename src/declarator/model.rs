// Mon Oct 12 2026 - Alex

use crate::declarator::{parser, ArrayLength, DeclaratorError, Derivation, Qualifiers};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dialect {
    #[default]
    C,
    Cxx,
}

/// Parsed form of a compiler type spelling: elementary base type,
/// qualifiers, optional bit-field width and the derivation stack (innermost
/// first).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declarator {
    base: String,
    qualifiers: Qualifiers,
    bitfield: Option<u32>,
    derivations: Vec<Derivation>,
    dialect: Dialect,
}

impl Declarator {
    pub fn parse(spelling: &str) -> Result<Self, DeclaratorError> {
        parser::parse(spelling, Dialect::C)
    }

    pub fn parse_cxx(spelling: &str) -> Result<Self, DeclaratorError> {
        parser::parse(spelling, Dialect::Cxx)
    }

    /// C unless the spelling carries a reference operator.
    pub fn parse_any(spelling: &str) -> Result<Self, DeclaratorError> {
        if spelling.contains('&') {
            Self::parse_cxx(spelling)
        } else {
            Self::parse(spelling)
        }
    }

    pub fn with_dialect(spelling: &str, dialect: Dialect) -> Result<Self, DeclaratorError> {
        parser::parse(spelling, dialect)
    }

    pub(crate) fn from_parts(
        base: String,
        qualifiers: Qualifiers,
        bitfield: Option<u32>,
        derivations: Vec<Derivation>,
        dialect: Dialect,
    ) -> Self {
        Self {
            base,
            qualifiers,
            bitfield,
            derivations,
            dialect,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn qualifiers(&self) -> Qualifiers {
        self.qualifiers
    }

    pub fn bitfield(&self) -> Option<u32> {
        self.bitfield
    }

    pub fn derivations(&self) -> &[Derivation] {
        &self.derivations
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn is_const(&self) -> bool {
        self.qualifiers.contains(Qualifiers::CONST)
    }

    pub fn is_unsigned(&self) -> bool {
        self.qualifiers.contains(Qualifiers::UNSIGNED)
    }

    /// True when any derivation is a pointer or reference.
    pub fn is_ptr(&self) -> bool {
        self.derivations.iter().any(Derivation::is_pointer)
    }

    pub fn is_function(&self) -> bool {
        self.derivations.last().is_some_and(Derivation::is_signature)
    }

    /// Outermost fixed array dimension, 0 when the type is not an array.
    pub fn dim(&self) -> u32 {
        match self.derivations.last() {
            Some(Derivation::Array {
                length: ArrayLength::Fixed(n),
            }) => *n,
            _ => 0,
        }
    }

    /// `struct`, `union`, `enum` or `class` when the base carries one.
    pub fn keyword(&self) -> Option<&str> {
        let (kw, _) = self.base.split_once(' ')?;
        matches!(kw, "struct" | "union" | "enum" | "class").then_some(kw)
    }

    /// Base symbol without its keyword.
    pub fn symbol(&self) -> &str {
        match self.keyword() {
            Some(kw) => self.base[kw.len()..].trim_start(),
            None => &self.base,
        }
    }

    /// Namespace prefix of the base symbol including the trailing `::`.
    pub fn namespace(&self) -> &str {
        let symbol = self.symbol();
        match namespace_split(symbol) {
            Some(pos) => &symbol[..pos + 2],
            None => "",
        }
    }

    /// Spelling of the type a function declarator returns, `None` when the
    /// declarator is not a function.
    pub fn return_type(&self) -> Option<String> {
        if !self.is_function() {
            return None;
        }
        let mut inner = self.clone();
        inner.derivations.pop();
        Some(inner.show(""))
    }

    /// Parameter spellings of the outermost function signature.
    pub fn arguments(&self) -> Option<Vec<String>> {
        match self.derivations.last()? {
            Derivation::FunctionSignature { args, .. } => Some(args.clone()),
            _ => None,
        }
    }
}

/// Position of the last `::` outside template brackets.
fn namespace_split(symbol: &str) -> Option<usize> {
    let bytes = symbol.as_bytes();
    let mut depth = 0i32;
    let mut last = None;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'<' => depth += 1,
            b'>' => depth -= 1,
            b':' if depth == 0 && bytes.get(i + 1) == Some(&b':') => {
                last = Some(i);
                i += 1;
            }
            _ => {}
        }
        i += 1;
    }
    last.filter(|pos| *pos > 0)
}

impl fmt::Display for Declarator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.show(""))
    }
}

impl std::str::FromStr for Declarator {
    type Err = DeclaratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_any(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_and_namespace() {
        let d = Declarator::parse_cxx("class X::Y &").unwrap();
        assert_eq!(d.keyword(), Some("class"));
        assert_eq!(d.symbol(), "X::Y");
        assert_eq!(d.namespace(), "X::");
        assert!(d.is_ptr());

        let t = Declarator::parse_cxx("std::vector<a::b>").unwrap();
        assert_eq!(t.namespace(), "std::");
        assert_eq!(Declarator::parse("int").unwrap().keyword(), None);
    }

    #[test]
    fn test_function_helpers() {
        let d = Declarator::parse("char *(int, struct X *)").unwrap();
        assert!(d.is_function());
        assert_eq!(d.return_type().as_deref(), Some("char *"));
        assert_eq!(
            d.arguments(),
            Some(vec!["int".to_string(), "struct X *".to_string()])
        );

        let p = Declarator::parse("void (*)(int)").unwrap();
        assert!(!p.is_function());
        assert!(p.return_type().is_none());
    }

    #[test]
    fn test_parse_any_picks_dialect() {
        assert_eq!(Declarator::parse_any("int *").unwrap().dialect(), Dialect::C);
        assert_eq!(Declarator::parse_any("int &").unwrap().dialect(), Dialect::Cxx);
        assert!(Declarator::parse("int &").is_err());
    }
}
