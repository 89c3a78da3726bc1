// Mon Oct 12 2026 - Alex

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Qualifiers carried by the elementary type of a declarator.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Qualifiers: u8 {
        const CONST = 0b0001;
        const VOLATILE = 0b0010;
        const UNSIGNED = 0b0100;
        const SIGNED = 0b1000;
    }
}

impl Qualifiers {
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "const" => Some(Self::CONST),
            "volatile" => Some(Self::VOLATILE),
            "unsigned" => Some(Self::UNSIGNED),
            "signed" => Some(Self::SIGNED),
            _ => None,
        }
    }

    /// Keywords in canonical spelling order.
    pub fn keywords(self) -> Vec<&'static str> {
        let mut words = Vec::new();
        if self.contains(Self::CONST) {
            words.push("const");
        }
        if self.contains(Self::VOLATILE) {
            words.push("volatile");
        }
        if self.contains(Self::UNSIGNED) {
            words.push("unsigned");
        } else if self.contains(Self::SIGNED) {
            words.push("signed");
        }
        words
    }
}

impl fmt::Display for Qualifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keywords().join(" "))
    }
}
