// Mon Oct 12 2026 - Alex

/// Elementary types with their struct-module letter codes. The variadic
/// marker has no code.
pub const PRIMITIVES: &[(&str, Option<char>)] = &[
    ("...", None),
    ("void", Some('?')),
    ("char", Some('s')),
    ("short", Some('h')),
    ("int", Some('i')),
    ("long", Some('l')),
    ("long long", Some('q')),
    ("float", Some('f')),
    ("double", Some('d')),
    ("ssize_t", Some('n')),
    ("size_t", Some('N')),
    ("wchar_t", Some('L')),
];

/// Words that may be combined into an elementary type spelling
/// (`long long`, `long double`, `unsigned short int`...).
const KEYWORDS: &[&str] = &[
    "void", "char", "short", "int", "long", "float", "double", "ssize_t", "size_t", "wchar_t",
    "bool", "_Bool", "__int128", "char8_t", "char16_t", "char32_t",
];

pub fn is_primitive_word(word: &str) -> bool {
    KEYWORDS.contains(&word)
}

/// True when `base` names an elementary type rather than a stored entity.
pub fn is_primitive(base: &str) -> bool {
    if base == "..." {
        return true;
    }
    let mut words = base.split_whitespace().peekable();
    if words.peek().is_none() {
        return false;
    }
    words.all(is_primitive_word)
}

pub fn letter_code(base: &str) -> Option<char> {
    PRIMITIVES
        .iter()
        .find(|(name, _)| *name == base)
        .and_then(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_primitive() {
        assert!(is_primitive("int"));
        assert!(is_primitive("long long"));
        assert!(is_primitive("long double"));
        assert!(is_primitive("..."));
        assert!(!is_primitive("struct X"));
        assert!(!is_primitive("uint32_t"));
        assert!(!is_primitive(""));
    }

    #[test]
    fn test_letter_code() {
        assert_eq!(letter_code("long long"), Some('q'));
        assert_eq!(letter_code("void"), Some('?'));
        assert_eq!(letter_code("..."), None);
        assert_eq!(letter_code("bool"), None);
    }
}
